//! The closed set of interface kinds, one per type tag.
//!
//! The discriminant enumeration and the init macro's `case` arms are both
//! rendered from a [`TagTable`], so neither can list an interface the other
//! lacks.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::api::{ApiDescription, InterfaceNode};
use crate::error::{GenError, Result};
use crate::naming::{Interface, Naming};

#[derive(Debug, Clone)]
pub struct TagEntry<'a> {
    pub interface: Interface<'a>,
    pub discriminant: String,
    /// Newest revision of the interface.
    pub head: &'a InterfaceNode,
}

/// Core first, then extensions in description order.
#[derive(Debug, Clone)]
pub struct TagTable<'a> {
    entries: IndexMap<String, TagEntry<'a>>,
}

impl<'a> TagTable<'a> {
    pub fn build(api: &'a ApiDescription, naming: &Naming<'_>) -> Result<Self> {
        let candidates = std::iter::once((Interface::Core, &api.core)).chain(
            api.extensions
                .iter()
                .map(|ext| (Interface::Extension(ext.name.as_str()), &ext.head)),
        );

        let mut by_tag: IndexMap<&'a str, Interface<'a>> = IndexMap::new();
        let mut entries: IndexMap<String, TagEntry<'a>> = IndexMap::new();
        for (interface, head) in candidates {
            let type_tag = head.type_tag.as_str();
            if let Some(first) = by_tag.insert(type_tag, interface) {
                return Err(GenError::DuplicateTypeTag {
                    tag: type_tag.to_string(),
                    first: first.describe(),
                    second: interface.describe(),
                });
            }
            let discriminant = naming.discriminant(interface, type_tag);
            match entries.entry(discriminant.clone()) {
                Entry::Occupied(slot) => {
                    return Err(GenError::DiscriminantCollision {
                        discriminant,
                        first: slot.get().interface.describe(),
                        second: interface.describe(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(TagEntry { interface, discriminant, head });
                }
            }
        }
        Ok(TagTable { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagEntry<'a>> {
        self.entries.values()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &TagEntry<'a>> {
        self.iter().filter(|e| matches!(e.interface, Interface::Extension(_)))
    }
}
