//! Structural checks that would otherwise surface as broken C.
use std::collections::BTreeSet;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::api::{ApiDescription, InterfaceNode};
use crate::chain::walk;
use crate::error::{GenError, Result};
use crate::naming::{Interface, Naming};

pub fn validate(api: &ApiDescription) -> Result<()> {
    check_chain(Interface::Core, &api.core)?;

    let mut names = BTreeSet::new();
    for ext in &api.extensions {
        if !names.insert(ext.name.as_str()) {
            return Err(GenError::DuplicateExtension(ext.name.clone()));
        }
        check_chain(Interface::Extension(&ext.name), &ext.head)?;
    }
    Ok(())
}

/// Every layout, instance and trampoline the emitters define needs its own
/// C identifier. Names are built by concatenation, so distinct descriptions
/// can still render the same symbol (extension `net` at 1.0 and extension
/// `net_1_0`).
pub fn check_symbols(api: &ApiDescription, naming: &Naming<'_>) -> Result<()> {
    let interfaces = std::iter::once((Interface::Core, &api.core)).chain(
        api.extensions
            .iter()
            .map(|ext| (Interface::Extension(ext.name.as_str()), &ext.head)),
    );

    let mut defined: IndexMap<String, String> = IndexMap::new();
    let mut define = |symbol: String, owner: String| -> Result<()> {
        match defined.entry(symbol) {
            Entry::Occupied(slot) => Err(GenError::SymbolCollision {
                symbol: slot.key().clone(),
                first: slot.get().clone(),
                second: owner,
            }),
            Entry::Vacant(slot) => {
                slot.insert(owner);
                Ok(())
            }
        }
    };

    for (iface, head) in interfaces {
        for rev in walk(head, true) {
            let owner = format!("{} {}", iface.describe(), rev.version());
            define(naming.struct_name(iface, &rev), format!("the layout of {owner}"))?;
            define(naming.instance_name(iface, &rev), format!("the instance of {owner}"))?;
        }
        for sig in &head.entries {
            define(sig.name.clone(), format!("a trampoline of {}", iface.describe()))?;
        }
    }
    log::debug!("validate: {} distinct C symbol(s)", defined.len());
    Ok(())
}

fn check_chain(iface: Interface<'_>, head: &InterfaceNode) -> Result<()> {
    let mut versions = BTreeSet::new();
    let mut node = Some(head);
    while let Some(rev) = node {
        if rev.type_tag != head.type_tag {
            return Err(GenError::ChainTagMismatch {
                interface: iface.describe(),
                version: rev.version.to_string(),
                expected: head.type_tag.clone(),
                found: rev.type_tag.clone(),
            });
        }
        if !versions.insert((rev.version.major, rev.version.minor)) {
            return Err(GenError::DuplicateRevision {
                interface: iface.describe(),
                version: rev.version.to_string(),
            });
        }
        let mut entries = BTreeSet::new();
        for sig in &rev.entries {
            if !entries.insert(sig.name.as_str()) {
                return Err(GenError::DuplicateEntry {
                    interface: iface.describe(),
                    version: rev.version.to_string(),
                    entry: sig.name.clone(),
                });
            }
        }
        node = rev.next.as_deref();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use serde_json::{Value, json};

    fn parse(v: Value) -> ApiDescription {
        serde_json::from_value(v).unwrap()
    }

    fn core_with_history() -> Value {
        json!({
            "type": "CORE",
            "version": {"major": 1, "minor": 1},
            "next": {"type": "CORE", "version": {"major": 1, "minor": 0}, "api": [
                {"name": "a", "return_type": "void", "arguments": []}
            ]},
            "api": [
                {"name": "a", "return_type": "void", "arguments": []},
                {"name": "b", "return_type": "int", "arguments": []}
            ]
        })
    }

    #[test]
    fn well_formed_passes() {
        let api = parse(json!({"core": core_with_history(), "extensions": []}));
        validate(&api).unwrap();
    }

    #[test]
    fn predecessor_with_foreign_tag() {
        let mut core = core_with_history();
        core["next"]["type"] = json!("VIDEO");
        let api = parse(json!({"core": core}));
        assert!(matches!(validate(&api), Err(GenError::ChainTagMismatch { .. })));
    }

    #[test]
    fn repeated_version_in_chain() {
        let mut core = core_with_history();
        core["next"]["version"]["minor"] = json!(1);
        let api = parse(json!({"core": core}));
        assert!(matches!(validate(&api), Err(GenError::DuplicateRevision { .. })));
    }

    #[test]
    fn repeated_entry_name() {
        let mut core = core_with_history();
        core["api"][1]["name"] = json!("a");
        let api = parse(json!({"core": core}));
        match validate(&api) {
            Err(GenError::DuplicateEntry { entry, .. }) => assert_eq!(entry, "a"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn repeated_extension_name() {
        let ext = json!({"name": "video", "type": "VIDEO", "version": {"major": 1, "minor": 0}, "api": []});
        let mut other = ext.clone();
        other["type"] = json!("VIDEO2");
        let api = parse(json!({"core": core_with_history(), "extensions": [ext, other]}));
        assert!(matches!(validate(&api), Err(GenError::DuplicateExtension(name)) if name == "video"));
    }

    fn symbols(api: &ApiDescription) -> Result<()> {
        let cfg = GeneratorConfig::default();
        check_symbols(api, &Naming::new(&cfg))
    }

    #[test]
    fn qualified_name_may_not_shadow_another_extension() {
        let api = parse(json!({
            "core": core_with_history(),
            "extensions": [
                {
                    "name": "net",
                    "type": "NET",
                    "version": {"major": 1, "minor": 1},
                    "next": {"type": "NET", "version": {"major": 1, "minor": 0}, "api": []},
                    "api": []
                },
                {"name": "net_1_0", "type": "NET_OLD", "version": {"major": 2, "minor": 0}, "api": []}
            ]
        }));
        validate(&api).unwrap();
        match symbols(&api) {
            Err(GenError::SymbolCollision { symbol, first, second }) => {
                assert_eq!(symbol, "rebel_gdnative_ext_net_1_0_api_struct");
                assert!(first.contains("extension `net` 1.0"), "{first}");
                assert!(second.contains("extension `net_1_0` 2.0"), "{second}");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn trampoline_names_are_unique_across_interfaces() {
        let api = parse(json!({
            "core": {"type": "CORE", "version": {"major": 1, "minor": 0}, "api": [
                {"name": "play", "return_type": "void", "arguments": []}
            ]},
            "extensions": [{"name": "video", "type": "VIDEO", "version": {"major": 1, "minor": 0}, "api": [
                {"name": "play", "return_type": "void", "arguments": []}
            ]}]
        }));
        assert!(matches!(symbols(&api), Err(GenError::SymbolCollision { symbol, .. }) if symbol == "play"));
    }

    #[test]
    fn history_may_repeat_newest_entry_names() {
        let api = parse(json!({"core": core_with_history(), "extensions": []}));
        symbols(&api).unwrap();
    }
}
