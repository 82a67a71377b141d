//! Version chain traversal.
//!
//! Every emitter walks chains through [`walk`], so a revision is always
//! rendered after the predecessor its `next` field refers to.

use crate::api::{InterfaceNode, Version};

#[derive(Debug, Clone, Copy)]
pub struct Revision<'a> {
    pub node: &'a InterfaceNode,
    /// Named without a version qualifier. Only ever true for the newest node.
    pub canonical: bool,
}

impl<'a> Revision<'a> {
    pub fn version(&self) -> Version {
        self.node.version
    }

    pub fn predecessor(&self) -> Option<Revision<'a>> {
        self.node.next.as_deref().map(|node| Revision { node, canonical: false })
    }
}

/// `[oldest, ..., newest]` for the chain ending in `newest`.
pub fn walk(newest: &InterfaceNode, canonical_newest: bool) -> Vec<Revision<'_>> {
    let mut out = Vec::with_capacity(newest.depth());
    collect(newest, canonical_newest, &mut out);
    out
}

fn collect<'a>(node: &'a InterfaceNode, canonical: bool, out: &mut Vec<Revision<'a>>) {
    if let Some(prev) = node.next.as_deref() {
        collect(prev, false, out);
    }
    out.push(Revision { node, canonical });
}
