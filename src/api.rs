//! Strongly-typed API description. Mirrors the JSON layout of description
//! files; consumed read-only by every emitter.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDescription {
    pub core: InterfaceNode,
    /// Description order is ABI order (enum, index array, slots).
    #[serde(default)]
    pub extensions: Vec<ExtensionInterface>,
}

/// One ABI revision. `next` points at the revision it supersedes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceNode {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub version: Version,
    #[serde(default)]
    pub next: Option<Box<InterfaceNode>>,
    #[serde(rename = "api", default)]
    pub entries: Vec<FunctionSignature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawExtension", into = "RawExtension")]
pub struct ExtensionInterface {
    pub name: String,
    pub head: InterfaceNode,
}

/// Wire form of an extension: `name` beside the head's own fields. Spelled
/// out rather than flattened so JSON paths in errors reach into the head.
#[derive(Serialize, Deserialize)]
struct RawExtension {
    name: String,
    #[serde(rename = "type")]
    type_tag: String,
    version: Version,
    #[serde(default)]
    next: Option<Box<InterfaceNode>>,
    #[serde(rename = "api", default)]
    entries: Vec<FunctionSignature>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    pub return_type: String,
    #[serde(rename = "arguments", default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawParameter", into = "RawParameter")]
pub struct Parameter {
    pub ty: String,
    pub name: String,
}

/// Description files spell arguments as `[type, name]`; the object form is
/// accepted as well.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawParameter {
    Pair(String, String),
    Named {
        #[serde(rename = "type")]
        ty: String,
        name: String,
    },
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl From<RawParameter> for Parameter {
    fn from(raw: RawParameter) -> Self {
        match raw {
            RawParameter::Pair(ty, name) | RawParameter::Named { ty, name } => Parameter { ty, name },
        }
    }
}

impl From<Parameter> for RawParameter {
    fn from(param: Parameter) -> Self {
        RawParameter::Pair(param.ty, param.name)
    }
}

impl From<RawExtension> for ExtensionInterface {
    fn from(raw: RawExtension) -> Self {
        let RawExtension { name, type_tag, version, next, entries } = raw;
        ExtensionInterface { name, head: InterfaceNode { type_tag, version, next, entries } }
    }
}

impl From<ExtensionInterface> for RawExtension {
    fn from(ext: ExtensionInterface) -> Self {
        let InterfaceNode { type_tag, version, next, entries } = ext.head;
        RawExtension { name: ext.name, type_tag, version, next, entries }
    }
}

impl InterfaceNode {
    /// Number of revisions in this chain, this node included.
    pub fn depth(&self) -> usize {
        1 + self.next.as_deref().map_or(0, InterfaceNode::depth)
    }
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Parameter { ty: ty.into(), name: name.into() }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
