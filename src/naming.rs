//! Identifier scheme shared by the header, instance and wrapper emitters.
use crate::chain::Revision;
use crate::config::GeneratorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interface<'a> {
    Core,
    Extension(&'a str),
}

impl Interface<'_> {
    pub fn describe(&self) -> String {
        match self {
            Interface::Core => "the core interface".to_string(),
            Interface::Extension(name) => format!("extension `{name}`"),
        }
    }
}

pub struct Naming<'a> {
    cfg: &'a GeneratorConfig,
}

impl<'a> Naming<'a> {
    pub fn new(cfg: &'a GeneratorConfig) -> Self {
        Naming { cfg }
    }

    /// Common `{type, version, next}` prefix every layout can be cast to.
    pub fn base_struct(&self) -> String {
        format!("{}_api_struct", self.cfg.symbol_prefix)
    }

    pub fn version_type(&self) -> String {
        format!("{}_api_version", self.cfg.symbol_prefix)
    }

    pub fn struct_name(&self, iface: Interface<'_>, rev: &Revision<'_>) -> String {
        let p = &self.cfg.symbol_prefix;
        let qualifier = qualifier(rev);
        match iface {
            Interface::Core => format!("{p}_core{qualifier}_api_struct"),
            Interface::Extension(name) => format!("{p}_ext_{name}{qualifier}_api_struct"),
        }
    }

    pub fn canonical_struct(&self, iface: Interface<'_>) -> String {
        let p = &self.cfg.symbol_prefix;
        match iface {
            Interface::Core => format!("{p}_core_api_struct"),
            Interface::Extension(name) => format!("{p}_ext_{name}_api_struct"),
        }
    }

    pub fn instance_name(&self, iface: Interface<'_>, rev: &Revision<'_>) -> String {
        match iface {
            Interface::Core if rev.canonical => "api_struct".to_string(),
            Interface::Core => format!("api{}", qualifier(rev)),
            Interface::Extension(name) => format!("api_extension_{name}{}_struct", qualifier(rev)),
        }
    }

    pub fn canonical_instance(&self, iface: Interface<'_>) -> String {
        match iface {
            Interface::Core => "api_struct".to_string(),
            Interface::Extension(name) => format!("api_extension_{name}_struct"),
        }
    }

    pub fn discriminant(&self, iface: Interface<'_>, type_tag: &str) -> String {
        let m = &self.cfg.macro_prefix;
        match iface {
            Interface::Core => format!("{m}_{type_tag}"),
            Interface::Extension(_) => format!("{m}_EXT_{type_tag}"),
        }
    }

    /// Mutable table pointer the trampolines call through.
    pub fn slot(&self, iface: Interface<'_>) -> String {
        let v = self.cfg.variable_prefix();
        match iface {
            Interface::Core => format!("_{v}_wrapper_api_struct"),
            Interface::Extension(name) => format!("_{v}_wrapper_{name}_api_struct"),
        }
    }

    pub fn enum_name(&self) -> String {
        format!("{}_API_TYPES", self.cfg.macro_prefix)
    }

    pub fn include_guard(&self) -> String {
        format!("{}_API_STRUCT_H", self.cfg.macro_prefix)
    }

    pub fn init_macro(&self) -> String {
        format!("{}_API_INIT", self.cfg.macro_prefix)
    }

    pub fn extensions_array(&self) -> String {
        format!("{}_extensions_pointers", self.cfg.variable_prefix())
    }
}

fn qualifier(rev: &Revision<'_>) -> String {
    if rev.canonical {
        String::new()
    } else {
        let v = rev.version();
        format!("_{}_{}", v.major, v.minor)
    }
}
