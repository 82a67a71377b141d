//! Plugin ABI generator.
//!
//! Turns a JSON description of a versioned plugin API (one core interface
//! plus independently versioned extensions) into C:
//!
//! - an ABI header declaring one struct layout per revision, a discriminant
//!   enum and an init macro,
//! - an instance source populating those layouts with function pointers,
//! - a wrapper source implementing every current entry point as a trampoline
//!   through the runtime-supplied tables.
//!
//! Every function here is a pure rendering of its input; writing files is
//! left to the caller (see the `plugin-abi-gen` binary).
pub mod api;
pub mod chain;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod naming;
pub mod path_de;
pub mod signature;
pub mod tags;
pub mod validate;

pub use api::{ApiDescription, ExtensionInterface, FunctionSignature, InterfaceNode, Parameter, Version};
pub use config::GeneratorConfig;
pub use error::{GenError, Result};

/// Header and instance source; always generated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiStruct {
    pub header: String,
    pub source: String,
}

/// Parse and validate a description.
pub fn load_description(src: &str) -> Result<ApiDescription> {
    let api: ApiDescription = path_de::from_str_with_path(src)?;
    validate::validate(&api)?;
    Ok(api)
}

pub fn generate_api_struct(api: &ApiDescription, cfg: &GeneratorConfig) -> Result<ApiStruct> {
    let ctx = emit::Context::new(api, cfg)?;
    Ok(ApiStruct {
        header: emit::header::emit_header(&ctx),
        source: emit::source::emit_source(&ctx),
    })
}

pub fn generate_wrapper(api: &ApiDescription, cfg: &GeneratorConfig) -> Result<String> {
    let ctx = emit::Context::new(api, cfg)?;
    Ok(emit::wrapper::emit_wrapper(&ctx))
}
