//! C emission.
//!
//! - `header`: struct layouts, the discriminant enum and the init macro
//! - `source`: static table instances and the extension index
//! - `wrapper`: trampolines forwarding through the runtime-supplied tables
//!
//! All three render from the same [`Context`] and walk chains with
//! [`crate::chain::walk`], which keeps the artifacts consistent with each
//! other.
pub mod header;
pub mod source;
pub mod wrapper;

use crate::api::ApiDescription;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::naming::Naming;
use crate::tags::TagTable;

pub const GENERATED_MARKER: &str = "/* THIS FILE IS GENERATED DO NOT EDIT */";

/// Everything an emitter reads. Built once per generation run.
pub struct Context<'a> {
    pub api: &'a ApiDescription,
    pub cfg: &'a GeneratorConfig,
    pub naming: Naming<'a>,
    pub tags: TagTable<'a>,
}

impl<'a> Context<'a> {
    pub fn new(api: &'a ApiDescription, cfg: &'a GeneratorConfig) -> Result<Self> {
        crate::validate::validate(api)?;
        let naming = Naming::new(cfg);
        crate::validate::check_symbols(api, &naming)?;
        let tags = TagTable::build(api, &naming)?;
        Ok(Context { api, cfg, naming, tags })
    }
}

/// Line buffer; output always ends with a newline.
#[derive(Debug, Default)]
pub struct Writer {
    lines: Vec<String>,
}

impl Writer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn includes<'i>(&mut self, headers: impl IntoIterator<Item = &'i String>) {
        for h in headers {
            self.line(format!("#include <{h}>"));
        }
    }

    pub fn extern_c_open(&mut self) {
        self.line("#ifdef __cplusplus");
        self.line("extern \"C\" {");
        self.line("#endif");
    }

    pub fn extern_c_close(&mut self) {
        self.line("#ifdef __cplusplus");
        self.line("}");
        self.line("#endif");
    }

    pub fn into_string(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
