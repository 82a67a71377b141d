//! Naming and include settings for the emitted C.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// prefix of every emitted C type name
    pub symbol_prefix: String,
    /// prefix of the enum, its discriminants, the include guard and the init macro
    pub macro_prefix: String,
    /// header included by the instance and wrapper sources
    pub header_name: String,
    pub header_includes: Vec<String>,
    pub wrapper_includes: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            symbol_prefix: "rebel_gdnative".to_string(),
            macro_prefix: "GDNATIVE".to_string(),
            header_name: "gdnative_api_struct.gen.h".to_string(),
            header_includes: [
                "gdnative/gdnative.h",
                "android/rebel_android.h",
                "arvr/rebel_arvr.h",
                "nativescript/rebel_nativescript.h",
                "net/rebel_net.h",
                "pluginscript/rebel_pluginscript.h",
                "videodecoder/rebel_videodecoder.h",
            ]
            .map(String::from)
            .to_vec(),
            wrapper_includes: [
                "gdnative/gdnative.h",
                "nativescript/rebel_nativescript.h",
                "pluginscript/rebel_pluginscript.h",
                "arvr/rebel_arvr.h",
                "videodecoder/rebel_videodecoder.h",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Missing keys fall back to the defaults.
    pub fn from_json(src: &str) -> Result<Self> {
        crate::path_de::from_str_with_path(src)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&src).with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Lower-case form of `macro_prefix`, used for C variables.
    pub fn variable_prefix(&self) -> String {
        self.macro_prefix.to_lowercase()
    }
}
