//! Minimal CLI: description → (api-struct | wrapper | check)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::api::ApiDescription;
use crate::config::GeneratorConfig;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate the C ABI header, instance source and trampoline wrapper for a plugin API description
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// verbosity (-d info, -dd debug, -ddd trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit the ABI header and the matching instance source
    ApiStruct(ApiStructOut),
    /// emit the trampoline wrapper source
    Wrapper(WrapperOut),
    /// validate the description and print a summary
    Check(CheckOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// API description (JSON)
    #[arg(long, short)]
    input: PathBuf,

    /// generator config (JSON); defaults apply to missing keys
    #[arg(long)]
    config: Option<PathBuf>,

    /// override `symbol_prefix` (C type names)
    #[arg(long)]
    symbol_prefix: Option<String>,

    /// override `macro_prefix` (enum, guard, init macro)
    #[arg(long)]
    macro_prefix: Option<String>,
}

#[derive(clap::Parser, Debug)]
struct ApiStructOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output header (.h)
    #[arg(long)]
    header: PathBuf,

    /// output instance source (.c/.cpp)
    #[arg(long)]
    source: PathBuf,
}

#[derive(clap::Parser, Debug)]
struct WrapperOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output wrapper source (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct CheckOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<(ApiDescription, GeneratorConfig)> {
        let mut cfg = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(prefix) = &self.symbol_prefix {
            cfg.symbol_prefix = prefix.clone();
        }
        if let Some(prefix) = &self.macro_prefix {
            cfg.macro_prefix = prefix.clone();
        }

        let source = std::fs::read_to_string(&self.input)
            .with_context(|| format!("failed to read description {}", self.input.display()))?;
        let api = crate::load_description(&source)
            .with_context(|| format!("invalid description {}", self.input.display()))?;
        log::info!(
            "loaded {}: core {} + {} extension(s)",
            self.input.display(),
            api.core.version,
            api.extensions.len()
        );
        Ok((api, cfg))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Log filter implied by `-d`.
    pub fn log_level(&self) -> &'static str {
        match self.debug {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::ApiStruct(target) => {
                let (api, cfg) = target.input_settings.load()?;
                let out = crate::generate_api_struct(&api, &cfg)?;
                write_artifacts(&[
                    (target.header.as_path(), out.header.as_str()),
                    (target.source.as_path(), out.source.as_str()),
                ])?;
            }
            Command::Wrapper(target) => {
                let (api, cfg) = target.input_settings.load()?;
                let wrapper = crate::generate_wrapper(&api, &cfg)?;
                match target.out.as_ref() {
                    Some(out) => write_artifacts(&[(out.as_path(), wrapper.as_str())])?,
                    None => print!("{wrapper}"),
                }
            }
            Command::Check(target) => {
                let (api, _) = target.input_settings.load()?;
                println!("{}", summarize(&api));
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Stages every artifact beside its target, then renames them into place. A
/// failed write removes what was staged and leaves all targets untouched.
fn write_artifacts(artifacts: &[(&Path, &str)]) -> Result<()> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(artifacts.len());
    for &(path, contents) in artifacts {
        match stage(path, contents) {
            Ok(tmp) => staged.push((tmp, path)),
            Err(error) => {
                for (tmp, _) in &staged {
                    let _ = std::fs::remove_file(tmp);
                }
                return Err(error);
            }
        }
    }
    for (tmp, path) in &staged {
        std::fs::rename(tmp, path)
            .with_context(|| format!("failed to move {} into place", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn stage(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    let tmp = path.with_file_name(name);
    std::fs::write(&tmp, contents).with_context(|| format!("failed to write {}", tmp.display()))?;
    Ok(tmp)
}

fn summarize(api: &ApiDescription) -> String {
    let mut lines = vec![format!("{} description is valid", "ok:".green().bold())];
    let core = &api.core;
    lines.push(format!(
        "  {} {} {} ({} entries, {} revision(s))",
        "core".bold(),
        core.type_tag,
        core.version,
        core.entries.len(),
        core.depth()
    ));
    for ext in &api.extensions {
        let head = &ext.head;
        lines.push(format!(
            "  {} {} {} ({} entries, {} revision(s))",
            ext.name.bold(),
            head.type_tag,
            head.version,
            head.entries.len(),
            head.depth()
        ));
    }
    lines.join("\n")
}
