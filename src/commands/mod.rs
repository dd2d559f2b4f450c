//! Command handlers for the progmem binary

pub mod check;
pub mod embed;
pub mod list;
pub mod symbol;

use std::path::Path;

use anyhow::Result;

use progmem::config::{self, Config};
use progmem::presentation::{EncodeArgs, SourceArgs};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Effective configuration: file < environment < flags.
pub fn resolve_config(
    ui: &UiContext,
    config_path: Option<&Path>,
    source: &SourceArgs,
    encode: Option<&EncodeArgs>,
) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let loaded = config::discover(config_path, &cwd)?;

    if let Some(path) = &loaded.source {
        print_config_warnings(path, &loaded.warnings, ui);
    }

    let config = config::with_env_overrides(loaded.config);
    let config = source.apply(config);
    Ok(match encode {
        Some(encode) => encode.apply(config),
        None => config,
    })
}
