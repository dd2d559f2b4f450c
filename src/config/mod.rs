//! Configuration module for progmem
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PROGMEM_*)
//! 3. Config file (`--config` or ./progmem.toml)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover, load_with_warnings, with_env_overrides, with_env_overrides_from, ConfigWarning,
    LoadedConfig, DEFAULT_CONFIG_FILE,
};
pub use types::{Config, EncodingConfig, InputConfig, OutputConfig};
