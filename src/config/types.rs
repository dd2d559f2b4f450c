//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compress::MAX_LEVEL;
use crate::emitter::DEFAULT_ROW_WIDTH;
use crate::error::EmbedResult;

use super::loader::{self, ConfigWarning};

/// Where the built frontend lives and what to leave out of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_dir")]
    pub dir: PathBuf,

    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_input_dir(),
            exclude: Vec::new(),
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data/web")
}

/// Where the generated header goes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build/generated")
}

fn default_file_name() -> String {
    "embedded_files.h".to_string()
}

/// Compression and layout knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingConfig {
    #[serde(default = "default_level")]
    pub level: u32,

    #[serde(default = "default_row_width")]
    pub row_width: usize,

    #[serde(default)]
    pub raw_extensions: Vec<String>,

    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            row_width: default_row_width(),
            raw_extensions: Vec::new(),
            parallel: true,
        }
    }
}

fn default_level() -> u32 {
    MAX_LEVEL
}

fn default_row_width() -> usize {
    DEFAULT_ROW_WIDTH
}

fn default_true() -> bool {
    true
}

/// Main configuration structure (`progmem.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub encoding: EncodingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EmbedResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> EmbedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Full path of the generated header
    pub fn output_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.file_name)
    }

    /// Raw extensions, lowercased and without a leading dot
    pub fn normalized_raw_extensions(&self) -> Vec<String> {
        let mut exts: Vec<String> = self
            .encoding
            .raw_extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        exts.sort();
        exts.dedup();
        exts
    }
}
