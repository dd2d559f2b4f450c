//! Error types for progmem
//!
//! Uses `thiserror` for library errors. Every variant is fatal for the run
//! and names the path that caused it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for progmem operations
pub type EmbedResult<T> = Result<T, EmbedError>;

/// Main error type for embedding runs
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Input root does not exist or is not a directory
    #[error("input directory not found: {path}")]
    MissingInputDirectory { path: PathBuf },

    /// Two relative paths sanitize to the same identifier
    #[error("identifier '{identifier}' is produced by both '{path_a}' and '{path_b}'")]
    IdentifierCollision {
        path_a: String,
        path_b: String,
        identifier: String,
    },

    /// The compressor failed for a file
    #[error("failed to compress {path}: {source}")]
    Compression {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generated source could not be written (or the output is locked)
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be read during the walk
    #[error("failed to read {path}: {message}")]
    InputRead { path: PathBuf, message: String },

    /// Configuration file is not valid TOML for the config schema
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// An option is outside its accepted range
    #[error("invalid value '{value}' for {option}: {reason}")]
    InvalidOption {
        option: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl EmbedError {
    /// Path most closely associated with the error, for diagnostics.
    pub fn path(&self) -> Option<String> {
        match self {
            EmbedError::MissingInputDirectory { path }
            | EmbedError::OutputWrite { path, .. }
            | EmbedError::InputRead { path, .. } => Some(path.display().to_string()),
            EmbedError::InvalidConfig { file, .. } => Some(file.display().to_string()),
            EmbedError::IdentifierCollision { path_b, .. } => Some(path_b.clone()),
            EmbedError::Compression { path, .. } => Some(path.clone()),
            EmbedError::InvalidOption { .. } => None,
        }
    }
}
