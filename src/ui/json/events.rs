//! NDJSON event types shared by all commands.

use std::path::Path;

use serde::Serialize;

use progmem::pipeline::AssetSummary;
use progmem::walker::{SkipReason, SkippedFile};
use progmem::Encoding;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub naming_version: u32,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            naming_version: progmem::NAMING_VERSION,
        }
    }
}

/// One embedded (or listed) asset.
#[derive(Debug, Clone, Serialize)]
pub struct AssetEvent<'a> {
    pub event: &'static str,
    #[serde(flatten)]
    pub asset: &'a AssetSummary,
}

impl<'a> AssetEvent<'a> {
    pub fn new(asset: &'a AssetSummary) -> Self {
        Self {
            event: "asset",
            asset,
        }
    }
}

/// A file of the source tree, as reported by `list`.
#[derive(Debug, Clone, Serialize)]
pub struct FileEvent<'a> {
    pub event: &'static str,
    pub path: &'a str,
    pub size: usize,
    pub symbol: String,
    pub encoding: Encoding,
}

/// A file that was found but left out.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEvent<'a> {
    pub event: &'static str,
    pub path: &'a str,
    pub reason: &'static str,
}

impl<'a> SkippedEvent<'a> {
    pub fn new(skipped: &'a SkippedFile) -> Self {
        Self {
            event: "skipped",
            path: &skipped.relative_path,
            reason: match skipped.reason {
                SkipReason::AlreadyCompressed => "already_compressed",
                SkipReason::Excluded => "excluded",
                SkipReason::Generated => "generated",
            },
        }
    }
}

/// Non-fatal warning (e.g. unknown config key).
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
            file: None,
            line: None,
        }
    }

    pub fn at(mut self, file: &Path, line: Option<usize>) -> Self {
        self.file = Some(file.display().to_string());
        self.line = line;
        self
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed_bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self::new(command, true)
    }

    pub fn failure(command: &'a str) -> Self {
        Self::new(command, false)
    }

    fn new(command: &'a str, success: bool) -> Self {
        Self {
            event: "complete",
            command,
            success,
            output: None,
            status: None,
            assets: None,
            raw_bytes: None,
            compressed_bytes: None,
            hash: None,
            duration_ms: None,
        }
    }

    pub fn with_output(mut self, path: &Path) -> Self {
        self.output = Some(path.display().to_string());
        self
    }

    pub fn with_status(mut self, status: &'static str) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_totals(mut self, assets: usize, raw: usize, compressed: usize) -> Self {
        self.assets = Some(assets);
        self.raw_bytes = Some(raw);
        self.compressed_bytes = Some(compressed);
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted on a fatal error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>, path: Option<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
            path,
        }
    }
}
