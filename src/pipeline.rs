//! Embedding pipeline
//!
//! walk -> encode -> render -> finalize. [`build`] stops before touching
//! the output; [`embed`] writes it; [`check`] compares against it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::compress::{encode_assets, Compressor, EncodeOptions};
use crate::config::Config;
use crate::emitter::{render, EmitOptions};
use crate::error::EmbedResult;
use crate::models::{AssetRecord, Encoding, GeneratedSource};
use crate::walker::{walk_source_tree, SkippedFile, WalkOptions};
use crate::writer::{content_hash, lock_path, read_existing, write_atomic, OutputLock};

/// Everything a run needs, already validated
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub walk: WalkOptions,
    pub encode: EncodeOptions,
    pub emit: EmitOptions,
}

impl EmbedOptions {
    /// Defaults: max compression, 16-byte rows, nothing stored raw.
    pub fn new(input_dir: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            walk: WalkOptions::default(),
            encode: EncodeOptions {
                parallel: true,
                ..EncodeOptions::default()
            },
            emit: EmitOptions::default(),
        }
    }

    /// Validate a config and turn it into run options.
    pub fn from_config(config: &Config) -> EmbedResult<Self> {
        Ok(Self {
            input_dir: config.input.dir.clone(),
            output_path: config.output_path(),
            walk: WalkOptions {
                exclude: config.input.exclude.clone(),
                ..WalkOptions::default()
            },
            encode: EncodeOptions {
                compressor: Compressor::new(config.encoding.level)?,
                raw_extensions: config.normalized_raw_extensions(),
                parallel: config.encoding.parallel,
            },
            emit: EmitOptions::new(config.encoding.row_width)?,
        })
    }
}

/// Per-asset line of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetSummary {
    pub path: String,
    pub symbol: String,
    pub raw_len: usize,
    pub compressed_len: usize,
    pub encoding: Encoding,
}

impl From<&AssetRecord> for AssetSummary {
    fn from(record: &AssetRecord) -> Self {
        Self {
            path: record.relative_path.clone(),
            symbol: record.array_symbol(),
            raw_len: record.raw_len(),
            compressed_len: record.compressed_len(),
            encoding: record.encoding,
        }
    }
}

/// In-memory result of a run
#[derive(Debug, Clone)]
pub struct Build {
    pub records: Vec<AssetRecord>,
    pub skipped: Vec<SkippedFile>,
    pub source: GeneratedSource,
}

impl Build {
    pub fn summaries(&self) -> Vec<AssetSummary> {
        self.records.iter().map(AssetSummary::from).collect()
    }
}

/// Files a run writes next to each other: the header and its lock.
pub fn generated_files(output_path: &Path) -> Vec<PathBuf> {
    vec![output_path.to_path_buf(), lock_path(output_path)]
}

/// Walk, encode and render without writing anything.
///
/// The header and its lock are never embedded, even when the output
/// directory sits inside the input tree.
pub fn build(options: &EmbedOptions) -> EmbedResult<Build> {
    let mut walk_options = options.walk.clone();
    walk_options
        .generated
        .extend(generated_files(&options.output_path));

    let walk = walk_source_tree(&options.input_dir, &walk_options)?;
    let records = encode_assets(&walk.tree, &options.encode)?;
    let source = render(&records, &options.emit);
    Ok(Build {
        records,
        skipped: walk.skipped,
        source,
    })
}

/// Outcome of finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    Written,
    /// Existing output was byte-identical and left alone
    Unchanged,
}

/// Result of [`embed`]
#[derive(Debug, Clone)]
pub struct EmbedReport {
    pub output_path: PathBuf,
    pub assets: Vec<AssetSummary>,
    pub skipped: Vec<SkippedFile>,
    pub status: WriteStatus,
    pub hash: String,
    pub bytes: usize,
}

impl EmbedReport {
    pub fn raw_total(&self) -> usize {
        self.assets.iter().map(|a| a.raw_len).sum()
    }

    pub fn compressed_total(&self) -> usize {
        self.assets.iter().map(|a| a.compressed_len).sum()
    }
}

/// Run the whole pipeline and finalize the output.
///
/// Nothing is written unless every file was read, named and encoded.
pub fn embed(options: &EmbedOptions) -> EmbedResult<EmbedReport> {
    let built = build(options)?;
    let status = finalize(&options.output_path, built.source.as_bytes())?;

    Ok(EmbedReport {
        output_path: options.output_path.clone(),
        assets: built.summaries(),
        hash: content_hash(built.source.as_bytes()),
        bytes: built.source.as_bytes().len(),
        skipped: built.skipped,
        status,
    })
}

fn finalize(output_path: &Path, content: &[u8]) -> EmbedResult<WriteStatus> {
    let _lock = OutputLock::acquire(output_path)?;

    if let Some(existing) = read_existing(output_path)? {
        if content_hash(&existing) == content_hash(content) {
            return Ok(WriteStatus::Unchanged);
        }
    }

    write_atomic(output_path, content)?;
    Ok(WriteStatus::Written)
}

/// Result of [`check`]
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub output_path: PathBuf,
    pub expected: String,
    /// Current file content; `None` when the output does not exist
    pub actual: Option<String>,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.actual.as_deref() == Some(self.expected.as_str())
    }
}

/// Render in memory and compare with the output on disk. Never writes.
pub fn check(options: &EmbedOptions) -> EmbedResult<CheckReport> {
    let built = build(options)?;
    let actual = read_existing(&options.output_path)?
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());

    Ok(CheckReport {
        output_path: options.output_path.clone(),
        expected: built.source.into_string(),
        actual,
    })
}
