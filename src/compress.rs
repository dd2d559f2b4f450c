//! Per-file compression
//!
//! Every asset is gzip-compressed unless its extension is listed as a
//! store-raw extension. Compression is applied even when the result is
//! larger than the input; the firmware then has a single decode path.
//! The gzip header is fixed (mtime 0, no name, OS 255) so identical input
//! always produces identical bytes.

use std::io::Write;

use flate2::{Compression, GzBuilder};
use rayon::prelude::*;

use crate::error::{EmbedError, EmbedResult};
use crate::models::{AssetRecord, Encoding, SourceFile, SourceTree};
use crate::naming::IdentifierTable;

/// Highest level accepted by the deflate encoder
pub const MAX_LEVEL: u32 = 9;

/// OS byte for "unknown", keeps the header host-independent
const GZIP_OS_UNKNOWN: u8 = 255;

/// Deterministic gzip compressor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compressor {
    level: u32,
}

impl Default for Compressor {
    fn default() -> Self {
        Self { level: MAX_LEVEL }
    }
}

impl Compressor {
    pub fn new(level: u32) -> EmbedResult<Self> {
        if level > MAX_LEVEL {
            return Err(EmbedError::InvalidOption {
                option: "encoding.level",
                value: level.to_string(),
                reason: "compression level must be between 0 and 9",
            });
        }
        Ok(Self { level })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn compress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder = GzBuilder::new()
            .mtime(0)
            .operating_system(GZIP_OS_UNKNOWN)
            .write(Vec::with_capacity(bytes.len() / 2 + 32), Compression::new(self.level));
        encoder.write_all(bytes)?;
        encoder.finish()
    }
}

/// Options for turning a tree into asset records
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub compressor: Compressor,
    /// Lowercase extensions (without dot) stored without compression
    pub raw_extensions: Vec<String>,
    /// Compress on the rayon pool instead of the calling thread
    pub parallel: bool,
}

impl EncodeOptions {
    /// Encoding a file will get under these options
    pub fn encoding_for(&self, file: &SourceFile) -> Encoding {
        match file.extension() {
            Some(ext) if self.raw_extensions.iter().any(|r| r.eq_ignore_ascii_case(&ext)) => {
                Encoding::Stored
            }
            _ => Encoding::Gzip,
        }
    }
}

/// Derive identifiers and encoded bytes for every file of `tree`.
///
/// Identifiers are claimed in traversal order, so a collision always
/// reports the earlier path as `path_a`. The returned records keep the
/// tree's order even when compression runs in parallel, and the first
/// failure in that order is the one reported.
pub fn encode_assets(tree: &SourceTree, options: &EncodeOptions) -> EmbedResult<Vec<AssetRecord>> {
    let mut table = IdentifierTable::new();
    let mut pending = Vec::with_capacity(tree.len());
    for file in tree.files() {
        let identifier = table.claim(&file.relative_path)?;
        pending.push((file, identifier, options.encoding_for(file)));
    }

    let encode = |(file, identifier, encoding): (&SourceFile, String, Encoding)| {
        encode_one(file, identifier, encoding, &options.compressor)
    };

    let results: Vec<EmbedResult<AssetRecord>> = if options.parallel {
        pending.into_par_iter().map(encode).collect()
    } else {
        pending.into_iter().map(encode).collect()
    };

    results.into_iter().collect()
}

fn encode_one(
    file: &SourceFile,
    identifier: String,
    encoding: Encoding,
    compressor: &Compressor,
) -> EmbedResult<AssetRecord> {
    let compressed_bytes = match encoding {
        Encoding::Gzip => {
            compressor
                .compress(&file.bytes)
                .map_err(|source| EmbedError::Compression {
                    path: file.relative_path.clone(),
                    source,
                })?
        }
        Encoding::Stored => file.bytes.clone(),
    };

    Ok(AssetRecord {
        relative_path: file.relative_path.clone(),
        raw_bytes: file.bytes.clone(),
        compressed_bytes,
        identifier,
        encoding,
    })
}
