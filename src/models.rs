//! Core data models for progmem
//!
//! A run flows `SourceTree` -> `AssetRecord`s -> `GeneratedSource`.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One file of the input tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the tree root, always with `/` separators
    pub relative_path: String,
    /// Exact on-disk content
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(relative_path: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            relative_path: relative_path.into(),
            bytes,
        }
    }

    /// Lowercased extension of the final path segment, if any
    pub fn extension(&self) -> Option<String> {
        let name = self.relative_path.rsplit('/').next()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// The files produced by the frontend build, in traversal order
#[derive(Debug, Clone, Default)]
pub struct SourceTree {
    root: PathBuf,
    files: Vec<SourceFile>,
}

impl SourceTree {
    /// Build a tree, sorting entries lexicographically by relative path.
    pub fn new(root: impl Into<PathBuf>, mut files: Vec<SourceFile>) -> Self {
        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        files.dedup_by(|a, b| a.relative_path == b.relative_path);
        Self {
            root: root.into(),
            files,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.bytes.len()).sum()
    }
}

/// How an asset's bytes are stored in the generated source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// gzip stream, emitted as `<identifier>_gz`
    Gzip,
    /// raw bytes, emitted as `<identifier>_raw`
    Stored,
}

impl Encoding {
    /// Symbol suffix that tells the consumer which decode path to use
    pub fn suffix(self) -> &'static str {
        match self {
            Encoding::Gzip => "gz",
            Encoding::Stored => "raw",
        }
    }
}

/// One file plus its derived encoded form and identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub relative_path: String,
    pub raw_bytes: Vec<u8>,
    /// Bytes that end up in the array; equal to `raw_bytes` for stored assets
    pub compressed_bytes: Vec<u8>,
    pub identifier: String,
    pub encoding: Encoding,
}

impl AssetRecord {
    pub fn raw_len(&self) -> usize {
        self.raw_bytes.len()
    }

    pub fn compressed_len(&self) -> usize {
        self.compressed_bytes.len()
    }

    /// Name of the emitted byte array, e.g. `index_html_gz`
    pub fn array_symbol(&self) -> String {
        format!("{}_{}", self.identifier, self.encoding.suffix())
    }

    /// Name of the emitted length constant, e.g. `index_html_gz_len`
    pub fn length_symbol(&self) -> String {
        format!("{}_len", self.array_symbol())
    }
}

/// The single textual output artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    content: String,
    asset_count: usize,
}

impl GeneratedSource {
    pub(crate) fn new(content: String, asset_count: usize) -> Self {
        Self {
            content,
            asset_count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    pub fn asset_count(&self) -> usize {
        self.asset_count
    }

    pub fn into_string(self) -> String {
        self.content
    }
}
