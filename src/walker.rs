//! Source tree discovery
//!
//! Walks the frontend output directory and reads every regular file once.
//! Entries come back sorted by relative path, never in the order the
//! filesystem happens to return them.

use std::fs;
use std::path::{Component, Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;

use crate::error::{EmbedError, EmbedResult};
use crate::models::{SourceFile, SourceTree};

/// Suffix of files that are already compressed and must not be embedded again
pub const COMPRESSED_SUFFIX: &str = ".gz";

/// Filters applied while walking
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Gitignore-style globs matched against the relative path
    pub exclude: Vec<String>,
    /// Files this tool writes itself (header, lock); never embedded
    pub generated: Vec<PathBuf>,
}

/// Why a discovered file was left out of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyCompressed,
    Excluded,
    /// Output of a previous run that lives inside the input tree
    Generated,
}

/// A file that was seen but not embedded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub relative_path: String,
    pub reason: SkipReason,
}

/// Result of a walk: the tree plus what was filtered out
#[derive(Debug, Clone, Default)]
pub struct Walk {
    pub tree: SourceTree,
    pub skipped: Vec<SkippedFile>,
}

/// Collect every regular file below `root`.
///
/// Symlinks are not followed. Fails with `MissingInputDirectory` when
/// `root` is absent; an existing but empty directory yields an empty tree.
pub fn walk_source_tree(root: &Path, options: &WalkOptions) -> EmbedResult<Walk> {
    if !root.is_dir() {
        return Err(EmbedError::MissingInputDirectory {
            path: root.to_path_buf(),
        });
    }

    let excludes = build_excludes(root, &options.exclude)?;
    let generated = generated_relative_paths(root, &options.generated);

    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    let mut files = Vec::new();
    let mut skipped = Vec::new();

    for entry in builder.build() {
        let entry = entry.map_err(|e| EmbedError::InputRead {
            path: error_path(&e).unwrap_or(root).to_path_buf(),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative_path = relative_path(root, path)?;

        if generated.contains(&relative_path) {
            skipped.push(SkippedFile {
                relative_path,
                reason: SkipReason::Generated,
            });
            continue;
        }
        if is_compressed(path) {
            skipped.push(SkippedFile {
                relative_path,
                reason: SkipReason::AlreadyCompressed,
            });
            continue;
        }
        if excludes.matched_path_or_any_parents(path, false).is_ignore() {
            skipped.push(SkippedFile {
                relative_path,
                reason: SkipReason::Excluded,
            });
            continue;
        }

        let bytes = fs::read(path).map_err(|e| EmbedError::InputRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        files.push(SourceFile::new(relative_path, bytes));
    }

    skipped.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(Walk {
        tree: SourceTree::new(root, files),
        skipped,
    })
}

fn build_excludes(root: &Path, patterns: &[String]) -> EmbedResult<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    for pattern in patterns {
        builder
            .add_line(None, pattern)
            .map_err(|_| EmbedError::InvalidOption {
                option: "input.exclude",
                value: pattern.clone(),
                reason: "not a valid glob pattern",
            })?;
    }
    builder.build().map_err(|e| EmbedError::InvalidOption {
        option: "input.exclude",
        value: e.to_string(),
        reason: "exclude patterns could not be compiled",
    })
}

fn is_compressed(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|n| n.ends_with(COMPRESSED_SUFFIX))
}

/// Path an `ignore` error refers to, if it carries one.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}

/// Relative paths (as produced by the walk) of generated files under `root`.
///
/// Both sides are canonicalized so `./web/gen/x.h` and an absolute
/// spelling of the same file match. Files whose directory does not exist
/// yet cannot be in the tree and are dropped.
fn generated_relative_paths(root: &Path, generated: &[PathBuf]) -> Vec<String> {
    let Ok(root) = fs::canonicalize(root) else {
        return Vec::new();
    };

    generated
        .iter()
        .filter_map(|file| {
            let name = file.file_name()?.to_str()?;
            let parent = match file.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let parent = fs::canonicalize(parent).ok()?;
            let rel = parent.strip_prefix(&root).ok()?;

            let mut parts = rel
                .components()
                .map(|c| match c {
                    Component::Normal(part) => part.to_str(),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()?;
            parts.push(name);
            Some(parts.join("/"))
        })
        .collect()
}

/// Relative path with `/` separators regardless of host OS.
fn relative_path(root: &Path, path: &Path) -> EmbedResult<String> {
    let rel = path.strip_prefix(root).map_err(|_| EmbedError::InputRead {
        path: path.to_path_buf(),
        message: "path is outside the input directory".to_string(),
    })?;

    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| EmbedError::InputRead {
                path: path.to_path_buf(),
                message: "file name is not valid UTF-8".to_string(),
            })?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}
