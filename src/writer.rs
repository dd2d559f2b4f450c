//! Output finalization
//!
//! The generated header is written to a temp file in the destination
//! directory and renamed over the target, so a compiler never sees a
//! truncated file. A failed run leaves the previous output untouched.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::{EmbedError, EmbedResult};

/// Prefix used for content hashes
pub const HASH_PREFIX: &str = "sha256:";

/// SHA-256 of `content`, formatted as `sha256:<hex>`
pub fn content_hash(content: &[u8]) -> String {
    format!("{}{:x}", HASH_PREFIX, Sha256::digest(content))
}

/// Read the current output, `None` if it does not exist yet.
pub fn read_existing(path: &Path) -> EmbedResult<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(EmbedError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `content` to `path` via temp file + rename.
///
/// Parent directories are created if missing.
pub fn write_atomic(path: &Path, content: &[u8]) -> EmbedResult<()> {
    let to_err = |source: io::Error| EmbedError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = parent_dir(path);
    fs::create_dir_all(parent).map_err(to_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(to_err)?;
    tmp.write_all(content).map_err(to_err)?;
    tmp.as_file().sync_all().map_err(to_err)?;
    tmp.persist(path).map_err(|e| to_err(e.error))?;
    Ok(())
}

/// Exclusive advisory lock held while the output is being replaced.
///
/// Backed by `<output>.lock` next to the output file; released on drop.
#[derive(Debug)]
pub struct OutputLock {
    file: File,
    path: PathBuf,
}

impl OutputLock {
    pub fn acquire(output: &Path) -> EmbedResult<Self> {
        let path = lock_path(output);
        let to_err = |source: io::Error| EmbedError::OutputWrite {
            path: output.to_path_buf(),
            source,
        };

        fs::create_dir_all(parent_dir(output)).map_err(to_err)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(to_err)?;

        file.try_lock_exclusive().map_err(|_| {
            to_err(io::Error::new(
                io::ErrorKind::WouldBlock,
                format!("output is locked by another run ({})", path.display()),
            ))
        })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for OutputLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// `<output>.lock`, the file [`OutputLock`] holds
pub fn lock_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    output.with_file_name(name)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
