//! Path-to-symbol naming contract
//!
//! The firmware looks assets up by request path and must derive the same
//! symbol names this module does. Any change to [`identifier_for`] is a
//! breaking change to that contract and must bump [`NAMING_VERSION`].

use std::collections::HashMap;

use crate::error::{EmbedError, EmbedResult};
use crate::models::Encoding;

/// Version of the naming rules, recorded in the generated preamble.
pub const NAMING_VERSION: u32 = 1;

/// Map a relative path to a C identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, one per character.
/// A leading digit gets a `_` prefix. Request paths may start with `/`;
/// leading slashes are stripped first so `/index.html` and `index.html`
/// name the same asset.
pub fn identifier_for(path: &str) -> String {
    let path = path.trim_start_matches('/');
    let mut ident = String::with_capacity(path.len() + 1);

    if path.starts_with(|c: char| c.is_ascii_digit()) {
        ident.push('_');
    }
    for c in path.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            ident.push(c);
        } else {
            ident.push('_');
        }
    }

    if ident.is_empty() {
        ident.push('_');
    }
    ident
}

/// Array symbol for a path, e.g. `index.html` -> `index_html_gz`
pub fn array_symbol(path: &str, encoding: Encoding) -> String {
    format!("{}_{}", identifier_for(path), encoding.suffix())
}

/// Length constant symbol for a path, e.g. `index.html` -> `index_html_gz_len`
pub fn length_symbol(path: &str, encoding: Encoding) -> String {
    format!("{}_len", array_symbol(path, encoding))
}

/// Tracks which path produced each identifier within a run.
#[derive(Debug, Default)]
pub struct IdentifierTable {
    owners: HashMap<String, String>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive and reserve the identifier for `path`.
    ///
    /// Fails with `IdentifierCollision` when another path already owns it.
    pub fn claim(&mut self, path: &str) -> EmbedResult<String> {
        let identifier = identifier_for(path);
        if let Some(owner) = self.owners.get(&identifier) {
            return Err(EmbedError::IdentifierCollision {
                path_a: owner.clone(),
                path_b: path.to_string(),
                identifier,
            });
        }
        self.owners.insert(identifier.clone(), path.to_string());
        Ok(identifier)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
