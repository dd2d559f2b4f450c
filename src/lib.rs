//! progmem - build-time asset embedder for firmware images
//!
//! Takes the directory a frontend bundler produced, gzip-compresses every
//! file and generates one C header with a `PROGMEM` byte array and a length
//! constant per file, ready to be served straight from program memory.

pub mod compress;
pub mod config;
pub mod emitter;
pub mod error;
pub mod models;
pub mod naming;
pub mod pipeline;
pub mod presentation;
pub mod walker;
pub mod writer;

// Re-exports for convenience
pub use compress::{encode_assets, Compressor, EncodeOptions};
pub use config::Config;
pub use emitter::{render, EmitOptions};
pub use error::{EmbedError, EmbedResult};
pub use models::{AssetRecord, Encoding, GeneratedSource, SourceFile, SourceTree};
pub use naming::{identifier_for, IdentifierTable, NAMING_VERSION};
pub use pipeline::{build, check, embed, EmbedOptions, EmbedReport, WriteStatus};
pub use walker::{walk_source_tree, WalkOptions};
