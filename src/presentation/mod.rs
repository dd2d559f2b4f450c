//! Presentation Layer
//!
//! CLI argument parsing (via clap) and the mapping from flags onto
//! [`Config`](crate::config::Config). Rendering lives in the binary's `ui`.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands, EncodeArgs, SourceArgs};
