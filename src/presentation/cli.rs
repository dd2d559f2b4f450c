//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Flags override environment variables and the config file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// progmem - embed built web assets as compressed PROGMEM arrays
#[derive(Parser, Debug)]
#[command(name = "progmem")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v per-asset lines, -vv adds hashes and timing)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./progmem.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compress every built asset and write the generated header
    Embed {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// Fail if the generated header is missing or out of date (writes nothing)
    Check {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        encode: EncodeArgs,
    },

    /// List the files that would be embedded, with sizes
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the symbols the firmware uses for request paths
    Symbol {
        /// Request or relative paths, e.g. /index.html
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print the stored-raw symbol names instead of gzip ones
        #[arg(long)]
        raw: bool,
    },
}

/// Input/output location flags
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory of built static files
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory the generated header is written to
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Name of the generated header
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Gitignore-style pattern to leave out (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
}

/// Encoding flags
#[derive(Args, Debug, Clone, Default)]
pub struct EncodeArgs {
    /// Compression level, 0-9
    #[arg(long)]
    pub level: Option<u32>,

    /// Bytes per array row
    #[arg(long, value_name = "BYTES")]
    pub row_width: Option<usize>,

    /// Extensions stored without compression (comma separated)
    #[arg(long = "raw-ext", value_name = "EXT", value_delimiter = ',')]
    pub raw_extensions: Vec<String>,

    /// Compress on the calling thread only
    #[arg(long)]
    pub no_parallel: bool,
}

impl SourceArgs {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input.dir = input.clone();
        }
        if let Some(output) = &self.output {
            config.output.dir = output.clone();
        }
        if let Some(name) = &self.file_name {
            config.output.file_name = name.clone();
        }
        config.input.exclude.extend(self.exclude.iter().cloned());
        config
    }
}

impl EncodeArgs {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(level) = self.level {
            config.encoding.level = level;
        }
        if let Some(width) = self.row_width {
            config.encoding.row_width = width;
        }
        if !self.raw_extensions.is_empty() {
            config.encoding.raw_extensions = self.raw_extensions.clone();
        }
        if self.no_parallel {
            config.encoding.parallel = false;
        }
        config
    }
}
