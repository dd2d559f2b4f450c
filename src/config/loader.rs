//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{EmbedError, EmbedResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::Config;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "progmem.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> EmbedResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| EmbedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmbedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config file to use.
///
/// An explicit path must exist. Without one, `progmem.toml` in `cwd` is
/// used if present, otherwise built-in defaults.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> EmbedResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                return Ok(LoadedConfig::default());
            }
            candidate
        }
    };

    let (config, warnings) = load_with_warnings(&path)?;
    Ok(LoadedConfig {
        config,
        source: Some(path),
        warnings,
    })
}

/// Apply `PROGMEM_*` environment overrides, warning on stderr
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary lookup (for testing)
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(val) = get_env("PROGMEM_LEVEL") {
        config.encoding.level = EnvVarValidator::new("PROGMEM_LEVEL", "an integer from 0 to 9")
            .parse_with_writer(
                &val,
                |s| s.parse::<u32>().ok().filter(|l| *l <= crate::compress::MAX_LEVEL),
                config.encoding.level,
                warnings,
            );
    }

    if let Some(val) = get_env("PROGMEM_ROW_WIDTH") {
        config.encoding.row_width =
            EnvVarValidator::new("PROGMEM_ROW_WIDTH", "an integer >= 1").parse_with_writer(
                &val,
                |s| s.parse::<usize>().ok().filter(|w| *w > 0),
                config.encoding.row_width,
                warnings,
            );
    }

    if let Some(val) = get_env("PROGMEM_PARALLEL") {
        config.encoding.parallel = EnvVarValidator::new("PROGMEM_PARALLEL", "true or false")
            .with_candidates(&["true", "false"])
            .parse_with_writer(&val, parse_bool, config.encoding.parallel, warnings);
    }

    config
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "input",
        "dir",
        "exclude",
        "output",
        "file_name",
        "encoding",
        "level",
        "row_width",
        "raw_extensions",
        "parallel",
    ];

    match closest(unknown, CANDIDATES) {
        Some((candidate, dist)) if dist > 0 => Some(candidate.to_string()),
        _ => None,
    }
}
