//! Common test utilities for progmem CLI tests.
//!
//! `TestEnv` owns a temp project directory laid out like a firmware
//! repo (`data/web` in, `build/generated/embedded_files.h` out) and runs
//! the progmem binary inside it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Default input directory, relative to the project root
pub const INPUT_DIR: &str = "data/web";

/// Default generated header, relative to the project root
pub const OUTPUT_FILE: &str = "build/generated/embedded_files.h";

/// Result of running a progmem CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Project with an (empty) input directory
    pub fn new() -> Self {
        let env = Self::without_input();
        std::fs::create_dir_all(env.input_path("")).expect("Failed to create input dir");
        env
    }

    /// Project where the frontend has not been built yet
    pub fn without_input() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn input_path(&self, relative: &str) -> PathBuf {
        self.path(INPUT_DIR).join(relative)
    }

    pub fn output_path(&self) -> PathBuf {
        self.path(OUTPUT_FILE)
    }

    /// Write a file under the input directory
    pub fn write_input(&self, relative: &str, content: impl AsRef<[u8]>) {
        write_file(&self.input_path(relative), content.as_ref());
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, relative: &str, content: impl AsRef<[u8]>) {
        write_file(&self.path(relative), content.as_ref());
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"))
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output_path())
            .unwrap_or_else(|e| panic!("Failed to read generated header: {e}"))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = progmem();
        cmd.current_dir(self.root.path()).args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().expect("Failed to execute progmem"))
    }
}

/// progmem binary with color and CI detection disabled
pub fn progmem() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_progmem"));
    cmd.env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env_remove("GITHUB_ACTIONS")
        .env_remove("CI")
        .env_remove("PROGMEM_LEVEL")
        .env_remove("PROGMEM_ROW_WIDTH")
        .env_remove("PROGMEM_PARALLEL");
    cmd
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

/// `0x..` tokens of one array in a generated header
pub fn array_bytes(header: &str, symbol: &str) -> Vec<u8> {
    let open = format!("const uint8_t {symbol}[] PROGMEM = {{\n");
    let start = header
        .find(&open)
        .unwrap_or_else(|| panic!("{symbol} not found in:\n{header}"))
        + open.len();
    let end = start + header[start..].find("};").expect("unterminated array");

    header[start..end]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(|t| u8::from_str_radix(t.trim_start_matches("0x"), 16).expect("hex byte"))
        .collect()
}

/// Value of `const size_t <symbol> = N;`
pub fn length_constant(header: &str, symbol: &str) -> usize {
    let prefix = format!("const size_t {symbol} = ");
    let line = header
        .lines()
        .find(|l| l.starts_with(&prefix))
        .unwrap_or_else(|| panic!("{symbol} not found in:\n{header}"));
    line[prefix.len()..]
        .trim_end_matches(';')
        .parse()
        .expect("length constant")
}
