//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the linelog binary inside a scratch
//! project directory and inspecting the log files it writes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR does not point at the target directory in use.
/// Builds the binary once if no built copy is found.
fn binary_path(name: &str) -> PathBuf {
    if let Some(path) = find_binary(name) {
        return path;
    }
    BUILT.get_or_init(build_cli);
    find_binary(name)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("target/debug").join(name))
}

fn find_binary(name: &str) -> Option<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return Some(llvm_cov_path);
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return Some(standard);
    }

    // The test binary lives at target/debug/deps/specs-<hash>, so its
    // grandparent is target/debug/ where linelog is built.
    let exe = std::env::current_exe().ok()?;
    let fallback = exe.parent()?.parent()?.join(name);
    fallback.exists().then_some(fallback)
}

static BUILT: OnceLock<()> = OnceLock::new();

/// `cargo test` only builds the bin for packages with integration tests,
/// and the CLI package has none.
fn build_cli() {
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let status = Command::new(cargo)
        .args(["build", "-p", "linelog-cli", "--bin", "linelog"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .status()
        .expect("cargo build should run");
    assert!(status.success(), "building the linelog binary failed");
}

fn linelog_binary() -> PathBuf {
    binary_path("linelog")
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Feed text to the process's stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    fn output(self) -> Output {
        let mut cmd = Command::new(linelog_binary());
        cmd.args(&self.args);

        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }

        // Keep the parent's config out of the run.
        cmd.env_remove("LINELOG_SERVICE_NAME");
        cmd.env_remove("LINELOG_LOG_DIR");
        cmd.env_remove("LINELOG_LOG_LEVEL");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = cmd.spawn().expect("command should run");
        {
            let mut stdin = child.stdin.take().expect("stdin is piped");
            if let Some(input) = &self.stdin {
                stdin.write_all(input.as_bytes()).unwrap();
            }
        }
        child.wait_with_output().expect("command should finish")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }
}

/// Scratch project directory; the linelog binary runs with it as cwd.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// A CLI builder running inside this project
    pub fn linelog(&self) -> CliBuilder {
        CliBuilder::new().pwd(self.path())
    }

    /// File names in a log directory, sorted
    pub fn log_files(&self, log_dir: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path().join(log_dir))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Content of the only log file in `log_dir`
    pub fn only_log(&self, log_dir: &str) -> String {
        let files = self.log_files(log_dir);
        assert_eq!(files.len(), 1, "expected exactly one log file, got {:?}", files);
        std::fs::read_to_string(self.path().join(log_dir).join(&files[0])).unwrap()
    }
}

/// Assert a `YYYY-MM-DD HH:mm:ss` timestamp.
pub fn assert_timestamp(field: &str) {
    let ok = field.len() == 19
        && field.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            10 => c == ' ',
            13 | 16 => c == ':',
            _ => c.is_ascii_digit(),
        });
    assert!(ok, "not a YYYY-MM-DD HH:mm:ss timestamp: {:?}", field);
}

/// Assert a `YYYY-MM-DD.log` file name.
pub fn assert_daily_file_name(name: &str) {
    let ok = name.len() == 14
        && name.ends_with(".log")
        && name[..10].char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    assert!(ok, "not a YYYY-MM-DD.log file name: {:?}", name);
}
