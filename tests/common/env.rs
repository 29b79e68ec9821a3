//! Test environment builder for isolated stacksort testing.
//!
//! Provides `TestEnv` - a temp directory holding a stack tree, plus helpers
//! to run the stacksort binary against it with a clean environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{BACKEND_S3, MODULE_MAIN};

/// Variables the binary reads; cleared so the host CI cannot leak in.
const INPUT_VARS: &[&str] = &[
    "STACKS_ROOT",
    "CHANGED_FILES",
    "STACK_SELECTION",
    "IGNORE_PATTERNS",
    "CORE_PATTERNS",
    "OVERRIDE_CORE_PATTERNS",
    "STACK_VALIDATOR",
    "GITHUB_OUTPUT",
    "GITHUB_ACTIONS",
    "STACKSORT_LOG",
];

/// Result of running a stacksort command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Decode the JSON array printed for `key` in `key=value` output
    pub fn output_list(&self, key: &str) -> Vec<String> {
        parse_output_list(&self.stdout, key)
    }

    /// Output keys in the order they were printed
    pub fn output_keys(&self) -> Vec<String> {
        self.stdout
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, _)| key.to_string())
            .collect()
    }
}

/// Decode the JSON array for `key` from `key=value` lines
pub fn parse_output_list(content: &str, key: &str) -> Vec<String> {
    let prefix = format!("{}=", key);
    let line = content
        .lines()
        .find(|line| line.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no '{}' line in output:\n{}", key, content));
    serde_json::from_str(&line[prefix.len()..])
        .unwrap_or_else(|e| panic!("'{}' is not a JSON string array: {}", line, e))
}

/// Isolated stack tree with CLI helpers
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Path relative to the stacks root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file under the root, creating parents
    pub fn write_file(&self, relative: &str, content: &str) {
        write_file(self.root.path(), relative, content);
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run stacksort from the root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run stacksort from the root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    /// Run stacksort from a specific directory with extra env vars
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);

        for var in INPUT_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute stacksort");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(root: &Path, relative: &str, content: &str) {
    let full_path = root.join(relative);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(&full_path, content).expect("Failed to write file");
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
}

impl TestEnvBuilder {
    /// Add a deployable stack (a `backend.tf` with an S3 backend)
    pub fn with_stack(self, dir: &str) -> Self {
        self.with_file(&format!("{}/backend.tf", dir), BACKEND_S3)
    }

    pub fn with_stacks(self, dirs: &[&str]) -> Self {
        dirs.iter().fold(self, |builder, dir| builder.with_stack(dir))
    }

    /// Add a Terraform directory without a backend
    pub fn with_module(self, dir: &str) -> Self {
        self.with_file(&format!("{}/main.tf", dir), MODULE_MAIN)
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn with_dir(mut self, relative: &str) -> Self {
        self.dirs.push(relative.to_string());
        self
    }

    /// Write `.stacksort.toml` at the root
    pub fn with_config(self, toml: &str) -> Self {
        self.with_file(".stacksort.toml", toml)
    }

    pub fn build(self) -> TestEnv {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        for (relative, content) in &self.files {
            write_file(root.path(), relative, content);
        }
        for dir in &self.dirs {
            std::fs::create_dir_all(root.path().join(dir)).expect("Failed to create directory");
        }
        TestEnv {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_stacksort")),
        }
    }
}
