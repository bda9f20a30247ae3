//! Test environment builder for isolated store-matrix runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{GROUPS_YML, STORES_YML};

/// Variables that would leak CI or user state into a run.
const SCRUBBED_ENV: &[&str] = &[
    "GITHUB_OUTPUT",
    "GITHUB_ACTIONS",
    "STORE_MATRIX_STORES",
    "STORE_MATRIX_GROUPS",
    "RUST_LOG",
];

/// Result of running the store-matrix binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Temp project directory holding `config/stores.yml` and `config/groups.yml`.
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project without config documents
    pub fn empty() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_store-matrix")),
        }
    }

    /// Project with the default fixture documents
    pub fn with_fixtures() -> Self {
        Self::with_documents(STORES_YML, GROUPS_YML)
    }

    pub fn with_documents(stores: &str, groups: &str) -> Self {
        let env = Self::empty();
        env.write_file("config/stores.yml", stores);
        env.write_file("config/groups.yml", groups);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Run without an output file (console fallback mode)
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with `GITHUB_OUTPUT` pointing at `relative` inside the project
    pub fn run_with_output(&self, relative: &str, args: &[&str]) -> TestResult {
        let output = self.path(relative);
        self.run_with_env(args, &[("GITHUB_OUTPUT", output.to_str().unwrap())])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env("LC_ALL", "en_US.UTF-8")
            .env("TERM", "xterm-256color");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute store-matrix"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
