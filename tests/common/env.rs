//! Isolated environment for running the `kidari` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Variables that would leak the developer's setup into a test run
const SCRUBBED_ENV: &[&str] = &[
    "KIDARI_MIN_SESSION_MINUTES",
    "KIDARI_MIN_CONSECUTIVE_MINUTES",
    "KIDARI_COLOR",
    "RUST_LOG",
    "NO_COLOR",
    "CI",
    "GITHUB_ACTIONS",
];

/// Result of running a Kidari CLI command
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

    /// Parsed NDJSON lines of stdout
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not NDJSON ({e}): {l}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Temp project directory (the cwd) and temp user config directory.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            config_dir: tempfile::tempdir().expect("config tempdir"),
        }
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_root.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Write the user-level config (`<config dir>/kidari/config.toml`).
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self.config_dir.path().join("kidari").join("config.toml");
        std::fs::create_dir_all(path.parent().expect("config parent")).expect("create config dir");
        std::fs::write(&path, content).expect("write user config");
        path
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.project_root.path());
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().expect("run kidari"))
    }

    fn command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_kidari"));
        cmd.current_dir(cwd)
            .env("KIDARI_CONFIG_DIR", self.config_dir.path());
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        cmd
    }
}
