//! Test environment builder for isolated devmon testing.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running a devmon CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment: a temp directory holding the data file,
/// event log, and working directory for each invocation.
pub struct TestEnv {
    pub dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_devmon")),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("devices.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.dir.path().join("events.log")
    }

    /// Run devmon with the environment pinned to this temp directory.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], extra: &[(&str, &str)]) -> TestResult {
        let data_file = self.data_file();
        let log_file = self.log_file();
        let mut env_vars: Vec<(&str, &str)> = vec![
            ("DEVMON_DATA_FILE", data_file.to_str().unwrap()),
            ("DEVMON_BACKUP", "false"),
            ("DEVMON_LOG_FILE", log_file.to_str().unwrap()),
        ];
        env_vars.extend_from_slice(extra);
        self.run_raw(args, &env_vars)
    }

    /// Run without the default `DEVMON_*` overrides, for tests that
    /// exercise configuration resolution itself.
    pub fn run_raw(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut command = Command::new(&self.bin);
        command
            .args(args)
            .current_dir(self.dir.path())
            .stdin(Stdio::null());
        for key in ["DEVMON_DATA_FILE", "DEVMON_BACKUP", "DEVMON_LOG_FILE"] {
            command.env_remove(key);
        }
        for (key, value) in env_vars {
            command.env(key, value);
        }

        let output = command.output().expect("failed to run devmon binary");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Parse the persisted device file as JSON.
    pub fn read_devices(&self) -> serde_json::Value {
        let content =
            std::fs::read_to_string(self.data_file()).expect("device file should exist");
        serde_json::from_str(&content).expect("device file should be valid JSON")
    }

    /// Persisted device IDs, in file order.
    pub fn persisted_ids(&self) -> Vec<String> {
        self.read_devices()
            .as_array()
            .expect("device file should hold an array")
            .iter()
            .map(|d| d["Id"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    /// Seed the inventory through the CLI; panics if an add is rejected.
    pub fn seed(&self, devices: &[(&str, &str, &str)]) {
        for (id, name, ip) in devices {
            let result = self.run(&["add", "--id", id, "--name", name, "--ip", ip]);
            assert!(
                result.success,
                "seeding {id} failed:\n{}",
                result.combined_output()
            );
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
