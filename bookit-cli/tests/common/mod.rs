//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for catalog setup and the lifecycle
//! - Timestamps relative to the wall clock

use assert_cmd::Command;
use chrono::{Duration, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into tests.
const BOOKIT_ENV_VARS: [&str; 8] = [
    "BOOKIT_DATA_DIR",
    "BOOKIT_BUSY_TIMEOUT",
    "BOOKIT_DISABLE_AUTOINIT",
    "BOOKIT_REJECT_PAST_DATES",
    "BOOKIT_DEFAULT_PAGE_SIZE",
    "BOOKIT_MAXIMUM_LOCK_WAIT_SECONDS",
    "BOOKIT_OUTPUT_FORMAT",
    "BOOKIT_LOG_MODE",
];

/// Test environment with isolated data directory.
///
/// Commands run with the temporary directory as their working directory
/// so no stray `bookit.yaml` is discovered.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the bookit data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; bookit creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("bookit-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("bookit").expect("Failed to find bookit binary");
        cmd.current_dir(&self.temp_path);
        for var in BOOKIT_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a user `config.yaml` into the data directory.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Run a command that prints a single id on stdout and return it.
    fn run_for_id(&self, mut cmd: Command) -> i64 {
        let output = cmd.output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Register an actor and return its id.
    pub fn add_actor(&self, name: &str) -> i64 {
        let mut cmd = self.command();
        cmd.args(["actor", "add", "--name", name]);
        self.run_for_id(cmd)
    }

    /// Register an available resource and return its id.
    pub fn add_resource(&self, owner: i64, name: &str) -> i64 {
        let mut cmd = self.command();
        cmd.args(["resource", "add", "--name", name])
            .arg("--owner")
            .arg(owner.to_string());
        self.run_for_id(cmd)
    }

    /// Create a reservation between two day offsets from now.
    ///
    /// Past-date rejection is switched off so fixtures can sit in the past.
    pub fn reserve(&self, resource: i64, requester: i64, start_days: i64, end_days: i64) -> i64 {
        let mut cmd = self.command();
        cmd.env("BOOKIT_REJECT_PAST_DATES", "false")
            .arg("reserve")
            .arg("--resource")
            .arg(resource.to_string())
            .arg("--requester")
            .arg(requester.to_string())
            .arg("--start")
            .arg(days_from_now(start_days))
            .arg("--end")
            .arg(days_from_now(end_days));
        self.run_for_id(cmd)
    }

    /// Approve a reservation as `owner`.
    pub fn approve(&self, reservation: i64, owner: i64) {
        self.command()
            .arg("approve")
            .arg("--reservation")
            .arg(reservation.to_string())
            .arg("--actor")
            .arg(owner.to_string())
            .assert()
            .success();
    }

    /// Run `list` with extra arguments and return stdout.
    pub fn list(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .arg("list")
            .args(args)
            .output()
            .expect("Failed to run list command");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner, requester and one resource registered through the CLI.
#[allow(dead_code)]
pub struct Catalog {
    pub owner: i64,
    pub requester: i64,
    pub stranger: i64,
    pub resource: i64,
}

#[allow(dead_code)]
impl Catalog {
    pub fn register(env: &TestEnv) -> Self {
        let owner = env.add_actor("olivia");
        let requester = env.add_actor("ravi");
        let stranger = env.add_actor("sam");
        let resource = env.add_resource(owner, "circular saw");
        Self {
            owner,
            requester,
            stranger,
            resource,
        }
    }
}

/// RFC 3339 timestamp `days` from now (may be negative).
#[allow(dead_code)]
pub fn days_from_now(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an id printed on its own line.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output
        .trim()
        .parse()
        .expect("Output is not a valid id")
}

/// Ids in the first column of table output, skipping the header.
#[allow(dead_code)]
pub fn table_ids(output: &str) -> Vec<i64> {
    output
        .lines()
        .skip(1)
        .map(|line| {
            line.split('\t')
                .next()
                .and_then(|id| id.parse().ok())
                .expect("Row does not start with an id")
        })
        .collect()
}
