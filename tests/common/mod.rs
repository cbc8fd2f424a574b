//! Shared testing utilities for guacgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory per exercise.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp directory for tests") }
    }

    /// Directory the CLI runs in; the compose file lands here.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `guacgen` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("guacgen").expect("Failed to locate guacgen binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Path to the generated compose file.
    pub fn compose_path(&self) -> PathBuf {
        self.work_dir().join("docker-compose.yml")
    }

    /// Parse the generated compose file.
    pub fn read_compose(&self) -> serde_yaml::Value {
        let raw = fs::read_to_string(self.compose_path())
            .expect("docker-compose.yml should have been written");
        serde_yaml::from_str(&raw).expect("generated file should be valid YAML")
    }
}
