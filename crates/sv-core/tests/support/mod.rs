//! Shared helpers for stretch-version integration tests.
//!
//! External tools are faked as executable shell scripts in a temp
//! directory that becomes the child's entire PATH, so a test controls
//! every command the report invokes and can run hermetically on a
//! minimal environment.

#![allow(dead_code)]
// Test support intentionally provides more helpers than any single test uses.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Get a Command for the stretch-version binary.
pub fn stretch_version() -> Command {
    Command::cargo_bin("stretch-version").expect("stretch-version binary should exist")
}

/// A controlled environment for report runs: a fake tool directory used as
/// the child's PATH and a scratch home directory.
pub struct ReportEnv {
    pub bin_dir: TempDir,
    pub home_dir: TempDir,
}

impl ReportEnv {
    pub fn new() -> Self {
        Self {
            bin_dir: TempDir::new().expect("create fake bin dir"),
            home_dir: TempDir::new().expect("create fake home dir"),
        }
    }

    /// Install a fake tool as an executable shell script.
    #[cfg(unix)]
    pub fn install_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin_dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("make fake tool executable");
    }

    /// Create the ROS workspace checkout directory under the scratch home
    /// and return its canonical path.
    pub fn create_ros_checkout(&self) -> std::path::PathBuf {
        let dir = self.home_dir.path().join("catkin_ws/src/stretch_ros");
        fs::create_dir_all(&dir).expect("create ros checkout dir");
        fs::canonicalize(&dir).expect("canonicalize ros checkout dir")
    }

    /// Command wired to this environment: fake PATH, scratch HOME, no
    /// inherited log configuration.
    pub fn command(&self) -> Command {
        let mut cmd = stretch_version();
        cmd.env_clear()
            .env("PATH", self.bin_dir.path())
            .env("HOME", self.home_dir.path());
        cmd
    }
}
