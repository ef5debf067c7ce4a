//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for the command-line integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use app_lib::{run, AppError, Cli, Output};
use clap::Parser;
use tempfile::TempDir;

/// Test harness owning a scratch directory for config and log files.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness with an empty scratch directory.
    pub fn new() -> Self {
        TestHarness {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path of a file inside the scratch directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a JSON config file and return its path.
    pub fn write_config(&self, json: &str) -> PathBuf {
        let path = self.path("config.json");
        std::fs::write(&path, json).expect("write config");
        path
    }

    /// Run the CLI with the given arguments (without the program name).
    pub fn run(&self, args: &[&str]) -> Result<Output, AppError> {
        let argv = std::iter::once("calc").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("valid arguments");
        run(cli)
    }
}
