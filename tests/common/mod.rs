// tests/common/mod.rs
//! Shared helpers for the binary tests.

use std::{fs, path::Path};

use assert_cmd::Command;
use tempfile::TempDir;

/// Temporary directory tree populated with files of exact sizes.
pub struct Tree {
    dir: TempDir,
}

#[allow(dead_code)]
impl Tree {
    pub fn new() -> Self {
        Self { dir: TempDir::new().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(self, rel: &str, len: usize) -> Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
        }
        fs::write(&path, vec![b'%'; len]).unwrap_or_else(|e| panic!("Failed to write {:?}: {}", path, e));
        self
    }

    /// The binary pointed at this tree.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pdf_sizes").expect("binary is built");
        cmd.arg("--root").arg(self.path()).env_remove("PDF_SIZES_LOG");
        cmd
    }

    /// Runs with extra args and returns stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("utf-8 stdout")
    }
}

/// Last whitespace-separated field of each line (the path in long output).
#[allow(dead_code)]
pub fn paths(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(|line| line.split_whitespace().last().unwrap_or_default().to_string())
        .collect()
}
