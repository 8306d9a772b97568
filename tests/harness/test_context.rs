//! Shared testing harness for `aoc-scaffold` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fixtures::{TEMPLATE, TEMPLATE_MAIN, TEMPLATE_MANIFEST};

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Create a new environment that already contains `aoc_template/`.
    pub(crate) fn with_template() -> Self {
        let ctx = Self::new();
        ctx.write_file(&format!("{}/Cargo.toml", TEMPLATE), TEMPLATE_MANIFEST);
        ctx.write_file(&format!("{}/src/main.rs", TEMPLATE), TEMPLATE_MAIN);
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `aoc-scaffold` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("aoc-scaffold").expect("Failed to locate aoc-scaffold binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path());
        cmd
    }

    /// Run `aoc-scaffold setup <day>` and assert success.
    pub(crate) fn setup(&self, day: &str) {
        self.cli().args(["setup", day]).assert().success();
    }

    /// Write a file relative to the work directory, creating parents.
    pub(crate) fn write_file(&self, rel: &str, content: &str) {
        let path = self.work_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read_file(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e))
    }

    /// Sorted relative paths of every file and directory below `rel`.
    pub(crate) fn tree(&self, rel: &str) -> Vec<String> {
        let base = self.work_dir.join(rel);
        let mut entries = Vec::new();
        collect(&base, &base, &mut entries);
        entries.sort();
        entries
    }

    /// Sorted names of the top-level entries in the work directory.
    pub(crate) fn top_level(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.work_dir)
            .expect("Failed to read work directory")
            .map(|entry| entry.expect("dir entry").file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

fn collect(base: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("dir entry").path();
        let rel = path.strip_prefix(base).expect("path under base");
        out.push(rel.to_string_lossy().replace('\\', "/"));
        if path.is_dir() {
            collect(base, &path, out);
        }
    }
}
