//! Shared testing harness for `nvr-provision` integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository;

/// Isolated environment: a fixture upstream repository and a target directory next to it.
pub(crate) struct TestContext {
    root: TempDir,
    upstream: PathBuf,
}

impl TestContext {
    /// Create an environment whose upstream repository holds only a README.
    pub(crate) fn new() -> Self {
        Self::with_upstream_files(&[])
    }

    /// Create an environment whose upstream repository also holds `files`.
    pub(crate) fn with_upstream_files(files: &[(&str, &str)]) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let upstream = root.path().join("upstream");
        git_repository::init_fixture_repo(&upstream, files);
        Self { root, upstream }
    }

    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path of the fixture upstream repository, usable as a clone URL.
    pub(crate) fn upstream(&self) -> &Path {
        &self.upstream
    }

    pub(crate) fn repo_url(&self) -> String {
        self.upstream.display().to_string()
    }

    /// Directory the provisioner clones into.
    pub(crate) fn target_dir(&self) -> PathBuf {
        self.root.path().join("nvr-dashboard")
    }

    /// Build a command for the compiled `nvr-provision` binary with no terminal attached.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nvr-provision").expect("Failed to locate binary");
        cmd.current_dir(self.root.path())
            .env("HOME", self.home())
            .env_remove("RUST_LOG")
            .write_stdin("");
        cmd
    }

    /// `cli()` preloaded with the fixture URL and target directory.
    pub(crate) fn provision_cli(&self) -> Command {
        let mut cmd = self.cli();
        cmd.arg("--repo-url").arg(self.repo_url()).arg("--target-dir").arg(self.target_dir());
        cmd
    }
}
