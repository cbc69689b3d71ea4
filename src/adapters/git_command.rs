use std::path::Path;

use super::command::ProcessCommand;
use crate::domain::AppError;
use crate::ports::VersionControl;

/// `VersionControl` backed by the `git` executable.
#[derive(Debug, Clone, Default)]
pub struct GitCommandAdapter;

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run_in(&self, path: &Path, args: &[&str]) -> Result<(), AppError> {
        ProcessCommand::new("git")
            .arg("-C")
            .arg(path.display().to_string())
            .args(args.iter().copied())
            .run_checked()?;
        Ok(())
    }
}

impl VersionControl for GitCommandAdapter {
    fn clone_repo(&self, url: &str, path: &Path) -> Result<(), AppError> {
        ProcessCommand::new("git")
            .args(["clone", url])
            .arg(path.display().to_string())
            .run_checked()?;
        Ok(())
    }

    fn fetch_all(&self, path: &Path) -> Result<(), AppError> {
        self.run_in(path, &["fetch", "--all", "--prune"])
    }

    fn reset_hard(&self, path: &Path, reference: &str) -> Result<(), AppError> {
        self.run_in(path, &["reset", "--hard", reference])
    }
}
