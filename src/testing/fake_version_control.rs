use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::VersionControl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Clone { url: String, path: PathBuf },
    FetchAll(PathBuf),
    ResetHard { path: PathBuf, reference: String },
}

/// Records calls; `clone_repo` materializes a checkout containing `.git/` plus the fixture files.
#[derive(Default)]
pub struct FakeVersionControl {
    pub calls: Mutex<Vec<VcsCall>>,
    pub fixture_files: Vec<(String, String)>,
    pub fail_with: Option<String>,
}

impl FakeVersionControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.fixture_files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn failing(message: &str) -> Self {
        Self { fail_with: Some(message.to_string()), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.lock().unwrap().clone()
    }

    fn check_failure(&self, command: &str) -> Result<(), AppError> {
        match &self.fail_with {
            Some(message) => Err(AppError::CommandFailed {
                command: command.to_string(),
                status: Some(128),
                output: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl VersionControl for FakeVersionControl {
    fn clone_repo(&self, url: &str, path: &Path) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push(VcsCall::Clone { url: url.to_string(), path: path.to_path_buf() });
        self.check_failure("git clone")?;

        fs::create_dir_all(path.join(".git"))?;
        for (relative, content) in &self.fixture_files {
            let file = path.join(relative);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(file, content)?;
        }
        Ok(())
    }

    fn fetch_all(&self, path: &Path) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(VcsCall::FetchAll(path.to_path_buf()));
        self.check_failure("git fetch --all")
    }

    fn reset_hard(&self, path: &Path, reference: &str) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(VcsCall::ResetHard {
            path: path.to_path_buf(),
            reference: reference.to_string(),
        });
        self.check_failure("git reset --hard")
    }
}
