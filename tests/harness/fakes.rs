//! Collaborator doubles for driving the public library API without Docker or a terminal.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use nvr_provision::ports::{ContainerRuntime, FileEditor, InputSource, PackageManager};
use nvr_provision::{AppError, ExecutionOutcome};

#[derive(Default)]
pub(crate) struct RecordingRuntime {
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) pull_results: Mutex<VecDeque<bool>>,
}

impl RecordingRuntime {
    pub(crate) fn new(pulls: &[bool]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pull_results: Mutex::new(pulls.iter().copied().collect()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &str, ok: bool) -> Result<ExecutionOutcome, AppError> {
        self.calls.lock().unwrap().push(name.to_string());
        Ok(ExecutionOutcome {
            command: format!("docker compose {name}"),
            status: Some(if ok { 0 } else { 1 }),
            stdout: String::new(),
            stderr: if ok { String::new() } else { "pull access denied".to_string() },
        })
    }
}

impl ContainerRuntime for RecordingRuntime {
    fn pull_images(&self, _definition: &Path) -> Result<ExecutionOutcome, AppError> {
        let ok = self.pull_results.lock().unwrap().pop_front().unwrap_or(true);
        self.record("pull", ok)
    }

    fn build_images(&self, _definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.record("build", true)
    }

    fn up(&self, _definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.record("up", true)
    }

    fn status(&self, _definition: &Path) -> Result<String, AppError> {
        self.calls.lock().unwrap().push("ps".to_string());
        Ok("nvr-dashboard   running\nstream-worker   running\n".to_string())
    }

    fn login(
        &self,
        _registry: &str,
        user: &str,
        _secret: &str,
    ) -> Result<ExecutionOutcome, AppError> {
        self.record(&format!("login {user}"), true)
    }
}

/// Answers in order; records every prompt label.
#[derive(Default)]
pub(crate) struct CannedInput {
    pub(crate) lines: Mutex<VecDeque<String>>,
    pub(crate) confirms: Mutex<VecDeque<bool>>,
    pub(crate) asked: Mutex<Vec<String>>,
}

impl CannedInput {
    pub(crate) fn new(lines: &[&str], confirms: &[bool]) -> Self {
        Self {
            lines: Mutex::new(lines.iter().map(|l| l.to_string()).collect()),
            confirms: Mutex::new(confirms.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn asked(&self) -> usize {
        self.asked.lock().unwrap().len()
    }
}

impl InputSource for CannedInput {
    fn prompt_line(&self, label: &str, default: Option<&str>) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(label.to_string());
        let answer = self.lines.lock().unwrap().pop_front().unwrap_or_default();
        Ok(match default {
            Some(default) if answer.is_empty() => default.to_string(),
            _ => answer,
        })
    }

    fn prompt_secret(&self, label: &str) -> Result<String, AppError> {
        self.asked.lock().unwrap().push(label.to_string());
        Ok("secret".to_string())
    }

    fn confirm(&self, label: &str, default: bool) -> Result<bool, AppError> {
        self.asked.lock().unwrap().push(label.to_string());
        Ok(self.confirms.lock().unwrap().pop_front().unwrap_or(default))
    }
}

pub(crate) struct NoEditor;

impl FileEditor for NoEditor {
    fn edit(&self, path: &Path) -> Result<(), AppError> {
        panic!("editor must not be opened for {}", path.display());
    }
}

pub(crate) struct NoPackages;

impl PackageManager for NoPackages {
    fn refresh_index(&self) -> Result<(), AppError> {
        panic!("package index must not be refreshed");
    }

    fn install_packages(&self, _names: &[String]) -> Result<(), AppError> {
        panic!("packages must not be installed");
    }
}
