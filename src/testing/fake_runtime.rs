use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::{AppError, ExecutionOutcome};
use crate::ports::ContainerRuntime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCall {
    Pull,
    Build,
    Up,
    Status,
    Login { registry: String, user: String },
}

/// Scriptable container runtime. Pull results are consumed in order; once exhausted pulls succeed.
#[derive(Default)]
pub struct FakeRuntime {
    pub calls: Mutex<Vec<RuntimeCall>>,
    pub pull_results: Mutex<VecDeque<bool>>,
    pub build_ok: bool,
    pub up_ok: bool,
    pub login_ok: bool,
    pub last_secret: Mutex<Option<String>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self { build_ok: true, up_ok: true, login_ok: true, ..Self::default() }
    }

    pub fn with_pulls(self, results: &[bool]) -> Self {
        *self.pull_results.lock().unwrap() = results.iter().copied().collect();
        self
    }

    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, wanted: &RuntimeCall) -> usize {
        self.calls().iter().filter(|call| *call == wanted).count()
    }

    pub fn login_count(&self) -> usize {
        self.calls().iter().filter(|call| matches!(call, RuntimeCall::Login { .. })).count()
    }

    fn record(&self, call: RuntimeCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn outcome(command: &str, ok: bool) -> ExecutionOutcome {
        ExecutionOutcome {
            command: command.to_string(),
            status: Some(if ok { 0 } else { 1 }),
            stdout: String::new(),
            stderr: if ok { String::new() } else { format!("{command}: denied") },
        }
    }
}

impl ContainerRuntime for FakeRuntime {
    fn pull_images(&self, _definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.record(RuntimeCall::Pull);
        let ok = self.pull_results.lock().unwrap().pop_front().unwrap_or(true);
        Ok(Self::outcome("docker compose pull", ok))
    }

    fn build_images(&self, _definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.record(RuntimeCall::Build);
        Ok(Self::outcome("docker compose build", self.build_ok))
    }

    fn up(&self, _definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.record(RuntimeCall::Up);
        Ok(Self::outcome("docker compose up -d", self.up_ok))
    }

    fn status(&self, _definition: &Path) -> Result<String, AppError> {
        self.record(RuntimeCall::Status);
        Ok("NAME  STATUS\nnvr-dashboard  running\n".to_string())
    }

    fn login(
        &self,
        registry: &str,
        user: &str,
        secret: &str,
    ) -> Result<ExecutionOutcome, AppError> {
        self.record(RuntimeCall::Login { registry: registry.to_string(), user: user.to_string() });
        *self.last_secret.lock().unwrap() = Some(secret.to_string());
        Ok(Self::outcome("docker login", self.login_ok))
    }
}
