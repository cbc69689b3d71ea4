use std::path::Path;

use super::command::ProcessCommand;
use crate::domain::{AppError, ExecutionOutcome};
use crate::ports::ContainerRuntime;

/// `ContainerRuntime` backed by the Docker Compose CLI.
#[derive(Debug, Clone)]
pub struct DockerComposeAdapter {
    program: String,
    base_args: Vec<String>,
}

impl DockerComposeAdapter {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self { program: program.into(), base_args }
    }

    /// Prefer the `docker compose` plugin; fall back to the standalone `docker-compose` binary.
    pub fn detect() -> Self {
        let plugin = ProcessCommand::new("docker").args(["compose", "version"]).run();
        if plugin.map(|outcome| outcome.success()).unwrap_or(false) {
            Self::new("docker", vec!["compose".to_string()])
        } else {
            tracing::debug!("docker compose plugin unavailable, using docker-compose");
            Self::new("docker-compose", Vec::new())
        }
    }

    fn compose_display(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.base_args.iter().cloned());
        parts.join(" ")
    }

    /// Compose invocation run from the definition's directory, so `-f` names the file only and
    /// relative build contexts resolve against the checkout.
    fn compose<'a>(&'a self, definition: &'a Path, args: &[&str]) -> ProcessCommand<'a> {
        let parent = definition.parent().filter(|dir| !dir.as_os_str().is_empty());
        let file = match (parent, definition.file_name()) {
            (Some(_), Some(name)) => Path::new(name),
            _ => definition,
        };
        let mut command = ProcessCommand::new(&self.program)
            .args(self.base_args.iter().cloned())
            .arg("-f")
            .arg(file.display().to_string())
            .args(args.iter().copied());
        if let Some(dir) = parent {
            command = command.current_dir(dir);
        }
        command
    }
}

impl ContainerRuntime for DockerComposeAdapter {
    fn pull_images(&self, definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.compose(definition, &["pull"]).run()
    }

    fn build_images(&self, definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.compose(definition, &["build"]).run()
    }

    fn up(&self, definition: &Path) -> Result<ExecutionOutcome, AppError> {
        self.compose(definition, &["up", "-d"]).run()
    }

    fn status(&self, definition: &Path) -> Result<String, AppError> {
        let outcome = self.compose(definition, &["ps"]).run_checked()?;
        Ok(outcome.stdout)
    }

    fn login(
        &self,
        registry: &str,
        user: &str,
        secret: &str,
    ) -> Result<ExecutionOutcome, AppError> {
        ProcessCommand::new("docker")
            .args(["login", registry, "-u", user, "--password-stdin"])
            .stdin(secret)
            .run()
    }

    fn logs_command(&self, definition: &Path) -> String {
        format!("{} -f {} logs -f", self.compose_display(), definition.display())
    }
}
