//! Blocking process execution shared by every command-backed adapter.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::{AppError, ExecutionOutcome};

/// One external command invocation, captured into an `ExecutionOutcome`.
#[derive(Debug, Clone)]
pub struct ProcessCommand<'a> {
    program: &'a str,
    args: Vec<String>,
    cwd: Option<&'a Path>,
    stdin: Option<&'a str>,
    envs: Vec<(&'a str, &'a str)>,
}

impl<'a> ProcessCommand<'a> {
    pub fn new(program: &'a str) -> Self {
        Self { program, args: Vec::new(), cwd: None, stdin: None, envs: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, cwd: &'a Path) -> Self {
        self.cwd = Some(cwd);
        self
    }

    /// Feed `input` on stdin. The text is never included in `display()`.
    pub fn stdin(mut self, input: &'a str) -> Self {
        self.stdin = Some(input);
        self
    }

    pub fn env(mut self, key: &'a str, value: &'a str) -> Self {
        self.envs.push((key, value));
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd
    }

    pub fn display(&self) -> String {
        let mut parts = vec![self.program.to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Run to completion. Non-zero exits are returned as data; only spawn/wait failures error.
    pub fn run(&self) -> Result<ExecutionOutcome, AppError> {
        let command_line = self.display();
        tracing::debug!(command = %command_line, cwd = ?self.cwd, "running external command");

        let mut command = Command::new(self.program);
        command.args(&self.args);
        if let Some(cwd) = self.cwd {
            command.current_dir(cwd);
        }
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        command
            .stdin(if self.stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let spawn_error = |err: std::io::Error| AppError::CommandFailed {
            command: command_line.clone(),
            status: None,
            output: format!("failed to start: {err}"),
        };

        let mut child = command.spawn().map_err(spawn_error)?;
        if let Some(input) = self.stdin
            && let Some(mut pipe) = child.stdin.take()
        {
            pipe.write_all(input.as_bytes()).map_err(spawn_error)?;
        }
        let output = child.wait_with_output().map_err(spawn_error)?;

        let outcome = ExecutionOutcome {
            command: command_line,
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        tracing::debug!(command = %outcome.command, status = ?outcome.status, "command finished");
        Ok(outcome)
    }

    /// Run and convert a non-zero exit into `AppError::CommandFailed`.
    pub fn run_checked(&self) -> Result<ExecutionOutcome, AppError> {
        self.run()?.into_result()
    }
}
