use super::AppError;

/// Exit status and captured diagnostics of a single external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionOutcome {
    /// Display form of the command line that produced this outcome.
    pub command: String,
    /// Exit code; `None` when the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Combined stdout/stderr text, stderr last since that is where tools report failures.
    pub fn diagnostics(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, true) => String::new(),
            (false, true) => stdout.to_string(),
            (true, false) => stderr.to_string(),
            (false, false) => format!("{stdout}\n{stderr}"),
        }
    }

    /// Convert a non-successful outcome into `AppError::CommandFailed`.
    pub fn into_result(self) -> Result<ExecutionOutcome, AppError> {
        if self.success() { Ok(self) } else { Err(self.into_error()) }
    }

    /// The `AppError::CommandFailed` describing this outcome, regardless of status.
    pub fn into_error(self) -> AppError {
        AppError::CommandFailed {
            output: self.diagnostics(),
            command: self.command,
            status: self.status,
        }
    }
}
