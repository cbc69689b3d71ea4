use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::FileEditor;

const FALLBACK_EDITOR: &str = "nano";

/// `FileEditor` that launches `$VISUAL`, `$EDITOR`, or `nano` attached to the terminal.
#[derive(Debug, Clone)]
pub struct EditorCommand {
    command_line: String,
}

impl EditorCommand {
    pub fn new(command_line: impl Into<String>) -> Self {
        Self { command_line: command_line.into() }
    }

    pub fn from_env() -> Self {
        let command_line = ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string());
        Self::new(command_line)
    }
}

impl FileEditor for EditorCommand {
    fn edit(&self, path: &Path) -> Result<(), AppError> {
        let mut parts = self.command_line.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| AppError::config_error("Editor command is empty"))?;

        let status = Command::new(program).args(parts).arg(path).status().map_err(|err| {
            AppError::CommandFailed {
                command: format!("{} {}", self.command_line, path.display()),
                status: None,
                output: format!("failed to start: {err}"),
            }
        })?;

        if !status.success() {
            return Err(AppError::CommandFailed {
                command: format!("{} {}", self.command_line, path.display()),
                status: status.code(),
                output: String::new(),
            });
        }
        Ok(())
    }
}
