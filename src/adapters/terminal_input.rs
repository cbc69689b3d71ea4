use dialoguer::{Confirm, Error as DialoguerError, Input, Password};
use std::io::ErrorKind;

use crate::domain::AppError;
use crate::ports::InputSource;

/// `InputSource` reading from the controlling terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(label: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => {
            AppError::Prompt(format!("{label}: interrupted"))
        }
        other => AppError::Prompt(format!("{label}: {other}")),
    }
}

impl InputSource for TerminalInput {
    fn prompt_line(&self, label: &str, default: Option<&str>) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string()).show_default(true);
        }
        input.interact_text().map_err(|err| prompt_error(label, err))
    }

    fn prompt_secret(&self, label: &str) -> Result<String, AppError> {
        Password::new().with_prompt(label).interact().map_err(|err| prompt_error(label, err))
    }

    fn confirm(&self, label: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(label)
            .default(default)
            .interact()
            .map_err(|err| prompt_error(label, err))
    }
}
