use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::InputSource;

/// `InputSource` that replays canned answers and records every prompt label.
#[derive(Default)]
pub struct ScriptedInput {
    lines: Mutex<VecDeque<String>>,
    secrets: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(self, answers: &[&str]) -> Self {
        self.lines.lock().unwrap().extend(answers.iter().map(|a| a.to_string()));
        self
    }

    pub fn secrets(self, answers: &[&str]) -> Self {
        self.secrets.lock().unwrap().extend(answers.iter().map(|a| a.to_string()));
        self
    }

    pub fn confirms(self, answers: &[bool]) -> Self {
        self.confirms.lock().unwrap().extend(answers.iter().copied());
        self
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn exhausted(label: &str) -> AppError {
        AppError::Prompt(format!("{label}: no scripted answer left"))
    }
}

impl InputSource for ScriptedInput {
    fn prompt_line(&self, label: &str, default: Option<&str>) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(label.to_string());
        let answer = self.lines.lock().unwrap().pop_front().ok_or_else(|| Self::exhausted(label))?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn prompt_secret(&self, label: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(label.to_string());
        self.secrets.lock().unwrap().pop_front().ok_or_else(|| Self::exhausted(label))
    }

    fn confirm(&self, label: &str, _default: bool) -> Result<bool, AppError> {
        self.prompts.lock().unwrap().push(label.to_string());
        self.confirms.lock().unwrap().pop_front().ok_or_else(|| Self::exhausted(label))
    }
}
