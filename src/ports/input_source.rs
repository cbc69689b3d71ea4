use crate::domain::AppError;

/// Source of operator answers. Decision logic never talks to the terminal directly.
pub trait InputSource {
    /// Read one line. Empty input yields `default` when one is given, else an empty string.
    fn prompt_line(&self, label: &str, default: Option<&str>) -> Result<String, AppError>;

    /// Read a secret without echoing it.
    fn prompt_secret(&self, label: &str) -> Result<String, AppError>;

    /// Ask a yes/no question.
    fn confirm(&self, label: &str, default: bool) -> Result<bool, AppError>;
}
