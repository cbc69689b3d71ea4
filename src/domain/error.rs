use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::Stage;

/// Library-wide error type for provisioning operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or argument issue.
    #[error("{0}")]
    Configuration(String),

    /// External command exited unsuccessfully or could not be spawned.
    #[error("'{command}' failed ({}){}", describe_status(.status), describe_output(.output))]
    CommandFailed { command: String, status: Option<i32>, output: String },

    /// Package manager refused to refresh or install.
    #[error("Package installation failed: {0}")]
    PackageInstall(Box<AppError>),

    /// A required value was not supplied and prompting is disabled.
    #[error("Missing required value for {key}: pass --set {key}=<value> or run interactively")]
    MissingValue { key: String },

    /// No compose definition could be found or synthesized.
    #[error(
        "No compose definition found (searched: {}). Create one manually, \
         e.g. `cp docker-compose.example.yml docker-compose.yml`",
        .searched.join(", ")
    )]
    ComposeNotFound { searched: Vec<String> },

    /// Another provisioning run holds the lock for this target directory.
    #[error(
        "Another provisioning run holds {}; remove it if no other run is active",
        .path.display()
    )]
    Locked { path: PathBuf },

    /// Terminal prompt failed or was interrupted.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Closest `io::ErrorKind` for this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::MissingValue { .. } | AppError::TomlParse(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::ComposeNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Locked { .. } => io::ErrorKind::AlreadyExists,
            AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::CommandFailed { .. } | AppError::PackageInstall(_) => io::ErrorKind::Other,
        }
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {code}"),
        None => "terminated without exit status".to_string(),
    }
}

fn describe_output(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() { String::new() } else { format!(":\n{trimmed}") }
}

/// A failure tagged with the provisioning stage that produced it.
#[derive(Debug, Error)]
#[error("[{stage}] {source}")]
pub struct ProvisionError {
    pub stage: Stage,
    #[source]
    pub source: AppError,
}

impl ProvisionError {
    pub fn new(stage: Stage, source: AppError) -> Self {
        Self { stage, source }
    }
}

/// Attach a stage to any `AppError` result.
pub trait StageResultExt<T> {
    fn in_stage(self, stage: Stage) -> Result<T, ProvisionError>;
}

impl<T> StageResultExt<T> for Result<T, AppError> {
    fn in_stage(self, stage: Stage) -> Result<T, ProvisionError> {
        self.map_err(|source| ProvisionError::new(stage, source))
    }
}
