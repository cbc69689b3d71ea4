use crate::domain::{AppError, ExecutionOutcome};
use std::path::Path;

/// Container runtime control plane driven through a compose definition.
///
/// Methods returning `ExecutionOutcome` report non-zero exits as data; `Err` is reserved for
/// failures to run the command at all.
pub trait ContainerRuntime {
    /// Pull every image referenced by the definition.
    fn pull_images(&self, definition: &Path) -> Result<ExecutionOutcome, AppError>;

    /// Build every service that declares a build context.
    fn build_images(&self, definition: &Path) -> Result<ExecutionOutcome, AppError>;

    /// Start all services detached.
    fn up(&self, definition: &Path) -> Result<ExecutionOutcome, AppError>;

    /// Human-readable service status table.
    fn status(&self, definition: &Path) -> Result<String, AppError>;

    /// Authenticate against `registry`. The secret must not be echoed or placed on a command line.
    fn login(&self, registry: &str, user: &str, secret: &str)
    -> Result<ExecutionOutcome, AppError>;

    /// Command an operator can run to follow the stack's logs.
    fn logs_command(&self, definition: &Path) -> String {
        format!("docker compose -f {} logs -f", definition.display())
    }
}
