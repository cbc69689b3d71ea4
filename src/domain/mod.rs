pub mod compose;
pub mod config;
pub mod environment;
pub mod error;
pub mod outcome;
pub mod stage;

pub use config::{FileConfig, ProvisionConfig, PullStrategy};
pub use environment::EnvKey;
pub use error::{AppError, ProvisionError, StageResultExt};
pub use outcome::ExecutionOutcome;
pub use stage::Stage;
