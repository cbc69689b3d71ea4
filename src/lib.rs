//! nvr-provision: idempotent provisioning of the Docker-based NVR dashboard stack.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{
    AptPackageManager, DockerComposeAdapter, EditorCommand, GitCommandAdapter, TerminalInput,
};
use app::commands::provision as workflow;
use ports::{ContainerRuntime, FileEditor, InputSource, PackageManager, VersionControl};

pub use app::AppContext;
pub use app::commands::provision::{
    ActivationReport, ComposeOutcome, ComposeSource, EnvOutcome, EnvSource, ImageSource,
    ProvisionReport, SyncOutcome,
};
pub use domain::{AppError, ExecutionOutcome, ProvisionConfig, ProvisionError, PullStrategy, Stage};

/// Provision the stack using the host's `git`, Docker Compose, terminal, editor and `apt-get`.
///
/// `on_stage` is called as each stage begins.
pub fn provision(
    config: &ProvisionConfig,
    on_stage: impl FnMut(Stage),
) -> Result<ProvisionReport, ProvisionError> {
    let ctx = AppContext::new(
        GitCommandAdapter::new(),
        DockerComposeAdapter::detect(),
        TerminalInput::new(),
        EditorCommand::from_env(),
        AptPackageManager::detect(),
    );
    provision_with(&ctx, config, on_stage)
}

/// Provision the stack through caller-supplied collaborators.
pub fn provision_with<V, C, I, E, P>(
    ctx: &AppContext<V, C, I, E, P>,
    config: &ProvisionConfig,
    on_stage: impl FnMut(Stage),
) -> Result<ProvisionReport, ProvisionError>
where
    V: VersionControl,
    C: ContainerRuntime,
    I: InputSource,
    E: FileEditor,
    P: PackageManager,
{
    workflow::execute(ctx, config, on_stage)
}
