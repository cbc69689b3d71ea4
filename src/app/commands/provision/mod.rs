//! Provisioning workflow: prerequisites, repository sync, environment file, compose
//! definition, and stack activation, run strictly in that order.

pub mod activation;
pub mod compose;
pub mod environment;
pub mod prerequisites;
pub mod repository_sync;

use crate::app::AppContext;
use crate::app::lock::ProvisionLock;
use crate::domain::{ProvisionConfig, ProvisionError, Stage, StageResultExt};
use crate::ports::{ContainerRuntime, FileEditor, InputSource, PackageManager, VersionControl};

pub use activation::{ActivationReport, ImageSource};
pub use compose::{ComposeOutcome, ComposeSource};
pub use environment::{EnvOutcome, EnvSource};
pub use prerequisites::PrerequisitesOutcome;
pub use repository_sync::SyncOutcome;

/// Everything a completed run did, stage by stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionReport {
    pub prerequisites: Option<PrerequisitesOutcome>,
    pub sync: SyncOutcome,
    pub environment: EnvOutcome,
    pub compose: ComposeOutcome,
    pub activation: ActivationReport,
}

/// Run every stage against `config.target_dir`.
///
/// `on_stage` is invoked as each stage begins. The first failing stage aborts the run and is
/// named in the returned error.
pub fn execute<V, C, I, E, P>(
    ctx: &AppContext<V, C, I, E, P>,
    config: &ProvisionConfig,
    mut on_stage: impl FnMut(Stage),
) -> Result<ProvisionReport, ProvisionError>
where
    V: VersionControl,
    C: ContainerRuntime,
    I: InputSource,
    E: FileEditor,
    P: PackageManager,
{
    on_stage(Stage::Preflight);
    config.validate().in_stage(Stage::Preflight)?;
    let _lock = ProvisionLock::acquire(&config.target_dir).in_stage(Stage::Preflight)?;

    let prerequisites = if config.install_prerequisites {
        on_stage(Stage::Prerequisites);
        Some(prerequisites::install(ctx.packages(), config).in_stage(Stage::Prerequisites)?)
    } else {
        None
    };

    on_stage(Stage::RepositorySync);
    let sync = repository_sync::sync(ctx.vcs(), config).in_stage(Stage::RepositorySync)?;
    let root = config.target_dir.as_path();

    on_stage(Stage::EnvironmentResolver);
    let environment = environment::resolve(ctx.input(), ctx.editor(), config, root)
        .in_stage(Stage::EnvironmentResolver)?;

    on_stage(Stage::ComposeLocator);
    let compose =
        compose::locate(root, config.synthesize_compose).in_stage(Stage::ComposeLocator)?;

    on_stage(Stage::StackActivator);
    let activation =
        activation::activate(ctx.runtime(), ctx.input(), config, &compose.path, root)
            .in_stage(Stage::StackActivator)?;

    Ok(ProvisionReport { prerequisites, sync, environment, compose, activation })
}
