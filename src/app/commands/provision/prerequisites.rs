use crate::domain::{AppError, ProvisionConfig};
use crate::ports::PackageManager;

/// Packages installed by the prerequisites stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisitesOutcome {
    pub packages: Vec<String>,
}

/// Refresh the package index and install the configured host packages.
pub fn install<P: PackageManager>(
    packages: &P,
    config: &ProvisionConfig,
) -> Result<PrerequisitesOutcome, AppError> {
    packages.refresh_index()?;
    packages.install_packages(&config.prerequisites)?;
    tracing::info!(packages = ?config.prerequisites, "host prerequisites installed");
    Ok(PrerequisitesOutcome { packages: config.prerequisites.clone() })
}
