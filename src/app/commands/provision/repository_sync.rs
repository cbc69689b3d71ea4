use crate::domain::{AppError, ProvisionConfig};
use crate::ports::VersionControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Fresh clone into an absent target.
    Cloned,
    /// Existing checkout fetched and hard-reset to the remote branch tip.
    Updated,
}

/// Guarantee the target directory holds a checkout at the latest upstream revision.
///
/// An existing checkout is force-reset, discarding local modifications. Any version control
/// failure is returned as-is and aborts the run.
pub fn sync<V: VersionControl>(vcs: &V, config: &ProvisionConfig) -> Result<SyncOutcome, AppError> {
    let target = &config.target_dir;

    if target.join(".git").exists() {
        tracing::info!(path = %target.display(), "checkout present, updating");
        vcs.fetch_all(target)?;
        vcs.reset_hard(target, &config.remote_ref())?;
        return Ok(SyncOutcome::Updated);
    }

    tracing::info!(url = %config.repo_url, path = %target.display(), "cloning repository");
    vcs.clone_repo(&config.repo_url, target)?;
    Ok(SyncOutcome::Cloned)
}
