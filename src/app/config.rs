//! Configuration resolution: defaults, then the optional TOML file, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::config::parse_file_config;
use crate::domain::{AppError, FileConfig, ProvisionConfig, PullStrategy};

pub const DEFAULT_TARGET_DIR: &str = "nvr-dashboard";

/// Values supplied on the command line. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub repo_url: Option<String>,
    pub target_dir: Option<PathBuf>,
    pub branch: Option<String>,
    pub non_interactive: bool,
    pub pull_strategy: Option<PullStrategy>,
    pub skip_build_fallback: bool,
    pub registry: Option<String>,
    pub settle_seconds: Option<u64>,
    pub review_env: bool,
    pub no_compose_synthesis: bool,
    pub install_prerequisites: bool,
    pub env: Vec<(String, String)>,
}

/// Load the file at `config_path` (if any) and layer `overrides` on top.
pub fn resolve(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<ProvisionConfig, AppError> {
    let file = match config_path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|err| {
                AppError::config_error(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    err
                ))
            })?;
            parse_file_config(&content)?
        }
        None => FileConfig::default(),
    };
    merge(file, overrides)
}

fn merge(file: FileConfig, overrides: ConfigOverrides) -> Result<ProvisionConfig, AppError> {
    let repo_url = overrides.repo_url.or(file.repo_url).ok_or_else(|| {
        AppError::config_error("--repo-url is required (or set repo_url in the config file)")
    })?;
    let target_dir = overrides
        .target_dir
        .or(file.target_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR));

    let mut config = ProvisionConfig::new(repo_url, target_dir);
    if let Some(branch) = overrides.branch.or(file.branch) {
        config.branch = branch;
    }
    if let Some(registry) = overrides.registry.or(file.registry) {
        config.registry = registry;
    }
    if let Some(strategy) = overrides.pull_strategy.or(file.pull_strategy) {
        config.pull_strategy = strategy;
    }
    if let Some(seconds) = overrides.settle_seconds.or(file.settle_seconds) {
        config.settle = Duration::from_secs(seconds);
    }
    if let Some(packages) = file.prerequisites {
        config.prerequisites = packages;
    }

    config.interactive = !overrides.non_interactive && file.interactive.unwrap_or(true);
    config.build_fallback = !overrides.skip_build_fallback && file.build_fallback.unwrap_or(true);
    config.review_env = overrides.review_env || file.review_env.unwrap_or(false);
    config.synthesize_compose =
        !overrides.no_compose_synthesis && file.synthesize_compose.unwrap_or(true);
    config.install_prerequisites = overrides.install_prerequisites;

    config.env_overrides = file.env;
    config.env_overrides.extend(overrides.env);

    config.validate()?;
    Ok(config)
}
