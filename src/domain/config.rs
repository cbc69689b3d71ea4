//! Provisioning configuration threaded through every stage.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use super::AppError;

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_REGISTRY: &str = "ghcr.io";
pub const DEFAULT_SETTLE_SECONDS: u64 = 5;
pub const DEFAULT_PREREQUISITES: [&str; 5] =
    ["git", "curl", "ca-certificates", "docker.io", "docker-compose-v2"];

/// How container images are resolved before the stack is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PullStrategy {
    /// Pull from the registry, retry after login, fall back to a local build.
    #[default]
    Pull,
    /// Always build from local build contexts.
    Build,
}

/// Fully resolved configuration for a provisioning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub repo_url: String,
    pub target_dir: PathBuf,
    pub branch: String,
    pub interactive: bool,
    pub pull_strategy: PullStrategy,
    pub build_fallback: bool,
    pub registry: String,
    pub settle: Duration,
    pub review_env: bool,
    /// Write a minimal compose definition when the checkout ships none.
    pub synthesize_compose: bool,
    pub install_prerequisites: bool,
    pub prerequisites: Vec<String>,
    /// Values that pre-answer `.env` prompts, keyed by variable name.
    pub env_overrides: BTreeMap<String, String>,
}

impl ProvisionConfig {
    pub fn new(repo_url: impl Into<String>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_url: repo_url.into(),
            target_dir: target_dir.into(),
            branch: DEFAULT_BRANCH.to_string(),
            interactive: true,
            pull_strategy: PullStrategy::default(),
            build_fallback: true,
            registry: DEFAULT_REGISTRY.to_string(),
            settle: Duration::from_secs(DEFAULT_SETTLE_SECONDS),
            review_env: false,
            synthesize_compose: true,
            install_prerequisites: false,
            prerequisites: DEFAULT_PREREQUISITES.iter().map(|name| name.to_string()).collect(),
            env_overrides: BTreeMap::new(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.repo_url.trim().is_empty() {
            return Err(AppError::config_error("Repository URL must not be empty"));
        }
        if self.target_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("Target directory must not be empty"));
        }
        if self.branch.trim().is_empty() {
            return Err(AppError::config_error("Branch must not be empty"));
        }
        if self.registry.trim().is_empty() {
            return Err(AppError::config_error("Registry must not be empty"));
        }
        Ok(())
    }

    /// Upstream ref the checkout is reset to on update.
    pub fn remote_ref(&self) -> String {
        format!("origin/{}", self.branch)
    }
}

/// Optional on-disk configuration (`--config <path>`). Every field may be overridden by flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub repo_url: Option<String>,
    pub target_dir: Option<PathBuf>,
    pub branch: Option<String>,
    pub interactive: Option<bool>,
    pub pull_strategy: Option<PullStrategy>,
    pub build_fallback: Option<bool>,
    pub registry: Option<String>,
    pub settle_seconds: Option<u64>,
    pub review_env: Option<bool>,
    pub synthesize_compose: Option<bool>,
    pub prerequisites: Option<Vec<String>>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// Pure parse of a configuration file's TOML content.
pub fn parse_file_config(content: &str) -> Result<FileConfig, AppError> {
    let config: FileConfig = toml::from_str(content)?;
    Ok(config)
}
