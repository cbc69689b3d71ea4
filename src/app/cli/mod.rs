//! CLI Adapter.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::app::commands::provision::{
    ComposeSource, EnvSource, ImageSource, ProvisionReport, SyncOutcome,
};
use crate::app::config::{self, ConfigOverrides};
use crate::domain::environment::parse_override;
use crate::domain::{PullStrategy, Stage};

#[derive(Parser)]
#[command(name = "nvr-provision")]
#[command(version)]
#[command(
    about = "Provision the Docker-based NVR dashboard stack on this host",
    long_about = None
)]
struct Cli {
    /// Git URL of the dashboard repository
    #[arg(long)]
    repo_url: Option<String>,
    /// Checkout directory [default: nvr-dashboard]
    #[arg(long)]
    target_dir: Option<PathBuf>,
    /// Upstream branch an existing checkout is reset to [default: main]
    #[arg(long)]
    branch: Option<String>,
    /// TOML file providing defaults for any of these flags
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Never prompt; fail when a required value is missing
    #[arg(long)]
    non_interactive: bool,
    /// Fail instead of building locally when images cannot be pulled
    #[arg(long)]
    skip_build_fallback: bool,
    /// Image resolution strategy
    #[arg(long, value_enum)]
    pull_strategy: Option<PullStrategy>,
    /// Registry used for authenticated pulls [default: ghcr.io]
    #[arg(long)]
    registry: Option<String>,
    /// Seconds to wait after start-up before reading stack status [default: 5]
    #[arg(long)]
    settle_seconds: Option<u64>,
    /// Open a newly created .env in $EDITOR without asking
    #[arg(long, conflicts_with = "non_interactive")]
    review_env: bool,
    /// Fail instead of writing a minimal compose definition when none is found
    #[arg(long)]
    no_compose_synthesis: bool,
    /// Refresh the package index and install git and Docker first (apt)
    #[arg(long)]
    install_prerequisites: bool,
    /// Pre-answer a .env value, e.g. --set NVR_URL=rtsp://10.0.0.5/live
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    env: Vec<(String, String)>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repo_url: self.repo_url.clone(),
            target_dir: self.target_dir.clone(),
            branch: self.branch.clone(),
            non_interactive: self.non_interactive,
            pull_strategy: self.pull_strategy,
            skip_build_fallback: self.skip_build_fallback,
            registry: self.registry.clone(),
            settle_seconds: self.settle_seconds,
            review_env: self.review_env,
            no_compose_synthesis: self.no_compose_synthesis,
            install_prerequisites: self.install_prerequisites,
            env: self.env.clone(),
        }
    }
}

/// Entry point for the CLI.
///
/// Exit codes: `0` success, `1` provisioning failure, `2` invalid arguments or configuration.
pub fn run() {
    let cli = Cli::parse();

    let config = match config::resolve(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(err) => Cli::command().error(ErrorKind::InvalidValue, err).exit(),
    };

    match crate::provision(&config, announce_stage) {
        Ok(report) => print_report(&report),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn announce_stage(stage: Stage) {
    if stage != Stage::Preflight {
        println!("▶ {}", stage.display_name());
    }
}

fn print_report(report: &ProvisionReport) {
    if let Some(prerequisites) = &report.prerequisites {
        println!("✅ Installed {} package(s)", prerequisites.packages.len());
    }

    match report.sync {
        SyncOutcome::Cloned => println!("✅ Repository cloned"),
        SyncOutcome::Updated => println!("✅ Repository updated to the latest upstream revision"),
    }

    let env_path = report.environment.path.display();
    match &report.environment.source {
        EnvSource::Existing => println!("ℹ️  Using existing {}", env_path),
        EnvSource::CopiedTemplate(template) => {
            println!("✅ Created {} from {}", env_path, template)
        }
        EnvSource::Synthesized => println!("✅ Created {}", env_path),
    }

    let compose_path = report.compose.path.display();
    match &report.compose.source {
        ComposeSource::Found | ComposeSource::ConventionalFolder => {
            println!("ℹ️  Using compose definition {}", compose_path)
        }
        ComposeSource::CopiedTemplate(template) => {
            println!("✅ Created {} from {}", compose_path, template.display())
        }
        ComposeSource::Synthesized => {
            println!("✅ Wrote minimal compose definition to {}", compose_path)
        }
    }
    if let Some(backup) = &report.compose.backup {
        println!("  Removed obsolete version key (original kept at {})", backup.display());
    }
    if !report.compose.services.is_empty() {
        println!("  Services: {}", report.compose.services.join(", "));
    }

    let activation = &report.activation;
    match activation.images {
        ImageSource::Pulled => println!("✅ Images pulled"),
        ImageSource::PulledAfterLogin => println!("✅ Images pulled after registry login"),
        ImageSource::Built => println!("✅ Images built locally"),
    }

    println!();
    println!("🎉 NVR dashboard is up");
    println!("  Bind address: {}", activation.bind_address);
    println!("  Dashboard:    {}", activation.ui_url);
    println!("  Follow logs:  {}", activation.logs_command);
    if !activation.status.trim().is_empty() {
        println!();
        println!("{}", activation.status.trim_end());
    }
}
