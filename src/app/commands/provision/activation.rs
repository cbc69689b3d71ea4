//! Image resolution and stack start-up.

use std::fs;
use std::path::Path;

use crate::domain::compose::UI_PORT;
use crate::domain::environment::{self, ENV_FILE};
use crate::domain::{AppError, EnvKey, ProvisionConfig, PullStrategy};
use crate::ports::{ContainerRuntime, InputSource};

/// How the images for the stack were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Pulled,
    PulledAfterLogin,
    Built,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationReport {
    pub images: ImageSource,
    pub bind_address: String,
    pub ui_url: String,
    pub logs_command: String,
    /// Output of the status query, empty when it could not be read.
    pub status: String,
}

/// Resolve images, start every service detached, and summarize the running stack.
pub fn activate<C, I>(
    runtime: &C,
    input: &I,
    config: &ProvisionConfig,
    definition: &Path,
    root: &Path,
) -> Result<ActivationReport, AppError>
where
    C: ContainerRuntime,
    I: InputSource,
{
    let images = match config.pull_strategy {
        PullStrategy::Build => build(runtime, definition)?,
        PullStrategy::Pull => pull_or_fallback(runtime, input, config, definition)?,
    };

    runtime.up(definition)?.into_result()?;
    tracing::info!(definition = %definition.display(), "stack started");

    if !config.settle.is_zero() {
        std::thread::sleep(config.settle);
    }
    let status = runtime.status(definition).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read stack status");
        String::new()
    });

    let bind_address = bind_address(root);
    Ok(ActivationReport {
        images,
        ui_url: format!("http://{bind_address}:{UI_PORT}"),
        bind_address,
        logs_command: runtime.logs_command(definition),
        status,
    })
}

/// Pull, and on failure either log in and retry once or build locally.
fn pull_or_fallback<C, I>(
    runtime: &C,
    input: &I,
    config: &ProvisionConfig,
    definition: &Path,
) -> Result<ImageSource, AppError>
where
    C: ContainerRuntime,
    I: InputSource,
{
    let first = runtime.pull_images(definition)?;
    if first.success() {
        return Ok(ImageSource::Pulled);
    }
    tracing::warn!(
        status = ?first.status,
        output = %first.diagnostics(),
        "image pull failed; registry may be private"
    );

    let has_credentials = config.interactive
        && input.confirm(
            &format!("Image pull failed. Do you have credentials for {}?", config.registry),
            false,
        )?;

    if has_credentials {
        let user = prompt_non_empty(input, "Registry username")?;
        let secret = input.prompt_secret("Registry password or token")?;
        runtime.login(&config.registry, &user, &secret)?.into_result()?;
        runtime.pull_images(definition)?.into_result()?;
        return Ok(ImageSource::PulledAfterLogin);
    }

    if !config.build_fallback {
        return Err(first.into_error());
    }
    build(runtime, definition)
}

fn build<C: ContainerRuntime>(runtime: &C, definition: &Path) -> Result<ImageSource, AppError> {
    runtime.build_images(definition)?.into_result()?;
    tracing::info!(definition = %definition.display(), "images built from local contexts");
    Ok(ImageSource::Built)
}

fn prompt_non_empty<I: InputSource>(input: &I, label: &str) -> Result<String, AppError> {
    loop {
        let answer = input.prompt_line(label, None)?;
        if !answer.trim().is_empty() {
            return Ok(answer.trim().to_string());
        }
    }
}

/// `HOST_IP` from the environment file, falling back to its default.
fn bind_address(root: &Path) -> String {
    let fallback = EnvKey::HostIp.default_value().unwrap_or("0.0.0.0");
    fs::read_to_string(root.join(ENV_FILE))
        .ok()
        .and_then(|content| environment::parse(&content).remove(EnvKey::HostIp.name()))
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
