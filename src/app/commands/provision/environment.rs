//! Environment file resolution: reuse, template copy, or synthesis from operator input.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::environment::{self, ENV_FILE, ENV_TEMPLATES};
use crate::domain::{AppError, EnvKey, ProvisionConfig};
use crate::ports::{FileEditor, InputSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    /// A `.env` was already present and left untouched.
    Existing,
    /// Copied from the named template.
    CopiedTemplate(String),
    /// Written from prompted or supplied values.
    Synthesized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOutcome {
    pub path: PathBuf,
    pub source: EnvSource,
    pub reviewed: bool,
}

impl EnvOutcome {
    pub fn created(&self) -> bool {
        self.source != EnvSource::Existing
    }
}

/// Ensure exactly one `.env` exists under `root` without clobbering an existing one.
pub fn resolve<I, E>(
    input: &I,
    editor: &E,
    config: &ProvisionConfig,
    root: &Path,
) -> Result<EnvOutcome, AppError>
where
    I: InputSource,
    E: FileEditor,
{
    let path = root.join(ENV_FILE);

    if path.exists() {
        tracing::info!(path = %path.display(), "environment file already present");
        return Ok(EnvOutcome { path, source: EnvSource::Existing, reviewed: false });
    }

    let source = match ENV_TEMPLATES.iter().find(|name| root.join(name).is_file()) {
        Some(template) => {
            fs::copy(root.join(template), &path)?;
            tracing::info!(template = %template, "environment file copied from template");
            EnvSource::CopiedTemplate(template.to_string())
        }
        None => {
            let values = collect_values(input, config)?;
            write_atomically(&path, &environment::render(&values))?;
            tracing::info!(path = %path.display(), "environment file synthesized");
            EnvSource::Synthesized
        }
    };

    let reviewed = offer_review(input, editor, config, &path)?;
    Ok(EnvOutcome { path, source, reviewed })
}

/// Resolve every required key from overrides, defaults, or prompts.
///
/// Non-interactive runs never prompt: defaulted keys take their default and a missing
/// non-defaulted key fails with `MissingValue`.
fn collect_values<I: InputSource>(
    input: &I,
    config: &ProvisionConfig,
) -> Result<BTreeMap<String, String>, AppError> {
    let mut values = BTreeMap::new();

    for key in EnvKey::ALL {
        let supplied =
            config.env_overrides.get(key.name()).map(|v| v.trim()).filter(|v| !v.is_empty());
        let value = match (supplied, config.interactive) {
            (Some(value), _) => value.to_string(),
            (None, false) => match key.default_value() {
                Some(default) => default.to_string(),
                None => return Err(AppError::MissingValue { key: key.name().to_string() }),
            },
            (None, true) => prompt_value(input, key)?,
        };
        values.insert(key.name().to_string(), value);
    }

    for (name, value) in &config.env_overrides {
        values.entry(name.clone()).or_insert_with(|| value.clone());
    }
    Ok(values)
}

fn prompt_value<I: InputSource>(input: &I, key: EnvKey) -> Result<String, AppError> {
    match key.default_value() {
        Some(default) => {
            let answer = input.prompt_line(key.label(), Some(default))?;
            let answer = answer.trim();
            Ok(if answer.is_empty() { default.to_string() } else { answer.to_string() })
        }
        None => loop {
            let answer = input.prompt_line(key.label(), None)?;
            if !answer.trim().is_empty() {
                break Ok(answer.trim().to_string());
            }
            tracing::debug!(key = key.name(), "empty answer for required value, asking again");
        },
    }
}

fn offer_review<I, E>(
    input: &I,
    editor: &E,
    config: &ProvisionConfig,
    path: &Path,
) -> Result<bool, AppError>
where
    I: InputSource,
    E: FileEditor,
{
    if !config.interactive {
        return Ok(false);
    }
    let wanted = config.review_env || input.confirm("Review .env in an editor now?", false)?;
    if wanted {
        editor.edit(path)?;
    }
    Ok(wanted)
}

/// Write via a sibling temp file so an interrupted run never leaves a partial `.env`.
fn write_atomically(path: &Path, content: &str) -> Result<(), AppError> {
    let tmp = path.with_extension("partial");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
