//! Compose definition discovery rules and normalization.

use std::collections::BTreeMap;

use minijinja::{Environment, context};
use serde::Deserialize;

use super::AppError;
use super::environment::ENV_FILE;

/// Canonical compose file name written by template copy and synthesis.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// File names accepted by the recursive search, compared case-insensitively.
pub const COMPOSE_NAMES: [&str; 2] = ["docker-compose.yml", "docker-compose.yaml"];

/// Conventional subfolder location probed when the recursive search finds nothing.
pub const CONVENTIONAL_COMPOSE_PATH: &str = "docker/docker-compose.yml";

/// Suffix appended to the compose file name for the pre-normalization copy.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Port the dashboard UI listens on.
pub const UI_PORT: u16 = 3000;

const TEMPLATE_MARKERS: [&str; 3] = ["example", "sample", "default"];

static MINIMAL_TEMPLATE: &str = include_str!("../assets/compose/minimal.yml.j2");

pub fn is_compose_name(file_name: &str) -> bool {
    COMPOSE_NAMES.iter().any(|name| name.eq_ignore_ascii_case(file_name))
}

/// A compose template is any file whose name mentions "compose" and one of the template markers.
pub fn is_compose_template_name(file_name: &str) -> bool {
    let lower = file_name.to_ascii_lowercase();
    lower.contains("compose") && TEMPLATE_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Deprecated schema declaration: optional leading whitespace then `version:`, any case.
pub fn is_version_line(line: &str) -> bool {
    line.trim_start()
        .get(.."version:".len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("version:"))
}

/// Remove every deprecated version line, leaving all other bytes untouched.
///
/// Returns `None` when there is nothing to strip.
pub fn strip_version_lines(content: &str) -> Option<String> {
    let mut stripped = String::with_capacity(content.len());
    let mut removed = false;
    for line in content.split_inclusive('\n') {
        if is_version_line(line) {
            removed = true;
        } else {
            stripped.push_str(line);
        }
    }
    removed.then_some(stripped)
}

/// Render the two-service definition used when the checkout ships none.
pub fn render_minimal_definition() -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("minimal", MINIMAL_TEMPLATE)
        .map_err(|err| AppError::config_error(format!("Invalid compose template: {err}")))?;
    let template = env
        .get_template("minimal")
        .map_err(|err| AppError::config_error(format!("Missing compose template: {err}")))?;

    template
        .render(context! {
            ui_service => "nvr-dashboard",
            ui_context => ".",
            ui_port => UI_PORT,
            worker_service => "stream-worker",
            worker_context => "./worker",
            env_file => format!("./{ENV_FILE}"),
        })
        .map_err(|err| AppError::config_error(format!("Failed to render compose template: {err}")))
}

#[derive(Debug, Deserialize)]
struct ComposeDocument {
    #[serde(default)]
    services: BTreeMap<String, serde_yaml::Value>,
}

/// Service names declared in a compose document, sorted.
pub fn service_names(content: &str) -> Result<Vec<String>, AppError> {
    let document: ComposeDocument = serde_yaml::from_str(content).map_err(|err| {
        AppError::config_error(format!("Compose definition is not valid YAML: {err}"))
    })?;
    Ok(document.services.into_keys().collect())
}
