//! Compose definition discovery, template copy, synthesis and normalization.

use std::collections::VecDeque;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::compose::{
    self, BACKUP_SUFFIX, COMPOSE_FILE, COMPOSE_NAMES, CONVENTIONAL_COMPOSE_PATH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeSource {
    /// Found by the recursive search.
    Found,
    /// Found at the conventional `docker/` location.
    ConventionalFolder,
    /// Copied from the template at this path.
    CopiedTemplate(PathBuf),
    /// Written from the built-in minimal definition.
    Synthesized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOutcome {
    pub path: PathBuf,
    pub source: ComposeSource,
    /// Backup written when a deprecated `version:` line was stripped.
    pub backup: Option<PathBuf>,
    /// Declared service names; empty when the definition could not be parsed.
    pub services: Vec<String>,
}

/// Find, copy or synthesize the compose definition under `root`, then normalize it.
pub fn locate(root: &Path, synthesize: bool) -> Result<ComposeOutcome, AppError> {
    let (path, source) = select(root, synthesize)?;
    let backup = normalize(&path)?;
    let services = read_services(&path);
    Ok(ComposeOutcome { path, source, backup, services })
}

fn select(root: &Path, synthesize: bool) -> Result<(PathBuf, ComposeSource), AppError> {
    if let Some(found) = find_first(root, compose::is_compose_name)? {
        tracing::info!(path = %found.display(), "compose definition already present");
        return Ok((found, ComposeSource::Found));
    }

    let conventional = root.join(CONVENTIONAL_COMPOSE_PATH);
    if conventional.is_file() {
        tracing::info!(path = %conventional.display(), "compose definition found in docker/");
        return Ok((conventional, ComposeSource::ConventionalFolder));
    }

    let target = root.join(COMPOSE_FILE);
    if let Some(template) = find_first(root, compose::is_compose_template_name)? {
        fs::copy(&template, &target)?;
        tracing::info!(template = %template.display(), "compose definition copied from template");
        return Ok((target, ComposeSource::CopiedTemplate(template)));
    }

    if !synthesize {
        let mut searched: Vec<String> =
            COMPOSE_NAMES.iter().map(|name| format!("**/{name}")).collect();
        searched.push(CONVENTIONAL_COMPOSE_PATH.to_string());
        searched.push("**/*compose*{example,sample,default}*".to_string());
        return Err(AppError::ComposeNotFound { searched });
    }

    fs::write(&target, compose::render_minimal_definition()?)?;
    tracing::info!(path = %target.display(), "minimal compose definition synthesized");
    Ok((target, ComposeSource::Synthesized))
}

/// Breadth-first search skipping hidden directories; entries are visited in name order so the
/// shallowest, alphabetically-first match wins. Subdirectories that cannot be read are skipped.
fn find_first(root: &Path, matches: fn(&str) -> bool) -> Result<Option<PathBuf>, AppError> {
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let listing = match fs::read_dir(&dir) {
            Ok(listing) => listing,
            Err(err) if dir.as_path() != root && err.kind() == ErrorKind::PermissionDenied => {
                tracing::warn!(
                    path = %dir.display(),
                    error = %err,
                    "skipping unreadable directory"
                );
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        let mut entries = listing.collect::<Result<Vec<_>, _>>()?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                if !name.starts_with('.') {
                    queue.push_back(entry.path());
                }
            } else if matches(&name) {
                return Ok(Some(entry.path()));
            }
        }
    }
    Ok(None)
}

/// Strip deprecated `version:` lines in place, keeping the original as a `.bak` sibling.
pub fn normalize(path: &Path) -> Result<Option<PathBuf>, AppError> {
    let content = fs::read_to_string(path)?;
    let Some(stripped) = compose::strip_version_lines(&content) else {
        return Ok(None);
    };

    let backup = backup_path(path);
    fs::copy(path, &backup)?;
    fs::write(path, stripped)?;
    tracing::info!(
        path = %path.display(),
        backup = %backup.display(),
        "removed deprecated version key from compose definition"
    );
    Ok(Some(backup))
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

fn read_services(path: &Path) -> Vec<String> {
    match fs::read_to_string(path).map_err(AppError::from).and_then(|c| compose::service_names(&c))
    {
        Ok(services) => services,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not list compose services");
            Vec::new()
        }
    }
}
