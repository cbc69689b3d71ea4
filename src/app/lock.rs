//! Advisory lock guarding a target directory against concurrent provisioning runs.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::adapters::command::ProcessCommand;
use crate::domain::AppError;

/// Held for the duration of a run; the lock file is removed on drop.
#[derive(Debug)]
pub struct ProvisionLock {
    path: PathBuf,
}

impl ProvisionLock {
    /// Lock file location: a hidden sibling of the target, since the target may not exist yet.
    pub fn path_for(target_dir: &Path) -> PathBuf {
        let name = target_dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "target".to_string());
        let parent = match target_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        parent.join(format!(".{name}.provision.lock"))
    }

    /// Create the lock file, reclaiming it once when the recorded holder is no longer running.
    pub fn acquire(target_dir: &Path) -> Result<Self, AppError> {
        let path = Self::path_for(target_dir);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match Self::create(&path) {
            Err(AppError::Locked { path }) if Self::holder_is_gone(&path) => {
                tracing::warn!(
                    lock = %path.display(),
                    "reclaiming lock left by an interrupted run"
                );
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(err) if err.kind() == ErrorKind::NotFound => {}
                    Err(err) => return Err(err.into()),
                }
                Self::create(&path)
            }
            other => other,
        }
    }

    fn create(path: &Path) -> Result<Self, AppError> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                return Err(AppError::Locked { path: path.to_path_buf() });
            }
            Err(err) => return Err(err.into()),
        };
        // Guard first: a failed write below still removes the file on drop.
        let lock = Self { path: path.to_path_buf() };
        writeln!(file, "{}", std::process::id())?;
        tracing::debug!(lock = %lock.path.display(), "acquired provisioning lock");
        Ok(lock)
    }

    /// True only when the file names a PID that is provably not running. Unreadable or
    /// unparsable content counts as held.
    fn holder_is_gone(path: &Path) -> bool {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| content.trim().parse::<u32>().ok())
            .is_some_and(|pid| !process_is_running(pid))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn process_is_running(pid: u32) -> bool {
    let proc_root = Path::new("/proc");
    if proc_root.join("self").exists() {
        return proc_root.join(pid.to_string()).exists();
    }
    ProcessCommand::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .run()
        .map(|outcome| outcome.success())
        .unwrap_or(true)
}

impl Drop for ProvisionLock {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            tracing::warn!(lock = %self.path.display(), error = %err, "failed to remove lock file");
        }
    }
}
