use super::command::ProcessCommand;
use crate::domain::AppError;
use crate::ports::PackageManager;

/// `PackageManager` backed by `apt-get`, elevated with `sudo` when not running as root.
#[derive(Debug, Clone)]
pub struct AptPackageManager {
    use_sudo: bool,
}

impl AptPackageManager {
    pub fn new(use_sudo: bool) -> Self {
        Self { use_sudo }
    }

    pub fn detect() -> Self {
        let is_root = ProcessCommand::new("id")
            .arg("-u")
            .run()
            .map(|outcome| outcome.success() && outcome.stdout.trim() == "0")
            .unwrap_or(false);
        Self::new(!is_root)
    }

    fn apt_get<'a>(&self, args: Vec<String>) -> ProcessCommand<'a> {
        let command = if self.use_sudo {
            ProcessCommand::new("sudo").arg("apt-get")
        } else {
            ProcessCommand::new("apt-get")
        };
        command.args(args).env("DEBIAN_FRONTEND", "noninteractive")
    }
}

impl PackageManager for AptPackageManager {
    fn refresh_index(&self) -> Result<(), AppError> {
        self.apt_get(vec!["update".to_string()])
            .run_checked()
            .map_err(|err| AppError::PackageInstall(Box::new(err)))?;
        Ok(())
    }

    fn install_packages(&self, names: &[String]) -> Result<(), AppError> {
        if names.is_empty() {
            return Ok(());
        }
        let mut args = vec!["install".to_string(), "-y".to_string()];
        args.extend(names.iter().cloned());
        self.apt_get(args).run_checked().map_err(|err| AppError::PackageInstall(Box::new(err)))?;
        Ok(())
    }
}
