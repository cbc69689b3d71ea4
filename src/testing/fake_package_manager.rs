use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::PackageManager;

#[derive(Default)]
pub struct FakePackageManager {
    pub refreshed: Mutex<usize>,
    pub installed: Mutex<Vec<String>>,
    pub fail_install: bool,
}

impl FakePackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail_install: true, ..Self::default() }
    }

    pub fn installed(&self) -> Vec<String> {
        self.installed.lock().unwrap().clone()
    }
}

impl PackageManager for FakePackageManager {
    fn refresh_index(&self) -> Result<(), AppError> {
        *self.refreshed.lock().unwrap() += 1;
        Ok(())
    }

    fn install_packages(&self, names: &[String]) -> Result<(), AppError> {
        if self.fail_install {
            return Err(AppError::PackageInstall(Box::new(AppError::CommandFailed {
                command: format!("apt-get install -y {}", names.join(" ")),
                status: Some(100),
                output: "E: Unable to locate package".to_string(),
            })));
        }
        self.installed.lock().unwrap().extend(names.iter().cloned());
        Ok(())
    }
}
