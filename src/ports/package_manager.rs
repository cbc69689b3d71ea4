use crate::domain::AppError;

pub trait PackageManager {
    /// Refresh the package index.
    fn refresh_index(&self) -> Result<(), AppError>;

    /// Install the named packages non-interactively.
    fn install_packages(&self, names: &[String]) -> Result<(), AppError>;
}
