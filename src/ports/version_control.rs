use crate::domain::AppError;
use std::path::Path;

pub trait VersionControl {
    /// Clone `url` into `path`, which must not already hold a checkout.
    fn clone_repo(&self, url: &str, path: &Path) -> Result<(), AppError>;

    /// Fetch every remote of the checkout at `path`.
    fn fetch_all(&self, path: &Path) -> Result<(), AppError>;

    /// Discard local changes and move the checkout to `reference`.
    fn reset_hard(&self, path: &Path, reference: &str) -> Result<(), AppError>;
}
