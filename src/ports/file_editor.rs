use crate::domain::AppError;
use std::path::Path;

pub trait FileEditor {
    /// Open `path` for manual review and block until the editor exits.
    fn edit(&self, path: &Path) -> Result<(), AppError>;
}
