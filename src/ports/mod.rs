mod container_runtime;
mod file_editor;
mod input_source;
mod package_manager;
mod version_control;

pub use container_runtime::ContainerRuntime;
pub use file_editor::FileEditor;
pub use input_source::InputSource;
pub use package_manager::PackageManager;
pub use version_control::VersionControl;
