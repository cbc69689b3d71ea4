mod fake_package_manager;
mod fake_runtime;
mod fake_version_control;
mod scripted_input;

pub use fake_editor::FakeEditor;
pub use fake_package_manager::FakePackageManager;
pub use fake_runtime::{FakeRuntime, RuntimeCall};
pub use fake_version_control::{FakeVersionControl, VcsCall};
pub use scripted_input::ScriptedInput;
