pub mod apt_command;
pub mod command;
pub mod docker_compose_command;
pub mod editor_command;
pub mod git_command;
pub mod terminal_input;

pub use apt_command::AptPackageManager;
pub use docker_compose_command::DockerComposeAdapter;
pub use editor_command::EditorCommand;
pub use git_command::GitCommandAdapter;
pub use terminal_input::TerminalInput;
