use std::fmt;

/// Sequential phases of the provisioning workflow, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Preflight,
    Prerequisites,
    RepositorySync,
    EnvironmentResolver,
    ComposeLocator,
    StackActivator,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Preflight,
        Stage::Prerequisites,
        Stage::RepositorySync,
        Stage::EnvironmentResolver,
        Stage::ComposeLocator,
        Stage::StackActivator,
    ];

    /// Short identifier used in error messages and log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Preflight => "preflight",
            Stage::Prerequisites => "prerequisites",
            Stage::RepositorySync => "repository-sync",
            Stage::EnvironmentResolver => "environment",
            Stage::ComposeLocator => "compose",
            Stage::StackActivator => "activation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Preflight => "Preflight",
            Stage::Prerequisites => "Prerequisites",
            Stage::RepositorySync => "Repository sync",
            Stage::EnvironmentResolver => "Environment file",
            Stage::ComposeLocator => "Compose definition",
            Stage::StackActivator => "Stack activation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
