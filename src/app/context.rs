use crate::ports::{ContainerRuntime, FileEditor, InputSource, PackageManager, VersionControl};

/// Application context holding the collaborators a provisioning run talks to.
pub struct AppContext<V, C, I, E, P>
where
    V: VersionControl,
    C: ContainerRuntime,
    I: InputSource,
    E: FileEditor,
    P: PackageManager,
{
    vcs: V,
    runtime: C,
    input: I,
    editor: E,
    packages: P,
}

impl<V, C, I, E, P> AppContext<V, C, I, E, P>
where
    V: VersionControl,
    C: ContainerRuntime,
    I: InputSource,
    E: FileEditor,
    P: PackageManager,
{
    /// Create a new application context.
    pub fn new(vcs: V, runtime: C, input: I, editor: E, packages: P) -> Self {
        Self { vcs, runtime, input, editor, packages }
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    pub fn runtime(&self) -> &C {
        &self.runtime
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn packages(&self) -> &P {
        &self.packages
    }
}
