use crate::ports::{ProjectStore, Prompter, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: ProjectStore, T: TemplateStore, Q: Prompter> {
    project: P,
    templates: T,
    prompter: Q,
}

impl<P: ProjectStore, T: TemplateStore, Q: Prompter> AppContext<P, T, Q> {
    /// Create a new application context.
    pub fn new(project: P, templates: T, prompter: Q) -> Self {
        Self { project, templates, prompter }
    }

    /// Get a reference to the project store.
    pub fn project(&self) -> &P {
        &self.project
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &Q {
        &self.prompter
    }
}
