use crate::domain::AppError;

/// Port for the named templates generators materialize.
pub trait TemplateStore {
    /// Source text of the template called `name` (e.g. `fragment/main.js`).
    fn template(&self, name: &str) -> Result<&str, AppError>;
}
