mod collection_workflow;
mod project_store;
mod prompter;
mod template_store;

pub use collection_workflow::{CollectionRequest, CollectionWorkflow};
pub use project_store::ProjectStore;
pub use prompter::Prompter;
pub use template_store::TemplateStore;
