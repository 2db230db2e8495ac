pub mod dialoguer_prompter;
pub mod embedded_template_store;
pub mod project_filesystem;
pub mod template_engine;

pub use dialoguer_prompter::DialoguerPrompter;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use project_filesystem::ProjectFilesystem;
