mod memory_project_store;
mod recording_collection_workflow;
mod scripted_prompter;

pub use memory_project_store::MemoryProjectStore;
pub use recording_collection_workflow::RecordingCollectionWorkflow;
pub use scripted_prompter::ScriptedPrompter;
