use crate::domain::AppError;

/// Values a fragment run hands over when it needs a new collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRequest {
    pub fragment_name: Option<String>,
    pub fragment_description: Option<String>,
}

/// Port for the nested collection-creation workflow.
///
/// The call runs to completion before returning.
pub trait CollectionWorkflow {
    fn create_collection(&self, request: CollectionRequest) -> Result<(), AppError>;
}
