use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::{CollectionRequest, CollectionWorkflow};

/// Collection workflow that only records its invocations.
#[derive(Debug, Default)]
pub struct RecordingCollectionWorkflow {
    requests: RefCell<Vec<CollectionRequest>>,
}

impl RecordingCollectionWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<CollectionRequest> {
        self.requests.borrow().clone()
    }
}

impl CollectionWorkflow for RecordingCollectionWorkflow {
    fn create_collection(&self, request: CollectionRequest) -> Result<(), AppError> {
        self.requests.borrow_mut().push(request);
        Ok(())
    }
}
