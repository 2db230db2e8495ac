use tracing::debug;

use crate::domain::collection::{self, parse_markers};
use crate::domain::{Choice, DiscoveredCollection};
use crate::ports::ProjectStore;

/// Collections found under `src/`, in scan order.
///
/// Any scan, read, or parse failure yields an empty list. Broken collection
/// metadata must never block fragment creation.
pub fn discover_collections<P: ProjectStore>(project: &P) -> Vec<DiscoveredCollection> {
    match project.collection_markers().and_then(|markers| parse_markers(&markers)) {
        Ok(collections) => collections,
        Err(err) => {
            debug!(error = %err, "Collection discovery failed, ignoring existing collections");
            Vec::new()
        }
    }
}

/// Choices for the collection prompt, ending with "create a new collection".
pub fn collection_choices<P: ProjectStore>(project: &P) -> Vec<Choice> {
    collection::collection_choices(&discover_collections(project))
}
