use std::path::PathBuf;

use serde_json::Value;

use super::answers::AnswerValue;
use super::error::AppError;
use super::fragment::SOURCE_DIR;
use super::question::Choice;

pub const NEW_COLLECTION_MESSAGE: &str = "Create a new collection";
pub const NEW_COLLECTION_SHORT: &str = "(new collection)";
pub const COLLECTION_NAME_MESSAGE: &str = "Collection name";
pub const COLLECTION_DESCRIPTION_MESSAGE: &str = "Collection description";

/// File that marks a directory under `src/` as a collection.
pub const COLLECTION_MARKER_FILE: &str = "collection.json";

/// Raw marker file found while scanning a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerFile {
    /// Name of the directory holding the marker.
    pub dir_name: String,
    pub content: String,
}

/// A collection known to exist in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredCollection {
    pub name: String,
    pub slug: String,
}

impl DiscoveredCollection {
    /// Parse a marker. The slug comes from the directory, never the JSON.
    ///
    /// Only invalid JSON or a bare `null` is an error. A marker without a
    /// usable `name` is displayed under its slug.
    pub fn from_marker(marker: &MarkerFile) -> Result<Self, AppError> {
        let malformed = |details: String| {
            AppError::config_error(format!(
                "Malformed {}/{}: {}",
                marker.dir_name, COLLECTION_MARKER_FILE, details
            ))
        };
        let json: Value =
            serde_json::from_str(&marker.content).map_err(|e| malformed(e.to_string()))?;
        let name = match json {
            Value::Null => return Err(malformed("document is null".to_string())),
            Value::Object(mut fields) => match fields.remove("name") {
                Some(Value::String(name)) => Some(name),
                Some(Value::Null) | None => None,
                Some(other) => Some(other.to_string()),
            },
            _ => None,
        };
        let slug = marker.dir_name.clone();
        Ok(Self { name: name.unwrap_or_else(|| slug.clone()), slug })
    }

    pub fn choice(&self) -> Choice {
        Choice::new(&self.name, AnswerValue::text(&self.slug), format!("({})", self.slug))
    }
}

/// Parse every marker; one bad marker fails the whole set.
pub fn parse_markers(markers: &[MarkerFile]) -> Result<Vec<DiscoveredCollection>, AppError> {
    markers.iter().map(DiscoveredCollection::from_marker).collect()
}

/// The choice that asks for a brand new collection.
pub fn new_collection_choice() -> Choice {
    Choice::new(NEW_COLLECTION_MESSAGE, AnswerValue::NewCollection, NEW_COLLECTION_SHORT)
}

/// Choices for the collection prompt, with the "new collection" option last.
pub fn collection_choices(collections: &[DiscoveredCollection]) -> Vec<Choice> {
    collections
        .iter()
        .map(DiscoveredCollection::choice)
        .chain(std::iter::once(new_collection_choice()))
        .collect()
}

/// Location of a collection's marker, relative to the project root.
pub fn marker_path(collection_slug: &str) -> PathBuf {
    PathBuf::from(SOURCE_DIR).join(collection_slug).join(COLLECTION_MARKER_FILE)
}
