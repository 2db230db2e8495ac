//! Answer keys, values, and the per-run answer store.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key under which an answer is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnswerKey {
    Name,
    Description,
    Type,
    CollectionSlug,
    FragmentSlug,
    CollectionName,
    CollectionDescription,
}

impl AnswerKey {
    /// Identifier shown to users and in error messages.
    pub fn id(&self) -> &'static str {
        match self {
            AnswerKey::Name => "name",
            AnswerKey::Description => "description",
            AnswerKey::Type => "type",
            AnswerKey::CollectionSlug => "collection-slug",
            AnswerKey::FragmentSlug => "fragment-slug",
            AnswerKey::CollectionName => "collection-name",
            AnswerKey::CollectionDescription => "collection-description",
        }
    }

    /// Variable name exposed to templates.
    pub fn context_name(&self) -> &'static str {
        match self {
            AnswerKey::Name => "name",
            AnswerKey::Description => "description",
            AnswerKey::Type => "type",
            AnswerKey::CollectionSlug => "collection_slug",
            AnswerKey::FragmentSlug => "fragment_slug",
            AnswerKey::CollectionName => "collection_name",
            AnswerKey::CollectionDescription => "collection_description",
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A recorded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    /// The user asked for a collection that does not exist yet.
    NewCollection,
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value),
            AnswerValue::NewCollection => None,
        }
    }
}

impl Serialize for AnswerValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnswerValue::Text(value) => serializer.serialize_str(value),
            AnswerValue::NewCollection => serializer.serialize_none(),
        }
    }
}

/// Answers known so far in one generation run.
///
/// Entries are only ever added or overwritten. Presence of a key means the
/// matching prompt is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    values: BTreeMap<AnswerKey, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, key: AnswerKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn get(&self, key: AnswerKey) -> Option<&AnswerValue> {
        self.values.get(&key)
    }

    /// Text value for `key`, or `None` when absent or a sentinel.
    pub fn text(&self, key: AnswerKey) -> Option<&str> {
        self.get(key).and_then(AnswerValue::as_text)
    }

    pub fn set(&mut self, key: AnswerKey, value: AnswerValue) {
        self.values.insert(key, value);
    }

    pub fn set_text(&mut self, key: AnswerKey, value: impl Into<String>) {
        self.set(key, AnswerValue::text(value));
    }

    /// Builder-style seeding for pre-supplied answers.
    pub fn with(mut self, key: AnswerKey, value: AnswerValue) -> Self {
        self.set(key, value);
        self
    }

    /// Seed `key` only when a value was supplied.
    pub fn seed_text(&mut self, key: AnswerKey, value: Option<&str>) {
        if let Some(value) = value {
            self.set_text(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for AnswerStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (key, value) in &self.values {
            map.serialize_entry(key.context_name(), value)?;
        }
        map.end()
    }
}
