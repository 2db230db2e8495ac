use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::answers::{AnswerKey, AnswerStore, AnswerValue};
use super::error::AppError;
use super::question::Choice;

pub const FRAGMENT_NAME_MESSAGE: &str = "Fragment name";
pub const FRAGMENT_DESCRIPTION_MESSAGE: &str = "Fragment description";
pub const FRAGMENT_TYPE_MESSAGE: &str = "Fragment type";
pub const FRAGMENT_COLLECTION_SLUG_MESSAGE: &str = "Choose a collection";

/// Description recorded for every fragment, whatever was typed at the prompt.
pub const FRAGMENT_DESCRIPTION_DEFAULT: &str = "";

/// Root of collections and fragments inside a project.
pub const SOURCE_DIR: &str = "src";

/// Files materialized for every fragment, in write order.
pub const FRAGMENT_FILES: [&str; 4] = ["index.html", "main.js", "styles.css", "fragment.json"];

/// Kind of fragment recorded in `fragment.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentType {
    Component,
    Section,
}

impl FragmentType {
    pub const ALL: [FragmentType; 2] = [FragmentType::Component, FragmentType::Section];

    /// The only type generated fragments resolve to.
    pub const DEFAULT: FragmentType = FragmentType::Component;

    pub fn id(&self) -> &'static str {
        match self {
            FragmentType::Component => "component",
            FragmentType::Section => "section",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FragmentType::Component => "Component",
            FragmentType::Section => "Section",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == value)
    }

    pub fn choices() -> Vec<Choice> {
        Self::ALL
            .into_iter()
            .map(|kind| Choice::new(kind.display_name(), AnswerValue::text(kind.id()), kind.id()))
            .collect()
    }
}

impl fmt::Display for FragmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Where a fragment's files are written, relative to the project root.
pub fn fragment_dir(collection_slug: &str, fragment_slug: &str) -> PathBuf {
    PathBuf::from(SOURCE_DIR).join(collection_slug).join(fragment_slug)
}

/// Fully resolved fragment answers, consumed once at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRecord {
    pub name: String,
    pub description: String,
    pub fragment_type: String,
    pub collection_slug: String,
    pub fragment_slug: String,
}

impl FragmentRecord {
    /// Build the record for an existing collection.
    ///
    /// Collection and fragment slugs must be present, non-empty, and a single
    /// directory name each, so the destination stays under `src/`.
    pub fn from_answers(store: &AnswerStore) -> Result<Self, AppError> {
        let collection_slug = require_segment(store, AnswerKey::CollectionSlug)?;
        let fragment_slug = require_segment(store, AnswerKey::FragmentSlug)?;

        Ok(Self {
            name: store.text(AnswerKey::Name).unwrap_or_default().to_string(),
            description: store
                .text(AnswerKey::Description)
                .unwrap_or(FRAGMENT_DESCRIPTION_DEFAULT)
                .to_string(),
            fragment_type: store
                .text(AnswerKey::Type)
                .unwrap_or(FragmentType::DEFAULT.id())
                .to_string(),
            collection_slug: collection_slug.to_string(),
            fragment_slug: fragment_slug.to_string(),
        })
    }

    pub fn destination(&self) -> PathBuf {
        fragment_dir(&self.collection_slug, &self.fragment_slug)
    }
}

/// Non-empty text answer for `key`.
pub fn require(store: &AnswerStore, key: AnswerKey) -> Result<&str, AppError> {
    match store.text(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::MissingAnswer { key }),
    }
}

/// Like [`require`], but the answer must also be one plain path segment.
fn require_segment(store: &AnswerStore, key: AnswerKey) -> Result<&str, AppError> {
    let value = require(store, key)?;
    let mut parts = Path::new(value).components();
    match (parts.next(), parts.next()) {
        (Some(Component::Normal(_)), None) => Ok(value),
        _ => Err(AppError::InvalidSlug(value.to_string())),
    }
}
