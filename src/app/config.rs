//! Project configuration loaded from `.fragment-gen.toml`.
//!
//! Values found here pre-answer prompts. Command-line flags win over the file.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{AnswerKey, AnswerStore, AnswerValue, AppError, FragmentType};
use crate::ports::ProjectStore;

pub const CONFIG_FILE: &str = ".fragment-gen.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub fragment: FragmentDefaults,
    #[serde(default)]
    pub collection: CollectionDefaults,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FragmentDefaults {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub fragment_type: Option<String>,
    pub collection: Option<String>,
    #[serde(default)]
    pub new_collection: bool,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CollectionDefaults {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: ProjectConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.fragment.new_collection && self.fragment.collection.is_some() {
            return Err(AppError::config_error(format!(
                "{}: [fragment] sets both 'collection' and 'new_collection'",
                CONFIG_FILE
            )));
        }
        if let Some(kind) = &self.fragment.fragment_type {
            validate_fragment_type(kind)?;
        }
        Ok(())
    }

    /// Pre-supply fragment answers found in the file.
    pub fn seed_fragment_answers(&self, store: &mut AnswerStore) {
        let defaults = &self.fragment;
        store.seed_text(AnswerKey::Name, defaults.name.as_deref());
        store.seed_text(AnswerKey::Description, defaults.description.as_deref());
        store.seed_text(AnswerKey::Type, defaults.fragment_type.as_deref());
        if defaults.new_collection {
            store.set(AnswerKey::CollectionSlug, AnswerValue::NewCollection);
        } else {
            store.seed_text(AnswerKey::CollectionSlug, defaults.collection.as_deref());
        }
    }

    /// Pre-supply collection answers found in the file.
    pub fn seed_collection_answers(&self, store: &mut AnswerStore) {
        store.seed_text(AnswerKey::CollectionName, self.collection.name.as_deref());
        store.seed_text(AnswerKey::CollectionDescription, self.collection.description.as_deref());
    }
}

/// Reject fragment types the generator does not know.
pub fn validate_fragment_type(value: &str) -> Result<FragmentType, AppError> {
    FragmentType::from_id(value).ok_or_else(|| {
        let known: Vec<&str> = FragmentType::ALL.iter().map(FragmentType::id).collect();
        AppError::config_error(format!(
            "Invalid fragment type '{}': must be one of {}",
            value,
            known.join(", ")
        ))
    })
}

/// Load the project configuration, or defaults when the file is absent.
pub fn load_config<P: ProjectStore>(project: &P) -> Result<ProjectConfig, AppError> {
    let path = Path::new(CONFIG_FILE);
    if !project.file_exists(path) {
        return Ok(ProjectConfig::default());
    }
    let content = project.read_file(path)?;
    ProjectConfig::parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryProjectStore;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(&MemoryProjectStore::new()).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn fragment_section_seeds_answers() {
        let project = MemoryProjectStore::new().with_file(
            CONFIG_FILE,
            "[fragment]\nname = \"Hero\"\ntype = \"section\"\ncollection = \"nav\"\n",
        );
        let config = load_config(&project).unwrap();

        let mut store = AnswerStore::new();
        config.seed_fragment_answers(&mut store);

        assert_eq!(store.text(AnswerKey::Name), Some("Hero"));
        assert_eq!(store.text(AnswerKey::Type), Some("section"));
        assert_eq!(store.text(AnswerKey::CollectionSlug), Some("nav"));
        assert!(!store.has(AnswerKey::Description));
    }

    #[test]
    fn new_collection_flag_seeds_sentinel() {
        let config = ProjectConfig::parse("[fragment]\nnew_collection = true\n").unwrap();
        let mut store = AnswerStore::new();
        config.seed_fragment_answers(&mut store);
        assert_eq!(store.get(AnswerKey::CollectionSlug), Some(&AnswerValue::NewCollection));
    }

    #[test]
    fn collection_section_seeds_answers() {
        let config =
            ProjectConfig::parse("[collection]\nname = \"Navigation\"\ndescription = \"Menus\"\n")
                .unwrap();
        let mut store = AnswerStore::new();
        config.seed_collection_answers(&mut store);
        assert_eq!(store.text(AnswerKey::CollectionName), Some("Navigation"));
        assert_eq!(store.text(AnswerKey::CollectionDescription), Some("Menus"));
    }

    #[test]
    fn conflicting_collection_settings_are_rejected() {
        let err = ProjectConfig::parse("[fragment]\ncollection = \"nav\"\nnew_collection = true\n")
            .unwrap_err();
        assert!(err.to_string().contains("new_collection"));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = ProjectConfig::parse("[fragment]\ntype = \"widget\"\n").unwrap_err();
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let err = ProjectConfig::parse("[fragment\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }
}
