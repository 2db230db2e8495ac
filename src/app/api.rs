//! Library entry points behind the CLI.

use std::path::Path;

use crate::adapters::{DialoguerPrompter, EmbeddedTemplateStore, ProjectFilesystem};
use crate::app::AppContext;
use crate::app::commands::collection::{self, CollectionOutcome};
use crate::app::commands::fragment::{self, DispatchOutcome, discovery};
use crate::app::config::{load_config, validate_fragment_type};
use crate::domain::{AnswerKey, AnswerStore, AnswerValue, AppError, Choice};
use crate::ports::{ProjectStore, Prompter, TemplateStore};

/// Collection a new fragment should go into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionTarget {
    /// Slug of a collection under `src/`.
    Existing(String),
    /// Create a collection first.
    New,
}

/// Answers supplied up front for a fragment run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub fragment_type: Option<String>,
    pub collection: Option<CollectionTarget>,
}

impl FragmentOptions {
    fn seed(&self, store: &mut AnswerStore) {
        store.seed_text(AnswerKey::Name, self.name.as_deref());
        store.seed_text(AnswerKey::Description, self.description.as_deref());
        store.seed_text(AnswerKey::Type, self.fragment_type.as_deref());
        match &self.collection {
            Some(CollectionTarget::Existing(slug)) => {
                store.set_text(AnswerKey::CollectionSlug, slug.as_str())
            }
            Some(CollectionTarget::New) => {
                store.set(AnswerKey::CollectionSlug, AnswerValue::NewCollection)
            }
            None => {}
        }
    }
}

/// Answers supplied up front for a collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionOptions {
    pub name: Option<String>,
    pub description: Option<String>,
}

fn terminal_context(
    root: &Path,
) -> AppContext<ProjectFilesystem, EmbeddedTemplateStore, DialoguerPrompter> {
    AppContext::new(
        ProjectFilesystem::new(root.to_path_buf()),
        EmbeddedTemplateStore::new(),
        DialoguerPrompter::new(),
    )
}

/// Create a fragment in the project at `root`, prompting on the terminal.
pub fn create_fragment(root: &Path, options: &FragmentOptions) -> Result<DispatchOutcome, AppError> {
    create_fragment_with(&terminal_context(root), options)
}

/// Create a fragment with explicit dependencies.
///
/// Answers come from `.fragment-gen.toml`, then `options`, then prompts.
pub fn create_fragment_with<P, T, Q>(
    ctx: &AppContext<P, T, Q>,
    options: &FragmentOptions,
) -> Result<DispatchOutcome, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    Q: Prompter,
{
    if let Some(kind) = &options.fragment_type {
        validate_fragment_type(kind)?;
    }

    let config = load_config(ctx.project())?;
    let mut store = AnswerStore::new();
    config.seed_fragment_answers(&mut store);
    options.seed(&mut store);

    fragment::execute(ctx, &mut store)
}

/// Create a collection in the project at `root`, prompting on the terminal.
pub fn create_collection(
    root: &Path,
    options: &CollectionOptions,
) -> Result<CollectionOutcome, AppError> {
    create_collection_with(&terminal_context(root), options)
}

/// Create a collection with explicit dependencies.
pub fn create_collection_with<P, T, Q>(
    ctx: &AppContext<P, T, Q>,
    options: &CollectionOptions,
) -> Result<CollectionOutcome, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    Q: Prompter,
{
    let config = load_config(ctx.project())?;
    let mut store = AnswerStore::new();
    config.seed_collection_answers(&mut store);
    store.seed_text(AnswerKey::CollectionName, options.name.as_deref());
    store.seed_text(AnswerKey::CollectionDescription, options.description.as_deref());

    collection::execute(ctx, &mut store)
}

/// Collection choices offered for the project at `root`.
pub fn list_collections(root: &Path) -> Vec<Choice> {
    discovery::collection_choices(&ProjectFilesystem::new(root.to_path_buf()))
}
