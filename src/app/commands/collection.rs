//! The collection generator, standalone or nested under a fragment run.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::materialize::materialize;
use crate::app::commands::prompting::ask_batch;
use crate::domain::collection::{
    COLLECTION_DESCRIPTION_MESSAGE, COLLECTION_MARKER_FILE, COLLECTION_NAME_MESSAGE, marker_path,
};
use crate::domain::fragment::{SOURCE_DIR, require};
use crate::domain::{AnswerKey, AnswerStore, AnswerValue, AppError, Question, slugify};
use crate::ports::{CollectionRequest, CollectionWorkflow, ProjectStore, Prompter, TemplateStore};

/// A freshly created collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionOutcome {
    pub slug: String,
    pub path: PathBuf,
}

impl CollectionOutcome {
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

fn collection_questions() -> Vec<Question> {
    vec![
        Question::text(AnswerKey::CollectionName, COLLECTION_NAME_MESSAGE),
        Question::text(AnswerKey::CollectionDescription, COLLECTION_DESCRIPTION_MESSAGE)
            .with_default(AnswerValue::text("")),
    ]
}

/// Execute the collection generator.
///
/// Writes `src/<slug>/collection.json`; refuses to replace an existing one.
pub fn execute<P, T, Q>(
    ctx: &AppContext<P, T, Q>,
    store: &mut AnswerStore,
) -> Result<CollectionOutcome, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    Q: Prompter,
{
    ask_batch(ctx.prompter(), store, &collection_questions())?;

    let name = require(store, AnswerKey::CollectionName)?;
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(AppError::InvalidSlug(name.to_string()));
    }
    store.set_text(AnswerKey::CollectionSlug, slug.as_str());

    if ctx.project().file_exists(&marker_path(&slug)) {
        return Err(AppError::CollectionExists(slug));
    }

    let path = PathBuf::from(SOURCE_DIR).join(&slug);
    materialize(
        ctx.project(),
        ctx.templates(),
        "collection",
        &path,
        &[COLLECTION_MARKER_FILE],
        store,
    )?;

    Ok(CollectionOutcome { slug, path })
}

/// Runs the collection generator on behalf of a fragment run.
pub struct NestedCollectionWorkflow<'a, P: ProjectStore, T: TemplateStore, Q: Prompter> {
    ctx: &'a AppContext<P, T, Q>,
}

impl<'a, P: ProjectStore, T: TemplateStore, Q: Prompter> NestedCollectionWorkflow<'a, P, T, Q> {
    pub fn new(ctx: &'a AppContext<P, T, Q>) -> Self {
        Self { ctx }
    }
}

impl<P: ProjectStore, T: TemplateStore, Q: Prompter> CollectionWorkflow
    for NestedCollectionWorkflow<'_, P, T, Q>
{
    fn create_collection(&self, request: CollectionRequest) -> Result<(), AppError> {
        let mut store = AnswerStore::new();
        store.seed_text(AnswerKey::Name, request.fragment_name.as_deref());
        store.seed_text(AnswerKey::Description, request.fragment_description.as_deref());

        let outcome = execute(self.ctx, &mut store)?;
        info!(collection = %outcome.slug, "Created collection");
        Ok(())
    }
}
