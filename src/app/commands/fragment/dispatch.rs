use std::path::PathBuf;

use tracing::info;

use crate::app::commands::materialize::materialize;
use crate::domain::fragment::FRAGMENT_FILES;
use crate::domain::{AnswerKey, AnswerStore, AnswerValue, AppError, FragmentRecord};
use crate::ports::{CollectionRequest, CollectionWorkflow, ProjectStore, TemplateStore};

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A new collection was requested and handed to the collection workflow.
    /// No fragment files were written.
    CollectionDelegated,
    /// Fragment files were written under `path`.
    FragmentCreated { path: PathBuf, files: Vec<PathBuf> },
}

impl DispatchOutcome {
    pub fn display_path(&self) -> Option<String> {
        match self {
            DispatchOutcome::CollectionDelegated => None,
            DispatchOutcome::FragmentCreated { path, .. } => Some(path.display().to_string()),
        }
    }
}

/// Act on the final answers of a fragment run.
///
/// A `NewCollection` answer delegates to `collections` with the fragment name
/// and description, and nothing else happens in this run. Any other answer
/// renders the fragment files into `src/<collection-slug>/<fragment-slug>`.
pub fn dispatch<P, T, C>(
    project: &P,
    templates: &T,
    store: &AnswerStore,
    collections: &C,
) -> Result<DispatchOutcome, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    C: CollectionWorkflow,
{
    if store.get(AnswerKey::CollectionSlug) == Some(&AnswerValue::NewCollection) {
        info!("New collection requested, delegating to the collection workflow");
        collections.create_collection(CollectionRequest {
            fragment_name: store.text(AnswerKey::Name).map(str::to_string),
            fragment_description: store.text(AnswerKey::Description).map(str::to_string),
        })?;
        return Ok(DispatchOutcome::CollectionDelegated);
    }

    let record = FragmentRecord::from_answers(store)?;
    let path = record.destination();
    let files = materialize(project, templates, "fragment", &path, &FRAGMENT_FILES, store)?;

    Ok(DispatchOutcome::FragmentCreated { path, files })
}
