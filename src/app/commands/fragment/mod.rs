//! The fragment generator: prompt, derive, dispatch.

pub mod discovery;
pub mod dispatch;

pub use dispatch::DispatchOutcome;

use crate::app::AppContext;
use crate::app::commands::collection::NestedCollectionWorkflow;
use crate::app::commands::prompting::ask_batch;
use crate::domain::fragment::{
    FRAGMENT_COLLECTION_SLUG_MESSAGE, FRAGMENT_DESCRIPTION_DEFAULT, FRAGMENT_DESCRIPTION_MESSAGE,
    FRAGMENT_NAME_MESSAGE, FRAGMENT_TYPE_MESSAGE,
};
use crate::domain::{
    AnswerKey, AnswerStore, AnswerValue, AppError, FragmentType, Question, slugify,
};
use crate::ports::{ProjectStore, Prompter, TemplateStore};

/// Execute the fragment generator.
///
/// `store` holds pre-supplied answers; their prompts are skipped.
pub fn execute<P, T, Q>(
    ctx: &AppContext<P, T, Q>,
    store: &mut AnswerStore,
) -> Result<DispatchOutcome, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
    Q: Prompter,
{
    ask_fragment_data(ctx.prompter(), store)?;
    ask_collection(ctx.prompter(), ctx.project(), store)?;

    let collections = NestedCollectionWorkflow::new(ctx);
    dispatch::dispatch(ctx.project(), ctx.templates(), store, &collections)
}

fn fragment_data_questions() -> Vec<Question> {
    vec![
        Question::text(AnswerKey::Name, FRAGMENT_NAME_MESSAGE),
        Question::text(AnswerKey::Description, FRAGMENT_DESCRIPTION_MESSAGE),
        Question::select(AnswerKey::Type, FRAGMENT_TYPE_MESSAGE, FragmentType::choices())
            .with_default(AnswerValue::text(FragmentType::DEFAULT.id())),
    ]
}

/// Ask name, description, and type, then derive the fragment slug.
///
/// Description and type are reset to their fixed values afterwards, whatever
/// was answered.
pub fn ask_fragment_data<Q: Prompter>(prompter: &Q, store: &mut AnswerStore) -> Result<(), AppError> {
    ask_batch(prompter, store, &fragment_data_questions())?;

    store.set_text(AnswerKey::Description, FRAGMENT_DESCRIPTION_DEFAULT);

    let slug = slugify(store.text(AnswerKey::Name).unwrap_or_default());
    store.set_text(AnswerKey::FragmentSlug, slug);

    store.set_text(AnswerKey::Type, FragmentType::DEFAULT.id());
    Ok(())
}

/// Ask which collection the fragment belongs to.
pub fn ask_collection<Q, P>(prompter: &Q, project: &P, store: &mut AnswerStore) -> Result<(), AppError>
where
    Q: Prompter,
    P: ProjectStore,
{
    let question = Question::select(
        AnswerKey::CollectionSlug,
        FRAGMENT_COLLECTION_SLUG_MESSAGE,
        discovery::collection_choices(project),
    );
    ask_batch(prompter, store, &[question])
}
