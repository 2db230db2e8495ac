//! Ordered, skippable question batches.

use tracing::debug;

use crate::domain::{AnswerStore, AppError, Question};
use crate::ports::Prompter;

/// Ask every question in `batch` whose answer is not yet known.
///
/// Answers are written back to `store` as they arrive, so a question sees
/// everything answered before it.
pub fn ask_batch<Q: Prompter>(
    prompter: &Q,
    store: &mut AnswerStore,
    batch: &[Question],
) -> Result<(), AppError> {
    for question in batch {
        if question.should_skip(store) {
            debug!(key = %question.key, "Answer already known, skipping prompt");
            continue;
        }

        let answer = prompter.ask(question)?.ok_or(AppError::Cancelled)?;
        store.set(question.key, answer);
    }
    Ok(())
}
