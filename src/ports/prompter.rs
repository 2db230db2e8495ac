use crate::domain::{AnswerValue, AppError, Question};

/// Port for asking the user a single question.
pub trait Prompter {
    /// Present `question` and block until it is answered.
    ///
    /// Returns `Ok(None)` when the user aborts the prompt.
    fn ask(&self, question: &Question) -> Result<Option<AnswerValue>, AppError>;
}
