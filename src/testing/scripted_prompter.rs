use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::{AnswerKey, AnswerValue, AppError, Question};
use crate::ports::Prompter;

/// Prompter that replays scripted answers and records what was asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Option<AnswerValue>>>,
    asked: RefCell<Vec<Question>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, value: AnswerValue) -> Self {
        self.answers.borrow_mut().push_back(Some(value));
        self
    }

    pub fn answer_text(self, value: &str) -> Self {
        self.answer(AnswerValue::text(value))
    }

    /// Script the user aborting the next prompt.
    pub fn abort(self) -> Self {
        self.answers.borrow_mut().push_back(None);
        self
    }

    pub fn asked(&self) -> Vec<Question> {
        self.asked.borrow().clone()
    }

    pub fn asked_keys(&self) -> Vec<AnswerKey> {
        self.asked.borrow().iter().map(|question| question.key).collect()
    }

    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &Question) -> Result<Option<AnswerValue>, AppError> {
        self.asked.borrow_mut().push(question.clone());
        self.answers.borrow_mut().pop_front().ok_or_else(|| AppError::Prompt {
            key: question.key,
            details: "no scripted answer left".to_string(),
        })
    }
}
