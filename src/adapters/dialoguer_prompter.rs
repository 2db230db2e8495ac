use std::io::{BufRead, ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Input, Select};
use tracing::debug;

use crate::domain::{AnswerValue, AppError, Question, QuestionKind};
use crate::ports::Prompter;

/// Terminal prompter.
///
/// Uses dialoguer widgets on a TTY and reads one line per question otherwise.
#[derive(Debug, Clone, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask_interactive(&self, question: &Question) -> Result<Option<AnswerValue>, AppError> {
        match &question.kind {
            QuestionKind::Text => {
                let mut input = Input::<String>::new().with_prompt(&question.message);
                input = input.allow_empty(true);
                if let Some(default) = question.default.as_ref().and_then(AnswerValue::as_text) {
                    input = input.default(default.to_string());
                }
                match input.interact_text() {
                    Ok(value) => Ok(Some(AnswerValue::Text(value))),
                    Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                        Ok(None)
                    }
                    Err(err) => {
                        Err(AppError::Prompt { key: question.key, details: err.to_string() })
                    }
                }
            }
            QuestionKind::Select(choices) => {
                let items: Vec<&str> = choices.iter().map(|choice| choice.name.as_str()).collect();
                let selection = Select::new()
                    .with_prompt(&question.message)
                    .items(&items)
                    .default(question.default_index().unwrap_or(0))
                    .interact_opt()
                    .map_err(|err| AppError::Prompt {
                        key: question.key,
                        details: err.to_string(),
                    })?;
                Ok(selection.map(|index| choices[index].value.clone()))
            }
        }
    }

    fn ask_line(&self, question: &Question) -> Result<Option<AnswerValue>, AppError> {
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|err| AppError::Prompt { key: question.key, details: err.to_string() })?;
        if read == 0 {
            return Ok(None);
        }
        parse_line_answer(question, &line).map(Some)
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &Question) -> Result<Option<AnswerValue>, AppError> {
        if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
            self.ask_interactive(question)
        } else {
            self.ask_line(question)
        }
    }
}

/// Interpret one line of non-interactive input as an answer to `question`.
///
/// An empty line takes the default. Select questions accept a 1-based index,
/// a choice value, or a choice name.
pub fn parse_line_answer(question: &Question, line: &str) -> Result<AnswerValue, AppError> {
    let trimmed = line.trim();

    match &question.kind {
        QuestionKind::Text => {
            if trimmed.is_empty()
                && let Some(default) = &question.default
            {
                return Ok(default.clone());
            }
            Ok(AnswerValue::text(trimmed))
        }
        QuestionKind::Select(choices) => {
            if trimmed.is_empty() {
                let index = question.default_index().unwrap_or(0);
                return choices.get(index).map(|choice| choice.value.clone()).ok_or_else(|| {
                    AppError::Prompt { key: question.key, details: "no choices".to_string() }
                });
            }

            if let Ok(index) = trimmed.parse::<usize>()
                && index >= 1
                && index <= choices.len()
            {
                return Ok(choices[index - 1].value.clone());
            }

            let choice = choices
                .iter()
                .find(|choice| choice.value.as_text() == Some(trimmed) || choice.name == trimmed)
                .ok_or_else(|| AppError::Prompt {
                    key: question.key,
                    details: format!("'{}' is not one of the choices", trimmed),
                })?;
            debug!(key = %question.key, answer = %choice.short, "Selected choice");
            Ok(choice.value.clone())
        }
    }
}
