use super::answers::{AnswerKey, AnswerStore, AnswerValue};

/// One selectable option of a single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Label shown in the list.
    pub name: String,
    /// Value recorded when the choice is picked.
    pub value: AnswerValue,
    /// Label echoed once the choice is made.
    pub short: String,
}

impl Choice {
    pub fn new(name: impl Into<String>, value: AnswerValue, short: impl Into<String>) -> Self {
        Self { name: name.into(), value, short: short.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Text,
    Select(Vec<Choice>),
}

/// When a question is left out of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipRule {
    /// Skip when the store already holds an answer for the key.
    WhenAnswered,
    Never,
}

/// A static question definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: AnswerKey,
    pub message: String,
    pub kind: QuestionKind,
    pub default: Option<AnswerValue>,
    pub skip: SkipRule,
}

impl Question {
    pub fn text(key: AnswerKey, message: impl Into<String>) -> Self {
        Self {
            key,
            message: message.into(),
            kind: QuestionKind::Text,
            default: None,
            skip: SkipRule::WhenAnswered,
        }
    }

    pub fn select(key: AnswerKey, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            key,
            message: message.into(),
            kind: QuestionKind::Select(choices),
            default: None,
            skip: SkipRule::WhenAnswered,
        }
    }

    pub fn with_default(mut self, default: AnswerValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_skip(mut self, skip: SkipRule) -> Self {
        self.skip = skip;
        self
    }

    pub fn choices(&self) -> &[Choice] {
        match &self.kind {
            QuestionKind::Select(choices) => choices,
            QuestionKind::Text => &[],
        }
    }

    /// Index of the default among the choices, if any.
    pub fn default_index(&self) -> Option<usize> {
        let default = self.default.as_ref()?;
        self.choices().iter().position(|choice| &choice.value == default)
    }

    pub fn should_skip(&self, store: &AnswerStore) -> bool {
        match self.skip {
            SkipRule::WhenAnswered => store.has(self.key),
            SkipRule::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<Choice> {
        vec![
            Choice::new("Red", AnswerValue::text("red"), "red"),
            Choice::new("Blue", AnswerValue::text("blue"), "blue"),
        ]
    }

    #[test]
    fn answered_question_is_skipped() {
        let question = Question::text(AnswerKey::Name, "Name?");
        let mut store = AnswerStore::new();
        assert!(!question.should_skip(&store));
        store.set_text(AnswerKey::Name, "x");
        assert!(question.should_skip(&store));
    }

    #[test]
    fn never_rule_ignores_store() {
        let question = Question::text(AnswerKey::Name, "Name?").with_skip(SkipRule::Never);
        let store = AnswerStore::new().with(AnswerKey::Name, AnswerValue::text("x"));
        assert!(!question.should_skip(&store));
    }

    #[test]
    fn default_index_matches_choice_value() {
        let question = Question::select(AnswerKey::Type, "Type?", colors())
            .with_default(AnswerValue::text("blue"));
        assert_eq!(question.default_index(), Some(1));
        assert_eq!(Question::text(AnswerKey::Name, "Name?").default_index(), None);
    }
}
