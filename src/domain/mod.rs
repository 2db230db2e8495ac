pub mod answers;
pub mod collection;
pub mod error;
pub mod fragment;
pub mod question;
pub mod slug;

pub use answers::{AnswerKey, AnswerStore, AnswerValue};
pub use collection::{DiscoveredCollection, MarkerFile};
pub use error::AppError;
pub use fragment::{FragmentRecord, FragmentType};
pub use question::{Choice, Question, QuestionKind, SkipRule};
pub use slug::slugify;
