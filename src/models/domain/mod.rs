pub mod question;
pub mod quiz;
pub mod submission;

pub use question::{PublicQuestion, Question, QuestionType};
pub use quiz::{PublicQuiz, Quiz};
pub use submission::{EvaluatedAnswer, Submission};
