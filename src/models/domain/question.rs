use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_POINTS: i32 = 1;

fn default_points() -> i32 {
    DEFAULT_POINTS
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub question_type: QuestionType,
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default = "default_points")]
    pub points: i32,
}

/// Answer-stripped view of a question served to quiz takers.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublicQuestion {
    pub id: String,
    #[serde(default)]
    pub question_type: QuestionType,
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_points")]
    pub points: i32,
}

/// Presentation hint for clients. Every type is scored by text comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    #[serde(rename = "TRUE_FALSE")]
    TrueFalse,
    #[default]
    #[serde(rename = "TEXT")]
    Text,
}

impl Question {
    pub fn new(
        question_type: QuestionType,
        prompt: &str,
        options: Vec<String>,
        correct_answer: &str,
        points: Option<i32>,
    ) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            question_type,
            prompt: prompt.to_string(),
            options,
            correct_answer: correct_answer.to_string(),
            points: points.unwrap_or(DEFAULT_POINTS),
        }
    }
}

impl From<Question> for PublicQuestion {
    fn from(question: Question) -> Self {
        PublicQuestion {
            id: question.id,
            question_type: question.question_type,
            prompt: question.prompt,
            options: question.options,
            points: question.points,
        }
    }
}
