use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{PublicQuestion, PublicQuiz, Question, QuestionType, Quiz};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub correct_answer: String,
    pub points: i32,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            question_type: question.question_type,
            question: question.prompt,
            options: question.options,
            correct_answer: question.correct_answer,
            points: question.points,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuestionDto>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            questions: quiz.questions.into_iter().map(QuestionDto::from).collect(),
            is_active: quiz.is_active,
            created_at: quiz.created_at,
        }
    }
}

/// Question as shown to a quiz taker. Has no `correctAnswer` field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestionDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub points: i32,
}

impl From<PublicQuestion> for PublicQuestionDto {
    fn from(question: PublicQuestion) -> Self {
        PublicQuestionDto {
            id: question.id,
            question_type: question.question_type,
            question: question.prompt,
            options: question.options,
            points: question.points,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuizDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<PublicQuestionDto>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<PublicQuiz> for PublicQuizDto {
    fn from(quiz: PublicQuiz) -> Self {
        PublicQuizDto {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            questions: quiz
                .questions
                .into_iter()
                .map(PublicQuestionDto::from)
                .collect(),
            is_active: quiz.is_active,
            created_at: quiz.created_at,
        }
    }
}
