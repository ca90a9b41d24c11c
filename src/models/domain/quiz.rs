use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::{PublicQuestion, Question};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub is_active: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// A quiz as served to takers: same record, no answer key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublicQuiz {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub questions: Vec<PublicQuestion>,
    pub is_active: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(title: &str, description: Option<String>, questions: Vec<Question>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description,
            questions,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// First question whose id equals `question_id`.
    pub fn find_question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}

impl From<Quiz> for PublicQuiz {
    fn from(quiz: Quiz) -> Self {
        PublicQuiz {
            id: quiz.id,
            title: quiz.title,
            description: quiz.description,
            questions: quiz.questions.into_iter().map(PublicQuestion::from).collect(),
            is_active: quiz.is_active,
            created_at: quiz.created_at,
        }
    }
}
