use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ANONYMOUS_USER_NAME: &str = "Anonymous";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Submission {
    pub id: String,
    pub quiz_id: String,
    pub user_name: String,
    pub answers: Vec<EvaluatedAnswer>,
    pub score: i32,
    pub total_points: i32,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EvaluatedAnswer {
    pub question_id: String,
    pub user_answer: String,
    pub is_correct: bool,
}

impl Submission {
    pub fn new(
        quiz_id: &str,
        user_name: Option<&str>,
        answers: Vec<EvaluatedAnswer>,
        score: i32,
        total_points: i32,
    ) -> Self {
        let user_name = user_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(ANONYMOUS_USER_NAME);

        Submission {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            user_name: user_name.to_string(),
            answers,
            score,
            total_points,
            submitted_at: Utc::now(),
        }
    }
}
