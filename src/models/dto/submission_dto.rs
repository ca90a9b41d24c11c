use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{EvaluatedAnswer, Submission};
use crate::services::scoring::format_percentage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedAnswerDto {
    pub question_id: String,
    pub user_answer: String,
    pub is_correct: bool,
}

impl From<EvaluatedAnswer> for EvaluatedAnswerDto {
    fn from(answer: EvaluatedAnswer) -> Self {
        EvaluatedAnswerDto {
            question_id: answer.question_id,
            user_answer: answer.user_answer,
            is_correct: answer.is_correct,
        }
    }
}

/// Returned right after a submission is scored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResultDto {
    pub submission_id: String,
    pub score: i32,
    pub total_points: i32,
    pub percentage: String,
    pub answers: Vec<EvaluatedAnswerDto>,
}

impl From<Submission> for SubmissionResultDto {
    fn from(submission: Submission) -> Self {
        SubmissionResultDto {
            percentage: format_percentage(submission.score, submission.total_points),
            submission_id: submission.id,
            score: submission.score,
            total_points: submission.total_points,
            answers: submission
                .answers
                .into_iter()
                .map(EvaluatedAnswerDto::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub quiz_id: String,
    pub user_name: String,
    pub answers: Vec<EvaluatedAnswerDto>,
    pub score: i32,
    pub total_points: i32,
    pub percentage: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<Submission> for SubmissionDto {
    fn from(submission: Submission) -> Self {
        SubmissionDto {
            percentage: format_percentage(submission.score, submission.total_points),
            id: submission.id,
            quiz_id: submission.quiz_id,
            user_name: submission.user_name,
            answers: submission
                .answers
                .into_iter()
                .map(EvaluatedAnswerDto::from)
                .collect(),
            score: submission.score,
            total_points: submission.total_points,
            submitted_at: submission.submitted_at,
        }
    }
}
