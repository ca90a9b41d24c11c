use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Submission,
        dto::{
            request::SubmitQuizRequest,
            submission_dto::{SubmissionDto, SubmissionResultDto},
        },
    },
    repositories::{QuizRepository, SubmissionRepository},
    services::scoring,
};

pub struct SubmissionService {
    quiz_repository: Arc<dyn QuizRepository>,
    submission_repository: Arc<dyn SubmissionRepository>,
}

impl SubmissionService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        submission_repository: Arc<dyn SubmissionRepository>,
    ) -> Self {
        Self {
            quiz_repository,
            submission_repository,
        }
    }

    /// Score a submission against the stored answer key and persist the result.
    ///
    /// Fails with `NotFound` before anything is written when the quiz does not
    /// exist. Soft-deleted quizzes are still scored.
    pub async fn submit(&self, request: SubmitQuizRequest) -> AppResult<SubmissionResultDto> {
        request.validate()?;

        let quiz = self
            .quiz_repository
            .find_by_id(&request.quiz_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Quiz with id '{}' not found", request.quiz_id))
            })?;

        let evaluation = scoring::evaluate(&quiz, &request.answers);

        let submission = Submission::new(
            &quiz.id,
            request.user_name.as_deref(),
            evaluation.answers,
            evaluation.score,
            evaluation.total_points,
        );

        let submission = self.submission_repository.create(submission).await?;
        log::info!(
            "Recorded submission '{}' for quiz '{}': {}/{}",
            submission.id,
            submission.quiz_id,
            submission.score,
            submission.total_points
        );

        Ok(submission.into())
    }

    pub async fn get_submission(&self, id: &str) -> AppResult<SubmissionDto> {
        let submission = self
            .submission_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission with id '{}' not found", id)))?;

        Ok(submission.into())
    }
}
