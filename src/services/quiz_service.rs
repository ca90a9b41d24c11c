use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{
        quiz_dto::{PublicQuizDto, QuizDto},
        request::CreateQuizRequest,
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<QuizDto> {
        request.validate()?;

        let quiz = self.repository.create(request.into_quiz()).await?;
        log::info!(
            "Created quiz '{}' with {} questions",
            quiz.id,
            quiz.questions.len()
        );

        Ok(quiz.into())
    }

    pub async fn list_active_quizzes(&self) -> AppResult<Vec<QuizDto>> {
        let quizzes = self.repository.list_active().await?;
        Ok(quizzes.into_iter().map(QuizDto::from).collect())
    }

    pub async fn get_public_quiz(&self, id: &str) -> AppResult<PublicQuizDto> {
        let quiz = self
            .repository
            .find_public_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz.into())
    }

    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        if !self.repository.soft_delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id
            )));
        }

        log::info!("Soft-deleted quiz '{}'", id);
        Ok(())
    }

    pub async fn check_ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
