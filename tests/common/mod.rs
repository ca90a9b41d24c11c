#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quiz_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{PublicQuiz, Question, QuestionType, Quiz, Submission},
    repositories::{QuizRepository, SubmissionRepository},
};

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<String, Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: quiz '{}'",
                quiz.id
            )));
        }

        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn list_active(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<_> = quizzes.values().filter(|q| q.is_active).cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned())
    }

    async fn find_public_by_id(&self, id: &str) -> AppResult<Option<PublicQuiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(id).cloned().map(PublicQuiz::from))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.get_mut(id) {
            Some(quiz) if quiz.is_active => {
                quiz.is_active = false;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySubmissionRepository {
    submissions: Arc<RwLock<HashMap<String, Submission>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.submissions.read().await.len()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn create(&self, submission: Submission) -> AppResult<Submission> {
        let mut submissions = self.submissions.write().await;
        if submissions.contains_key(&submission.id) {
            return Err(AppError::DatabaseError(format!(
                "duplicate key: submission '{}'",
                submission.id
            )));
        }

        submissions.insert(submission.id.clone(), submission.clone());
        Ok(submission)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Submission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.get(id).cloned())
    }
}

pub fn make_quiz(title: &str) -> Quiz {
    Quiz::new(
        title,
        None,
        vec![
            Question::new(QuestionType::Text, "Capital of France?", vec![], "paris", None),
            Question::new(QuestionType::Text, "Capital of Spain?", vec![], "Madrid", Some(2)),
            Question::new(QuestionType::Text, "Capital of Italy?", vec![], "Rome", Some(1)),
        ],
    )
}

pub struct TestContext {
    pub state: AppState,
    pub quizzes: Arc<InMemoryQuizRepository>,
    pub submissions: Arc<InMemorySubmissionRepository>,
}

pub fn test_context() -> TestContext {
    let quizzes = Arc::new(InMemoryQuizRepository::new());
    let submissions = Arc::new(InMemorySubmissionRepository::new());
    let state = AppState::from_repositories(
        Config::from_env(),
        quizzes.clone(),
        submissions.clone(),
    );

    TestContext {
        state,
        quizzes,
        submissions,
    }
}
