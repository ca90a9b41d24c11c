use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoQuizRepository, MongoSubmissionRepository, QuizRepository, SubmissionRepository,
    },
    services::{QuizService, SubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub submission_service: Arc<SubmissionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        log::info!("Using database '{}'", db.db_name());

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;

        let submission_repository = Arc::new(MongoSubmissionRepository::new(&db));
        submission_repository.ensure_indexes().await?;

        Ok(Self::from_repositories(
            config,
            quiz_repository,
            submission_repository,
        ))
    }

    /// Wires services over already-built repositories.
    pub fn from_repositories(
        config: Config,
        quiz_repository: Arc<dyn QuizRepository>,
        submission_repository: Arc<dyn SubmissionRepository>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(quiz_repository.clone()));
        let submission_service = Arc::new(SubmissionService::new(
            quiz_repository,
            submission_repository,
        ));

        Self {
            quiz_service,
            submission_service,
            config: Arc::new(config),
        }
    }
}
