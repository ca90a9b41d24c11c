use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{PublicQuiz, Quiz},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    /// Active quizzes, newest first.
    async fn list_active(&self) -> AppResult<Vec<Quiz>>;
    /// Full record including every question's correct answer. Only the
    /// scoring path should call this.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    /// Answer-stripped record, whether or not the quiz is still active.
    async fn find_public_by_id(&self, id: &str) -> AppResult<Option<PublicQuiz>>;
    /// Marks an active quiz inactive. Returns false when nothing changed.
    async fn soft_delete(&self, id: &str) -> AppResult<bool>;
    async fn ping(&self) -> AppResult<()>;
}

const NEWEST_FIRST: i32 = -1;

fn active_filter() -> Document {
    doc! { "is_active": true }
}

fn active_quiz_filter(id: &str) -> Document {
    doc! { "id": id, "is_active": true }
}

/// `created_at` is a BSON date, so this orders by time.
fn newest_first() -> Document {
    doc! { "created_at": NEWEST_FIRST }
}

/// Drops the answer key from every embedded question.
fn public_projection() -> Document {
    doc! { "questions.correct_answer": 0 }
}

pub struct MongoQuizRepository {
    db: Database,
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            collection: db.quizzes(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let active_index = IndexModel::builder()
            .keys(doc! { "is_active": 1, "created_at": NEWEST_FIRST })
            .options(
                IndexOptions::builder()
                    .name("active_newest".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(active_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn list_active(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self
            .collection
            .find(active_filter())
            .sort(newest_first())
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn find_public_by_id(&self, id: &str) -> AppResult<Option<PublicQuiz>> {
        let quiz = self
            .collection
            .clone_with_type::<PublicQuiz>()
            .find_one(doc! { "id": id })
            .projection(public_projection())
            .await?;
        Ok(quiz)
    }

    async fn soft_delete(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                active_quiz_filter(id),
                doc! { "$set": { "is_active": false } },
            )
            .await?;
        Ok(result.modified_count > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.health_check().await
    }
}
