use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};
use secrecy::ExposeSecret;
use std::time::Duration;

use crate::{
    config::Config,
    errors::AppResult,
    models::domain::{Quiz, Submission},
};

/// Handle on the quiz database. Owns the two collections the service
/// reads and writes: quiz definitions and scored submissions, both named
/// from `Config`.
#[derive(Clone)]
pub struct Database {
    client: Client,
    db: mongodb::Database,
    quizzes_collection: String,
    submissions_collection: String,
}

impl Database {
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_options(client_options(config).await?)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        log::info!(
            "Connected to MongoDB database '{}' (quizzes: '{}', submissions: '{}')",
            config.mongo_db_name,
            config.quizzes_collection,
            config.submissions_collection
        );

        Ok(Self::with_client(client, config))
    }

    /// Binds an existing client to the configured database and collections.
    /// No round trip to the server happens here.
    pub fn with_client(client: Client, config: &Config) -> Self {
        let db = client.database(&config.mongo_db_name);
        Self {
            client,
            db,
            quizzes_collection: config.quizzes_collection.clone(),
            submissions_collection: config.submissions_collection.clone(),
        }
    }

    pub fn quizzes(&self) -> Collection<Quiz> {
        self.db.collection(&self.quizzes_collection)
    }

    pub fn submissions(&self) -> Collection<Submission> {
        self.db.collection(&self.submissions_collection)
    }

    pub async fn health_check(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn db_name(&self) -> &str {
        self.db.name()
    }
}

async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(config.mongo_conn_string.expose_secret()).await?;

    let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
    options.server_api = Some(server_api);
    options.app_name = Some("quiz-server".to_string());
    options.max_pool_size = Some(10);
    options.min_pool_size = Some(2);
    options.connect_timeout = Some(Duration::from_secs(5));
    options.server_selection_timeout = Some(Duration::from_secs(5));

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_structure() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[tokio::test]
    async fn client_options_carry_pool_and_timeouts() {
        let config = Config::test_config();
        let options = client_options(&config).await.unwrap();

        assert_eq!(options.app_name.as_deref(), Some("quiz-server"));
        assert_eq!(options.max_pool_size, Some(10));
        assert_eq!(options.min_pool_size, Some(2));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn collections_follow_configured_names() {
        let mut config = Config::test_config();
        config.quizzes_collection = "quizzes_v2".to_string();
        config.submissions_collection = "attempts".to_string();

        let client = Client::with_options(client_options(&config).await.unwrap()).unwrap();
        let db = Database::with_client(client, &config);

        assert_eq!(db.db_name(), "quizdb-test");
        assert_eq!(db.quizzes().name(), "quizzes_v2");
        assert_eq!(db.submissions().name(), "attempts");
        assert_eq!(db.quizzes().namespace().db, "quizdb-test");
    }
}
