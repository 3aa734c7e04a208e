use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::NewKnowledgeDocument;
use crate::models::ScoredDocument;
use crate::models::UpdateArticle;
use crate::store::KnowledgeStore;
use crate::store::KnowledgeWriter;
use crate::Result;

mod knowledge;
mod schema;
mod updates;

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new database instance from configuration
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        let pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(std::time::Duration::from_secs(config.connection_timeout()));

        let pool = pool_options.connect(config.database_url()).await?;

        tracing::info!(
            "Database pool configured: max_connections={}, min_connections={}",
            config.max_connections(),
            config.min_connections()
        );

        Ok(Self::new(pool))
    }

    /// Round-trip a trivial query to confirm the server is reachable
    pub async fn ping(&self) -> Result<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    /// Get a reference to the database pool for raw queries
    #[must_use]
    pub const fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}

#[async_trait]
impl KnowledgeStore for Database {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ScoredDocument>> {
        self.search_knowledge(query, limit).await
    }

    async fn latest_updates(&self, limit: usize) -> Result<Vec<UpdateArticle>> {
        self.list_latest_updates(limit).await
    }
}

#[async_trait]
impl KnowledgeWriter for Database {
    async fn topic_exists(&self, topic: &str) -> Result<bool> {
        self.knowledge_topic_exists(topic).await
    }

    async fn insert_document(&self, document: &NewKnowledgeDocument) -> Result<()> {
        self.insert_knowledge(document).await
    }

    async fn insert_update(&self, article: &UpdateArticle) -> Result<bool> {
        self.insert_update_article(article).await
    }
}
