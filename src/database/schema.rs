use super::Database;
use crate::ArthaVivekError;
use crate::Result;

const REQUIRED_TABLES: [&str; 2] = ["knowledge_base", "updates"];

impl Database {
    /// Check if database schema is initialized
    /// Returns true if all required tables exist
    pub async fn is_schema_initialized(&self) -> Result<bool> {
        for table_name in REQUIRED_TABLES {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS (
                    SELECT FROM information_schema.tables
                    WHERE table_schema = 'public'
                    AND table_name = $1
                )
                ",
            )
            .bind(table_name)
            .fetch_one(&self.pool)
            .await?;

            if !exists {
                tracing::debug!("Missing required table: {}", table_name);
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Verify database schema or return helpful error
    pub async fn verify_schema_or_error(&self) -> Result<()> {
        if !self.is_schema_initialized().await? {
            return Err(ArthaVivekError::Custom(
                "❌ Database schema not initialized!\n\n\
                 Please run the following command to initialize the database:\n\n\
                 \x1b[1;32marthavivek init\x1b[0m"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Initialize database schema. Safe to run repeatedly.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS knowledge_base (
                id BIGSERIAL PRIMARY KEY,
                topic TEXT UNIQUE NOT NULL,
                content TEXT NOT NULL,
                tags TEXT[] NOT NULL DEFAULT '{}',
                personas TEXT[] NOT NULL DEFAULT '{}',
                related_videos TEXT[] NOT NULL DEFAULT '{}',
                related_blogs TEXT[] NOT NULL DEFAULT '{}',
                content_tsv TSVECTOR GENERATED ALWAYS AS (to_tsvector('english', content)) STORED,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS updates (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                source TEXT NOT NULL,
                date_published TIMESTAMPTZ NOT NULL,
                summary TEXT NOT NULL,
                original_link TEXT UNIQUE NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        self.create_indexes().await?;

        tracing::info!("Database schema initialized");
        Ok(())
    }

    async fn create_indexes(&self) -> Result<()> {
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_knowledge_base_content_tsv ON knowledge_base USING GIN (content_tsv)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_updates_date_published ON updates (date_published DESC)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
