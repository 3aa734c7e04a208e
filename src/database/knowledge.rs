use super::Database;
use crate::models::KnowledgeDocument;
use crate::models::NewKnowledgeDocument;
use crate::models::ScoredDocument;
use crate::Result;

#[derive(Debug, sqlx::FromRow)]
struct KnowledgeSearchRow {
    topic: String,
    content: String,
    related_videos: Vec<String>,
    related_blogs: Vec<String>,
    score: f32,
}

impl From<KnowledgeSearchRow> for ScoredDocument {
    fn from(row: KnowledgeSearchRow) -> Self {
        let document = KnowledgeDocument {
            topic: row.topic,
            content: row.content,
            related_videos: row.related_videos,
            related_blogs: row.related_blogs,
        }
        .sanitized();
        Self::new(document, row.score)
    }
}

impl Database {
    /// Ranked full-text search over knowledge passages.
    ///
    /// Query terms are OR-ed so any matching term qualifies a document; ties in
    /// rank fall back to insertion time, then topic.
    pub async fn search_knowledge(&self, query: &str, limit: usize) -> Result<Vec<ScoredDocument>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = sqlx::query_as::<_, KnowledgeSearchRow>(
            r"
            WITH q AS (
                SELECT NULLIF(replace(plainto_tsquery('english', $1)::text, '&', '|'), '')::tsquery AS tsq
            )
            SELECT
                kb.topic,
                kb.content,
                kb.related_videos,
                kb.related_blogs,
                ts_rank(kb.content_tsv, q.tsq) AS score
            FROM knowledge_base kb, q
            WHERE q.tsq IS NOT NULL AND kb.content_tsv @@ q.tsq
            ORDER BY score DESC, kb.created_at ASC, kb.topic ASC
            LIMIT $2
            ",
        )
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Full-text search returned {} rows", rows.len());
        Ok(rows.into_iter().map(ScoredDocument::from).collect())
    }

    pub async fn knowledge_topic_exists(&self, topic: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM knowledge_base WHERE topic = $1)",
        )
        .bind(topic)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    pub async fn insert_knowledge(&self, document: &NewKnowledgeDocument) -> Result<()> {
        sqlx::query(
            r"
            INSERT INTO knowledge_base (topic, content, tags, personas, related_videos, related_blogs)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&document.topic)
        .bind(&document.content)
        .bind(&document.tags)
        .bind(&document.personas)
        .bind(&document.related_videos)
        .bind(&document.related_blogs)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of stored knowledge passages
    pub async fn count_knowledge(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM knowledge_base")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
