use super::Database;
use crate::models::UpdateArticle;
use crate::Result;

impl Database {
    /// Most recently published updates, newest first
    pub async fn list_latest_updates(&self, limit: usize) -> Result<Vec<UpdateArticle>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let updates = sqlx::query_as::<_, UpdateArticle>(
            r"
            SELECT title, source, date_published, summary, original_link
            FROM updates
            ORDER BY date_published DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(updates)
    }

    /// Insert an article unless its link is already stored
    pub async fn insert_update_article(&self, article: &UpdateArticle) -> Result<bool> {
        let result = sqlx::query(
            r"
            INSERT INTO updates (title, source, date_published, summary, original_link)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (original_link) DO NOTHING
            ",
        )
        .bind(&article.title)
        .bind(&article.source)
        .bind(article.date_published)
        .bind(&article.summary)
        .bind(&article.original_link)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_updates(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM updates")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
