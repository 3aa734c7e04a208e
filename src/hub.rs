//! Knowledge hub: the latest financial news and policy updates

use std::sync::Arc;

use tracing::warn;

use crate::models::UpdateArticle;
use crate::store::KnowledgeStore;

/// Read-only view over recent update articles
pub struct KnowledgeHub {
    store: Option<Arc<dyn KnowledgeStore>>,
    default_limit: usize,
}

impl KnowledgeHub {
    pub fn new(store: Option<Arc<dyn KnowledgeStore>>, default_limit: usize) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    /// Up to `limit` updates, newest first. Empty when the store is absent or fails.
    pub async fn latest(&self, limit: Option<usize>) -> Vec<UpdateArticle> {
        let limit = limit.unwrap_or(self.default_limit);
        let Some(store) = &self.store else {
            warn!("Knowledge store unavailable, no updates to show");
            return Vec::new();
        };

        match store.latest_updates(limit).await {
            Ok(updates) => updates,
            Err(e) => {
                warn!("Error fetching latest updates: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::errors::ArthaVivekError;
    use crate::errors::Result;
    use crate::models::ScoredDocument;
    use crate::store::InMemoryKnowledgeStore;
    use crate::store::KnowledgeWriter;

    struct BrokenStore;

    #[async_trait]
    impl KnowledgeStore for BrokenStore {
        async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<ScoredDocument>> {
            Err(ArthaVivekError::StoreUnavailable)
        }

        async fn latest_updates(&self, _limit: usize) -> Result<Vec<UpdateArticle>> {
            Err(ArthaVivekError::StoreUnavailable)
        }
    }

    fn article(day: u32) -> UpdateArticle {
        UpdateArticle {
            title: format!("Update {day}"),
            source: "RBI".to_string(),
            date_published: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
            summary: "Policy news".to_string(),
            original_link: format!("https://example.org/{day}"),
        }
    }

    #[tokio::test]
    async fn test_latest_uses_default_limit() {
        let store = Arc::new(InMemoryKnowledgeStore::new());
        for day in 1..=7 {
            store.insert_update(&article(day)).await.unwrap();
        }

        let hub = KnowledgeHub::new(Some(store as Arc<dyn KnowledgeStore>), 5);
        let updates = hub.latest(None).await;
        assert_eq!(updates.len(), 5);
        assert_eq!(updates[0].title, "Update 7");
        assert_eq!(hub.latest(Some(2)).await.len(), 2);
    }

    #[tokio::test]
    async fn test_latest_without_store_is_empty() {
        let hub = KnowledgeHub::new(None, 5);
        assert!(hub.latest(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_latest_swallows_store_errors() {
        let hub = KnowledgeHub::new(Some(Arc::new(BrokenStore) as Arc<dyn KnowledgeStore>), 5);
        assert!(hub.latest(Some(3)).await.is_empty());
    }
}
