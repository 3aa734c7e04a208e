//! Knowledge store capabilities consumed by the RAG pipeline
//!
//! The pipeline only ever sees these traits. `Database` is the production
//! implementation; `InMemoryKnowledgeStore` backs tests and local experiments.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::Result;
use crate::models::NewKnowledgeDocument;
use crate::models::ScoredDocument;
use crate::models::UpdateArticle;

/// Read side of the knowledge base: ranked full-text search and recent updates
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    /// Return up to `limit` documents matching `query`, by descending relevance score
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ScoredDocument>>;

    /// Return the `limit` most recently published updates, newest first
    async fn latest_updates(&self, limit: usize) -> Result<Vec<UpdateArticle>>;
}

/// Write side used by ingestion
#[async_trait]
pub trait KnowledgeWriter: Send + Sync {
    async fn topic_exists(&self, topic: &str) -> Result<bool>;

    async fn insert_document(&self, document: &NewKnowledgeDocument) -> Result<()>;

    /// Insert an update article. Returns `false` if its link was already present.
    async fn insert_update(&self, article: &UpdateArticle) -> Result<bool>;
}

/// Lowercased alphanumeric terms
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// In-process store with a simple term-frequency ranking
#[derive(Default)]
pub struct InMemoryKnowledgeStore {
    documents: RwLock<Vec<NewKnowledgeDocument>>,
    updates: RwLock<Vec<UpdateArticle>>,
}

impl InMemoryKnowledgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with documents
    pub fn with_documents(documents: Vec<NewKnowledgeDocument>) -> Self {
        Self {
            documents: RwLock::new(documents),
            updates: RwLock::new(Vec::new()),
        }
    }

    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Sum of query-term occurrences, damped by document length
    fn score(query_terms: &[String], content: &str) -> f32 {
        let terms = tokenize(content);
        if terms.is_empty() {
            return 0.0;
        }

        let mut frequencies: HashMap<&str, usize> = HashMap::new();
        for term in &terms {
            *frequencies.entry(term.as_str()).or_default() += 1;
        }

        let hits: usize = query_terms
            .iter()
            .map(|term| frequencies.get(term.as_str()).copied().unwrap_or(0))
            .sum();

        hits as f32 / (terms.len() as f32).sqrt()
    }
}

#[async_trait]
impl KnowledgeStore for InMemoryKnowledgeStore {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ScoredDocument>> {
        let mut query_terms = tokenize(query);
        query_terms.sort();
        query_terms.dedup();

        let documents = self.documents.read().await;
        let mut results: Vec<ScoredDocument> = documents
            .iter()
            .filter_map(|doc| {
                let score = Self::score(&query_terms, &doc.content);
                (score > 0.0).then(|| ScoredDocument::new(doc.as_knowledge(), score))
            })
            .collect();

        // Stable: equal scores keep insertion order
        results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        results.truncate(limit);
        Ok(results)
    }

    async fn latest_updates(&self, limit: usize) -> Result<Vec<UpdateArticle>> {
        let mut updates = self.updates.read().await.clone();
        updates.sort_by(|a, b| b.date_published.cmp(&a.date_published));
        updates.truncate(limit);
        Ok(updates)
    }
}

#[async_trait]
impl KnowledgeWriter for InMemoryKnowledgeStore {
    async fn topic_exists(&self, topic: &str) -> Result<bool> {
        Ok(self.documents.read().await.iter().any(|d| d.topic == topic))
    }

    async fn insert_document(&self, document: &NewKnowledgeDocument) -> Result<()> {
        self.documents.write().await.push(document.clone());
        Ok(())
    }

    async fn insert_update(&self, article: &UpdateArticle) -> Result<bool> {
        let mut updates = self.updates.write().await;
        if updates
            .iter()
            .any(|existing| existing.original_link == article.original_link)
        {
            return Ok(false);
        }
        updates.push(article.clone());
        Ok(true)
    }
}
