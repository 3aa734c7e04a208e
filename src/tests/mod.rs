//! Pipeline-level tests with in-process fakes for the store and the LLM

pub mod database_tests;

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::database::Database;
use crate::errors::ArthaVivekError;
use crate::errors::Result;
use crate::llm::GenerationRequest;
use crate::llm::GenerationService;
use crate::models::KnowledgeDocument;
use crate::models::ScoredDocument;
use crate::models::UpdateArticle;
use crate::store::KnowledgeStore;

/// Store returning a fixed result set, truncated to the requested limit
#[derive(Default)]
pub struct StubStore {
    pub results: Vec<ScoredDocument>,
    pub updates: Vec<UpdateArticle>,
    pub searches: AtomicUsize,
}

impl StubStore {
    pub fn with_results(results: Vec<ScoredDocument>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KnowledgeStore for StubStore {
    async fn search(&self, _query: &str, limit: usize) -> Result<Vec<ScoredDocument>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.iter().take(limit).cloned().collect())
    }

    async fn latest_updates(&self, limit: usize) -> Result<Vec<UpdateArticle>> {
        Ok(self.updates.iter().take(limit).cloned().collect())
    }
}

/// Store whose every query fails
pub struct FailingStore;

#[async_trait]
impl KnowledgeStore for FailingStore {
    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<ScoredDocument>> {
        Err(ArthaVivekError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn latest_updates(&self, _limit: usize) -> Result<Vec<UpdateArticle>> {
        Err(ArthaVivekError::Database(sqlx::Error::PoolClosed))
    }
}

/// Generator that fails `failures` times, then answers; records every request
pub struct ScriptedGenerator {
    answer: String,
    failures: usize,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn answering(answer: &str) -> Self {
        Self::failing_then(0, answer)
    }

    pub fn always_failing() -> Self {
        Self::failing_then(usize::MAX, "")
    }

    pub fn failing_then(failures: usize, answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            failures,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationService for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if call < self.failures {
            return Err(ArthaVivekError::LlmError("request timed out".to_string()));
        }
        Ok(self.answer.clone())
    }
}

pub fn scored(
    topic: &str,
    content: &str,
    videos: &[&str],
    blogs: &[&str],
    score: f32,
) -> ScoredDocument {
    ScoredDocument::new(KnowledgeDocument::new(topic, content, videos, blogs), score)
}

pub fn as_store<S: KnowledgeStore + 'static>(store: &Arc<S>) -> Option<Arc<dyn KnowledgeStore>> {
    Some(store.clone() as Arc<dyn KnowledgeStore>)
}

/// Test helper to create a test database connection
pub async fn create_test_database() -> Result<Database> {
    let config = AppConfig::load()?;
    let database = Database::from_config(&config).await?;
    database.init_schema().await?;
    Ok(database)
}
