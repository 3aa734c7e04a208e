//! Advice pipeline: Retrieve -> Prompt -> Generate

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::llm::GenerationRequest;
use crate::llm::GenerationService;
use crate::models::Persona;
use crate::rag::prompts::build_advice_prompt;
use crate::rag::RetrievalOutcome;
use crate::rag::Retriever;
use crate::store::KnowledgeStore;
use crate::translate::Translation;

/// Answer returned when no knowledge store is connected
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Error: Database connection is not available.";

/// Answer returned when generation fails
pub const GENERATION_FAILED_MESSAGE: &str =
    "Sorry, I am having trouble processing your request right now.";

/// How an advice request was served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceStatus {
    /// Generated from retrieved (or no-match fallback) context
    Answered,
    /// Generated, but retrieval failed so the context was the error fallback
    Degraded,
    StoreUnavailable,
    GenerationFailed,
}

impl AdviceStatus {
    /// Whether `answer` holds generated text
    pub const fn is_generated(self) -> bool {
        matches!(self, AdviceStatus::Answered | AdviceStatus::Degraded)
    }
}

/// Result of one advice request. Always populated, even on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceResult {
    pub answer: String,
    pub videos: Vec<String>,
    pub blogs: Vec<String>,
    pub status: AdviceStatus,
    /// Rendering of `answer` in the requested language, when one was asked for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Translation>,
}

impl AdviceResult {
    fn fixed(answer: &str, status: AdviceStatus) -> Self {
        Self {
            answer: answer.to_string(),
            videos: Vec::new(),
            blogs: Vec::new(),
            status,
            translation: None,
        }
    }
}

/// Tunables for generation
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub top_k: usize,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Extra attempts after a failed generation
    pub max_retries: u32,
    /// Delay before the first retry; doubles each attempt
    pub retry_backoff: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            temperature: 0.7,
            max_tokens: None,
            max_retries: 0,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl PipelineOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            top_k: config.top_k(),
            temperature: config.llm.temperature,
            max_tokens: config.llm.max_tokens,
            max_retries: config.llm.max_retries,
            retry_backoff: Duration::from_millis(config.llm.retry_backoff_ms),
        }
    }
}

/// Stateless advice orchestrator; safe to share across concurrent requests
pub struct AdvicePipeline {
    retriever: Option<Retriever>,
    generator: Arc<dyn GenerationService>,
    options: PipelineOptions,
}

impl AdvicePipeline {
    /// Create a pipeline with default options. `store` is `None` when the
    /// knowledge store could not be reached at startup.
    pub fn new(
        store: Option<Arc<dyn KnowledgeStore>>,
        generator: Arc<dyn GenerationService>,
    ) -> Self {
        Self::with_options(store, generator, PipelineOptions::default())
    }

    pub fn with_options(
        store: Option<Arc<dyn KnowledgeStore>>,
        generator: Arc<dyn GenerationService>,
        options: PipelineOptions,
    ) -> Self {
        let retriever = store.map(|store| Retriever::new(store, options.top_k));
        Self {
            retriever,
            generator,
            options,
        }
    }

    pub fn from_config(
        config: &AppConfig,
        store: Option<Arc<dyn KnowledgeStore>>,
        generator: Arc<dyn GenerationService>,
    ) -> Self {
        Self::with_options(store, generator, PipelineOptions::from_config(config))
    }

    pub fn store_available(&self) -> bool {
        self.retriever.is_some()
    }

    /// Answer `query` for `persona`. Never fails; failures surface as a
    /// fixed answer and a non-`Answered` status.
    pub async fn get_advice(&self, query: &str, persona: Persona) -> AdviceResult {
        info!("Processing advice query for {}: {}", persona.as_str(), query);

        let Some(retriever) = &self.retriever else {
            warn!("Knowledge store unavailable, skipping retrieval and generation");
            return AdviceResult::fixed(STORE_UNAVAILABLE_MESSAGE, AdviceStatus::StoreUnavailable);
        };

        // Step 1: Retrieve context and links
        debug!("Step 1: Retrieving documents");
        let retrieval = retriever.retrieve(query).await;
        debug!("Retrieval outcome: {:?}", retrieval.outcome);

        // Step 2: Build prompt
        debug!("Step 2: Building prompt");
        let prompt = build_advice_prompt(&retrieval.context_text, query, persona);
        let request = GenerationRequest::new(prompt.instruction, prompt.message, self.options.temperature)
            .with_max_tokens(self.options.max_tokens);

        // Step 3: Generate answer
        debug!("Step 3: Generating answer");
        match self.generate_with_retry(&request).await {
            Ok(answer) => {
                let status = if retrieval.outcome == RetrievalOutcome::Failed {
                    AdviceStatus::Degraded
                } else {
                    AdviceStatus::Answered
                };
                info!("Advice query completed ({:?})", status);
                AdviceResult {
                    answer,
                    videos: retrieval.videos,
                    blogs: retrieval.blogs,
                    status,
                    translation: None,
                }
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                AdviceResult::fixed(GENERATION_FAILED_MESSAGE, AdviceStatus::GenerationFailed)
            }
        }
    }

    async fn generate_with_retry(&self, request: &GenerationRequest) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.generator.generate(request).await {
                Ok(answer) => return Ok(answer),
                Err(e) if attempt < self.options.max_retries => {
                    let delay = self
                        .options
                        .retry_backoff
                        .saturating_mul(2u32.saturating_pow(attempt));
                    attempt += 1;
                    warn!(
                        "Generation attempt {} failed: {}; retrying in {:?}",
                        attempt, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
