//! RAG (Retrieval-Augmented Generation) module
//!
//! Answers a financial question in three steps:
//! - Ranked full-text retrieval of knowledge passages
//! - Context and related-link aggregation
//! - Persona-aware prompt construction and generation
//!
//! # Examples
//!
//! ```rust,no_run
//! use arthavivek::app::ArthaVivek;
//! use arthavivek::config::AppConfig;
//! use arthavivek::models::Persona;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let app = ArthaVivek::connect(&config).await?;
//!
//!     let advice = app
//!         .pipeline()?
//!         .get_advice("How can I start investing with ₹500?", Persona::Student)
//!         .await;
//!     println!("{}", advice.answer);
//!     println!("Videos: {:?}", advice.videos);
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod pipeline;
pub mod prompts;
pub mod retriever;

pub use context::ContextAssembler;
pub use context::LinkAggregator;
pub use pipeline::AdvicePipeline;
pub use pipeline::AdviceResult;
pub use pipeline::AdviceStatus;
pub use pipeline::PipelineOptions;
pub use prompts::AdvicePrompt;
pub use retriever::Retriever;

use serde::Serialize;

/// How a retrieval attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalOutcome {
    /// This many documents were folded into the context
    Matched(usize),
    NoMatches,
    /// The store could not be queried; context is the retrieval-error fallback
    Failed,
}

/// Context and links gathered for one query
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievalResult {
    /// Never empty: either joined passages or a fallback sentence
    pub context_text: String,
    pub videos: Vec<String>,
    pub blogs: Vec<String>,
    pub outcome: RetrievalOutcome,
}
