//! ArthaVivek: retrieval-augmented financial guidance for India's youth
//!
//! A question and a persona go in; ranked passages from the knowledge base are
//! folded into a persona-aware prompt, and the generated answer comes back with
//! the related videos and blogs of the passages it was grounded on.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod hub;
pub mod ingest;
pub mod llm;
pub mod logging;
pub mod models;
pub mod rag;
pub mod store;
pub mod translate;

#[cfg(test)]
pub mod tests;

pub use app::ArthaVivek;
pub use config::AppConfig;
pub use errors::*;
pub use models::KnowledgeDocument;
pub use models::Persona;
pub use models::ScoredDocument;
pub use models::UpdateArticle;
pub use rag::AdvicePipeline;
pub use rag::AdviceResult;
pub use rag::AdviceStatus;
