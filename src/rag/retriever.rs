//! Ranked retrieval against the knowledge store

use std::sync::Arc;

use tracing::debug;
use tracing::warn;

use super::context::ContextAssembler;
use super::context::LinkAggregator;
use super::context::NO_MATCH_CONTEXT;
use super::context::RETRIEVAL_ERROR_CONTEXT;
use super::RetrievalOutcome;
use super::RetrievalResult;
use crate::models::ScoredDocument;
use crate::store::KnowledgeStore;

/// Retriever for finding the passages most relevant to a question
pub struct Retriever {
    store: Arc<dyn KnowledgeStore>,
    top_k: usize,
    assembler: ContextAssembler,
}

impl Retriever {
    pub fn new(store: Arc<dyn KnowledgeStore>, top_k: usize) -> Self {
        Self {
            store,
            top_k: top_k.max(1),
            assembler: ContextAssembler::default(),
        }
    }

    /// Retrieve context and links for `query`. Never fails: store errors
    /// degrade to the retrieval-error context with no links.
    pub async fn retrieve(&self, query: &str) -> RetrievalResult {
        if query.trim().is_empty() {
            debug!("Blank query, skipping store search");
            return no_matches();
        }

        let mut results = match self.store.search(query, self.top_k).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Knowledge store retrieval error: {}", e);
                return RetrievalResult {
                    context_text: RETRIEVAL_ERROR_CONTEXT.to_string(),
                    videos: Vec::new(),
                    blogs: Vec::new(),
                    outcome: RetrievalOutcome::Failed,
                };
            }
        };

        rank(&mut results, self.top_k);
        debug!("Retrieved {} documents", results.len());

        if results.is_empty() {
            return no_matches();
        }

        let (videos, blogs) = LinkAggregator::collect(&results);
        RetrievalResult {
            context_text: self.assembler.assemble(&results),
            videos,
            blogs,
            outcome: RetrievalOutcome::Matched(results.len()),
        }
    }
}

/// Descending score, stable for ties, capped at `top_k`
fn rank(results: &mut Vec<ScoredDocument>, top_k: usize) {
    results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    results.truncate(top_k);
}

fn no_matches() -> RetrievalResult {
    RetrievalResult {
        context_text: NO_MATCH_CONTEXT.to_string(),
        videos: Vec::new(),
        blogs: Vec::new(),
        outcome: RetrievalOutcome::NoMatches,
    }
}
