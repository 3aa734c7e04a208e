//! Context assembly and link aggregation over retrieved documents

use std::collections::HashSet;

use crate::models::ScoredDocument;

/// Joins passages in the context block
pub const CONTEXT_SEPARATOR: &str = "\n---\n";

/// Context used when the store had nothing relevant
pub const NO_MATCH_CONTEXT: &str = "No specific information found. Please provide general advice.";

/// Context used when the store could not be queried
pub const RETRIEVAL_ERROR_CONTEXT: &str =
    "Error retrieving information. Please provide general advice.";

/// Assembler for creating context from search results
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    separator: String,
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self::new(CONTEXT_SEPARATOR)
    }
}

impl ContextAssembler {
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Join document contents in the order given.
    ///
    /// Falls back to [`NO_MATCH_CONTEXT`] when there is nothing to join.
    #[must_use]
    pub fn assemble(&self, results: &[ScoredDocument]) -> String {
        let context = results
            .iter()
            .map(|result| result.document.content.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator);

        if context.is_empty() {
            NO_MATCH_CONTEXT.to_string()
        } else {
            context
        }
    }
}

/// Collects related links across documents, dropping repeats.
///
/// First occurrence wins, so output order follows retrieval order.
#[derive(Debug, Default)]
pub struct LinkAggregator {
    videos: Vec<String>,
    blogs: Vec<String>,
    seen_videos: HashSet<String>,
    seen_blogs: HashSet<String>,
}

impl LinkAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, result: &ScoredDocument) {
        push_unique(
            &mut self.videos,
            &mut self.seen_videos,
            &result.document.related_videos,
        );
        push_unique(
            &mut self.blogs,
            &mut self.seen_blogs,
            &result.document.related_blogs,
        );
    }

    /// `(videos, blogs)`
    pub fn finish(self) -> (Vec<String>, Vec<String>) {
        (self.videos, self.blogs)
    }

    pub fn collect(results: &[ScoredDocument]) -> (Vec<String>, Vec<String>) {
        let mut aggregator = Self::new();
        for result in results {
            aggregator.add(result);
        }
        aggregator.finish()
    }
}

fn push_unique(out: &mut Vec<String>, seen: &mut HashSet<String>, links: &[String]) {
    for link in links {
        if seen.insert(link.clone()) {
            out.push(link.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KnowledgeDocument;

    fn scored(content: &str, videos: &[&str], blogs: &[&str], score: f32) -> ScoredDocument {
        ScoredDocument::new(KnowledgeDocument::new("t", content, videos, blogs), score)
    }

    #[test]
    fn test_assemble_joins_with_separator() {
        let results = vec![scored("first", &[], &[], 0.9), scored("second", &[], &[], 0.5)];
        let context = ContextAssembler::default().assemble(&results);
        assert_eq!(context, "first\n---\nsecond");
    }

    #[test]
    fn test_assemble_empty_uses_fallback() {
        assert_eq!(ContextAssembler::default().assemble(&[]), NO_MATCH_CONTEXT);
    }

    #[test]
    fn test_assemble_single_blank_document_uses_fallback() {
        let results = vec![scored("", &[], &[], 0.1)];
        assert_eq!(ContextAssembler::default().assemble(&results), NO_MATCH_CONTEXT);
    }

    #[test]
    fn test_links_deduplicated_in_first_seen_order() {
        let results = vec![
            scored("a", &["v1", "v2"], &["b1"], 0.9),
            scored("b", &["v2", "v3"], &["b1", "b2"], 0.5),
        ];
        let (videos, blogs) = LinkAggregator::collect(&results);
        assert_eq!(videos, vec!["v1", "v2", "v3"]);
        assert_eq!(blogs, vec!["b1", "b2"]);
    }

    #[test]
    fn test_links_dedup_within_one_document() {
        let results = vec![scored("a", &["v1", "v1"], &[], 0.9)];
        let (videos, blogs) = LinkAggregator::collect(&results);
        assert_eq!(videos, vec!["v1"]);
        assert!(blogs.is_empty());
    }
}
