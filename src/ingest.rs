//! Loads curated knowledge records and update articles into the store

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::error;
use tracing::info;
use tracing::warn;

use crate::errors::ArthaVivekError;
use crate::errors::Result;
use crate::llm::prompts::build_summary_request;
use crate::llm::GenerationService;
use crate::models::IngestRecord;
use crate::models::NewKnowledgeDocument;
use crate::models::UpdateArticle;
use crate::store::KnowledgeWriter;

/// Counts from one ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl IngestReport {
    pub fn total(&self) -> usize {
        self.inserted + self.skipped + self.failed
    }
}

/// Read a JSON array of [`IngestRecord`]s
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<IngestRecord>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a JSON array of [`UpdateArticle`]s
pub fn load_updates<P: AsRef<Path>>(path: P) -> Result<Vec<UpdateArticle>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub struct Ingestor {
    writer: Arc<dyn KnowledgeWriter>,
    summarizer: Option<Arc<dyn GenerationService>>,
    summary_temperature: f32,
}

impl Ingestor {
    pub fn new(writer: Arc<dyn KnowledgeWriter>) -> Self {
        Self {
            writer,
            summarizer: None,
            summary_temperature: 0.5,
        }
    }

    /// Summarise `source_text` records with `summarizer` before storing them
    #[must_use]
    pub fn with_summarizer(mut self, summarizer: Arc<dyn GenerationService>, temperature: f32) -> Self {
        self.summarizer = Some(summarizer);
        self.summary_temperature = temperature;
        self
    }

    /// Insert records whose topic is new. A failing record is counted and skipped.
    pub async fn ingest_records(&self, records: Vec<IngestRecord>) -> Result<IngestReport> {
        let mut report = IngestReport::default();
        let total = records.len();
        info!("Starting ingestion of {} records", total);

        for (idx, record) in records.into_iter().enumerate() {
            info!("Processing record {}/{}: {}", idx + 1, total, record.topic);

            if record.topic.trim().is_empty() {
                warn!("Record {} has no topic", idx + 1);
                report.failed += 1;
                continue;
            }

            match self.writer.topic_exists(&record.topic).await {
                Ok(true) => {
                    info!("Skipped: '{}' already exists", record.topic);
                    report.skipped += 1;
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to check '{}': {}", record.topic, e);
                    report.failed += 1;
                    continue;
                }
            }

            let content = match self.resolve_content(&record).await {
                Ok(content) => content,
                Err(e) => {
                    error!("Failed to prepare '{}': {}", record.topic, e);
                    report.failed += 1;
                    continue;
                }
            };

            let document = NewKnowledgeDocument::from_record(record, content);
            match self.writer.insert_document(&document).await {
                Ok(()) => {
                    info!("Ingested: {}", document.topic);
                    report.inserted += 1;
                }
                Err(e) => {
                    error!("Failed to store '{}': {}", document.topic, e);
                    report.failed += 1;
                }
            }
        }

        info!(
            "Ingestion finished: {} inserted, {} skipped, {} failed",
            report.inserted, report.skipped, report.failed
        );
        Ok(report)
    }

    /// Insert update articles; links already stored count as skipped
    pub async fn ingest_updates(&self, articles: Vec<UpdateArticle>) -> Result<IngestReport> {
        let mut report = IngestReport::default();

        for article in articles {
            match self.writer.insert_update(&article).await {
                Ok(true) => report.inserted += 1,
                Ok(false) => {
                    info!("Skipped: update {} already exists", article.original_link);
                    report.skipped += 1;
                }
                Err(e) => {
                    error!("Failed to store update '{}': {}", article.title, e);
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    async fn resolve_content(&self, record: &IngestRecord) -> Result<String> {
        if let Some(content) = record.content.as_deref().map(str::trim) {
            if !content.is_empty() {
                return Ok(content.to_string());
            }
        }

        let source_text = record
            .source_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ArthaVivekError::InvalidInput("record has no content".to_string()))?;

        let summarizer = self.summarizer.as_ref().ok_or_else(|| {
            ArthaVivekError::InvalidInput("record needs summarising but no summariser is configured".to_string())
        })?;

        let request = build_summary_request(source_text, self.summary_temperature);
        let summary = summarizer.generate(&request).await?;
        Ok(summary.trim().to_string())
    }
}
