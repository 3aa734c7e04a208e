//! Ingestion handlers

use std::path::Path;

use crate::app::ArthaVivek;
use crate::cli::output::print_info;
use crate::cli::output::print_ingest_report;
use crate::ingest::load_records;
use crate::ingest::load_updates;
use crate::Result;

pub async fn handle_ingest_knowledge(app: &ArthaVivek, file: &Path, no_summarize: bool) -> Result<()> {
    let records = load_records(file)?;
    print_info(&format!(
        "Loaded {} knowledge records from {}",
        records.len(),
        file.display()
    ));

    let report = app
        .ingestor(!no_summarize)?
        .ingest_records(records)
        .await?;
    print_ingest_report("Knowledge ingestion finished", &report);
    Ok(())
}

pub async fn handle_ingest_updates(app: &ArthaVivek, file: &Path) -> Result<()> {
    let articles = load_updates(file)?;
    print_info(&format!(
        "Loaded {} update articles from {}",
        articles.len(),
        file.display()
    ));

    let report = app.ingestor(false)?.ingest_updates(articles).await?;
    print_ingest_report("Updates ingestion finished", &report);
    Ok(())
}
