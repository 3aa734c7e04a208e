//! Database initialization handler

use crate::app::ArthaVivek;
use crate::cli::output::print_info;
use crate::cli::output::print_success;
use crate::ArthaVivekError;
use crate::Result;

/// Create the knowledge tables and indexes
pub async fn handle_init_command(app: &ArthaVivek) -> Result<()> {
    let database = app.database().ok_or(ArthaVivekError::StoreUnavailable)?;

    print_info("🗄️  Initializing ArthaVivek database...");
    database.init_schema().await?;
    database.verify_schema_or_error().await?;

    print_success("Tables created: knowledge_base, updates");
    print_success("Full-text index ready");
    print_info(&format!(
        "Knowledge passages: {}, updates: {}",
        database.count_knowledge().await?,
        database.count_updates().await?
    ));
    Ok(())
}
