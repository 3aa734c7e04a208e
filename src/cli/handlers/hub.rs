//! Knowledge hub handler

use crate::app::ArthaVivek;
use crate::cli::output::print_updates;
use crate::cli::output::print_warning;
use crate::Result;

pub async fn handle_updates_command(app: &ArthaVivek, limit: Option<usize>) -> Result<()> {
    if !app.store_available() {
        print_warning("Knowledge store is not available; showing no updates.");
    }

    let updates = app.hub().latest(limit).await;
    print_updates(&updates);
    Ok(())
}
