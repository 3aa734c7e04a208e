//! API server handler

use crate::api::serve_api;
use crate::app::ArthaVivek;
use crate::cli::output::print_warning;
use crate::AppConfig;
use crate::Result;

pub async fn handle_serve_api(
    app: &ArthaVivek,
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let cors = cors || config.server.enable_cors;

    println!("🚀 Starting ArthaVivek API Server");
    println!("=================================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });
    if !app.store_available() {
        print_warning("Knowledge store is not available; advice requests will report it.");
    }
    println!();

    serve_api(app, &host, port, cors).await
}
