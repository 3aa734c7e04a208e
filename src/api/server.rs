//! HTTP server implementation

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::app::ArthaVivek;
use crate::Result;

/// Start the API server
pub async fn serve_api(app: &ArthaVivek, host: &str, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting ArthaVivek API server...");

    let state = AppState::from_app(app)?;
    let mut router: Router = routes::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        info!("✅ CORS enabled");
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /health             - Health check");
    info!("  POST /api/advice         - Ask a financial question");
    info!("  GET  /api/updates        - Latest financial updates");

    axum::serve(listener, router).await?;

    Ok(())
}
