//! HTTP API for advice queries and the knowledge hub

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;

pub use routes::build_router;
pub use server::serve_api;
