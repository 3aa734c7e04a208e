//! CLI command handlers module
//!
//! This module is organized by functional domains:
//! - init: Database schema initialization
//! - ask: Advice queries
//! - hub: Knowledge hub updates
//! - ingest: Loading knowledge records and updates
//! - serve: API server
//! - info: Configuration display

pub mod ask;
pub mod hub;
pub mod info;
pub mod ingest;
pub mod init;
pub mod serve;

pub use ask::*;
pub use hub::*;
pub use info::*;
pub use ingest::*;
pub use init::*;
pub use serve::*;
