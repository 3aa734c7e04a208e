//! API request and response types

use serde::Deserialize;
use serde::Serialize;

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store_available: bool,
}

/// Advice request
#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub query: String,
    /// Persona name or label; defaults to student
    #[serde(default)]
    pub persona: Option<String>,
    /// Target language for a translation of the answer; English or absent skips it
    #[serde(default)]
    pub language: Option<String>,
}

/// Updates query parameters
#[derive(Debug, Deserialize)]
pub struct UpdatesQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}
