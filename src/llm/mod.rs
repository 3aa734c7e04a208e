//! Text generation capability and its HTTP client

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::errors::Result;

pub mod client;
pub mod prompts;

pub use client::LlmService;

/// Chat role as understood by chat-completion endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One single-turn, non-streaming generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System instruction that frames the model's behaviour
    pub instruction: String,
    /// The user turn
    pub message: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl GenerationRequest {
    pub fn new(instruction: impl Into<String>, message: impl Into<String>, temperature: f32) -> Self {
        Self {
            instruction: instruction.into(),
            message: message.into(),
            temperature,
            max_tokens: None,
        }
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// `[system, user]` message pair sent on the wire
    pub fn messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.instruction.as_str()),
            ChatMessage::user(self.message.as_str()),
        ]
    }
}

/// Chat-style text generation. Implementations may fail transiently.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
