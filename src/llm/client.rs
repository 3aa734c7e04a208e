//! HTTP client for chat-completion providers

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use super::ChatMessage;
use super::GenerationRequest;
use super::GenerationService;
use crate::config::AppConfig;
use crate::config::LlmProvider;
use crate::errors::ArthaVivekError;
use crate::errors::Result;

/// Generation client for OpenAI-compatible and Ollama endpoints
#[derive(Debug, Clone)]
pub struct LlmService {
    provider: LlmProvider,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: Client,
}

impl LlmService {
    /// Create a new client
    ///
    /// # Errors
    /// - OpenAI provider without an API key
    /// - HTTP client build errors
    pub fn new(
        provider: LlmProvider,
        endpoint: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.filter(|key| !key.trim().is_empty());
        if provider == LlmProvider::OpenAI && api_key.is_none() {
            return Err(ArthaVivekError::ConfigError(
                "LLM API key not provided".to_string(),
            ));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            provider,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            api_key,
            client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.llm.provider,
            config.llm_endpoint().to_string(),
            config.llm_model().to_string(),
            Some(config.llm_key().to_string()),
            Duration::from_secs(config.llm.timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_openai(&self, request: &GenerationRequest) -> Result<String> {
        #[derive(Serialize)]
        struct ChatCompletionRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage>,
            temperature: f32,
            stream: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            max_tokens: Option<u32>,
        }

        #[derive(Deserialize)]
        struct ChatCompletionResponse {
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: ResponseMessage,
        }

        #[derive(Deserialize)]
        struct ResponseMessage {
            content: Option<String>,
        }

        let url = format!("{}/chat/completions", self.endpoint);
        debug!("Calling chat completions API: {} (model {})", url, self.model);

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: request.messages(),
            temperature: request.temperature,
            stream: false,
            max_tokens: request.max_tokens,
        };

        let mut builder = self.client.post(&url).json(&body);
        if let Some(api_key) = &self.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ArthaVivekError::LlmError(format!(
                "API error ({status}): {error_text}"
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ArthaVivekError::LlmError(format!("Failed to parse response: {e}")))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ArthaVivekError::LlmError("No choices in response".to_string()))?;

        non_empty(content)
    }

    async fn generate_ollama(&self, request: &GenerationRequest) -> Result<String> {
        #[derive(Serialize)]
        struct OllamaOptions {
            temperature: f32,
            #[serde(skip_serializing_if = "Option::is_none")]
            num_predict: Option<u32>,
        }

        #[derive(Serialize)]
        struct OllamaChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage>,
            stream: bool,
            options: OllamaOptions,
        }

        #[derive(Deserialize)]
        struct OllamaChatResponse {
            message: OllamaMessage,
        }

        #[derive(Deserialize)]
        struct OllamaMessage {
            content: String,
        }

        let url = format!("{}/api/chat", self.endpoint);
        debug!("Calling Ollama chat API: {} (model {})", url, self.model);

        let body = OllamaChatRequest {
            model: &self.model,
            messages: request.messages(),
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ArthaVivekError::LlmError(format!(
                "Ollama API error ({status}): {error_text}"
            )));
        }

        let result: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| ArthaVivekError::LlmError(format!("Failed to parse response: {e}")))?;

        non_empty(result.message.content)
    }
}

fn non_empty(content: String) -> Result<String> {
    if content.trim().is_empty() {
        return Err(ArthaVivekError::LlmError(
            "Empty content in response".to_string(),
        ));
    }
    Ok(content)
}

#[async_trait]
impl GenerationService for LlmService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        match self.provider {
            LlmProvider::OpenAI => self.generate_openai(request).await,
            LlmProvider::Ollama => self.generate_ollama(request).await,
        }
    }
}
