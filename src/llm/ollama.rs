//! Ollama 本地后端（/api/chat，非流式）

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{build_messages, http_client, parse_model_json, ChatMessage, LlmClient};
use crate::config::{LlmSettings, ProviderKind, DEFAULT_OLLAMA_URL};
use crate::error::InfResult;

#[derive(Debug, Clone, Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Clone, Deserialize)]
struct OllamaChatResponse {
    message: ChatMessage,
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: Client,
    endpoint: Url,
    model: String,
}

impl OllamaClient {
    pub fn new(settings: &LlmSettings) -> InfResult<Self> {
        let endpoint = Url::parse(settings.endpoint.as_deref().unwrap_or(DEFAULT_OLLAMA_URL))?;
        Ok(Self {
            http: http_client(settings)?,
            endpoint,
            model: settings.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    async fn complete(&self, prompt: &str) -> InfResult<Value> {
        let request = OllamaChatRequest {
            model: &self.model,
            messages: build_messages(prompt),
            stream: false,
            options: OllamaOptions { temperature: 0.0 },
        };
        debug!("Ollama request | endpoint: {} | model: {}", self.endpoint, self.model);

        let response: OllamaChatResponse = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_model_json(&response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let settings = LlmSettings {
            provider: ProviderKind::Ollama,
            ..LlmSettings::default()
        };
        let client = OllamaClient::new(&settings).unwrap();
        assert_eq!(client.endpoint().as_str(), DEFAULT_OLLAMA_URL);
    }

    #[test]
    fn test_request_body_shape() {
        let request = OllamaChatRequest {
            model: "llama3",
            messages: build_messages("p"),
            stream: false,
            options: OllamaOptions { temperature: 0.0 },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["options"]["temperature"], 0.0);
        assert_eq!(value["stream"], false);
        assert_eq!(value["messages"][0]["role"], "system");
    }

    #[test]
    fn test_response_content() {
        let response: OllamaChatResponse = serde_json::from_str(
            r#"{"model":"llama3","message":{"role":"assistant","content":" [] "},"done":true}"#,
        )
        .unwrap();
        assert!(parse_model_json(&response.message.content).unwrap().is_array());
    }
}
