//! OpenAI Chat Completions 后端
//! POST {endpoint}，Bearer 认证，temperature 固定为 0

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{build_messages, http_client, parse_model_json, ChatMessage, LlmClient};
use crate::config::{LlmSettings, ProviderKind};
use crate::error::{InfResult, InformativaError};

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// 请求体（OpenAI 兼容格式）
#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(settings: &LlmSettings) -> InfResult<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(InformativaError::MissingApiKey("OPENAI_API_KEY"))?;
        let endpoint = Url::parse(settings.endpoint.as_deref().unwrap_or(DEFAULT_OPENAI_URL))?;

        Ok(Self {
            http: http_client(settings)?,
            endpoint,
            api_key,
            model: settings.model.clone(),
        })
    }

    /// 从响应中取出第一条候选的文本
    fn first_content(response: ChatCompletionResponse) -> InfResult<String> {
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| InformativaError::LlmResponse("response contains no choices".to_string()))
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn complete(&self, prompt: &str) -> InfResult<Value> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: build_messages(prompt),
            temperature: 0.0,
        };
        debug!(
            "OpenAI request | model: {} | prompt chars: {}",
            self.model,
            prompt.chars().count()
        );

        let response: ChatCompletionResponse = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_model_json(&Self::first_content(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: build_messages("p"),
            temperature: 0.0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["temperature"], 0.0);
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_first_content() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"[]"}}]}"#,
        )
        .unwrap();
        assert_eq!(OpenAiClient::first_content(response).unwrap(), "[]");

        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(OpenAiClient::first_content(empty).is_err());
    }

    #[test]
    fn test_requires_api_key() {
        let settings = LlmSettings {
            provider: ProviderKind::OpenAi,
            api_key: Some(String::new()),
            ..LlmSettings::default()
        };
        assert!(matches!(
            OpenAiClient::new(&settings),
            Err(InformativaError::MissingApiKey(_))
        ));
    }
}
