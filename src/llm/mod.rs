//! LLM 调用模块：统一的客户端特质 + 各后端实现
//!
//! 所有后端都返回已解析的 JSON 值（通常为检查项结论数组）。

pub mod huggingface;
pub mod mock;
pub mod ollama;
pub mod openai;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{LlmSettings, ProviderKind};
use crate::error::{InfResult, InformativaError};
use crate::prompt::SYSTEM_INSTR;

pub use self::huggingface::HuggingFaceClient;
pub use self::mock::MockClient;
pub use self::ollama::OllamaClient;
pub use self::openai::OpenAiClient;

/// 对话消息（OpenAI 兼容格式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system" / "user" / "assistant"
    pub role: String,
    pub content: String,
}

/// 系统指令 + 用户提示词
pub fn build_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: "system".to_string(),
            content: SYSTEM_INSTR.to_string(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        },
    ]
}

// 泛型 LLM 客户端特质
#[async_trait]
pub trait LlmClient: std::fmt::Debug + Send + Sync {
    fn provider(&self) -> ProviderKind;

    /// 发送提示词并返回模型输出解析后的 JSON
    async fn complete(&self, prompt: &str) -> InfResult<Value>;
}

/// 根据配置构建对应后端的客户端
pub fn build_client(settings: &LlmSettings) -> InfResult<Box<dyn LlmClient>> {
    let client: Box<dyn LlmClient> = match settings.provider {
        ProviderKind::Mock => Box::new(MockClient),
        ProviderKind::OpenAi => Box::new(OpenAiClient::new(settings)?),
        ProviderKind::HuggingFace => Box::new(HuggingFaceClient::new(settings)?),
        ProviderKind::Ollama => Box::new(OllamaClient::new(settings)?),
    };
    tracing::debug!(
        "LLM client ready | provider: {} | model: {}",
        settings.provider,
        settings.model
    );
    Ok(client)
}

/// 带超时的 HTTP 客户端（各远程后端共用）
pub(crate) fn http_client(settings: &LlmSettings) -> InfResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?)
}

/// 将模型返回的文本解析为 JSON
pub(crate) fn parse_model_json(text: &str) -> InfResult<Value> {
    serde_json::from_str(text.trim()).map_err(|e| {
        InformativaError::LlmResponse(format!("model output is not valid JSON: {}", e))
    })
}
