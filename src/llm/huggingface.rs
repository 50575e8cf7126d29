//! Hugging Face Inference API 后端（文本生成）
//! 生成式输出为自由文本，从中截取最外层 `{...}` 再解析

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{http_client, parse_model_json, LlmClient};
use crate::config::{LlmSettings, ProviderKind};
use crate::error::{InfResult, InformativaError};
use crate::prompt::SYSTEM_INSTR;
use crate::utils::extract_json_object;

pub const DEFAULT_HF_BASE_URL: &str = "https://api-inference.huggingface.co/models/";
pub const HF_MAX_NEW_TOKENS: u32 = 800;

#[derive(Debug, Clone, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

#[derive(Debug, Clone, Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Debug, Clone, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(settings: &LlmSettings) -> InfResult<Self> {
        let endpoint = match settings.endpoint.as_deref() {
            Some(endpoint) => Url::parse(endpoint)?,
            None => Url::parse(DEFAULT_HF_BASE_URL)?.join(&settings.model)?,
        };
        Ok(Self {
            http: http_client(settings)?,
            endpoint,
            token: settings.api_key.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// 生成式模型没有系统角色，系统指令直接拼在提示词前
    fn full_prompt(prompt: &str) -> String {
        format!("{}\n\n{}\n\nRispondi in JSON puro.", SYSTEM_INSTR, prompt)
    }

    fn parse_generated(text: &str) -> InfResult<Value> {
        let json = extract_json_object(text).ok_or_else(|| {
            InformativaError::LlmResponse("generated text contains no JSON object".to_string())
        })?;
        parse_model_json(json)
    }
}

#[async_trait]
impl LlmClient for HuggingFaceClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::HuggingFace
    }

    async fn complete(&self, prompt: &str) -> InfResult<Value> {
        let request = GenerationRequest {
            inputs: Self::full_prompt(prompt),
            parameters: GenerationParameters {
                max_new_tokens: HF_MAX_NEW_TOKENS,
                return_full_text: false,
            },
        };
        debug!("Hugging Face request | endpoint: {}", self.endpoint);

        let mut builder = self.http.post(self.endpoint.clone()).json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        let generated: Vec<GeneratedText> = builder
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = generated
            .into_iter()
            .next()
            .map(|g| g.generated_text)
            .ok_or_else(|| InformativaError::LlmResponse("empty generation".to_string()))?;
        Self::parse_generated(&text)
    }
}
