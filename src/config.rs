//! 全局配置管理,存储所有可配置项

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use informativa_engine::ScanOptions;

use crate::error::{InfResult, InformativaError};

/// 默认的策略摘录长度（字符数）
pub const DEFAULT_MAX_CHARS: usize = 32_000;
/// 默认的提示条目上限
pub const DEFAULT_MAX_HINTS: usize = 40;
/// 单条提示片段的最大字符数
pub const DEFAULT_HINT_SNIPPET_CHARS: usize = 240;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/chat";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// LLM 后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// 离线模拟：每个检查项都返回 ambiguous
    #[default]
    Mock,
    OpenAi,
    HuggingFace,
    Ollama,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Mock => "MOCK",
            ProviderKind::OpenAi => "OPENAI",
            ProviderKind::HuggingFace => "HF",
            ProviderKind::Ollama => "OLLAMA",
        }
    }
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = InformativaError;

    /// 不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MOCK" => Ok(ProviderKind::Mock),
            "OPENAI" => Ok(ProviderKind::OpenAi),
            "HF" | "HUGGINGFACE" => Ok(ProviderKind::HuggingFace),
            "OLLAMA" => Ok(ProviderKind::Ollama),
            _ => Err(InformativaError::UnknownProvider(s.to_string())),
        }
    }
}

/// LLM 调用配置
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub provider: ProviderKind,
    pub model: String,
    /// 覆盖后端默认地址（Ollama 默认取 `OLLAMA_URL`）
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    // 超时配置（单位：秒）
    pub timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Mock,
            model: DEFAULT_MODEL.to_string(),
            endpoint: None,
            api_key: None,
            timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
        }
    }
}

/// 分析流程全局配置
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    // 送入提示词的策略文本上限（字符）
    pub max_chars: usize,
    pub max_hints: usize,
    pub hint_snippet_chars: usize,
    // 检查项清单路径
    pub checklist_path: PathBuf,
    // 结果输出目录
    pub output_dir: PathBuf,
    pub scan: ScanOptions,
    pub llm: LlmSettings,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_hints: DEFAULT_MAX_HINTS,
            hint_snippet_chars: DEFAULT_HINT_SNIPPET_CHARS,
            checklist_path: PathBuf::from("checklist.json"),
            output_dir: PathBuf::from("outputs"),
            scan: ScanOptions::default(),
            llm: LlmSettings::default(),
        }
    }
}

impl AnalyzerConfig {
    /// 从进程环境变量读取配置
    pub fn from_env() -> InfResult<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置（便于测试）
    ///
    /// 识别的变量：`LLM_PROVIDER`、`LLM_MODEL`、`OPENAI_API_KEY`、`HF_API_TOKEN`、`OLLAMA_URL`
    pub fn from_env_with<F>(lookup: F) -> InfResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let llm = &mut config.llm;

        if let Some(provider) = lookup("LLM_PROVIDER").filter(|v| !v.trim().is_empty()) {
            llm.provider = provider.parse()?;
        }
        if let Some(model) = lookup("LLM_MODEL").filter(|v| !v.trim().is_empty()) {
            llm.model = model;
        }

        match llm.provider {
            ProviderKind::OpenAi => llm.api_key = lookup("OPENAI_API_KEY"),
            ProviderKind::HuggingFace => llm.api_key = lookup("HF_API_TOKEN"),
            ProviderKind::Ollama => {
                let raw = lookup("OLLAMA_URL").unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
                url::Url::parse(&raw)?;
                llm.endpoint = Some(raw);
            }
            ProviderKind::Mock => {}
        }

        Ok(config)
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> AnalyzerConfig {
        AnalyzerConfig::default()
    }

    pub fn from_env() -> InfResult<AnalyzerConfig> {
        AnalyzerConfig::from_env()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: AnalyzerConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// 以已有配置为起点
    pub fn from_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn max_chars(mut self, max_chars: usize) -> Self {
        self.config.max_chars = max_chars;
        self
    }

    pub fn max_hints(mut self, max_hints: usize) -> Self {
        self.config.max_hints = max_hints;
        self
    }

    pub fn hint_snippet_chars(mut self, chars: usize) -> Self {
        self.config.hint_snippet_chars = chars;
        self
    }

    pub fn checklist_path(mut self, path: PathBuf) -> Self {
        self.config.checklist_path = path;
        self
    }

    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.config.output_dir = dir;
        self
    }

    pub fn context_chars(mut self, chars: usize) -> Self {
        self.config.scan.context_chars = chars;
        self
    }

    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.config.llm.provider = provider;
        self
    }

    pub fn model(mut self, model: String) -> Self {
        self.config.llm.model = model;
        self
    }

    pub fn endpoint(mut self, endpoint: String) -> Self {
        self.config.llm.endpoint = Some(endpoint);
        self
    }

    pub fn api_key(mut self, key: String) -> Self {
        self.config.llm.api_key = Some(key);
        self
    }

    pub fn llm_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.llm.timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigManager::get_default();
        assert_eq!(config.max_chars, 32_000);
        assert_eq!(config.max_hints, 40);
        assert_eq!(config.hint_snippet_chars, 240);
        assert_eq!(config.scan.context_chars, 80);
        assert_eq!(config.llm.provider, ProviderKind::Mock);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
    }

    #[test]
    fn test_from_env_openai() {
        let config = AnalyzerConfig::from_env_with(env(&[
            ("LLM_PROVIDER", "openai"),
            ("LLM_MODEL", "gpt-4o"),
            ("OPENAI_API_KEY", "sk-test"),
            ("HF_API_TOKEN", "hf-ignored"),
        ]))
        .unwrap();
        assert_eq!(config.llm.provider, ProviderKind::OpenAi);
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_from_env_ollama_default_url() {
        let config = AnalyzerConfig::from_env_with(env(&[("LLM_PROVIDER", "OLLAMA")])).unwrap();
        assert_eq!(config.llm.endpoint.as_deref(), Some(DEFAULT_OLLAMA_URL));
    }

    #[test]
    fn test_from_env_rejects_bad_values() {
        assert!(matches!(
            AnalyzerConfig::from_env_with(env(&[("LLM_PROVIDER", "gemini")])),
            Err(InformativaError::UnknownProvider(_))
        ));
        assert!(matches!(
            AnalyzerConfig::from_env_with(env(&[
                ("LLM_PROVIDER", "ollama"),
                ("OLLAMA_URL", "not a url"),
            ])),
            Err(InformativaError::UrlError(_))
        ));
    }

    #[test]
    fn test_builder_chain() {
        let config = ConfigManager::custom()
            .max_chars(100)
            .max_hints(5)
            .output_dir(PathBuf::from("out"))
            .provider(ProviderKind::HuggingFace)
            .model("mistral".to_string())
            .build();
        assert_eq!(config.max_chars, 100);
        assert_eq!(config.max_hints, 5);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.llm.provider, ProviderKind::HuggingFace);
        assert_eq!(config.llm.model, "mistral");
    }
}
