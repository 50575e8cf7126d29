//! 单份隐私声明的完整分析流程
//! 摘录 -> 扫描提示 -> 组装提示词 -> 调用 LLM -> 输出 JSON

use std::path::{Path, PathBuf};

use informativa_engine::Scanner;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::global::builtin_compiled;
use crate::checklist::{checklist_block, ChecklistItem, ChecklistLoader};
use crate::config::AnalyzerConfig;
use crate::error::InfResult;
use crate::llm::{build_client, LlmClient};
use crate::prompt::{hints_json, pack_hints, Hint, PromptTemplate};
use crate::utils::truncate_chars;

/// LLM 失败时随错误一起保留的提示词前缀长度（字符）
const PROMPT_HEAD_CHARS: usize = 800;

#[derive(Debug)]
pub struct PolicyAnalyzer {
    config: AnalyzerConfig,
    scanner: Scanner,
    template: PromptTemplate,
    /// 预先渲染好的检查项清单块（每次分析都送入完整清单）
    checklist_prompt: String,
    client: Box<dyn LlmClient>,
}

impl PolicyAnalyzer {
    /// 按配置构建：加载检查项清单、共享编译后的内置模式库、创建 LLM 客户端
    pub async fn new(config: AnalyzerConfig) -> InfResult<Self> {
        let checklist = ChecklistLoader::load(&config.checklist_path).await?;
        let client = build_client(&config.llm)?;
        let scanner = Scanner::with_options(builtin_compiled()?, config.scan);
        Ok(Self::with_parts(config, scanner, &checklist, client))
    }

    /// 由现成组件构建（测试或自定义模式库时使用）
    pub fn with_parts(
        config: AnalyzerConfig,
        scanner: Scanner,
        checklist: &[ChecklistItem],
        client: Box<dyn LlmClient>,
    ) -> Self {
        Self {
            config,
            scanner,
            template: PromptTemplate::default(),
            checklist_prompt: checklist_block(checklist),
            client,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// 送入提示词的策略摘录（前 `max_chars` 个字符）
    pub fn excerpt<'a>(&self, text: &'a str) -> &'a str {
        truncate_chars(text, self.config.max_chars)
    }

    /// 扫描摘录并打包提示
    pub fn hints(&self, excerpt: &str) -> Vec<Hint> {
        let records = self.scanner.scan_all(excerpt);
        pack_hints(&records, self.config.max_hints, self.config.hint_snippet_chars)
    }

    /// 组装完整提示词
    pub fn build_prompt(&self, text: &str) -> InfResult<String> {
        let excerpt = self.excerpt(text);
        let hints = self.hints(excerpt);
        let hints_json = hints_json(&hints)?;
        debug!(
            "Prompt assembled | excerpt chars: {} | hints: {}",
            excerpt.chars().count(),
            hints.len()
        );
        Ok(self.template.render(excerpt, &hints_json, &self.checklist_prompt))
    }

    /// 分析一段策略文本
    /// LLM 调用失败不会中断流程，而是返回 `{"error", "prompt_head"}` 便于排查
    pub async fn analyze_text(&self, text: &str) -> Value {
        let prompt = match self.build_prompt(text) {
            Ok(prompt) => prompt,
            Err(e) => return json!({ "error": e.to_string(), "prompt_head": "" }),
        };

        match self.client.complete(&prompt).await {
            Ok(value) => value,
            Err(e) => {
                warn!("LLM call failed | provider: {} | error: {}", self.client.provider(), e);
                json!({
                    "error": e.to_string(),
                    "prompt_head": truncate_chars(&prompt, PROMPT_HEAD_CHARS),
                })
            }
        }
    }

    /// 读取策略文件并分析
    pub async fn analyze_file(&self, policy_path: &Path) -> InfResult<Value> {
        let text = tokio::fs::read_to_string(policy_path).await?;
        debug!("Policy loaded from {} | chars: {}", policy_path.display(), text.chars().count());
        Ok(self.analyze_text(&text).await)
    }

    /// 结果写入 `output_dir/<文件名主干>.json`（缩进 JSON，非 ASCII 原样保留）
    pub async fn write_output(&self, policy_path: &Path, result: &Value) -> InfResult<PathBuf> {
        let out_path = output_path(&self.config.output_dir, policy_path);
        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        tokio::fs::write(&out_path, serde_json::to_string_pretty(result)?).await?;
        Ok(out_path)
    }

    /// 分析并落盘，返回输出路径
    pub async fn analyze_to_file(&self, policy_path: &Path) -> InfResult<PathBuf> {
        let result = self.analyze_file(policy_path).await?;
        self.write_output(policy_path, &result).await
    }
}

/// 输出文件路径：目录 + 输入文件名主干 + `.json`
pub fn output_path(output_dir: &Path, policy_path: &Path) -> PathBuf {
    let stem = policy_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "policy".to_string());
    output_dir.join(format!("{}.json", stem))
}
