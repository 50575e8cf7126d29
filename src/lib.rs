//! informativa - 意大利语隐私声明（informativa privacy）合规评审工具
//! 正则证据提取 + LLM 检查项评估

// 导出全局错误类型
pub use self::error::{InfResult, InformativaError};

// 导出配置模块
pub use self::config::{AnalyzerConfig, ConfigManager, CustomConfigBuilder, LlmSettings, ProviderKind};

// 导出检查项模块核心接口
pub use self::checklist::{checklist_block, ChecklistItem, ChecklistLoader};

// 导出提示词模块核心接口
pub use self::prompt::{hints_json, pack_hints, Hint, PromptTemplate, SYSTEM_INSTR};

// 导出 LLM 模块核心接口
pub use self::llm::{build_client, LlmClient, MockClient};

// 导出分析模块核心接口
pub use self::analyzer::{
    evidence_by_checklist, global_scanner, init_scanner, init_scanner_with_options, scan_text,
    PolicyAnalyzer,
};

// 内核常用类型
pub use informativa_engine::{
    checklist_label, Category, ChecklistEvidenceMap, MatchRecord, PatternCatalog, ScanOptions,
    Scanner,
};

// 声明所有子模块
pub mod analyzer;
pub mod checklist;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod utils;
