// 核心公共结构体+枚举
pub mod core;
// 内核错误定义
pub mod error;
// 模式编译
pub mod indexer;
// 内置模式库 + 检查项标签
pub mod library;
// 扫描器
pub mod scanner;
// 片段/预览工具
pub mod utils;

// 顶层导出常用类型
pub use core::{
    Category, CategoryPatterns, ChecklistEvidence, ChecklistEvidenceMap, MatchRecord,
    PatternCatalog, PatternDef,
};
pub use error::{CoreError, CoreResult};
pub use indexer::{CatalogCompiler, CompileStats, CompiledCatalog, CompiledCategory, CompiledPattern};
pub use library::{checklist_label, CHECKLIST_LABELS};
pub use scanner::{ScanOptions, Scanner, DEFAULT_CONTEXT_CHARS};
