//! 分析模块：全局扫描器 + 单份声明的完整分析流程
pub mod global;
pub mod policy;

pub use self::global::{
    builtin_compiled, evidence_by_checklist, global_scanner, init_scanner,
    init_scanner_with_options, scan_text,
};
pub use self::policy::{output_path, PolicyAnalyzer};
