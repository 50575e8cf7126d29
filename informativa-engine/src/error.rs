//! informativa-engine 内核错误定义
//! 内核是纯计算：只有模式库编译阶段可能失败，扫描阶段对任意输入都是全函数
use thiserror::Error;

use regex::Error as RegexError;

/// 内核核心错误枚举
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 编译相关错误 =====================
    /// 正则表达式编译失败（模式库编写错误，启动阶段即致命）
    #[error("Regex compilation failed for pattern {category}/{pattern}: {source}")]
    RegexCompileError {
        category: String,
        pattern: String,
        #[source]
        source: RegexError,
    },

    /// 同一分类下模式名重复
    #[error("Duplicate pattern name {pattern} in category {category}")]
    DuplicatePattern { category: String, pattern: String },

    /// 模式未关联任何检查项ID
    #[error("Pattern {category}/{pattern} declares no checklist ids")]
    MissingChecklistIds { category: String, pattern: String },

    // ===================== 内核基础错误 =====================
    /// 无效输入参数
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
