//! 检查项数据模型定义
//! 仅存储检查项数据，支持序列化/反序列化

use std::fmt;

use serde::{Deserialize, Serialize};

/// 单个检查项（外部清单中的一条合规问题）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub question: String,
    /// 判定为满足的条件
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accept: Vec<String>,
    /// 判定为不满足的条件
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reject: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_requirements: Option<String>,
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.id, self.title)
    }
}

/// 将检查项渲染为提示词中的清单块
///
/// 每项格式：
/// ```text
/// - {id} :: {title}
///   Q: {question}
///   Accept: a; b
///   Reject: c
///   Evidence: ...
/// ```
/// 空的 Accept/Reject/Evidence 行省略。
pub fn checklist_block(items: &[ChecklistItem]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(items.len() * 3);
    for item in items {
        lines.push(format!("- {}", item));
        lines.push(format!("  Q: {}", item.question));
        if !item.accept.is_empty() {
            lines.push(format!("  Accept: {}", item.accept.join("; ")));
        }
        if !item.reject.is_empty() {
            lines.push(format!("  Reject: {}", item.reject.join("; ")));
        }
        if let Some(evidence) = item.evidence_requirements.as_deref().filter(|e| !e.is_empty()) {
            lines.push(format!("  Evidence: {}", evidence));
        }
    }
    lines.join("\n")
}
