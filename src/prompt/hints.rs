//! 提示（hints）打包：将扫描命中压缩为一段有上限的 JSON，作为可选、可能有噪声的参考

use std::collections::HashSet;
use std::sync::Arc;

use informativa_engine::MatchRecord;
use serde::Serialize;

use crate::error::InfResult;
use crate::utils::truncate_chars;

/// 提示词中的单条命中提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub category: Arc<str>,
    pub pattern: Arc<str>,
    pub checklist_ids: Arc<[String]>,
    /// 命中区间 [start, end]（字节偏移）
    pub span: [usize; 2],
    pub snippet: String,
}

/// 按 (分类, 模式, 区间) 去重后截取前 `max_items` 条，片段截断到 `snippet_chars` 字符
pub fn pack_hints(records: &[MatchRecord], max_items: usize, snippet_chars: usize) -> Vec<Hint> {
    let mut seen: HashSet<(&str, &str, usize, usize)> = HashSet::new();
    let mut packed = Vec::with_capacity(max_items.min(records.len()));

    for record in records {
        if packed.len() >= max_items {
            break;
        }
        if !seen.insert((&*record.category, &*record.pattern, record.start, record.end)) {
            continue;
        }
        packed.push(Hint {
            category: Arc::clone(&record.category),
            pattern: Arc::clone(&record.pattern),
            checklist_ids: Arc::clone(&record.checklist_ids),
            span: [record.start, record.end],
            snippet: truncate_chars(&record.snippet, snippet_chars).to_string(),
        });
    }

    packed
}

/// 紧凑 JSON（非 ASCII 字符原样保留）
pub fn hints_json(hints: &[Hint]) -> InfResult<String> {
    Ok(serde_json::to_string(hints)?)
}
