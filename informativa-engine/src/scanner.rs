//! 扫描器：在任意文本上执行编译后的模式库，产出命中记录与检查项证据
//!
//! 纯计算、无 I/O；编译后的模式库只读，可跨线程共享同一个 `Scanner`。

use std::sync::Arc;

use crate::core::{ChecklistEvidenceMap, MatchRecord, PatternCatalog};
use crate::error::CoreResult;
use crate::indexer::{CompiledCatalog, CompiledPattern};
use crate::utils::preview::snippet_around;

/// 片段上下文窗口默认宽度（字符数，命中区间前后各取这么多）
pub const DEFAULT_CONTEXT_CHARS: usize = 80;

/// 扫描参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub context_chars: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            context_chars: DEFAULT_CONTEXT_CHARS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scanner {
    catalog: Arc<CompiledCatalog>,
    options: ScanOptions,
}

impl Scanner {
    pub fn new(catalog: Arc<CompiledCatalog>) -> Self {
        Self::with_options(catalog, ScanOptions::default())
    }

    pub fn with_options(catalog: Arc<CompiledCatalog>, options: ScanOptions) -> Self {
        Self { catalog, options }
    }

    /// 编译内置模式库并构建扫描器
    pub fn builtin() -> CoreResult<Self> {
        let compiled = CompiledCatalog::compile(PatternCatalog::builtin())?;
        Ok(Self::new(Arc::new(compiled)))
    }

    pub fn catalog(&self) -> &Arc<CompiledCatalog> {
        &self.catalog
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// 扫描文本
    ///
    /// - `categories = None`：扫描全部分类；`Some(&[])`：不扫描任何分类
    /// - 未知分类名被忽略，不报错
    /// - 输出顺序：分类（模式库顺序）→ 模式（分类内顺序）→ 命中位置升序；
    ///   不同模式之间不按文本位置全局排序
    pub fn scan(&self, text: &str, categories: Option<&[&str]>) -> Vec<MatchRecord> {
        let mut records = Vec::new();
        if text.is_empty() {
            return records;
        }

        for category in self.catalog.select(categories) {
            for pattern in &category.patterns {
                self.collect_matches(pattern, text, &mut records);
            }
        }

        log::debug!(
            "Scan finished | input chars: {} | categories: {} | records: {}",
            text.chars().count(),
            categories.map_or_else(|| "all".to_string(), |c| c.join(",")),
            records.len()
        );
        records
    }

    /// 扫描全部分类
    pub fn scan_all(&self, text: &str) -> Vec<MatchRecord> {
        self.scan(text, None)
    }

    /// 扫描全部分类，并按检查项ID折叠为去重后的证据片段
    pub fn evidence_by_checklist(&self, text: &str) -> ChecklistEvidenceMap {
        ChecklistEvidenceMap::from_records(&self.scan_all(text))
    }

    fn collect_matches(&self, pattern: &CompiledPattern, text: &str, out: &mut Vec<MatchRecord>) {
        for m in pattern.regex.find_iter(text) {
            // 空匹配不构成证据
            if m.start() == m.end() {
                continue;
            }
            out.push(MatchRecord {
                category: Arc::clone(&pattern.category),
                pattern: Arc::clone(&pattern.name),
                start: m.start(),
                end: m.end(),
                snippet: snippet_around(text, m.start(), m.end(), self.options.context_chars),
                checklist_ids: Arc::clone(&pattern.checklist_ids),
                description: Arc::clone(&pattern.description),
            });
        }
    }
}
