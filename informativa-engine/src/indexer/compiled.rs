use std::sync::Arc;

use regex::Regex;

/// 编译后的单条模式（扫描执行单元）
/// 名称、说明、检查项ID 以 Arc 共享，生成命中记录时只做引用计数
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub category: Arc<str>,
    pub name: Arc<str>,
    pub regex: Regex,
    pub description: Arc<str>,
    pub checklist_ids: Arc<[String]>,
}

impl CompiledPattern {
    #[inline(always)]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// 编译后的分类：保持声明顺序的模式列表
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub name: Arc<str>,
    pub patterns: Vec<CompiledPattern>,
}

/// 编译后的模式库（只读，可在线程间共享）
#[derive(Debug, Clone, Default)]
pub struct CompiledCatalog {
    pub(crate) categories: Vec<CompiledCategory>,
}

impl CompiledCatalog {
    pub fn categories(&self) -> &[CompiledCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CompiledCategory> {
        self.categories.iter().find(|c| &*c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| &*c.name)
    }

    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }

    /// 选择参与扫描的分类
    /// - `None`：全部分类
    /// - `Some(names)`：仅名称出现在列表中的分类，顺序仍为模式库顺序；未知名称忽略
    pub fn select<'a>(
        &'a self,
        names: Option<&'a [&'a str]>,
    ) -> impl Iterator<Item = &'a CompiledCategory> + 'a {
        self.categories.iter().filter(move |c| match names {
            None => true,
            Some(names) => names.contains(&&*c.name),
        })
    }
}
