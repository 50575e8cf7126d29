use serde::{Deserialize, Serialize};

/// 单条模式声明（只读，模式库初始化时一次性创建）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternDef {
    /// 模式名（同一分类内唯一）
    pub name: String,
    /// 正则表达式文本（编译时统一开启忽略大小写 + 多行）
    pub expression: String,
    /// 人类可读的说明
    pub description: String,
    /// 支持的检查项ID（有序，多对多）
    pub checklist_ids: Vec<String>,
}

impl PatternDef {
    pub fn new(
        name: impl Into<String>,
        expression: impl Into<String>,
        description: impl Into<String>,
        checklist_ids: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            description: description.into(),
            checklist_ids: checklist_ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// 分类及其有序模式列表
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPatterns {
    pub name: String,
    pub patterns: Vec<PatternDef>,
}

/// 模式库：分类名 -> 有序模式列表，保持声明顺序
///
/// 不同分类允许出现同名模式（例如 `rights` 与 `special_processing` 都声明了
/// `profilazione_kw`），二者作为独立条目保留，以分类区分，绝不按名称合并。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatternCatalog {
    pub categories: Vec<CategoryPatterns>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个分类（已存在同名分类时并入其末尾）
    pub fn push_category(&mut self, name: impl Into<String>, patterns: Vec<PatternDef>) {
        let name = name.into();
        match self.categories.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.patterns.extend(patterns),
            None => self.categories.push(CategoryPatterns { name, patterns }),
        }
    }

    /// 按名称查找分类
    pub fn category(&self, name: &str) -> Option<&CategoryPatterns> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// 模式总数
    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }

    /// 模式库中引用到的全部检查项ID（去重，首次出现顺序）
    pub fn referenced_checklist_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for def in self.categories.iter().flat_map(|c| c.patterns.iter()) {
            for id in &def.checklist_ids {
                if !ids.contains(&id.as_str()) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str) -> PatternDef {
        PatternDef::new(name, "x", "d", &["ID_A"])
    }

    #[test]
    fn test_push_category_merges_same_name() {
        let mut catalog = PatternCatalog::new();
        catalog.push_category("a", vec![def("one")]);
        catalog.push_category("b", vec![def("two")]);
        catalog.push_category("a", vec![def("three")]);

        let names: Vec<&str> = catalog.category_names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(catalog.category("a").unwrap().patterns.len(), 2);
        assert_eq!(catalog.pattern_count(), 3);
    }
}
