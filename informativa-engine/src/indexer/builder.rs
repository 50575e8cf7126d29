use std::sync::Arc;
use std::time::Instant;

use regex::RegexBuilder;
use rustc_hash::FxHashSet;

use crate::core::{CategoryPatterns, PatternCatalog, PatternDef};
use crate::error::{CoreError, CoreResult};
use crate::indexer::compiled::{CompiledCatalog, CompiledCategory, CompiledPattern};

/// 编译统计
#[derive(Debug, Default, Clone, Copy)]
pub struct CompileStats {
    pub category_count: usize,
    pub pattern_count: usize,
    pub checklist_link_count: usize,
    /// 被引用的不同检查项ID数
    pub checklist_id_count: usize,
}

/// 模式库编译器
/// 职责：校验声明 + 将所有表达式以「忽略大小写 + 多行」编译为正则
/// 任一模式编译失败即整体失败，不做静默跳过
pub struct CatalogCompiler;

impl CatalogCompiler {
    pub fn compile(catalog: &PatternCatalog) -> CoreResult<CompiledCatalog> {
        Self::compile_with_stats(catalog).map(|(compiled, _)| compiled)
    }

    pub fn compile_with_stats(catalog: &PatternCatalog) -> CoreResult<(CompiledCatalog, CompileStats)> {
        let start = Instant::now();
        let mut stats = CompileStats::default();
        let mut categories = Vec::with_capacity(catalog.categories.len());

        for category in &catalog.categories {
            categories.push(Self::compile_category(category, &mut stats)?);
        }
        stats.category_count = categories.len();
        stats.checklist_id_count = catalog.referenced_checklist_ids().len();

        log::debug!(
            "Pattern catalog compiled in {:?} | categories: {} | patterns: {} | checklist links: {} | checklist ids: {}",
            start.elapsed(),
            stats.category_count,
            stats.pattern_count,
            stats.checklist_link_count,
            stats.checklist_id_count
        );

        Ok((CompiledCatalog { categories }, stats))
    }

    fn compile_category(
        category: &CategoryPatterns,
        stats: &mut CompileStats,
    ) -> CoreResult<CompiledCategory> {
        let category_name: Arc<str> = Arc::from(category.name.as_str());
        let mut seen_names: FxHashSet<&str> = FxHashSet::default();
        let mut patterns = Vec::with_capacity(category.patterns.len());

        for def in &category.patterns {
            if !seen_names.insert(def.name.as_str()) {
                return Err(CoreError::DuplicatePattern {
                    category: category.name.clone(),
                    pattern: def.name.clone(),
                });
            }
            patterns.push(Self::compile_pattern(&category_name, def)?);
            stats.pattern_count += 1;
            stats.checklist_link_count += def.checklist_ids.len();
        }

        Ok(CompiledCategory {
            name: category_name,
            patterns,
        })
    }

    fn compile_pattern(category: &Arc<str>, def: &PatternDef) -> CoreResult<CompiledPattern> {
        if def.checklist_ids.is_empty() {
            return Err(CoreError::MissingChecklistIds {
                category: category.to_string(),
                pattern: def.name.clone(),
            });
        }

        let regex = RegexBuilder::new(&def.expression)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|source| CoreError::RegexCompileError {
                category: category.to_string(),
                pattern: def.name.clone(),
                source,
            })?;

        Ok(CompiledPattern {
            category: Arc::clone(category),
            name: Arc::from(def.name.as_str()),
            regex,
            description: Arc::from(def.description.as_str()),
            checklist_ids: Arc::from(def.checklist_ids.as_slice()),
        })
    }
}

impl CompiledCatalog {
    /// 编译模式库（见 `CatalogCompiler`）
    pub fn compile(catalog: &PatternCatalog) -> CoreResult<Self> {
        CatalogCompiler::compile(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn test_builtin_catalog_compiles() {
        let catalog = PatternCatalog::builtin();
        let (compiled, stats) = CatalogCompiler::compile_with_stats(catalog).unwrap();
        assert_eq!(stats.category_count, Category::ALL.len());
        assert_eq!(stats.pattern_count, catalog.pattern_count());
        assert_eq!(compiled.pattern_count(), catalog.pattern_count());
        assert!(stats.checklist_link_count >= stats.pattern_count);
        assert_eq!(stats.checklist_id_count, crate::CHECKLIST_LABELS.len());
    }

    #[test]
    fn test_patterns_are_case_insensitive_and_multiline() {
        let mut catalog = PatternCatalog::new();
        catalog.push_category(
            "c",
            vec![PatternDef::new("line_start", "^titolare", "d", &["ID"])],
        );
        let compiled = CompiledCatalog::compile(&catalog).unwrap();
        let pattern = &compiled.categories()[0].patterns[0];
        assert!(pattern.is_match("premessa\nTITOLARE del trattamento"));
    }

    #[test]
    fn test_invalid_expression_is_fatal() {
        let mut catalog = PatternCatalog::new();
        catalog.push_category(
            "broken",
            vec![
                PatternDef::new("ok", "ok", "d", &["ID"]),
                PatternDef::new("bad", "(unclosed", "d", &["ID"]),
            ],
        );
        match CompiledCatalog::compile(&catalog) {
            Err(CoreError::RegexCompileError { category, pattern, .. }) => {
                assert_eq!(category, "broken");
                assert_eq!(pattern, "bad");
            }
            other => panic!("unexpected result: {:?}", other.map(|c| c.pattern_count())),
        }
    }

    #[test]
    fn test_duplicate_name_in_category_rejected() {
        let mut catalog = PatternCatalog::new();
        catalog.push_category(
            "c",
            vec![
                PatternDef::new("same", "a", "d", &["ID"]),
                PatternDef::new("same", "b", "d", &["ID"]),
            ],
        );
        assert!(matches!(
            CompiledCatalog::compile(&catalog),
            Err(CoreError::DuplicatePattern { .. })
        ));
    }

    #[test]
    fn test_same_name_across_categories_allowed() {
        let mut catalog = PatternCatalog::new();
        catalog.push_category("a", vec![PatternDef::new("same", "x", "d", &["ID"])]);
        catalog.push_category("b", vec![PatternDef::new("same", "y", "d", &["ID"])]);
        let compiled = CompiledCatalog::compile(&catalog).unwrap();
        assert_eq!(compiled.pattern_count(), 2);
    }

    #[test]
    fn test_missing_checklist_ids_rejected() {
        let mut catalog = PatternCatalog::new();
        catalog.push_category("c", vec![PatternDef::new("orphan", "x", "d", &[])]);
        assert!(matches!(
            CompiledCatalog::compile(&catalog),
            Err(CoreError::MissingChecklistIds { .. })
        ));
    }

    #[test]
    fn test_select_keeps_catalog_order() {
        let compiled = CompiledCatalog::compile(PatternCatalog::builtin()).unwrap();
        let wanted = ["cookies", "identity_contacts", "nope"];
        let names: Vec<&str> = compiled.select(Some(&wanted[..])).map(|c| &*c.name).collect();
        assert_eq!(names, vec!["identity_contacts", "cookies"]);
        assert_eq!(compiled.select(None).count(), Category::ALL.len());
        assert_eq!(compiled.select(Some(&[] as &[&str])).count(), 0);
    }
}
