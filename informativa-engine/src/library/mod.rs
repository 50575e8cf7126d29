//! 模式库：内置的 分类 -> 模式 声明表，以及检查项标签表
//! 纯数据声明，无副作用

mod bases;
mod checklist;
mod cookies;
pub mod fragments;
mod parties;
mod processing;
mod retention;
mod rights;

use once_cell::sync::Lazy;

use crate::core::{Category, PatternCatalog, PatternDef};

pub use checklist::{checklist_label, CHECKLIST_LABELS};

/// 内置模式库单例（进程内只构建一次，之后只读）
static BUILTIN_CATALOG: Lazy<PatternCatalog> = Lazy::new(|| {
    let mut catalog = PatternCatalog::new();
    for category in Category::ALL {
        catalog.push_category(category.as_str(), builtin_patterns(category));
    }
    log::debug!(
        "Builtin pattern catalog assembled: {} categories, {} patterns",
        catalog.categories.len(),
        catalog.pattern_count()
    );
    catalog
});

fn builtin_patterns(category: Category) -> Vec<PatternDef> {
    match category {
        Category::IdentityContacts => parties::identity_contacts(),
        Category::PurposesBases => bases::purposes_bases(),
        Category::CategoriesOrigin => parties::categories_origin(),
        Category::RecipientsRoles => parties::recipients_roles(),
        Category::Transfers => parties::transfers(),
        Category::Retention => retention::retention(),
        Category::Rights => rights::rights(),
        Category::Cookies => cookies::cookies(),
        Category::Minors => processing::minors(),
        Category::SpecialProcessing => processing::special_processing(),
        Category::WorkersControls => processing::workers_controls(),
        Category::LanguageAccessibility => processing::language_accessibility(),
    }
}

impl PatternCatalog {
    /// 内置的意大利语隐私声明模式库
    pub fn builtin() -> &'static PatternCatalog {
        &BUILTIN_CATALOG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_category_order() {
        let names: Vec<&str> = PatternCatalog::builtin().category_names().collect();
        let expected: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_every_referenced_id_has_label() {
        for id in PatternCatalog::builtin().referenced_checklist_ids() {
            assert!(!checklist_label(id).is_empty(), "checklist id without label: {}", id);
        }
    }

    #[test]
    fn test_pattern_names_unique_within_category() {
        for category in &PatternCatalog::builtin().categories {
            for (i, def) in category.patterns.iter().enumerate() {
                assert!(
                    category.patterns[i + 1..].iter().all(|other| other.name != def.name),
                    "duplicate pattern {}/{}",
                    category.name,
                    def.name
                );
            }
        }
    }

    #[test]
    fn test_every_pattern_has_checklist_ids() {
        for category in &PatternCatalog::builtin().categories {
            for def in &category.patterns {
                assert!(!def.checklist_ids.is_empty(), "{}/{}", category.name, def.name);
                assert!(!def.description.is_empty(), "{}/{}", category.name, def.name);
            }
        }
    }

    #[test]
    fn test_cross_category_duplicate_names_are_kept() {
        let catalog = PatternCatalog::builtin();
        let rights = catalog.category("rights").unwrap();
        let special = catalog.category("special_processing").unwrap();
        let in_rights = rights.patterns.iter().find(|p| p.name == "profilazione_kw").unwrap();
        let in_special = special.patterns.iter().find(|p| p.name == "profilazione_kw").unwrap();
        assert_ne!(in_rights.expression, in_special.expression);
    }

    #[test]
    fn test_retention_category_contents() {
        let retention = PatternCatalog::builtin().category("retention").unwrap();
        let names: Vec<&str> = retention.patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"durata_esplicita"));
        assert_eq!(names.last(), Some(&"fine_conservazione_azioni"));
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_legal_basis_description_text() {
        let bases = PatternCatalog::builtin().category("purposes_bases").unwrap();
        let def = bases.patterns.iter().find(|p| p.name == "base_giuridica_kw").unwrap();
        assert_eq!(def.description, "Rinvio all\u{2019}art. 6");
    }
}
