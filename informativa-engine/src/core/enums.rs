use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CoreError;

/// 内置模式库的分类枚举，声明顺序即扫描顺序
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    IdentityContacts,
    PurposesBases,
    CategoriesOrigin,
    RecipientsRoles,
    Transfers,
    Retention,
    Rights,
    Cookies,
    Minors,
    SpecialProcessing,
    WorkersControls,
    LanguageAccessibility,
}

impl Category {
    /// 全部分类（按声明顺序）
    pub const ALL: [Category; 12] = [
        Category::IdentityContacts,
        Category::PurposesBases,
        Category::CategoriesOrigin,
        Category::RecipientsRoles,
        Category::Transfers,
        Category::Retention,
        Category::Rights,
        Category::Cookies,
        Category::Minors,
        Category::SpecialProcessing,
        Category::WorkersControls,
        Category::LanguageAccessibility,
    ];

    /// 分类名（扫描记录与过滤条件使用的字符串）
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::IdentityContacts => "identity_contacts",
            Category::PurposesBases => "purposes_bases",
            Category::CategoriesOrigin => "categories_origin",
            Category::RecipientsRoles => "recipients_roles",
            Category::Transfers => "transfers",
            Category::Retention => "retention",
            Category::Rights => "rights",
            Category::Cookies => "cookies",
            Category::Minors => "minors",
            Category::SpecialProcessing => "special_processing",
            Category::WorkersControls => "workers_controls",
            Category::LanguageAccessibility => "language_accessibility",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown category: {}", s)))
    }
}
