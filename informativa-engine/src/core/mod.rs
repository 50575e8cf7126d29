mod enums;
mod pattern;
mod record;

// 导出常用项
pub use enums::Category;
pub use pattern::{CategoryPatterns, PatternCatalog, PatternDef};
pub use record::{ChecklistEvidence, ChecklistEvidenceMap, MatchRecord};
