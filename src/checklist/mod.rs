//! 检查项模块：清单模型、加载与提示词渲染
pub mod loader;
pub mod model;

pub use self::loader::ChecklistLoader;
pub use self::model::{checklist_block, ChecklistItem};
