//! 提示词模块：命中提示打包 + 评审模板
pub mod hints;
pub mod template;

pub use self::hints::{hints_json, pack_hints, Hint};
pub use self::template::{PromptTemplate, SYSTEM_INSTR};
