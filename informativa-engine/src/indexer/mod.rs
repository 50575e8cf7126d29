//! 编译模块：将声明式模式库编译为可执行的正则集合
mod builder;
mod compiled;

// 对外只导出具体内容，不导出模块名
pub use builder::{CatalogCompiler, CompileStats};
pub use compiled::{CompiledCatalog, CompiledCategory, CompiledPattern};
