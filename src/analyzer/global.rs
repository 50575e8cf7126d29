//! 全局扫描器单例管理
//! 内置模式库只编译一次，之后以只读方式在所有调用方之间共享

use std::sync::Arc;

use informativa_engine::{
    ChecklistEvidenceMap, CompiledCatalog, MatchRecord, PatternCatalog, ScanOptions, Scanner,
};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{InfResult, InformativaError};

/// 编译后的内置模式库
static BUILTIN_COMPILED: OnceCell<Arc<CompiledCatalog>> = OnceCell::new();

/// 全局扫描器实例
static GLOBAL_SCANNER: OnceCell<Scanner> = OnceCell::new();

/// 获取（必要时编译）内置模式库；编译失败直接返回错误，不会缓存半成品
pub fn builtin_compiled() -> InfResult<Arc<CompiledCatalog>> {
    BUILTIN_COMPILED
        .get_or_try_init(|| {
            let compiled = CompiledCatalog::compile(PatternCatalog::builtin())?;
            debug!(
                "Builtin catalog compiled | categories: {} | patterns: {}",
                compiled.categories().len(),
                compiled.pattern_count()
            );
            Ok::<_, InformativaError>(Arc::new(compiled))
        })
        .cloned()
}

/// 初始化全局扫描器（默认参数）
pub fn init_scanner() -> InfResult<()> {
    init_scanner_with_options(ScanOptions::default())
}

/// 带自定义参数初始化全局扫描器；已初始化时保持原实例
pub fn init_scanner_with_options(options: ScanOptions) -> InfResult<()> {
    if GLOBAL_SCANNER.get().is_some() {
        return Ok(());
    }

    let scanner = Scanner::with_options(builtin_compiled()?, options);
    // 并发初始化时以先完成者为准
    let _ = GLOBAL_SCANNER.set(scanner);
    Ok(())
}

/// 获取全局扫描器
pub fn global_scanner() -> InfResult<&'static Scanner> {
    GLOBAL_SCANNER.get().ok_or(InformativaError::ScannerNotInitialized)
}

/// 使用全局扫描器扫描文本（`categories = None` 表示全部分类）
pub fn scan_text(text: &str, categories: Option<&[&str]>) -> InfResult<Vec<MatchRecord>> {
    Ok(global_scanner()?.scan(text, categories))
}

/// 使用全局扫描器生成 检查项ID -> 证据片段 映射
pub fn evidence_by_checklist(text: &str) -> InfResult<ChecklistEvidenceMap> {
    Ok(global_scanner()?.evidence_by_checklist(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_scanner_lifecycle() {
        init_scanner().unwrap();
        init_scanner().unwrap();

        let records = scan_text(
            "I dati saranno conservati per un massimo di 10 anni e poi cancellazione.",
            Some(&["retention"]),
        )
        .unwrap();
        assert!(records.iter().any(|r| &*r.pattern == "durata_massima"));

        let evidence = evidence_by_checklist("Titolare del trattamento è Alfa S.p.A.").unwrap();
        assert!(evidence.contains_key("GDPR_13_1_a_titolare"));
    }

    #[test]
    fn test_builtin_compiled_is_shared() {
        let a = builtin_compiled().unwrap();
        let b = builtin_compiled().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
