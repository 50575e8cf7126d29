//! 检查项清单加载
//! 清单是一个 JSON 数组，每个元素对应一个 `ChecklistItem`

use std::path::Path;

use tracing::debug;

use super::model::ChecklistItem;
use crate::error::{InfResult, InformativaError};

/// 检查项清单加载器
pub struct ChecklistLoader;

impl ChecklistLoader {
    /// 从文件加载清单
    pub async fn load(path: &Path) -> InfResult<Vec<ChecklistItem>> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            InformativaError::ChecklistLoadError(format!("{}: {}", path.display(), e))
        })?;
        let items = Self::parse(&content)?;
        debug!("Checklist loaded from {} | items: {}", path.display(), items.len());
        Ok(items)
    }

    /// 从 JSON 文本解析清单
    pub fn parse(content: &str) -> InfResult<Vec<ChecklistItem>> {
        let items: Vec<ChecklistItem> = serde_json::from_str(content)?;
        if let Some(dup) = items
            .iter()
            .enumerate()
            .find(|(i, item)| items[i + 1..].iter().any(|other| other.id == item.id))
            .map(|(_, item)| item)
        {
            return Err(InformativaError::ChecklistLoadError(format!(
                "duplicate checklist id {}",
                dup.id
            )));
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("informativa-checklist-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = temp_file(
            "ok.json",
            r#"[{"id":"GDPR_15_22_diritti","title":"Diritti","question":"Q?","accept":["a"]}]"#,
        );
        let items = ChecklistLoader::load(&path).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].accept, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let path = std::env::temp_dir().join("informativa-does-not-exist.json");
        assert!(matches!(
            ChecklistLoader::load(&path).await,
            Err(InformativaError::ChecklistLoadError(_))
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[{"id":"A","title":"t","question":"q"},{"id":"A","title":"t2","question":"q2"}]"#;
        assert!(matches!(
            ChecklistLoader::parse(json),
            Err(InformativaError::ChecklistLoadError(_))
        ));
    }

    #[test]
    fn test_bundled_checklist_parses() {
        let items = ChecklistLoader::parse(include_str!("../../checklist.json")).unwrap();
        assert!(!items.is_empty());
        for item in &items {
            assert!(
                !informativa_engine::checklist_label(&item.id).is_empty(),
                "checklist id without label: {}",
                item.id
            );
        }
    }
}
