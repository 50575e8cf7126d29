use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// 扫描输出的单条命中记录（每个模式每次出现一条，内核不做去重）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// 所属分类
    pub category: Arc<str>,
    /// 模式名（分类内唯一）
    pub pattern: Arc<str>,
    /// 命中起始字节偏移（含）
    pub start: usize,
    /// 命中结束字节偏移（不含）
    pub end: usize,
    /// 上下文片段（空白已折叠为单个空格）
    pub snippet: String,
    /// 模式关联的检查项ID
    pub checklist_ids: Arc<[String]>,
    pub description: Arc<str>,
}

impl MatchRecord {
    /// 命中区间在原文中的文本
    pub fn matched_text<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }

    pub fn supports(&self, checklist_id: &str) -> bool {
        self.checklist_ids.iter().any(|id| id == checklist_id)
    }
}

/// 单个检查项的证据片段（去重，保持首次出现顺序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistEvidence {
    pub checklist_id: String,
    pub snippets: Vec<String>,
}

/// 检查项ID -> 证据片段 的有序映射
///
/// 键按首次出现顺序排列；没有任何命中的检查项不会出现在映射中。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistEvidenceMap {
    entries: Vec<ChecklistEvidence>,
    index: FxHashMap<String, usize>,
}

impl ChecklistEvidenceMap {
    /// 将扫描结果按检查项ID折叠
    /// 一条记录贡献给它标注的每个检查项；同一桶内相同片段只保留一次
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut map = Self::default();
        let mut seen: Vec<FxHashSet<&str>> = Vec::new();

        for record in records {
            for cid in record.checklist_ids.iter() {
                let slot = match map.index.get(cid) {
                    Some(&slot) => slot,
                    None => {
                        map.entries.push(ChecklistEvidence {
                            checklist_id: cid.clone(),
                            snippets: Vec::new(),
                        });
                        seen.push(FxHashSet::default());
                        let slot = map.entries.len() - 1;
                        map.index.insert(cid.clone(), slot);
                        slot
                    }
                };

                if seen[slot].insert(record.snippet.as_str()) {
                    map.entries[slot].snippets.push(record.snippet.clone());
                }
            }
        }

        map
    }

    pub fn get(&self, checklist_id: &str) -> Option<&[String]> {
        self.index
            .get(checklist_id)
            .map(|&slot| self.entries[slot].snippets.as_slice())
    }

    pub fn contains_key(&self, checklist_id: &str) -> bool {
        self.index.contains_key(checklist_id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.checklist_id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChecklistEvidence> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ChecklistEvidenceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.checklist_id, &entry.snippets)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pattern: &str, snippet: &str, ids: &[&str]) -> MatchRecord {
        MatchRecord {
            category: Arc::from("cat"),
            pattern: Arc::from(pattern),
            start: 0,
            end: 1,
            snippet: snippet.to_string(),
            checklist_ids: ids.iter().map(|s| s.to_string()).collect(),
            description: Arc::from(""),
        }
    }

    #[test]
    fn test_fold_dedups_snippets_per_bucket() {
        let records = vec![
            record("a", "uno", &["X", "Y"]),
            record("b", "uno", &["X"]),
            record("c", "due", &["X"]),
        ];
        let map = ChecklistEvidenceMap::from_records(&records);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["X", "Y"]);
        assert_eq!(map.get("X").unwrap(), &["uno".to_string(), "due".to_string()]);
        assert_eq!(map.get("Y").unwrap(), &["uno".to_string()]);
        assert!(map.get("Z").is_none());
    }

    #[test]
    fn test_serialize_preserves_key_order() {
        let records = vec![record("a", "s1", &["B_ID"]), record("b", "s2", &["A_ID"])];
        let map = ChecklistEvidenceMap::from_records(&records);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"B_ID":["s1"],"A_ID":["s2"]}"#);
    }

    #[test]
    fn test_record_serialized_field_names() {
        let json = serde_json::to_value(record("p", "snip", &["ID"])).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["category", "pattern", "start", "end", "snippet", "checklist_ids", "description"] {
            assert!(obj.contains_key(key), "missing {}", key);
        }
        assert_eq!(obj.len(), 7);
    }
}
