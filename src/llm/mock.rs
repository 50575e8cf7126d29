use async_trait::async_trait;
use serde_json::{json, Value};

use super::LlmClient;
use crate::config::ProviderKind;
use crate::error::InfResult;

/// 识别为检查项ID的前缀
const CHECKLIST_PREFIXES: [&str; 4] = ["GDPR_", "GARANTE_", "CPI_", "STATUTO_"];

/// 离线模拟后端：不调用任何模型
/// 对提示词中每一行 `- ID :: 标题` 返回一条 ambiguous 结论
#[derive(Debug, Clone, Copy, Default)]
pub struct MockClient;

impl MockClient {
    /// 从提示词中按出现顺序收集检查项ID
    pub fn checklist_ids(prompt: &str) -> Vec<&str> {
        prompt
            .lines()
            .filter_map(|line| line.strip_prefix("- "))
            .filter(|rest| rest.contains(':'))
            .filter_map(|rest| rest.split(':').next())
            .map(str::trim)
            .filter(|id| CHECKLIST_PREFIXES.iter().any(|p| id.starts_with(p)))
            .collect()
    }
}

#[async_trait]
impl LlmClient for MockClient {
    fn provider(&self) -> ProviderKind {
        ProviderKind::Mock
    }

    async fn complete(&self, prompt: &str) -> InfResult<Value> {
        let items: Vec<Value> = Self::checklist_ids(prompt)
            .into_iter()
            .map(|id| {
                json!({
                    "id": id,
                    "status": "ambiguous",
                    "evidence_snippet": "",
                    "reasoning": "Mock mode.",
                })
            })
            .collect();
        Ok(Value::Array(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: &str = "- id: string\n\
        - GDPR_13_2_a_conservazione :: Periodo di conservazione\n\
        \x20\x20Q: domanda: con due punti\n\
        - CPI_2_quinquies_minori :: Minori\n\
        - ALTRO_ID :: ignorato\n\
        - senza due punti";

    #[test]
    fn test_collects_prefixed_ids_in_order() {
        assert_eq!(
            MockClient::checklist_ids(PROMPT),
            vec!["GDPR_13_2_a_conservazione", "CPI_2_quinquies_minori"]
        );
    }

    #[tokio::test]
    async fn test_mock_answers_ambiguous() {
        let value = MockClient.complete(PROMPT).await.unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["id"], "GDPR_13_2_a_conservazione");
        assert_eq!(items[0]["status"], "ambiguous");
        assert_eq!(items[0]["evidence_snippet"], "");
        assert_eq!(items[1]["reasoning"], "Mock mode.");
    }

    #[tokio::test]
    async fn test_mock_verdict_field_order() {
        let value = MockClient.complete(PROMPT).await.unwrap();
        let keys: Vec<&str> = value[0].as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "status", "evidence_snippet", "reasoning"]);

        let rendered = serde_json::to_string(&value[1]).unwrap();
        assert_eq!(
            rendered,
            r#"{"id":"CPI_2_quinquies_minori","status":"ambiguous","evidence_snippet":"","reasoning":"Mock mode."}"#
        );
    }
}
