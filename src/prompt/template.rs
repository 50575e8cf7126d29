//! 评审提示词模板

/// 系统指令：评审角色 + 仅输出 JSON + 状态取值
pub const SYSTEM_INSTR: &str = "Sei un revisore privacy. Rispondi SOLO in JSON. \
Per ogni item: status in {present, ambiguous, missing}; \
evidence_snippet deve provenire dal testo policy.";

const DEFAULT_HEADER: &str = "Sei un revisore privacy. Le HINTS sono indizi opzionali e possono essere rumorose.\n\
Leggi la POLICY e valuta ogni item della checklist completa. Non copiare le hints: estrai evidenza dalla POLICY.";

const DEFAULT_FOOTER: &str = "Output SOLO JSON: lista di oggetti con campi:\n\
- id: string\n\
- status: one of {present, ambiguous, missing}\n\
- evidence_snippet: string (dal testo POLICY)\n\
- reasoning: string\n";

/// 提示词模板：头部说明 + [POLICY] / [HINTS_JSON] / [CHECKLIST] 三个区块 + 输出格式说明
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub header: String,
    pub footer: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl PromptTemplate {
    /// 填充模板
    /// 区块内容原样插入，不做占位符替换，策略文本中的花括号不会被误解析
    pub fn render(&self, policy: &str, hints_json: &str, checklist: &str) -> String {
        format!(
            "{}\n\n[POLICY]\n{}\n\n[HINTS_JSON]\n{}\n\n[CHECKLIST]\n{}\n\n{}",
            self.header, policy, hints_json, checklist, self.footer
        )
    }
}
