use super::fragments::{duration, phrase, vague_retention};
use crate::core::PatternDef;

const CONSERVAZIONE: &[&str] = &["GDPR_13_2_a_conservazione"];

/// 模糊表述的模式名与说明，与 `vague_retention()` 的顺序一一对应
const VAGUE_NAMES: [(&str, &str); 6] = [
    ("vaghezza_tempo_necessario", "Formula vaga: tempo necessario"),
    ("vaghezza_limiti_legge", "Formula vaga: limiti di legge"),
    ("vaghezza_finalita", "Formula vaga: fino a finalità"),
    ("vaghezza_periodo_necessario", "Formula vaga: periodo necessario"),
    ("vaghezza_tempo_previsto_norma", "Formula vaga: tempo previsto da norma"),
    ("vaghezza_ragionevole", "Formula vaga: periodo ragionevole"),
];

/// 6) CONSERVAZIONE（art. 13(2)(a)）
pub(crate) fn retention() -> Vec<PatternDef> {
    let mut defs = vec![
        PatternDef::new(
            "durata_esplicita",
            duration(),
            "Durata esplicita (anni/mesi/settimane/giorni)",
            CONSERVAZIONE,
        ),
        PatternDef::new(
            "durata_massima",
            format!(
                r"({}|{}|{})\s+{}",
                phrase(&["non", "oltre"]),
                phrase(&["comunque", "non", "oltre"]),
                phrase(&["per", "un", "massimo", "di"]),
                duration()
            ),
            "Durata massima dichiarata",
            CONSERVAZIONE,
        ),
        PatternDef::new(
            "kw_conservazione",
            "(conservazion[ea]|durat[ae]|periodo|termine)",
            "Parole chiave conservazione",
            CONSERVAZIONE,
        ),
    ];

    defs.extend(
        VAGUE_NAMES
            .iter()
            .zip(vague_retention())
            .map(|((name, description), expr)| {
                PatternDef::new(*name, expr, *description, CONSERVAZIONE)
            }),
    );

    // 保存期届满后的处理
    defs.push(PatternDef::new(
        "fine_conservazione_azioni",
        "(cancellazion[ea]|eliminazion[ea]|rimozion[ea]|distruzion[ea]|anonimizzazion[ea]|pseudonimizzazion[ea])",
        "Azioni di fine conservazione",
        CONSERVAZIONE,
    ));

    defs
}
