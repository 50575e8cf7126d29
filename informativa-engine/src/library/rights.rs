use super::fragments::{automated_decision, phrase, pec, EMAIL};
use crate::core::PatternDef;

const DIRITTI: &[&str] = &["GDPR_15_22_diritti"];
const MODALITA: &[&str] = &["GDPR_12_1_modalita_esercizio"];

/// 7) DIRITTI DELL'INTERESSATO（art. 15–22，art. 12）
pub(crate) fn rights() -> Vec<PatternDef> {
    vec![
        PatternDef::new("diritti_kw", r"\bdiritt[oi]\b", "Sezione diritti", DIRITTI),
        PatternDef::new("diritto_accesso", r"\baccesso\b", "Diritto di accesso", DIRITTI),
        PatternDef::new("diritto_rettifica", r"\brettifica\b", "Diritto di rettifica", DIRITTI),
        PatternDef::new(
            "diritto_cancellazione_oblio",
            r"\b(cancellazione|oblio)\b",
            "Diritto cancellazione/oblio",
            DIRITTI,
        ),
        PatternDef::new(
            "diritto_limitazione",
            r"\blimitazion[ea]\b",
            "Diritto di limitazione",
            DIRITTI,
        ),
        PatternDef::new(
            "diritto_portabilita",
            r"\bportabilit[aà]\b",
            "Diritto alla portabilità",
            DIRITTI,
        ),
        PatternDef::new(
            "diritto_opposizione",
            r"\bopposizion[ea]\b",
            "Diritto di opposizione",
            DIRITTI,
        ),
        PatternDef::new(
            "diritto_revoca_consenso",
            r"\brevoc(a|are|abile)\b.*\bconsens[oi]\b",
            "Revoca del consenso",
            DIRITTI,
        ),
        // 行使方式与渠道（art. 12）
        PatternDef::new(
            "modalita_esercizio_frase",
            phrase(&["(come|modalit[aà]|modo)", "(?:di|per)", r"esercit\w+", "i", "diritt[oi]"]),
            "Frase modalità di esercizio",
            MODALITA,
        ),
        PatternDef::new(
            "canale_email",
            EMAIL,
            "Email contatti/diritti",
            &["GDPR_12_1_modalita_esercizio", "GDPR_13_1_a_titolare"],
        ),
        PatternDef::new("canale_pec", pec(), "PEC", MODALITA),
        PatternDef::new(
            "canale_modulo_form",
            format!(r"\b(modul[oi]|form|{})\b", phrase(&["modulo", "online"])),
            "Modulo/form",
            MODALITA,
        ),
        PatternDef::new(
            "canale_postale",
            format!("({}|raccomandata|lettera)", phrase(&["indirizzo", "postale"])),
            "Indirizzo postale",
            MODALITA,
        ),
        PatternDef::new(
            "tempo_riscontro",
            format!(
                r"{}|\b{}\b",
                phrase(&["(30|trenta)", "giorni"]),
                phrase(&["un", "mese"])
            ),
            "Tempi di riscontro",
            MODALITA,
        ),
        // 向监管机构投诉
        PatternDef::new(
            "reclamo_garante_kw",
            format!(
                r"{}(?:\s+personali)?",
                phrase(&["garante", "per", "la", "protezione", "dei", "dati"])
            ),
            "Reclamo al Garante",
            &["GDPR_13_2_d_reclamo_garante"],
        ),
        // 自动化决策/画像（常在权利章节中提及）
        PatternDef::new(
            "no_decisioni_automatizzate",
            format!(
                "{}|{}",
                phrase(&["no", "decisioni", "automatizzat[ae]"]),
                phrase(&["assenza", "di", "processi", "automatizzati"])
            ),
            "Assenza decisioni automatizzate",
            &["GDPR_13_2_f_22_profilazione"],
        ),
        PatternDef::new(
            "profilazione_kw",
            format!("({}|profilazion[ea]|scoring)", automated_decision()),
            "Profilazione/decisioni automatizzate",
            &["GDPR_13_2_f_22_profilazione"],
        ),
    ]
}
