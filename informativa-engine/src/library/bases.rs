use super::fragments::{phrase, SP};
use crate::core::PatternDef;

/// 2) FINALITÀ & BASI GIURIDICHE（art. 6(1)，art. 9(2)）
pub(crate) fn purposes_bases() -> Vec<PatternDef> {
    const BASE: &[&str] = &["GDPR_6_1_base_giuridica"];

    let special_data = format!(
        "(sensibil[ie]|sanitar[ie]|biometric[ie]|genetic[ie]|{}|{}|{})",
        phrase(&["relativi", "alla", "salute"]),
        phrase(&["vita", "sessuale"]),
        phrase(&["orientamento", "sessuale"])
    );

    vec![
        PatternDef::new(
            "finalita_kw",
            r"\b(finalit[aà]|scopi|purpose)\b",
            "Parola chiave 'finalità/scopi'",
            &["GDPR_13_1_c_finalita"],
        ),
        // art. 6(1) 各项合法性基础
        PatternDef::new(
            "base_giuridica_kw",
            format!(
                "{}|{}",
                phrase(&["base", "giuridic[ae]"]),
                phrase(&["ai", "sensi", r"dell'?art\.?", "6"])
            ),
            "Rinvio all’art. 6",
            BASE,
        ),
        PatternDef::new(
            "consenso_kw",
            r"\bconsens[oi]\b|\bconsent\b",
            "Base: consenso",
            BASE,
        ),
        PatternDef::new(
            "contratto_kw",
            format!(
                r"\bcontratt\w+\b|\b{}\b",
                phrase(&["necessario", "all'?esecuzione", "del", "contratto"])
            ),
            "Base: contratto",
            BASE,
        ),
        PatternDef::new(
            "obbligo_legale_kw",
            format!(r"\b{}\b", phrase(&["obblig[oi]", "legal[ei]"])),
            "Base: obbligo legale",
            BASE,
        ),
        PatternDef::new(
            "interesse_legittimo_kw",
            format!(
                "{}|{}",
                phrase(&["interesse", "legittim[oa]"]),
                phrase(&["legitimate", "interest"])
            ),
            "Base: interesse legittimo",
            &["GDPR_13_1_d_interesse_legittimo", "GDPR_6_1_base_giuridica"],
        ),
        PatternDef::new(
            "pubblico_vitale_kw",
            format!(
                "{}|{}|{}",
                phrase(&["interess[oi]", "vital[ei]"]),
                phrase(&["compit[oi]", "di", "interesse", "pubblic[oi]"]),
                phrase(&["pubblic[oi]", "poteri"])
            ),
            "Basi: vitale/pubblico",
            BASE,
        ),
        // art. 9(2) 特殊类别数据
        PatternDef::new(
            "dati_particolari_kw",
            format!(
                "{}|dati{}{}",
                phrase(&[r"categor\w+", r"particolar\w+"]),
                SP,
                special_data
            ),
            "Dati particolari",
            &["GDPR_9_2_dati_particolari"],
        ),
        PatternDef::new(
            "consenso_esplicito_kw",
            phrase(&["consenso", "esplicit[oa]"]),
            "Consenso esplicito (utile per 9(2))",
            &["GDPR_9_2_dati_particolari"],
        ),
        PatternDef::new(
            "LIA_bilanciamento_kw",
            format!(
                r"\bbilanciam[eo]\w*|LIA\b|{}",
                phrase(&["legitimate", "interest", "assessment"])
            ),
            "Rinvio a bilanciamento (LIA)",
            &["GDPR_13_1_d_interesse_legittimo"],
        ),
    ]
}
