//! 主体相关模式：身份与联系方式、数据来源、接收方与角色、境外传输

use super::fragments::{phrase, pec, EMAIL, PHONE};
use crate::core::PatternDef;

/// 1) IDENTITÀ & CONTATTI（art. 13(1)(a)(b)，art. 27）
pub(crate) fn identity_contacts() -> Vec<PatternDef> {
    let dpo_en = phrase(&["data", "protection", "officer"]);

    vec![
        PatternDef::new(
            "titolare_block",
            phrase(&["titolare", "del", "trattamento"]),
            "Menzione del titolare",
            &["GDPR_13_1_a_titolare"],
        ),
        PatternDef::new(
            "denominazione_ragione_sociale",
            format!(
                r"(denominazion[ea]|{}|societ[aà]|S\.?p\.?A\.?|S\.?r\.?l\.?)",
                phrase(&["ragione", "sociale"])
            ),
            "Denominazione/ragione sociale",
            &["GDPR_13_1_a_titolare"],
        ),
        PatternDef::new(
            "sede_legale",
            phrase(&["sede", "legal[ea]"]),
            "Sede legale indicata",
            &["GDPR_13_1_a_titolare"],
        ),
        PatternDef::new(
            "indirizzo_postale",
            r"(via|viale|corso|piazza|largo|strada)\s+[A-Za-zÀ-ÖØ-öø-ÿ0-9\.\- ]+,\s*\d{1,4}",
            "Indirizzo postale plausibile",
            &["GDPR_13_1_a_titolare"],
        ),
        // 联系方式
        PatternDef::new(
            "email_any",
            EMAIL,
            "Email presente",
            &["GDPR_13_1_a_titolare", "GDPR_12_1_modalita_esercizio"],
        ),
        PatternDef::new("pec", pec(), "PEC presente", &["GDPR_12_1_modalita_esercizio"]),
        PatternDef::new(
            "telefono",
            PHONE,
            "Numero di telefono plausibile",
            &["GDPR_13_1_a_titolare"],
        ),
        // DPO
        PatternDef::new(
            "dpo_kw",
            format!(
                "({}|{}|DPO)",
                phrase(&["responsabile", "della", "protezione", "dei", "dati"]),
                dpo_en
            ),
            "Menzione DPO",
            &["GDPR_13_1_b_dpo"],
        ),
        PatternDef::new(
            "dpo_contatto",
            format!("(DPO|{}).{{0,40}}{}", dpo_en, EMAIL),
            "Contatto email DPO",
            &["GDPR_13_1_b_dpo"],
        ),
        // 欧盟代表（非欧盟控制者）
        PatternDef::new(
            "rappresentante_ue",
            format!(
                "{}|{}",
                phrase(&["rappresentante", "nell(?:'|a)", "unione", "europea"]),
                phrase(&[r"art\.?", "27"])
            ),
            "Rappresentante UE (art. 27)",
            &["GDPR_13_1_a_rappresentanteUE"],
        ),
    ]
}

/// 3) CATEGORIE & ORIGINE（art. 14）
pub(crate) fn categories_origin() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            "categorie_dati_kw",
            phrase(&["categorie", "di", "dati"]),
            "Categorie di dati",
            &["GDPR_14_1_d_categorie_dati"],
        ),
        PatternDef::new(
            "origine_dati_kw",
            phrase(&["(origine|provenienza|fonte)", "dei?", "dati"]),
            "Origine/provenienza dei dati",
            &["GDPR_14_2_f_origine_dati"],
        ),
        PatternDef::new(
            "raccolta_da_terzi",
            phrase(&["raccolt[oi]", "da", "terz[ie]"]),
            "Raccolta da terzi",
            &["GDPR_14_1_d_categorie_dati", "GDPR_14_2_f_origine_dati"],
        ),
    ]
}

/// 4) DESTINATARI & RUOLI（art. 26–28）
pub(crate) fn recipients_roles() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            "destinatari_kw",
            format!(
                "destinatari|{}|{}",
                phrase(&["categorie", "di", "destinatari"]),
                phrase(&["comunicati?", "a"])
            ),
            "Destinatari/categorie di destinatari",
            &["GDPR_13_1_e_destinatari"],
        ),
        PatternDef::new(
            "responsabile_28_kw",
            format!(
                "{}|{}",
                phrase(&["responsabile", "del", "trattamento"]),
                phrase(&["accordo", "ex", r"art\.?", "28"])
            ),
            "Responsabile ex art. 28",
            &["GDPR_26_28_ruoli"],
        ),
        PatternDef::new(
            "contitolarita_26_kw",
            format!(
                "{}|{}|{}",
                phrase(&["contitolari?(?:t[aà])?", "del", "trattamento"]),
                phrase(&["accordo", "di", "contitolarit[aà]"]),
                phrase(&[r"art\.?", "26"])
            ),
            "Contitolarità art. 26",
            &["GDPR_26_28_ruoli"],
        ),
        PatternDef::new(
            "fornitori_cloud_kw",
            phrase(&["(fornitor[ei]|provider)", "(cloud|serviz[io] digital[ie])"]),
            "Fornitori/Cloud (spesso responsabili)",
            &["GDPR_13_1_e_destinatari", "GDPR_26_28_ruoli"],
        ),
    ]
}

/// 5) TRASFERIMENTI EXTRA-UE（art. 44–49）
pub(crate) fn transfers() -> Vec<PatternDef> {
    const EXTRA_UE: &[&str] = &["GDPR_13_1_f_44_49_trasferimenti_extraUE"];

    vec![
        PatternDef::new(
            "trasferimenti_kw",
            format!(
                "trasferiment[io]|{}|extra[- ]?UE|{}|SEE",
                phrase(&["paes[ei]", "terz[io]"]),
                phrase(&["al", "di", "fuori", "dell(?:'|a)", "UE"])
            ),
            "Trasferimenti verso paesi terzi/extra-UE/SEE",
            EXTRA_UE,
        ),
        PatternDef::new(
            "SCC_kw",
            format!(
                "{}|{}|SCC",
                phrase(&["clausole", "contrattuali", "standard"]),
                phrase(&["standard", "contractual", "clauses"])
            ),
            "Clausole contrattuali standard",
            EXTRA_UE,
        ),
        PatternDef::new(
            "adeguatezza_kw",
            format!(
                "{}|{}",
                phrase(&["decisione", "di", "adeguatezza"]),
                phrase(&["adequacy", "decision"])
            ),
            "Decisione di adeguatezza",
            EXTRA_UE,
        ),
        PatternDef::new(
            "BCR_kw",
            format!("{}|BCR", phrase(&["binding", "corporate", "rules"])),
            "Binding Corporate Rules",
            EXTRA_UE,
        ),
        PatternDef::new(
            "DPF_kw",
            format!(
                "(EU[- ]?US|UE[- ]?USA).{{0,20}}({}|DPF)",
                phrase(&["data", "privacy", "framework"])
            ),
            "EU-US Data Privacy Framework",
            EXTRA_UE,
        ),
        PatternDef::new(
            "USA_kw",
            format!(
                r"\bUSA\b|\b{}\b|{}",
                phrase(&["Stati", r"Unit[ie]"]),
                phrase(&["United", "States"])
            ),
            "Riferimenti a USA",
            EXTRA_UE,
        ),
    ]
}
