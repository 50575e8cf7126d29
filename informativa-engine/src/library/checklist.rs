//! 检查项ID -> 简短标签
//! 用于在不加载完整检查项记录的情况下向人或LLM展示检查项

/// 检查项标签表（按检查项清单顺序）
pub const CHECKLIST_LABELS: &[(&str, &str)] = &[
    ("GDPR_13_1_a_titolare", "Titolare (identità/contatti)"),
    ("GDPR_13_1_a_rappresentanteUE", "Rappresentante UE (art. 27)"),
    ("GDPR_13_1_b_dpo", "DPO contatti"),
    ("GDPR_13_1_c_finalita", "Finalità del trattamento"),
    ("GDPR_6_1_base_giuridica", "Base giuridica (art. 6)"),
    ("GDPR_9_2_dati_particolari", "Dati particolari (art. 9(2))"),
    ("GDPR_13_1_d_interesse_legittimo", "Interesse legittimo specificato"),
    ("GDPR_14_1_d_categorie_dati", "Categorie di dati (art. 14(1)(d))"),
    ("GDPR_14_2_f_origine_dati", "Origine dei dati (art. 14(2)(f))"),
    ("GDPR_13_1_e_destinatari", "Destinatari"),
    ("GDPR_26_28_ruoli", "Ruoli privacy (26–28)"),
    ("GDPR_13_1_f_44_49_trasferimenti_extraUE", "Trasferimenti extra-UE"),
    ("GDPR_13_2_a_conservazione", "Periodo di conservazione"),
    ("GDPR_15_22_diritti", "Diritti interessato"),
    ("GDPR_12_1_modalita_esercizio", "Modalità di esercizio (art. 12)"),
    ("GDPR_13_2_d_reclamo_garante", "Reclamo al Garante"),
    ("CPI_2_quinquies_minori", "Consenso minori (14 anni)"),
    ("GARANTE_2021_cookie_informativa", "Cookie informativa"),
    ("GARANTE_2021_cookie_banner", "Cookie banner & preferenze"),
    ("GDPR_13_2_f_22_profilazione", "Profilazione/decisioni automatizzate"),
    ("GDPR_13_videosorveglianza", "Videosorveglianza"),
    ("GDPR_13_geolocalizzazione", "Geolocalizzazione"),
    ("STATUTO_4_CPI_114_lavoratori", "Lavoratori/controlli a distanza"),
    ("GDPR_12_1_linguaggio", "Linguaggio chiaro"),
    ("GARANTE_accessibilita_italiano", "Italiano/accessibilità"),
    ("GDPR_12_1_minori_linguaggio", "Linguaggio per minori"),
];

/// 查询检查项标签；未知ID返回空字符串
pub fn checklist_label(checklist_id: &str) -> &'static str {
    CHECKLIST_LABELS
        .iter()
        .find(|(id, _)| *id == checklist_id)
        .map(|(_, label)| *label)
        .unwrap_or("")
}
