//! 特定处理场景：未成年人、画像/视频监控/定位、劳动者远程监控、语言与可访问性

use super::fragments::{automated_decision, phrase, SP};
use crate::core::PatternDef;

/// 9) MINORI（CPI art. 2-quinquies）
pub(crate) fn minors() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            "minori_kw",
            r"\bminor[ei]\b|\bet[aà]\b|under\s?\d{1,2}",
            "Menzione minori/età",
            &["CPI_2_quinquies_minori", "GDPR_12_1_minori_linguaggio"],
        ),
        PatternDef::new(
            "eta_anni",
            format!(r"\b\d{{1,2}}{}anni\b", SP),
            "Età indicata (anni)",
            &["CPI_2_quinquies_minori"],
        ),
        PatternDef::new(
            "consenso_genitori",
            format!(
                "(genitor[ie]|tutor[ei]|{})",
                phrase(&["responsabilit[aà]", "genitorial[ea]"])
            ),
            "Consenso genitori/tutori",
            &["CPI_2_quinquies_minori"],
        ),
    ]
}

/// 10) TRATTAMENTI PARTICOLARI
///
/// 这里的 `profilazione_kw` 与 `rights` 分类下的同名模式并存，
/// 两者分支顺序不同，作为两个独立条目保留。
pub(crate) fn special_processing() -> Vec<PatternDef> {
    const PROFILAZIONE: &[&str] = &["GDPR_13_2_f_22_profilazione"];
    const VIDEO: &[&str] = &["GDPR_13_videosorveglianza"];
    const GEO: &[&str] = &["GDPR_13_geolocalizzazione"];

    vec![
        // art. 22 + 13(2)(f)
        PatternDef::new(
            "profilazione_kw",
            format!("(profilazion[ea]|{}|scoring)", automated_decision()),
            "Profilazione/automatizzate",
            PROFILAZIONE,
        ),
        PatternDef::new(
            "intervento_umano_kw",
            format!(
                "{}|{}|spiegazion[ei]",
                phrase(&["intervento", "umano"]),
                phrase(&["diritto", "di", "contestazione"])
            ),
            "Diritti contro decisioni automatizzate",
            PROFILAZIONE,
        ),
        // 视频监控
        PatternDef::new(
            "videosorveglianza_kw",
            "videosorveglianz[ae]|CCTV|telecamer[ae]",
            "Videosorveglianza",
            VIDEO,
        ),
        PatternDef::new(
            "cartelli_kw",
            format!(
                r"\bcartell[oi]\b|{}",
                phrase(&["informazion[ei]", "sintetic[he]"])
            ),
            "Cartelli informativi",
            VIDEO,
        ),
        // 地理定位
        PatternDef::new(
            "geolocalizzazione_kw",
            "geolocalizzazion[ea]|posizion[ea]|GPS|geofencing|tracking",
            "Geolocalizzazione/posizione",
            GEO,
        ),
        PatternDef::new(
            "parametri_geo_kw",
            "(frequenza|accuratezza|precisione|intervalli|sampling)",
            "Parametri tecnici geoloc.",
            GEO,
        ),
    ]
}

/// 11) LAVORATORI / CONTROLLI A DISTANZA（art. 4 L. 300/1970，art. 114 CPI）
pub(crate) fn workers_controls() -> Vec<PatternDef> {
    const LAVORATORI: &[&str] = &["STATUTO_4_CPI_114_lavoratori"];

    vec![
        PatternDef::new(
            "statuto_kw",
            format!(
                "{}|{}|{}",
                phrase(&["controlli", "a", "distanza"]),
                phrase(&["statuto", "dei", "lavoratori"]),
                phrase(&[r"art\.?", "4", r"L\.?", "300/1970"])
            ),
            "Controlli a distanza/statuto",
            LAVORATORI,
        ),
        PatternDef::new(
            "accordo_autorizzazione_kw",
            format!(
                "({}|{})",
                phrase(&["accordo", "sindacal[ea]"]),
                phrase(&["autorizzazione", "ispettorato"])
            ),
            "Accordo sindacale/autorizzazione",
            LAVORATORI,
        ),
        PatternDef::new(
            "strumenti_lavoro_kw",
            format!(
                "({}|badge|dispositiv[io]|{})",
                phrase(&["strument[io]", "di", "lavoro"]),
                phrase(&["software", "di", "monitoraggio"])
            ),
            "Strumenti di controllo",
            LAVORATORI,
        ),
    ]
}

/// 12) LINGUAGGIO & ACCESSIBILITÀ（art. 12(1)）
pub(crate) fn language_accessibility() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            "linguaggio_chiaro_kw",
            format!(
                "({}|trasparente|intelligibile|semplice)",
                phrase(&["in", "modo", "chiaro"])
            ),
            "Linguaggio chiaro",
            &["GDPR_12_1_linguaggio", "GARANTE_accessibilita_italiano"],
        ),
        PatternDef::new(
            "accessibilita_kw",
            "accessibilit[aà]|leggibilit[aà]|usabilit[aà]|WCAG|accessibile",
            "Accessibilità/usabilità",
            &["GARANTE_accessibilita_italiano"],
        ),
        PatternDef::new(
            "struttura_aiuto_kw",
            "(indice|sommario|titoli|faq|glossario)",
            "Strutture di aiuto alla lettura",
            &["GARANTE_accessibilita_italiano"],
        ),
        PatternDef::new(
            "linguaggio_minori_kw",
            format!(
                "{}|icone|{}",
                phrase(&["(versione|sezione)", "per", "minori"]),
                phrase(&["esempi", "semplici"])
            ),
            "Adattamento per minori",
            &["GDPR_12_1_minori_linguaggio"],
        ),
    ]
}
