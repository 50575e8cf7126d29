use super::fragments::{duration, phrase, SP};
use crate::core::PatternDef;

const INFORMATIVA: &[&str] = &["GARANTE_2021_cookie_informativa"];
const BANNER: &[&str] = &["GARANTE_2021_cookie_banner"];

/// 8) COOKIE & TRACCIAMENTO（Provv. Garante 10/06/2021）
pub(crate) fn cookies() -> Vec<PatternDef> {
    vec![
        PatternDef::new(
            "cookie_kw",
            r"\bcookie\b|pixel|tracker|SDK|tag(?:\smanager)?",
            "Cookie/pixel/tracker",
            INFORMATIVA,
        ),
        PatternDef::new(
            "cookie_policy_kw",
            format!(
                "({}|{})",
                phrase(&["cookie", "policy"]),
                phrase(&["informativa", "cookie"])
            ),
            "Pagina/Informativa cookie",
            INFORMATIVA,
        ),
        PatternDef::new(
            "terze_parti_kw",
            format!(r"\b{}\b", phrase(&["terze?", "parti"])),
            "Riferimento a terze parti",
            INFORMATIVA,
        ),
        PatternDef::new("durate_cookie", duration(), "Durate cookie (generico)", INFORMATIVA),
        // 常见第三方工具
        PatternDef::new(
            "tools_google_analytics",
            format!("{}|GA4", phrase(&["google", "analytics"])),
            "Google Analytics/GA4",
            INFORMATIVA,
        ),
        PatternDef::new(
            "tools_meta_pixel",
            phrase(&["(meta|facebook)", "pixel"]),
            "Meta/Facebook Pixel",
            INFORMATIVA,
        ),
        PatternDef::new("tools_hotjar", r"\bhotjar\b", "Hotjar", INFORMATIVA),
        PatternDef::new("tools_matomo", r"\bmatomo\b", "Matomo", INFORMATIVA),
        PatternDef::new(
            "tools_tag_manager",
            phrase(&["tag", "manager"]),
            "Tag Manager",
            INFORMATIVA,
        ),
        PatternDef::new(
            "tools_consent_mgr",
            "(cookiebot|iubenda|onetrust)",
            "Consent manager",
            &["GARANTE_2021_cookie_informativa", "GARANTE_2021_cookie_banner"],
        ),
        // 横幅与偏好设置
        PatternDef::new(
            "banner_kw",
            r"\bbanner\b|\bpop[- ]?up\b",
            "Banner cookie",
            BANNER,
        ),
        PatternDef::new(
            "pulsante_accetta",
            r"\baccetta(re)?\b|\bconsenti\b",
            "Pulsante 'Accetta/Consenti'",
            BANNER,
        ),
        PatternDef::new(
            "pulsante_rifiuta",
            format!(
                r"\brifiuta(re)?\b|\bnega\b|\b{}\b",
                phrase(&["rifiuta", "tutto"])
            ),
            "Pulsante 'Rifiuta/Nega'",
            BANNER,
        ),
        PatternDef::new(
            "gestisci_preferenze",
            format!(
                "(gestisc[ie]|impostazion[ei]|preferenz[ei]){sp}(?:dei|sui)?{sp}cookie",
                sp = SP
            ),
            "Gestione preferenze",
            BANNER,
        ),
        PatternDef::new(
            "solo_necessari",
            format!("(solo|accetta){sp}(i)?{sp}necessar[ie]?", sp = SP),
            "Opzione 'solo necessari'",
            BANNER,
        ),
        PatternDef::new(
            "categorie_cookie",
            "(tecnic[ie]|statistic[he]|marketing|profilazione|preferenze)",
            "Categorie cookie",
            INFORMATIVA,
        ),
    ]
}
