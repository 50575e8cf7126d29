//! 正则片段：模式库中所有模式共享的空白/数字/时长处理
//! 顶层模式通过字符串拼接这些片段组成，每个模式仍可单独对照法律条文审阅

/// 空白（含不换行空格）
pub const SP: &str = r"[ \t\x{00A0}]+";
/// 数字（允许千位分隔符）
pub const NUM: &str = r"(?:\d{1,3}(?:[.,]\d{3})*|\d+)";
pub const YEARS: &str = r"(?:anni|anno|annuale|annuali)";
pub const MONTHS: &str = r"(?:mesi|mese|mensile|mensili)";
pub const DAYS: &str = r"(?:giorni|giorno)";
pub const WEEKS: &str = r"(?:settimane|settimana)";
pub const EMAIL: &str = r"[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}";
pub const PHONE: &str = r"(?:\+?\d{1,3}[ \-]?)?(?:\(?\d{2,4}\)?[ \-]?)?\d{5,8}";

/// 显式时长：数字 + 空白 + 年/月/周/日
pub fn duration() -> String {
    [
        "(?:", NUM, SP, "?(?:", YEARS, "|", MONTHS, "|", WEEKS, "|", DAYS, "))",
    ]
    .concat()
}

/// PEC（posta elettronica certificata）
pub fn pec() -> String {
    format!(r"\bPEC\b|{}", phrase(&["posta", "elettronic[ae]", "certificat[ae]"]))
}

/// 以空白片段连接的词序列
pub fn phrase(words: &[&str]) -> String {
    words.join(SP)
}

/// 自动化决策：decisione/i (unicamente) automatizzata/e
pub fn automated_decision() -> String {
    format!(r"decisioni?{sp}(?:unicamente{sp})?automatizzat[ae]", sp = SP)
}

/// 常见的模糊保存期限表述（未给出具体时长）
pub fn vague_retention() -> Vec<String> {
    let necessary = format!("(?:strettamente{})?necessario", SP);
    vec![
        phrase(&["per", "il", "tempo", necessary.as_str()]),
        phrase(&["nei", "limiti", "(?:previsti|stabiliti)", "dalla", "legge"]),
        phrase(&["fino", "a(?:l)?", "raggiungimento", "delle?", "finalit[aà]"]),
        phrase(&["per", "il", "periodo", "necessario"]),
        phrase(&["per", "il", "tempo", "previsto", "dalla", "(?:normativa|legge)"]),
        phrase(&["per", "un", "periodo", "di", "tempo", "ragionevole"]),
    ]
}
