//! 文本截断与 JSON 提取工具

/// 按字符数截断（不会切断多字节字符）
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// 提取文本中最外层的 `{...}` 片段（首个 `{` 到最后一个 `}`）
/// 用于从生成式模型的自由文本输出中取出 JSON
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("àèìòù", 2), "àè");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_extract_json_object() {
        let text = "Ecco il risultato:\n{\"items\": [{\"id\": \"A\"}]}\nFine.";
        assert_eq!(extract_json_object(text), Some("{\"items\": [{\"id\": \"A\"}]}"));
        assert_eq!(extract_json_object("nessun json"), None);
        assert_eq!(extract_json_object("} prima {"), None);
    }
}
