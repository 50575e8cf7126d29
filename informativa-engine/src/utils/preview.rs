/// 空白折叠：任意连续空白（含换行、制表、不换行空格）替换为单个空格，并去除首尾空白
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// 命中区间的上下文窗口：向前、向后各扩展 `context_chars` 个字符，在文本边界处截断
///
/// `start`/`end` 为字节偏移，必须落在字符边界上；返回的切片同样落在字符边界上。
pub fn context_window(text: &str, start: usize, end: usize, context_chars: usize) -> &str {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(start);

    let window_end = text[end..]
        .char_indices()
        .nth(context_chars)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    &text[window_start..window_end]
}

/// 命中片段：上下文窗口 + 空白折叠
pub fn snippet_around(text: &str, start: usize, end: usize, context_chars: usize) -> String {
    collapse_whitespace(context_window(text, start, end, context_chars))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  uno\t\tdue\n\ntre\u{00A0} "), "uno due tre");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_context_window_clamps_at_edges() {
        let text = "abcdefghij";
        assert_eq!(context_window(text, 4, 6, 2), "cdefgh");
        assert_eq!(context_window(text, 1, 2, 5), "abcdefg");
        assert_eq!(context_window(text, 8, 10, 5), "defghij");
        assert_eq!(context_window(text, 4, 6, 0), "ef");
    }

    #[test]
    fn test_context_window_counts_chars_not_bytes() {
        let text = "àèìòù MATCH àèìòù";
        let start = text.find("MATCH").unwrap();
        let end = start + "MATCH".len();
        assert_eq!(context_window(text, start, end, 3), "òù MATCH àè");
    }

    #[test]
    fn test_snippet_around_is_single_line() {
        let text = "riga uno\n\n  Titolare\tdel trattamento\r\nriga";
        let start = text.find("Titolare").unwrap();
        let snippet = snippet_around(text, start, start + 8, 80);
        assert_eq!(snippet, "riga uno Titolare del trattamento riga");
    }
}
