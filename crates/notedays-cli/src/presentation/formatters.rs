//! Reusable string helpers used by the views.

/// Escape text for use in HTML text nodes and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `" – HH:MM"` suffix, empty when no time was captured
pub fn time_suffix(time: Option<&str>) -> String {
    match time {
        Some(time) => format!(" – {}", time),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_markup_chars() {
        assert_eq!(escape_html(r#"a<b> & "c""#), "a&lt;b&gt; &amp; &quot;c&quot;");
    }

    #[test]
    fn test_time_suffix_omitted_when_absent() {
        assert_eq!(time_suffix(Some("14:30")), " – 14:30");
        assert_eq!(time_suffix(None), "");
    }
}
