//! HTML escaping for values interpolated into markup.

use std::borrow::Cow;

/// Escape `value` for embedding in HTML text or attribute content.
///
/// Translates `&`, `<`, `>`, `"`, `'` and the backtick. Returns the input
/// unchanged (borrowed) when none of those characters are present.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    let Some(first) = value.find(needs_escape) else {
        return Cow::Borrowed(value);
    };

    let mut escaped = String::with_capacity(value.len() + 16);
    escaped.push_str(&value[..first]);
    for ch in value[first..].chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '`' => escaped.push_str("&#96;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(ch: char) -> bool {
    matches!(ch, '&' | '<' | '>' | '"' | '\'' | '`')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_every_special_character() {
        assert_eq!(
            escape_html(r#"&<>"'`"#),
            "&amp;&lt;&gt;&quot;&#39;&#96;"
        );
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        let out = escape_html("John Smith 42");
        assert!(matches!(out, Cow::Borrowed("John Smith 42")));
    }

    #[test]
    fn test_script_tag_is_neutralized() {
        let out = escape_html("<script>alert(1)</script>");
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;/script&gt;");
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_preserves_surrounding_unicode() {
        assert_eq!(escape_html("héllo <wörld>"), "héllo &lt;wörld&gt;");
    }

    #[test]
    fn test_ampersand_in_entity_is_escaped_again() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
