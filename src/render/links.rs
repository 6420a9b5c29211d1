use std::sync::LazyLock;

use regex::Regex;

static DIAL_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9+]+").unwrap());

/// Escape text for element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// `tel:` target with only digits and `+` kept. None for blank input.
pub fn tel_link(raw: &str) -> Option<String> {
    let num = raw.trim();
    if num.is_empty() {
        return None;
    }
    let cleaned: String = DIAL_CHARS_RE.find_iter(num).map(|m| m.as_str()).collect();
    let target = if cleaned.is_empty() { num } else { cleaned.as_str() };
    Some(format!("tel:{}", target))
}

/// `mailto:` target for the trimmed address. None for blank input.
pub fn mail_link(raw: &str) -> Option<String> {
    let addr = raw.trim();
    if addr.is_empty() {
        return None;
    }
    Some(format!("mailto:{}", addr))
}

/// Anchor with escaped target and label, or "" when there is no target.
pub fn anchor(href: Option<String>, label: &str) -> String {
    match href {
        Some(href) => format!(r#"<a href="{}">{}</a>"#, escape(&href), escape(label)),
        None => String::new(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"A&B" 'c'</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot; &#x27;c&#x27;&lt;/b&gt;"
        );
        assert_eq!(escape("田中"), "田中");
    }

    #[test]
    fn tel_strips_punctuation() {
        assert_eq!(tel_link("03-1234-5678").as_deref(), Some("tel:0312345678"));
        assert_eq!(tel_link(" +81 (3) 1234-5678 ").as_deref(), Some("tel:+81312345678"));
    }

    #[test]
    fn tel_falls_back_to_trimmed_raw() {
        assert_eq!(tel_link(" 内線なし ").as_deref(), Some("tel:内線なし"));
    }

    #[test]
    fn blank_inputs_have_no_link() {
        assert_eq!(tel_link(""), None);
        assert_eq!(tel_link("   "), None);
        assert_eq!(mail_link(""), None);
        assert_eq!(mail_link(" \t"), None);
    }

    #[test]
    fn mail_wraps_trimmed_address_verbatim() {
        assert_eq!(mail_link(" a@b.c ").as_deref(), Some("mailto:a@b.c"));
        assert_eq!(mail_link("not an address").as_deref(), Some("mailto:not an address"));
    }

    #[test]
    fn anchor_escapes_target_and_label() {
        assert_eq!(
            anchor(mail_link("x\"@y"), "x\"@y"),
            r#"<a href="mailto:x&quot;@y">x&quot;@y</a>"#
        );
        assert_eq!(anchor(None, "label"), "");
    }
}
