// src/core/sanitize.rs

/// Collapse runs of whitespace (including NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop a leading `label` (e.g. `"Mobile:"`) and the whitespace around it.
/// Text without the label is only trimmed.
pub fn strip_label(text: &str, label: &str) -> String {
    let t = text.trim();
    t.strip_prefix(label).unwrap_or(t).trim().to_string()
}

/// `mailto:a@b.c?subject=x` -> `a@b.c`
pub fn strip_mailto(href: &str) -> String {
    let t = href.trim();
    let t = t.strip_prefix("mailto:")
        .or_else(|| t.strip_prefix("MAILTO:"))
        .unwrap_or(t);
    let t = t.split('?').next().unwrap_or("");
    t.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_mixed_ws() {
        assert_eq!(normalize_ws("  Jane \n\t Doe\u{a0} "), "Jane Doe");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn strip_label_variants() {
        assert_eq!(strip_label("Mobile: 0803 000 0000", "Mobile:"), "0803 000 0000");
        assert_eq!(strip_label(" Office:12 Marina Rd ", "Office:"), "12 Marina Rd");
        assert_eq!(strip_label("no label", "Status:"), "no label");
    }

    #[test]
    fn strip_label_only_at_start() {
        assert_eq!(strip_label("Head Office: 5 Marina", "Office:"), "Head Office: 5 Marina");
    }

    #[test]
    fn mailto_is_stripped() {
        assert_eq!(strip_mailto("mailto:jo@x.ng?subject=Hi"), "jo@x.ng");
        assert_eq!(strip_mailto("jo@x.ng"), "jo@x.ng");
    }
}
