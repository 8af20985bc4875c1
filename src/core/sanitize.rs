// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;` after decoding) to one space and trim.
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

/// Normalized text, or `None` when nothing visible is left.
pub fn non_empty(s: &str) -> Option<String> {
    let clean = normalize_ws(s);
    if clean.is_empty() { None } else { Some(clean) }
}

pub fn has_alpha(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize_ws("  .30-06\u{a0}\n Springfield\t"), ".30-06 Springfield");
    }

    #[test]
    fn blank_cells_become_none() {
        assert_eq!(non_empty(" \n\u{a0} "), None);
        assert_eq!(non_empty(" 2910/2637 "), Some(s!("2910/2637")));
    }

    #[test]
    fn alpha_detection() {
        assert!(has_alpha(".223 Rem."));
        assert!(!has_alpha("2910/2637"));
        assert!(!has_alpha(""));
    }
}
