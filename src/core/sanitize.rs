// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

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

/// Make an issue number safe to embed in a filename: path separators become
/// `-`. Everything else (`№`, spaces, parentheses) is kept verbatim, since
/// the number doubles as display text.
pub fn sanitize_issue_number(s: &str) -> String {
    s.chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect()
}
