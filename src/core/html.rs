// src/core/html.rs
// Low-level HTML string helpers, tolerant of attribute order, quoting and
// case. Tailored to the published-spreadsheet markup, not a general parser.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Find the next complete tag block from `from` onwards, case-insensitive.
/// A block is from the start of the opening tag to the end of the closing tag.
pub fn next_tag_block_ci(s: &str, open_tag: &str, close_tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open_lc = to_lower(open_tag);
    let close_lc = to_lower(close_tag);

    let start = lc.get(from..)?.find(&open_lc)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&close_lc)?;
    let end = open_end + end_rel + close_tag.len();
    Some((start, end))
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return the INNER text without the wrapping tags (still may contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return block[open_end + 1..close_start].to_string();
            }
        }
    }
    s!()
}

/// Remove all HTML tags `<...>` from the string, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Extract an attribute value from a single tag opener, e.g.
/// `<img src="https://…" alt=…>` → `https://…`.
/// Tolerates double quotes, single quotes and unquoted values.
pub fn extract_attr(opener: &str, attr: &str) -> Option<String> {
    let lc = to_lower(opener);
    let needle = join!(attr, "=");
    let hp = lc.find(&needle)?;
    let val = opener[hp + needle.len()..].trim_start();
    let (quote, start_off) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start_off..].find(quote).map(|e| start_off + e)
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
    }
    .unwrap_or(val.len());
    let out = val[start_off..end].trim();
    if out.is_empty() { None } else { Some(out.to_string()) }
}

/// First `<img …>` src inside a block, if any.
pub fn first_img_src(block: &str) -> Option<String> {
    let lc = to_lower(block);
    let ip = lc.find("<img")?;
    let end = block[ip..].find('>').map(|e| ip + e + 1).unwrap_or(block.len());
    extract_attr(&block[ip..end], "src")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_attr_handles_quote_styles() {
        assert_eq!(extract_attr(r#"<img src="http://a/b.jpg">"#, "src").as_deref(), Some("http://a/b.jpg"));
        assert_eq!(extract_attr(r#"<img src='http://a/b.jpg'>"#, "src").as_deref(), Some("http://a/b.jpg"));
        assert_eq!(extract_attr("<img src=http://a/b.jpg alt=x>", "src").as_deref(), Some("http://a/b.jpg"));
        assert_eq!(extract_attr("<img alt=x>", "src"), None);
    }

    #[test]
    fn first_img_src_scans_past_other_tags() {
        let block = r#"<td class="s2"><div><img src="https://h/img=w200" alt=""></div></td>"#;
        assert_eq!(first_img_src(block).as_deref(), Some("https://h/img=w200"));
        assert_eq!(first_img_src("<td>no image here</td>"), None);
    }

    #[test]
    fn strip_tags_collapses_whitespace() {
        assert_eq!(strip_tags("<b> 1999-03-01 </b>\n"), "1999-03-01");
    }
}
