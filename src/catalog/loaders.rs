// src/catalog/loaders.rs
// The two source adapters. Row-level problems are skips, never errors;
// a missing links.csv is fatal and surfaces as Err from the loader.

use std::{error::Error, fs, path::Path};

use crate::config::consts::{COL_COVER, COL_DATE, COL_ISSUE, COL_PDF, HEADER_TOKENS, THUMB_HOST};
use crate::csv::parse_rows;

use super::records::{LinkRecord, SourceRecord};

/// Shape scraped table rows (date, number, image URL) into source records.
/// A row is kept only if date and number are non-empty and not header
/// labels, and the image URL points at the expected thumbnail host.
pub fn source_records_from_rows(rows: &[Vec<String>]) -> Vec<SourceRecord> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        if row.len() < 3 {
            continue; // spacer row
        }
        let date = row[0].trim();
        let number = row[1].trim();
        let image_url = row[2].trim();

        if date.is_empty() || number.is_empty() || image_url.is_empty() {
            continue;
        }
        if is_header_token(date) || is_header_token(number) {
            logf!("Sheet: skipping header row ({date} / {number})");
            continue;
        }
        if !host_matches(image_url) {
            logf!("Sheet: skipping row with foreign image host: {date} {number} {image_url}");
            continue;
        }
        out.push(SourceRecord {
            date: date.to_string(),
            number: number.to_string(),
            image_url: image_url.to_string(),
        });
    }
    out
}

fn is_header_token(s: &str) -> bool {
    HEADER_TOKENS.iter().any(|t| *t == s)
}

fn host_matches(url: &str) -> bool {
    url.split("://")
        .nth(1)
        .unwrap_or(url)
        .split('/')
        .next()
        .unwrap_or("")
        == THUMB_HOST
}

/// Load links.csv. The file must exist and carry a header row with the
/// expected column names; rows missing the issue number, the PDF link, or
/// a plausible ISO date are skipped with a diagnostic.
pub fn load_link_records(path: &Path) -> Result<Vec<LinkRecord>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    // Spreadsheet exports sometimes lead with a BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    let rows = parse_rows(text, ',');

    let mut it = rows.into_iter();
    let header = it
        .next()
        .ok_or_else(|| format!("{}: empty file", path.display()))?;

    let col = |name: &str| header.iter().position(|h| h.trim() == name);
    let (Some(c_date), Some(c_issue), Some(c_pdf)) = (col(COL_DATE), col(COL_ISSUE), col(COL_PDF)) else {
        return Err(format!("{}: header is missing required columns", path.display()).into());
    };
    let c_cover = col(COL_COVER);

    let mut out = Vec::new();
    for row in it {
        let get = |i: usize| row.get(i).map(|s| s.trim()).unwrap_or("");
        let date = get(c_date);
        let number = get(c_issue);
        let pdf_url = get(c_pdf);
        let cover_url = c_cover.map(|i| get(i)).unwrap_or("");

        if number.is_empty() || pdf_url.is_empty() {
            logw!("Links: skipping row with missing number or PDF link: {row:?}");
            continue;
        }
        if !is_iso_date(date) {
            logw!("Links: skipping row with bad date {date:?} (number {number})");
            continue;
        }
        out.push(LinkRecord {
            date: date.to_string(),
            number: number.to_string(),
            pdf_url: pdf_url.to_string(),
            cover_url: cover_url.to_string(),
        });
    }
    Ok(out)
}

/// "YYYY-MM-DD": digits with dashes in the right places. Calendar validity
/// is not checked; the sources carry machine-generated dates.
pub fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter()
            .enumerate()
            .all(|(i, c)| if i == 4 || i == 7 { *c == b'-' } else { c.is_ascii_digit() })
}
