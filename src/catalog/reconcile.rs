// src/catalog/reconcile.rs
use std::collections::HashMap;

use super::key::IssueKey;
use super::records::{Issue, LinkRecord, SourceRecord, YearGroup};

/// Join the two record streams on the issue key and shape the result for
/// presentation: grouped by year ascending, date-sorted within each group,
/// with `index_in_year` assigned after the sort.
///
/// A sheet row without a CSV counterpart (and vice versa) is dropped; an
/// incomplete source is expected, not an error. Duplicate CSV keys are a
/// data-quality anomaly and resolve to the last row seen.
pub fn reconcile(sources: &[SourceRecord], links: &[LinkRecord]) -> Vec<YearGroup> {
    let mut by_key: HashMap<IssueKey, &LinkRecord> = HashMap::new();
    for link in links {
        by_key.insert(link.key(), link);
    }

    let mut by_year: HashMap<String, Vec<Issue>> = HashMap::new();
    for src in sources {
        let Some(link) = by_key.get(&src.key()) else {
            continue;
        };
        let date = src.date.trim().to_string();
        let Some(year) = date.get(..4).map(str::to_string) else {
            continue;
        };
        by_year.entry(year).or_default().push(Issue {
            date,
            number: src.number.trim().to_string(),
            image_url: src.image_url.clone(),
            pdf_url: link.pdf_url.clone(),
            cover_url: link.cover_url.clone(),
            index_in_year: 0, // assigned below, after the sort
        });
    }

    let mut years: Vec<String> = by_year.keys().cloned().collect();
    years.sort(); // lexicographic == chronological for 4-digit years

    let mut out = Vec::with_capacity(years.len());
    for year in years {
        let mut issues = by_year.remove(&year).unwrap_or_default();
        // Stable: equal dates keep the order they were scraped in.
        issues.sort_by(|a, b| a.date.cmp(&b.date));
        for (i, issue) in issues.iter_mut().enumerate() {
            issue.index_in_year = i;
        }
        out.push(YearGroup { year, issues });
    }
    out
}
