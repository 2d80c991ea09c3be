// src/store.rs
// Persisted stage handoff under the store directory: the reconciled catalog
// (so fetch/images/render can re-run without touching the sources) and the
// issue-to-filename manifest written in the same pass.

use std::{error::Error, fs, path::{Path, PathBuf}};

use crate::catalog::assets::cover_filename;
use crate::catalog::records::{Issue, YearGroup};
use crate::config::consts::{CATALOG_FILE, MANIFEST_FILE, STORE_SEP};
use crate::csv::{parse_rows, rows_to_string};
use crate::file::ensure_directory;

/// Write the reconciled catalog.
/// Row shape: year, index, date, number, image_url, pdf_url, cover_url
pub fn save_catalog(store_dir: &Path, groups: &[YearGroup]) -> Result<PathBuf, Box<dyn Error>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for g in groups {
        for issue in &g.issues {
            rows.push(vec![
                g.year.clone(),
                issue.index_in_year.to_string(),
                issue.date.clone(),
                issue.number.clone(),
                issue.image_url.clone(),
                issue.pdf_url.clone(),
                issue.cover_url.clone(),
            ]);
        }
    }
    ensure_directory(store_dir)?;
    let p = store_dir.join(CATALOG_FILE);
    fs::write(&p, rows_to_string(&rows, &None, STORE_SEP))?;
    Ok(p)
}

/// Reload a catalog persisted by `save_catalog`. Group order and row order
/// within a group are exactly as written.
pub fn load_catalog(store_dir: &Path) -> Result<Vec<YearGroup>, Box<dyn Error>> {
    let p = store_dir.join(CATALOG_FILE);
    let text = fs::read_to_string(&p).map_err(|e| {
        format!("No stored catalog at {} (run the reconcile stage first): {}", p.display(), e)
    })?;

    let mut groups: Vec<YearGroup> = Vec::new();
    for row in parse_rows(&text, STORE_SEP) {
        if row.len() < 7 {
            logw!("Store: skipping malformed catalog row: {row:?}");
            continue;
        }
        let issue = Issue {
            date: row[2].clone(),
            number: row[3].clone(),
            image_url: row[4].clone(),
            pdf_url: row[5].clone(),
            cover_url: row[6].clone(),
            index_in_year: row[1].parse().unwrap_or(0),
        };
        match groups.last_mut() {
            Some(g) if g.year == row[0] => g.issues.push(issue),
            _ => groups.push(YearGroup { year: row[0].clone(), issues: vec![issue] }),
        }
    }
    if groups.is_empty() {
        return Err(format!("{}: stored catalog is empty", p.display()).into());
    }
    Ok(groups)
}

/// Side artifact fixing the issue-to-filename assignment in one place.
/// Row shape: date, number, filename
pub fn save_manifest(store_dir: &Path, groups: &[YearGroup]) -> Result<PathBuf, Box<dyn Error>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for g in groups {
        for issue in &g.issues {
            rows.push(vec![issue.date.clone(), issue.number.clone(), cover_filename(issue)]);
        }
    }
    ensure_directory(store_dir)?;
    let p = store_dir.join(MANIFEST_FILE);
    fs::write(&p, rows_to_string(&rows, &None, STORE_SEP))?;
    Ok(p)
}
