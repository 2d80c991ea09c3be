// src/catalog/assets.rs
use std::path::{Path, PathBuf};

use crate::core::sanitize::sanitize_issue_number;
use crate::file::list_jpgs;

use super::records::Issue;

/// Expected on-disk name for an issue's cover image.
///
/// The same rule names files at download time and resolves them at render
/// time; both sides depend only on the reconciled sort order. The rendered
/// page carries these names as relative paths and nothing verifies that the
/// files exist.
pub fn cover_filename(issue: &Issue) -> String {
    format!(
        "cover_{}_{}_{}.jpg",
        issue.year(),
        sanitize_issue_number(&issue.number),
        issue.index_in_year
    )
}

/// Legacy alignment mode: find any file in `dir` whose name contains the
/// issue number. Ambiguous by construction; every hit and miss is logged.
pub fn resolve_by_listing(dir: &Path, number: &str) -> Option<String> {
    let needle = sanitize_issue_number(number.trim());
    let files = match list_jpgs(dir) {
        Ok(f) => f,
        Err(e) => {
            logw!("Assets: cannot list {}: {}", dir.display(), e);
            return None;
        }
    };
    match files.iter().find(|f| f.contains(&needle)) {
        Some(f) => {
            logf!("Assets: issue {} resolved to {} by listing", number, f);
            Some(f.clone())
        }
        None => {
            logw!("Assets: no file in {} matches issue {}", dir.display(), number);
            None
        }
    }
}

/// Maps issues to the image paths the rendered page uses.
pub struct AssetResolver {
    dir: PathBuf,       // local directory holding the processed covers
    rel_prefix: String, // how the page refers to that directory
}

impl AssetResolver {
    pub fn new(dir: &Path, rel_prefix: &str) -> Self {
        Self { dir: dir.to_path_buf(), rel_prefix: rel_prefix.to_string() }
    }

    /// Relative path for the page. The canonical index-based name is used
    /// when the file is present or the directory has not been populated at
    /// all; otherwise the legacy listing scan gets a chance, and a miss
    /// keeps the canonical name as a dangling reference.
    pub fn page_path(&self, issue: &Issue) -> String {
        let canonical = cover_filename(issue);
        if self.dir.join(&canonical).exists() {
            return join!(&self.rel_prefix, "/", &canonical);
        }
        if self.dir.is_dir() {
            if let Some(found) = resolve_by_listing(&self.dir, &issue.number) {
                return join!(&self.rel_prefix, "/", &found);
            }
            logw!(
                "Assets: {} missing for issue {}; page keeps a dangling reference",
                canonical, issue.number
            );
        }
        join!(&self.rel_prefix, "/", &canonical)
    }
}
