// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Reconcile, // load sources, reconcile, persist the catalog
    Fetch,     // download covers named from the stored catalog
    Images,    // resize covers into the medium directory
    Render,    // emit the static page from the stored catalog
}

#[derive(Clone, Debug)]
pub struct Params {
    pub sheet: PathBuf,       // saved spreadsheet markup
    pub links: PathBuf,       // CSV with issue/PDF links
    pub out: PathBuf,         // output document
    pub covers_dir: PathBuf,  // full-size downloads
    pub medium_dir: PathBuf,  // resized covers referenced by the page
    pub store_dir: PathBuf,   // stage handoff directory
    pub stage: Option<Stage>, // run one stage instead of the full build
    pub fetch_covers: bool,   // include fetch+images in a full run
    pub delay_ms: u64,        // politeness pause between requests
}

impl Params {
    pub fn new() -> Self {
        Self {
            sheet: PathBuf::from(DEFAULT_SHEET_FILE),
            links: PathBuf::from(DEFAULT_LINKS_FILE),
            out: PathBuf::from(DEFAULT_OUT_FILE),
            covers_dir: PathBuf::from(DEFAULT_COVERS_DIR),
            medium_dir: PathBuf::from(DEFAULT_MEDIUM_DIR),
            store_dir: PathBuf::from(STORE_DIR),
            stage: None,
            fetch_covers: false,
            delay_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
