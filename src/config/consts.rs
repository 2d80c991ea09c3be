// src/config/consts.rs

// Remote data
pub const THUMB_HOST: &str = "lh3.googleusercontent.com";

// links.csv column names (as exported)
pub const COL_DATE: &str = "Дата";
pub const COL_ISSUE: &str = "Выпуск";
pub const COL_PDF: &str = "Ссылка на выпуск";
pub const COL_COVER: &str = "Ссылка на обложку";

// Header labels that leak into scraped table rows
pub const HEADER_TOKENS: [&str; 3] = ["Дата", "Выпуск", "№"];

// Local files
pub const DEFAULT_SHEET_FILE: &str = "sheet.html";
pub const DEFAULT_LINKS_FILE: &str = "links.csv";
pub const DEFAULT_OUT_FILE: &str = "index.html";
pub const DEFAULT_COVERS_DIR: &str = "covers";
pub const DEFAULT_MEDIUM_DIR: &str = "covers_medium";

// Stage handoff
pub const STORE_DIR: &str = ".store";
pub const CATALOG_FILE: &str = "catalog.csv";
pub const MANIFEST_FILE: &str = "covers.csv";
pub const STORE_SEP: char = ',';

// Image processing
pub const TARGET_WIDTH: u32 = 600;
pub const JPEG_QUALITY: u8 = 85;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite
pub const JITTER_MS: u64 = 250; // extra 0..250 ms
