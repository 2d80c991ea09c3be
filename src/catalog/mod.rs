// src/catalog/mod.rs
//! Record reconciliation and catalog assembly.
//!
//! Two independently harvested datasets describe the same set of issues:
//! the scraped spreadsheet table (date, number, thumbnail URL) and the CSV
//! export (date, number, PDF link, cover link). This module derives one
//! canonical key per issue, joins the two record streams on it, and shapes
//! the merged result for presentation: grouped by year, date-sorted,
//! indexed. Matching is exact on the trimmed key fields; a record present
//! in only one source is dropped, never guessed at.
pub mod assets;
pub mod key;
pub mod loaders;
pub mod reconcile;
pub mod records;
