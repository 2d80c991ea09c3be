// src/catalog/records.rs
use super::key::IssueKey;

/// One usable row of the scraped spreadsheet table.
#[derive(Clone, Debug)]
pub struct SourceRecord {
    pub date: String,
    pub number: String,
    pub image_url: String,
}

impl SourceRecord {
    pub fn key(&self) -> IssueKey {
        IssueKey::new(&self.date, &self.number)
    }
}

/// One usable row of links.csv.
#[derive(Clone, Debug)]
pub struct LinkRecord {
    pub date: String,
    pub number: String,
    pub pdf_url: String,
    pub cover_url: String,
}

impl LinkRecord {
    pub fn key(&self) -> IssueKey {
        IssueKey::new(&self.date, &self.number)
    }
}

/// A reconciled issue: display fields from the sheet, links from the CSV.
/// Read-only once handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issue {
    pub date: String,
    pub number: String,
    pub image_url: String,
    pub pdf_url: String,
    pub cover_url: String,
    /// Zero-based position after the stable date sort within the year.
    /// Part of the cover filename, not part of the identity key.
    pub index_in_year: usize,
}

impl Issue {
    pub fn key(&self) -> IssueKey {
        IssueKey::new(&self.date, &self.number)
    }

    pub fn year(&self) -> &str {
        self.date.get(..4).unwrap_or(&self.date)
    }
}

/// All issues of one publication year, sorted by date ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearGroup {
    pub year: String,
    pub issues: Vec<Issue>,
}
