// src/catalog/key.rs

/// Canonical identity of one published issue.
///
/// Equality is exact string equality on both fields after trimming. No case
/// folding and no internal-whitespace normalization: the number is reused
/// verbatim in filenames and display text, and a formatting discrepancy
/// between the two sources is a genuine non-match. Such issues are omitted
/// from the merged catalog rather than fuzzily paired.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IssueKey {
    /// ISO-8601 publication date, "YYYY-MM-DD".
    pub date: String,
    /// Display issue number, e.g. "№ 12 (884)".
    pub number: String,
}

impl IssueKey {
    pub fn new(date: &str, number: &str) -> Self {
        Self {
            date: date.trim().to_string(),
            number: number.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_outer_whitespace_only() {
        assert_eq!(IssueKey::new(" 1999-03-01 ", "№ 1 (1)\t"), IssueKey::new("1999-03-01", "№ 1 (1)"));
        assert_ne!(IssueKey::new("1999-03-01", "№ 1  (1)"), IssueKey::new("1999-03-01", "№ 1 (1)"));
    }
}
