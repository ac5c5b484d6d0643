use std::fmt;

/// Status assumed when the status cell is absent or blank.
pub const DEFAULT_STATUS: &str = "New";

/// Filter value that selects every status.
pub const ALL_STATUSES: &str = "All";

/// Column positions in the sheet export.
const COL_JOB_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_EMAIL: usize = 2;
const COL_STATUS: usize = 3;
const COL_PDF: usize = 4;

/// Rows with fewer cells than this are decoded with defaults and flagged.
pub const REQUIRED_COLUMNS: usize = 3;

/// Review-status buckets used when tallying applicants for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBucket {
    All,
    New,
    Rejected,
    Shortlisted,
}

impl StatusBucket {
    /// Every bucket, in display order.
    pub const EVERY: [StatusBucket; 4] = [
        StatusBucket::All,
        StatusBucket::New,
        StatusBucket::Rejected,
        StatusBucket::Shortlisted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::All => ALL_STATUSES,
            StatusBucket::New => DEFAULT_STATUS,
            StatusBucket::Rejected => "Rejected",
            StatusBucket::Shortlisted => "Shortlisted",
        }
    }

    /// Bucket a stored status is tallied under.
    /// Anything that is not Rejected or Shortlisted counts as New, including
    /// a literal "All" so that every row is counted in All exactly once.
    pub fn for_status(status: &str) -> Self {
        match status {
            "Rejected" => StatusBucket::Rejected,
            "Shortlisted" => StatusBucket::Shortlisted,
            _ => StatusBucket::New,
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One applicant line from the sheet, decoded from positional cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantRow {
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub status: Option<String>,
    pub pdf_url: Option<String>,
}

impl ApplicantRow {
    /// Decode a row from its cells. Cells are trimmed, blank optional cells
    /// become `None` and missing required cells become empty strings.
    pub fn from_cells<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cells: Vec<&str> = cells.into_iter().map(str::trim).collect();
        let required = |idx: usize| cells.get(idx).copied().unwrap_or_default().to_string();
        let optional = |idx: usize| {
            cells
                .get(idx)
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
        };

        Self {
            job_id: required(COL_JOB_ID),
            name: required(COL_NAME),
            email: required(COL_EMAIL),
            status: optional(COL_STATUS),
            pdf_url: optional(COL_PDF),
        }
    }

    /// Status used for display and filtering
    pub fn effective_status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_STATUS)
    }

    pub fn bucket(&self) -> StatusBucket {
        StatusBucket::for_status(self.effective_status())
    }

    /// Job ids are compared as text.
    pub fn matches_job(&self, job_id: &str) -> bool {
        self.job_id == job_id.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cells_full_row() {
        let row = ApplicantRow::from_cells(["J1", "Alice", "a@x.com", "Shortlisted", "p1.pdf"]);
        assert_eq!(row.job_id, "J1");
        assert_eq!(row.name, "Alice");
        assert_eq!(row.email, "a@x.com");
        assert_eq!(row.status.as_deref(), Some("Shortlisted"));
        assert_eq!(row.pdf_url.as_deref(), Some("p1.pdf"));
    }

    #[test]
    fn test_from_cells_short_row_defaults() {
        let row = ApplicantRow::from_cells(["J1", "Bob"]);
        assert_eq!(row.email, "");
        assert_eq!(row.status, None);
        assert_eq!(row.pdf_url, None);
        assert_eq!(row.effective_status(), "New");
    }

    #[test]
    fn test_blank_cells_are_absent() {
        let row = ApplicantRow::from_cells([" J1 ", "Bob", "b@x.com", "   ", ""]);
        assert_eq!(row.job_id, "J1");
        assert_eq!(row.status, None);
        assert_eq!(row.pdf_url, None);
        assert_eq!(row.bucket(), StatusBucket::New);
    }

    #[test]
    fn test_unknown_status_keeps_label_but_buckets_as_new() {
        let row = ApplicantRow::from_cells(["J1", "Dan", "d@x.com", "On Hold"]);
        assert_eq!(row.effective_status(), "On Hold");
        assert_eq!(row.bucket(), StatusBucket::New);
    }

    #[test]
    fn test_literal_all_status_buckets_as_new() {
        assert_eq!(StatusBucket::for_status("All"), StatusBucket::New);
    }

    #[test]
    fn test_matches_job_compares_text() {
        let row = ApplicantRow::from_cells(["101", "Eve", "e@x.com"]);
        assert!(row.matches_job("101"));
        assert!(row.matches_job(" 101 "));
        assert!(!row.matches_job("101.0"));
        assert!(!row.matches_job("10"));
    }

    #[test]
    fn test_bucket_labels() {
        let labels: Vec<&str> = StatusBucket::EVERY.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["All", "New", "Rejected", "Shortlisted"]);
    }
}
