//! Per-job views over the applicant rows.

use crate::models::{ApplicantRow, Profile, StatusCounts, ALL_STATUSES};

/// Offset from a row's position in the export to its spreadsheet row number.
/// Positions are 1-based and the header occupies the first sheet row.
const ROW_NUMBER_OFFSET: usize = 1;

/// Count the applicants for `job_id` per status bucket.
pub fn count_by_status(rows: &[ApplicantRow], job_id: &str) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for row in rows.iter().filter(|row| row.matches_job(job_id)) {
        counts.record(row.bucket());
    }
    counts
}

/// Profiles for `job_id` in sheet order, optionally narrowed to one status.
/// `status_filter` is matched exactly against the effective status; "All"
/// keeps every row.
pub fn list_profiles(rows: &[ApplicantRow], job_id: &str, status_filter: &str) -> Vec<Profile> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.matches_job(job_id))
        .filter(|(_, row)| status_filter == ALL_STATUSES || row.effective_status() == status_filter)
        .map(|(idx, row)| Profile::from_row(idx + 1 + ROW_NUMBER_OFFSET, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ApplicantRow> {
        vec![
            ApplicantRow::from_cells(["J1", "Alice", "a@x.com", "Shortlisted", "p1.pdf"]),
            ApplicantRow::from_cells(["J1", "Bob", "b@x.com", "", ""]),
            ApplicantRow::from_cells(["J2", "Carol", "c@x.com", "Rejected", "p3.pdf"]),
        ]
    }

    fn assert_consistent(rows: &[ApplicantRow], job_id: &str) {
        let counts = count_by_status(rows, job_id);
        assert_eq!(counts.new + counts.rejected + counts.shortlisted, counts.all);
        assert_eq!(list_profiles(rows, job_id, "All").len(), counts.all);
    }

    #[test]
    fn test_count_by_status_example() {
        let counts = count_by_status(&sample(), "J1");
        assert_eq!(
            counts,
            StatusCounts { all: 2, new: 1, rejected: 0, shortlisted: 1 }
        );
    }

    #[test]
    fn test_list_profiles_new_example() {
        let profiles = list_profiles(&sample(), "J1", "New");
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Bob");
        assert_eq!(profiles[0].pdf_url, "");
        assert_eq!(profiles[0].status, "New");
    }

    #[test]
    fn test_list_profiles_ids_follow_sheet_rows() {
        let rows = sample();
        let ids: Vec<usize> = list_profiles(&rows, "J1", "All").iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
        // Ids count rows of other jobs too
        let carol = list_profiles(&rows, "J2", "All");
        assert_eq!(carol[0].id, 4);
    }

    #[test]
    fn test_unknown_job_is_empty() {
        let rows = sample();
        assert_eq!(count_by_status(&rows, "J9"), StatusCounts::default());
        assert!(list_profiles(&rows, "J9", "All").is_empty());
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(count_by_status(&[], "J1"), StatusCounts::default());
        assert!(list_profiles(&[], "J1", "New").is_empty());
    }

    #[test]
    fn test_unrecognised_status() {
        let mut rows = sample();
        rows.push(ApplicantRow::from_cells(["J1", "Dan", "d@x.com", "On Hold", "p5.pdf"]));
        rows.push(ApplicantRow::from_cells(["J1", "Fay", "f@x.com", "All"]));

        let counts = count_by_status(&rows, "J1");
        assert_eq!(counts.all, 4);
        assert_eq!(counts.new, 3);

        // The stored label is kept for listing and filtering
        let on_hold = list_profiles(&rows, "J1", "On Hold");
        assert_eq!(on_hold.len(), 1);
        assert_eq!(on_hold[0].name, "Dan");
        assert!(list_profiles(&rows, "J1", "New").iter().all(|p| p.status == "New"));

        assert_consistent(&rows, "J1");
    }

    #[test]
    fn test_counts_invariants_hold() {
        let mut rows = sample();
        rows.push(ApplicantRow::from_cells(["J1", "Gus"]));
        rows.push(ApplicantRow::from_cells(["J2", "Hal", "h@x.com", "Shortlisted"]));
        for job in ["J1", "J2", "J3"] {
            assert_consistent(&rows, job);
        }
    }

    #[test]
    fn test_filter_is_exact() {
        assert!(list_profiles(&sample(), "J1", "shortlisted").is_empty());
        assert_eq!(list_profiles(&sample(), "J1", "Shortlisted").len(), 1);
    }
}
