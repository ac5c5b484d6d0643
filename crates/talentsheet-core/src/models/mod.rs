//! Data models for applicant-tracking rows.
//!
//! - `ApplicantRow`: one decoded spreadsheet line
//! - `StatusBucket`, `StatusCounts`: review-status tallies for a job
//! - `Profile`: the per-request view of a matching row

pub mod applicant;
pub mod profile;

pub use applicant::{ApplicantRow, StatusBucket, ALL_STATUSES, DEFAULT_STATUS};
pub use profile::{Profile, StatusCounts};
