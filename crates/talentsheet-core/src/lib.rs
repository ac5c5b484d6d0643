//! Core library for talentsheet.
//!
//! Reads applicant rows from a publicly shared spreadsheet export, caches
//! them for a short window, and answers the per-job questions the web views
//! ask: how many applicants are in each review status, and who they are.

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod queries;
pub mod utils;

pub use api::{SheetClient, SheetError};
pub use cache::SheetStore;
pub use config::Config;
