//! Client for the published spreadsheet export.
//!
//! The sheet is read as a CSV export over plain HTTPS. No credentials are
//! involved: the sheet must be shared so that anyone with the link can view it.

pub mod client;
pub mod error;

pub use client::SheetClient;
pub use error::SheetError;
