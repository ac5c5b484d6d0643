//! HTTP client for the spreadsheet CSV export.
//!
//! `SheetClient` downloads the export, checks the response status and decodes
//! every CSV record into an [`ApplicantRow`]. Rows are never dropped: their
//! position in the export is what the views use as a profile id.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{debug, warn};

use crate::models::applicant::REQUIRED_COLUMNS;
use crate::models::ApplicantRow;

use super::SheetError;

// ============================================================================
// Constants
// ============================================================================

/// Export URL template for Google Sheets shared by link.
const GOOGLE_EXPORT_URL: &str = "https://docs.google.com/spreadsheets/d/{id}/export?format=csv";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sheet export client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct SheetClient {
    client: Client,
    url: String,
    has_header: bool,
}

impl SheetClient {
    /// Create a client for the given export URL
    pub fn new(url: impl Into<String>, timeout: Duration, has_header: bool) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
            has_header,
        })
    }

    /// CSV export URL for a Google Sheet id
    pub fn google_export_url(sheet_id: &str) -> String {
        GOOGLE_EXPORT_URL.replace("{id}", sheet_id.trim())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the export and decode every data row.
    pub async fn fetch_rows(&self) -> Result<Vec<ApplicantRow>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(SheetError::from)
            .with_context(|| format!("Failed to send GET request to {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetError::from_status(status, &body).into());
        }

        let body = response
            .text()
            .await
            .map_err(SheetError::from)
            .context("Failed to read sheet response body")?;
        debug!(bytes = body.len(), "Sheet export received");

        let rows = parse_rows(&body, self.has_header).context("Failed to parse sheet export")?;
        debug!(rows = rows.len(), "Sheet export parsed");
        Ok(rows)
    }
}

/// Decode a CSV export into applicant rows, in file order.
pub fn parse_rows(body: &str, has_header: bool) -> Result<Vec<ApplicantRow>, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        // Trailing optional cells are often missing entirely
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < REQUIRED_COLUMNS {
            warn!(
                line = record.position().map(|p| p.line()).unwrap_or_default(),
                columns = record.len(),
                "Short row in sheet export, missing cells defaulted"
            );
        }
        rows.push(ApplicantRow::from_cells(record.iter()));
    }
    Ok(rows)
}
