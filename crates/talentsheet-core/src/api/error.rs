use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Access denied - is the sheet shared publicly? {0}")]
    AccessDenied(String),

    #[error("Sheet not found: {0}")]
    NotFound(String),

    #[error("Rate limited by the sheet host")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl SheetError {
    /// Truncate a response body to avoid logging a whole HTML error page
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let cut: String = body.chars().take(MAX_ERROR_BODY_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", cut, body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 | 403 => SheetError::AccessDenied(truncated),
            404 => SheetError::NotFound(truncated),
            429 => SheetError::RateLimited,
            500..=599 => SheetError::ServerError(truncated),
            _ => SheetError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}
