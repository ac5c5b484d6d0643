use axum::extract::State;

use crate::server::state::AppState;

pub async fn livez() -> &'static str {
    tracing::debug!("service is live");
    "ok"
}

/// Reports readiness and how old the cached sheet is. Does not fetch.
pub async fn healthz(State(state): State<AppState>) -> String {
    let age = state
        .store
        .cache_age()
        .unwrap_or_else(|| "never".to_string());
    tracing::debug!(sheet_cached = %age, "service is healthy");
    format!("ok (sheet cached: {})", age)
}
