use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::pages::{home, profile_list, profile_view, profiles};
use super::handlers::probes::{healthz, livez};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/profiles", get(profiles))
        .route("/profile-list", get(profile_list))
        .route("/profile-view", get(profile_view))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
