use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use talentsheet_core::{
    models::{StatusBucket, ALL_STATUSES},
    utils::format_timestamp,
};

use crate::server::{
    error::Result,
    state::AppState,
    views::{Home, ProfileList, ProfileView, Profiles},
};

#[derive(Debug, Deserialize)]
pub struct JobQuery {
    pub job_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub job_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub job_id: Option<String>,
    pub id: Option<String>,
    pub pdf: Option<String>,
}

/// Present and not blank
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Links embedded in the viewer must be http(s) or relative.
fn is_embeddable(url: &str) -> bool {
    // A colon in the query or fragment never starts a scheme
    let head = url.split(['?', '#']).next().unwrap_or_default();
    match head.split_once(':') {
        Some((scheme, _)) if is_scheme(scheme) => {
            scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
        }
        _ => true,
    }
}

/// ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn home_redirect() -> Response {
    Redirect::to("/").into_response()
}

fn now() -> String {
    format_timestamp(Utc::now())
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let page = Home {
        timestamp: now(),
        reviewer: &state.reviewer,
    };
    Ok(Html(page.render()?))
}

pub async fn profiles(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Response> {
    let Some(job_id) = required(&query.job_id) else {
        return Ok(home_redirect());
    };

    let counts = state.store.count_by_status(job_id).await;
    tracing::debug!(job_id, all = counts.all, "counted profiles");

    let page = Profiles {
        timestamp: now(),
        reviewer: &state.reviewer,
        job_id,
        counts: counts.entries(),
    };
    Ok(Html(page.render()?).into_response())
}

pub async fn profile_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Response> {
    let Some(job_id) = required(&query.job_id) else {
        return Ok(home_redirect());
    };
    let status = required(&query.status).unwrap_or(ALL_STATUSES);

    let profiles = state.store.list_profiles(job_id, status).await;
    tracing::debug!(job_id, status, found = profiles.len(), "listed profiles");

    let page = ProfileList {
        timestamp: now(),
        reviewer: &state.reviewer,
        job_id,
        status,
        filters: StatusBucket::EVERY,
        profiles,
    };
    Ok(Html(page.render()?).into_response())
}

pub async fn profile_view(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Result<Response> {
    let (Some(job_id), Some(profile_id), Some(pdf_url)) = (
        required(&query.job_id),
        required(&query.id),
        required(&query.pdf),
    ) else {
        return Ok(home_redirect());
    };
    if !is_embeddable(pdf_url) {
        tracing::warn!(job_id, profile_id, "refusing to embed non-http pdf link");
        return Ok(home_redirect());
    }

    let page = ProfileView {
        timestamp: now(),
        reviewer: &state.reviewer,
        job_id,
        profile_id,
        pdf_url,
    };
    Ok(Html(page.render()?).into_response())
}
