pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

use anyhow::{Context, Result};
use talentsheet_core::Config;

use router::build_routes;
use state::AppState;

pub async fn listen(config: &Config) -> Result<()> {
    let state = AppState::new(config)?;
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening at http://{}", config.listen_addr);

    tokio::select! {
        r = axum::serve(listener, build_routes(state)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
