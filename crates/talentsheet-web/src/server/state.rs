use std::sync::Arc;

use anyhow::Result;
use talentsheet_core::{Config, SheetClient, SheetStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SheetStore>,
    pub reviewer: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<AppState> {
        let client = SheetClient::new(
            config.sheet_url.clone(),
            config.request_timeout(),
            config.sheet_has_header,
        )?;
        let store = SheetStore::new(client, config.cache_window());
        Ok(AppState::with_store(store, &config.reviewer))
    }

    pub fn with_store(store: SheetStore, reviewer: &str) -> AppState {
        AppState {
            store: Arc::new(store),
            reviewer: Arc::from(reviewer),
        }
    }
}
