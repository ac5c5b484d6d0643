use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use crate::api::SheetClient;
use crate::models::{ApplicantRow, Profile, StatusCounts};
use crate::queries;

/// Default cache window.
/// One minute keeps page loads snappy without hammering the sheet host.
pub const DEFAULT_CACHE_SECS: i64 = 60;

/// Source of the current time, injectable for tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
pub struct CachedData<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedData<T> {
    pub fn new(data: T, cached_at: DateTime<Utc>) -> Self {
        Self { data, cached_at }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.cached_at
    }

    pub fn age_display(&self, now: DateTime<Utc>) -> String {
        let secs = self.age(now).num_seconds();
        if secs < 1 {
            // Also covers clock skew
            "just now".to_string()
        } else if secs < 60 {
            format!("{}s ago", secs)
        } else if secs < 3600 {
            format!("{}m ago", secs / 60)
        } else {
            format!("{}h ago", secs / 3600)
        }
    }

    pub fn is_stale(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.age(now) > window
    }
}

/// Single-entry cache slot. The entry is replaced wholesale, never edited.
#[derive(Debug)]
pub struct CacheSlot<T> {
    entry: RwLock<Option<CachedData<Arc<T>>>>,
    window: Duration,
}

impl<T> CacheSlot<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            window,
        }
    }

    /// Cached value if one exists and is inside the cache window
    pub fn fresh(&self, now: DateTime<Utc>) -> Option<Arc<T>> {
        let entry = self.entry.read().unwrap_or_else(|e| e.into_inner());
        entry
            .as_ref()
            .filter(|cached| !cached.is_stale(now, self.window))
            .map(|cached| Arc::clone(&cached.data))
    }

    pub fn store(&self, data: Arc<T>, now: DateTime<Utc>) {
        let mut entry = self.entry.write().unwrap_or_else(|e| e.into_inner());
        *entry = Some(CachedData::new(data, now));
    }

    pub fn cached_at(&self) -> Option<DateTime<Utc>> {
        let entry = self.entry.read().unwrap_or_else(|e| e.into_inner());
        entry.as_ref().map(|cached| cached.cached_at)
    }

    pub fn age_display(&self, now: DateTime<Utc>) -> Option<String> {
        let entry = self.entry.read().unwrap_or_else(|e| e.into_inner());
        entry.as_ref().map(|cached| cached.age_display(now))
    }
}

/// Applicant rows from the sheet, refreshed lazily once the cache window
/// has passed.
///
/// No lock is held while fetching, so callers racing on an expired entry may
/// each download the sheet. Whichever finishes last wins the slot.
pub struct SheetStore {
    client: SheetClient,
    slot: CacheSlot<Vec<ApplicantRow>>,
    clock: Arc<dyn Clock>,
}

impl SheetStore {
    pub fn new(client: SheetClient, window: Duration) -> Self {
        Self::with_clock(client, window, Arc::new(SystemClock))
    }

    pub fn with_clock(client: SheetClient, window: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            slot: CacheSlot::new(window),
            clock,
        }
    }

    /// All rows of the sheet. Empty when the sheet could not be fetched;
    /// a failed fetch leaves the cache untouched so the next call retries.
    /// The entry is stamped with the time the call started, not when the
    /// download finished.
    pub async fn rows(&self) -> Arc<Vec<ApplicantRow>> {
        let now = self.clock.now();
        if let Some(rows) = self.slot.fresh(now) {
            return rows;
        }

        debug!(url = %self.client.url(), "Sheet cache expired, fetching");
        match self.client.fetch_rows().await {
            Ok(rows) => {
                info!(rows = rows.len(), "Sheet cache refreshed");
                let rows = Arc::new(rows);
                self.slot.store(Arc::clone(&rows), now);
                rows
            }
            Err(e) => {
                warn!(url = %self.client.url(), error = %format!("{:#}", e), "Failed to read sheet");
                Arc::new(Vec::new())
            }
        }
    }

    pub async fn count_by_status(&self, job_id: &str) -> StatusCounts {
        queries::count_by_status(&self.rows().await, job_id)
    }

    pub async fn list_profiles(&self, job_id: &str, status_filter: &str) -> Vec<Profile> {
        queries::list_profiles(&self.rows().await, job_id, status_filter)
    }

    /// Human-readable age of the cached sheet, if any
    pub fn cache_age(&self) -> Option<String> {
        self.slot.age_display(self.clock.now())
    }

    #[cfg(test)]
    fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.slot.cached_at()
    }
}

// ============================================================================
// Tests
// ============================================================================
