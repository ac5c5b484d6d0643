//! In-memory caching of the sheet export.
//!
//! This module provides `SheetStore`, which memoizes the decoded applicant
//! rows and only downloads the sheet again once the cache window (60 seconds
//! by default) has passed. Time is read through the `Clock` trait so tests
//! can move it by hand.

pub mod manager;

pub use manager::{CacheSlot, CachedData, Clock, SheetStore, SystemClock, DEFAULT_CACHE_SECS};
