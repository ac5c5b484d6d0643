//! Utility functions for formatting values shown in the views.

pub mod format;

pub use format::format_timestamp;
