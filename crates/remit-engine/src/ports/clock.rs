//! # Clock Port
//!
//! Timestamp source for `created_at`/`completed_at`. A port rather than a
//! direct `SystemTime` call so tests can pin and advance time.

use remit_types::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in seconds.
    fn now(&self) -> Timestamp;
}
