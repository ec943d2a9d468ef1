//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the bookit library.

pub mod database;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// A fixed reference instant so that bucket boundaries are deterministic.
#[allow(dead_code)]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// `reference_now()` shifted by `days` (may be negative).
#[allow(dead_code)]
pub fn days(days: i64) -> DateTime<Utc> {
    reference_now() + Duration::days(days)
}

/// `reference_now()` shifted by `hours` (may be negative).
#[allow(dead_code)]
pub fn hours(hours: i64) -> DateTime<Utc> {
    reference_now() + Duration::hours(hours)
}
