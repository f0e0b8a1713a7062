// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for race dates.
//!
//! Races are compared at day granularity, so every accepted input form is
//! reduced to a `NaiveDate`.

use chrono::{DateTime, NaiveDate, Utc};

/// Calendar date format used on the wire (`2025-06-01`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a race date.
///
/// Accepts `YYYY-MM-DD` or an RFC3339 timestamp; a timestamp keeps the
/// calendar date as written (its offset is not applied).
pub fn parse_race_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.date_naive())
}

/// Current UTC calendar date. Only the binary reads the clock.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
