// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use race_cohorts::models::{Race, RaceRecord};

/// Parse a `YYYY-MM-DD` test date.
#[allow(dead_code)]
pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Minimal valid race.
#[allow(dead_code)]
pub fn make_race(id: u64, date: &str) -> Race {
    race_from(RaceRecord {
        id: id.into(),
        name: format!("Race {}", id),
        date: date.to_string(),
        ..Default::default()
    })
}

/// Race with sport and distance fields.
#[allow(dead_code)]
pub fn make_sport_race(
    id: u64,
    date: &str,
    sport: Option<&str>,
    category: Option<&str>,
    subtype: Option<&str>,
    distance: Option<&str>,
) -> Race {
    race_from(RaceRecord {
        id: id.into(),
        name: format!("Race {}", id),
        date: date.to_string(),
        sport: sport.map(String::from),
        sport_category: category.map(String::from),
        sport_subtype: subtype.map(String::from),
        distance: distance.map(String::from),
        ..Default::default()
    })
}

/// Validate a record that is known to be valid.
#[allow(dead_code)]
pub fn race_from(record: RaceRecord) -> Race {
    Race::try_from(record).expect("valid test race")
}

/// Ids of races in order.
#[allow(dead_code)]
pub fn ids(races: &[Race]) -> Vec<&str> {
    races.iter().map(|r| r.id.as_str()).collect()
}
