// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race discovery filter tests.

use race_cohorts::models::RaceRecord;
use race_cohorts::services::classifier::{calendar, marked_dates, races_on};
use race_cohorts::services::{DateWindow, FilterKind, RaceFilter};
use race_cohorts::taxonomy::Taxonomy;
use race_cohorts::Race;

mod common;
use common::{day, ids, make_race, race_from};

fn located(id: u64, date: &str, sport: &str, city: &str, country: &str, continent: &str) -> Race {
    race_from(RaceRecord {
        id: id.into(),
        name: format!("Race {}", id),
        date: date.to_string(),
        sport: Some(sport.to_string()),
        city: Some(city.to_string()),
        country: Some(country.to_string()),
        continent: Some(continent.to_string()),
        ..Default::default()
    })
}

fn sample() -> Vec<Race> {
    vec![
        located(1, "2025-05-20", "marathon", "Oslo", "Norway", "Europe"),
        located(2, "2025-06-01", "marathon", "Bergen", "Norway", "Europe"),
        located(3, "2025-06-10", "ironman", "Kona", "USA", "North America"),
        located(4, "2025-07-01", "10k", "Boston", "USA", "North America"),
        located(5, "2025-07-15", "spartan", "Stockholm", "Sweden", "Europe"),
        located(6, "2026-07-04", "gran fondo", "Girona", "Spain", "Europe"),
    ]
}

#[test]
fn test_empty_filter_drops_past_only() {
    let filter = RaceFilter::default();
    assert!(filter.is_empty());

    let matched = filter.apply(&sample(), Taxonomy::standard(), day("2025-06-01"));
    assert_eq!(ids(&matched), vec!["2", "3", "4", "5", "6"]);
}

#[test]
fn test_next_days_inclusive() {
    let filter = RaceFilter {
        window: Some(DateWindow::NextDays(30)),
        ..Default::default()
    };

    let matched = filter.apply(&sample(), Taxonomy::standard(), day("2025-06-01"));
    // 2025-07-01 is exactly 30 days out
    assert_eq!(ids(&matched), vec!["2", "3", "4"]);
}

#[test]
fn test_month_any_year() {
    let filter = RaceFilter {
        window: Some(DateWindow::Month(7)),
        ..Default::default()
    };

    let matched = filter.apply(&sample(), Taxonomy::standard(), day("2025-06-01"));
    assert_eq!(ids(&matched), vec!["4", "5", "6"]);
}

#[test]
fn test_category_from_legacy_sport() {
    let taxonomy = Taxonomy::standard();
    let today = day("2025-06-01");

    let running = RaceFilter {
        category: Some("Running".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&running.apply(&sample(), taxonomy, today)), vec!["2", "4"]);

    let marathons = RaceFilter {
        category: Some("Running".to_string()),
        subtype: Some("Marathon".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&marathons.apply(&sample(), taxonomy, today)), vec!["2"]);
}

#[test]
fn test_location_filters() {
    let taxonomy = Taxonomy::standard();
    let today = day("2025-06-01");

    let europe = RaceFilter {
        continent: Some("Europe".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&europe.apply(&sample(), taxonomy, today)), vec!["2", "5", "6"]);

    let usa = RaceFilter {
        country: Some("USA".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&usa.apply(&sample(), taxonomy, today)), vec!["3", "4"]);

    let search = RaceFilter {
        city_query: Some("BO".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&search.apply(&sample(), taxonomy, today)), vec!["4"]);

    // Blank values are unset
    let blank = RaceFilter {
        country: Some("  ".to_string()),
        ..Default::default()
    };
    assert!(blank.is_empty());
    assert_eq!(blank.apply(&sample(), taxonomy, today).len(), 5);
}

#[test]
fn test_active_filters_and_clear() {
    let mut filter = RaceFilter {
        category: Some("Running".to_string()),
        subtype: Some("Marathon".to_string()),
        city_query: Some("ber".to_string()),
        window: Some(DateWindow::Month(9)),
        ..Default::default()
    };

    let labels: Vec<String> = filter.active_filters().into_iter().map(|c| c.label).collect();
    assert_eq!(labels, vec!["September", "Running", "Marathon", "City: ber"]);

    filter.clear(FilterKind::Category);
    let kinds: Vec<FilterKind> = filter.active_filters().into_iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![FilterKind::Month, FilterKind::Search]);

    filter.clear(FilterKind::Month);
    filter.clear(FilterKind::Search);
    assert!(filter.is_empty());
}

#[test]
fn test_clear_continent_clears_country() {
    let mut filter = RaceFilter {
        continent: Some("Europe".to_string()),
        country: Some("Norway".to_string()),
        ..Default::default()
    };

    filter.clear(FilterKind::Country);
    assert_eq!(filter.continent.as_deref(), Some("Europe"));

    filter.country = Some("Norway".to_string());
    filter.clear(FilterKind::Continent);
    assert_eq!(filter.continent, None);
    assert_eq!(filter.country, None);
    assert!(filter.is_empty());
}

#[test]
fn test_calendar_views() {
    let races = vec![
        make_race(1, "2025-06-10"),
        make_race(2, "2025-05-01"),
        make_race(3, "2025-06-10"),
        make_race(4, "2025-06-02"),
    ];

    assert_eq!(ids(&calendar(&races, day("2025-06-01"))), vec!["4", "1", "3"]);

    let marked: Vec<_> = marked_dates(&races).into_iter().collect();
    assert_eq!(
        marked,
        vec![day("2025-05-01"), day("2025-06-02"), day("2025-06-10")]
    );

    assert_eq!(ids(&races_on(&races, day("2025-06-10"))), vec!["1", "3"]);
    assert!(races_on(&races, day("2025-06-11")).is_empty());
}
