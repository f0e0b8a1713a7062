// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV import tests.

use race_cohorts::models::Race;
use race_cohorts::services::import::parse_csv;
use race_cohorts::services::snapshot;
use race_cohorts::taxonomy::Taxonomy;

fn import(csv_text: &str) -> Vec<race_cohorts::RaceRecord> {
    parse_csv(csv_text.as_bytes(), Taxonomy::standard(), "20250601").unwrap()
}

#[test]
fn test_column_aliases() {
    let races = import(
        "Event Name,Sport Type,location,date,participants\n\
         Fjord Marathon,Marathon,Bergen,2025-09-14,850\n",
    );

    assert_eq!(races.len(), 1);
    let race = &races[0];
    assert_eq!(race.name, "Fjord Marathon");
    assert_eq!(race.sport.as_deref(), Some("marathon"));
    assert_eq!(race.sport_category.as_deref(), Some("Running"));
    assert_eq!(race.sport_subtype.as_deref(), Some("Marathon"));
    assert_eq!(race.city.as_deref(), Some("Bergen"));
    assert_eq!(race.date, "2025-09-14");
    assert_eq!(race.participants, 850);
}

#[test]
fn test_defaults_and_ids() {
    let races = import("name,sport,date\n,,2025-07-01\nLake Swim,swim,2025-08-01\n");

    assert_eq!(races.len(), 2);
    assert_eq!(races[0].id.as_str(), "imported-race-20250601-0");
    assert_eq!(races[1].id.as_str(), "imported-race-20250601-1");

    assert_eq!(races[0].name, "Unnamed Race");
    assert_eq!(races[0].sport.as_deref(), Some("triathlon"));
    assert_eq!(races[0].sport_category.as_deref(), Some("Triathlon"));
    assert_eq!(races[0].sport_subtype.as_deref(), Some("Olympic"));
    assert_eq!(races[0].distance.as_deref(), Some(""));
    assert_eq!(races[0].participants, 0);
    assert!(races[0].registered_users.is_empty());

    assert_eq!(races[1].sport_category.as_deref(), Some("Swimming"));
}

#[test]
fn test_blank_rows_skipped() {
    let races = import("name,date\nA,2025-07-01\n,\n  ,  \nB,2025-07-02\n");

    assert_eq!(races.len(), 2);
    assert_eq!(races[1].name, "B");
    assert_eq!(races[1].id.as_str(), "imported-race-20250601-1");
}

#[test]
fn test_sport_pair_repaired() {
    let races = import(
        "name,date,sport_category,sport_subtype\n\
         Beast,2025-07-01,Spartan,Beast\n\
         Crit Night,2025-07-02,cycling,criterium\n\
         Lap Swim,2025-07-03,Swimming,Relay\n",
    );

    assert_eq!(races[0].sport_category.as_deref(), Some("Obstacle"));
    assert_eq!(races[0].sport_subtype.as_deref(), Some("Spartan Race"));
    assert_eq!(races[1].sport_category.as_deref(), Some("Cycling"));
    assert_eq!(races[1].sport_subtype.as_deref(), Some("Criterium"));
    assert_eq!(races[2].sport_category.as_deref(), Some("Swimming"));
    assert_eq!(races[2].sport_subtype.as_deref(), Some("Custom Distance"));
}

#[test]
fn test_unknown_sport_left_alone() {
    let races = import("name,date,sport\nPaddle Day,2025-07-01,Kayaking\n");

    assert_eq!(races[0].sport.as_deref(), Some("kayaking"));
    assert_eq!(races[0].sport_category, None);
    assert_eq!(races[0].sport_subtype, None);
}

#[test]
fn test_imported_dates_validated_later() {
    let races = import("name,date\nGood,2025-07-01\nBad,soon\n");
    let (valid, rejected) = snapshot::validate_records(races);

    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].name, "Good");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].race_id(), "imported-race-20250601-1");
}

#[test]
fn test_imported_race_validates() {
    let races = import("name,sport,date,distance\nCity 10K,10k,2025-10-05,10 km\n");
    let race = Race::try_from(races[0].clone()).unwrap();

    assert_eq!(race.sport_subtype.as_deref(), Some("10K"));
    assert_eq!(Taxonomy::standard().display_distance(&race), "10 km");
}
