// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display-ready views handed to the client.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{CompletionRecord, Membership, Race, RaceSummary};
use crate::services::classifier::Cohorts;
use crate::taxonomy::{DistanceUnit, Taxonomy};

/// One race as shown in a profile list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RaceCard {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub sport_category: Option<String>,
    pub sport_label: String,
    pub distance: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub participants: u32,
    pub completion: Option<CompletionRecord>,
}

impl RaceCard {
    pub fn build(
        race: &Race,
        membership: &Membership,
        taxonomy: &Taxonomy,
        unit: DistanceUnit,
    ) -> Self {
        let sport = taxonomy.resolve_race_sport(race);
        Self {
            id: race.id.to_string(),
            name: race.name.clone(),
            date: race.date,
            sport_label: sport.display_label(),
            sport_category: sport.category,
            distance: taxonomy.display_distance_in(race, unit),
            city: race.city.clone(),
            country: race.country.clone(),
            participants: race.participants,
            completion: membership.completion_for(&race.id).cloned(),
        }
    }
}

/// A user's race profile: the three cohorts plus summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileView {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub reference_date: NaiveDate,
    pub distance_unit: String,
    pub upcoming: Vec<RaceCard>,
    pub past_uncompleted: Vec<RaceCard>,
    pub completed: Vec<RaceCard>,
    pub summary: RaceSummary,
}

impl ProfileView {
    pub fn build(
        cohorts: &Cohorts,
        summary: RaceSummary,
        membership: &Membership,
        taxonomy: &Taxonomy,
        unit: DistanceUnit,
        today: NaiveDate,
    ) -> Self {
        let cards = |races: &[Race]| -> Vec<RaceCard> {
            races
                .iter()
                .map(|race| RaceCard::build(race, membership, taxonomy, unit))
                .collect()
        };

        Self {
            reference_date: today,
            distance_unit: unit.to_string(),
            upcoming: cards(cohorts.upcoming.as_slice()),
            past_uncompleted: cards(cohorts.past_uncompleted.as_slice()),
            completed: cards(cohorts.completed.as_slice()),
            summary,
        }
    }
}
