// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race classification into the user's cohorts.
//!
//! Given a race snapshot, the user's membership sets, and a reference date,
//! races are partitioned into:
//! 1. upcoming: joined, on or after today (soonest first)
//! 2. past_uncompleted: joined, before today, not completed (latest first)
//! 3. completed: marked completed, joined or not (latest first)
//!
//! Everything here is a pure function of its inputs. The caller supplies
//! "today"; nothing reads the clock.

use crate::error::ValidationError;
use crate::models::{Membership, Race, RaceRecord, RaceSummary};
use crate::taxonomy::Taxonomy;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// The three classifier output buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Cohorts {
    pub upcoming: Vec<Race>,
    pub past_uncompleted: Vec<Race>,
    pub completed: Vec<Race>,
}

/// Classifies races against a user's memberships.
#[derive(Clone, Copy)]
pub struct RaceClassifier<'a> {
    taxonomy: &'a Taxonomy,
}

impl Default for RaceClassifier<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::standard())
    }
}

impl<'a> RaceClassifier<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Partition races into cohorts relative to `today`.
    ///
    /// A race dated `today` is not past. Sorting is stable, so races on the
    /// same day keep their input order. A race that is neither joined nor
    /// completed appears in no cohort.
    pub fn classify(&self, races: &[Race], membership: &Membership, today: NaiveDate) -> Cohorts {
        let mut cohorts = Cohorts::default();

        for race in races {
            let is_past = race.date < today;
            let is_joined = membership.is_joined(&race.id);
            let is_completed = membership.is_completed(&race.id);

            if !is_past && is_joined {
                cohorts.upcoming.push(race.clone());
            }
            if is_past && is_joined && !is_completed {
                cohorts.past_uncompleted.push(race.clone());
            }
            if is_completed {
                cohorts.completed.push(race.clone());
            }
        }

        cohorts.upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        cohorts.past_uncompleted.sort_by(|a, b| b.date.cmp(&a.date));
        cohorts.completed.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            races = races.len(),
            upcoming = cohorts.upcoming.len(),
            past_uncompleted = cohorts.past_uncompleted.len(),
            completed = cohorts.completed.len(),
            %today,
            "Classified races"
        );
        cohorts
    }

    /// Validate raw records, then [`Self::classify`].
    ///
    /// The first record that fails validation aborts the whole pass.
    pub fn classify_records(
        &self,
        records: &[RaceRecord],
        membership: &Membership,
        today: NaiveDate,
    ) -> Result<Cohorts, ValidationError> {
        let races = records
            .iter()
            .cloned()
            .map(Race::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.classify(&races, membership, today))
    }

    /// Summary statistics for the completed cohort.
    pub fn summarize(&self, completed: &[Race]) -> RaceSummary {
        let mut summary = RaceSummary::default();
        for race in completed {
            let sport = self.taxonomy.resolve_race_sport(race);
            if !summary.record_race(race, &sport) {
                tracing::warn!(race_id = %race.id, "Duplicate race in completed cohort");
            }
        }
        summary
    }
}

/// Calendar view: every race on or after `today`, soonest first.
pub fn calendar(races: &[Race], today: NaiveDate) -> Vec<Race> {
    let mut upcoming: Vec<Race> = races.iter().filter(|r| r.date >= today).cloned().collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming
}

/// Days that have at least one race, for calendar markers.
pub fn marked_dates(races: &[Race]) -> BTreeSet<NaiveDate> {
    races.iter().map(|r| r.date).collect()
}

/// Races on a given day, input order preserved.
pub fn races_on(races: &[Race], date: NaiveDate) -> Vec<Race> {
    races.iter().filter(|r| r.date == date).cloned().collect()
}
