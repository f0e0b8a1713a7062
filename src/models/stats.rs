//! Profile summary for a user's completed races.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Race, RaceId};
use crate::taxonomy::distance::leading_number;
use crate::taxonomy::{SportClass, UNKNOWN};

/// Shown when no completed race has a usable distance.
pub const NO_DISTANCE: &str = "-";

/// Summary statistics over the completed cohort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RaceSummary {
    /// Number of completed races
    #[serde(default)]
    pub count: u32,
    /// Longest completed distance, formatted for the profile header
    #[serde(default)]
    pub best_distance_label: String,
    /// Longest parsed distance in km
    #[serde(default)]
    pub best_distance_km: Option<f64>,

    // ─── Breakdown ───────────────────────────────────────────────
    /// Completed races per sport category ("Unknown" when unresolved)
    #[serde(default)]
    pub by_category: BTreeMap<String, u32>,
    /// Completed races per year ("YYYY")
    #[serde(default)]
    pub by_year: BTreeMap<String, u32>,

    // ─── Idempotency ─────────────────────────────────────────────
    #[serde(skip)]
    #[cfg_attr(feature = "binding-generation", ts(skip))]
    counted_race_ids: HashSet<RaceId>,
}

impl Default for RaceSummary {
    fn default() -> Self {
        Self {
            count: 0,
            best_distance_label: NO_DISTANCE.to_string(),
            best_distance_km: None,
            by_category: BTreeMap::new(),
            by_year: BTreeMap::new(),
            counted_race_ids: HashSet::new(),
        }
    }
}

impl RaceSummary {
    /// Add a completed race.
    ///
    /// Returns `true` if the race was counted.
    /// Returns `false` if a race with the same id was already counted.
    pub fn record_race(&mut self, race: &Race, sport: &SportClass) -> bool {
        if !self.counted_race_ids.insert(race.id.clone()) {
            return false;
        }

        self.count += 1;

        let category = sport.category.as_deref().unwrap_or(UNKNOWN);
        *self.by_category.entry(category.to_string()).or_insert(0) += 1;
        *self.by_year.entry(race.date.year().to_string()).or_insert(0) += 1;

        if let Some(km) = race_distance_km(race) {
            if self.best_distance_km.is_none_or(|best| km > best) {
                self.best_distance_km = Some(km);
                self.best_distance_label = format_best_distance(km);
            }
        }

        true
    }
}

/// Leading number of the race's distance field, if positive.
fn race_distance_km(race: &Race) -> Option<f64> {
    race.distance
        .as_deref()
        .and_then(leading_number)
        .filter(|km| km.is_finite() && *km > 0.0)
}

/// Format the best distance for the profile header.
///
/// First match wins: `>= 1000` → thousands with a `k` suffix, `>= 100` →
/// rounded, `>= 42.195` → `"42.2"`, `>= 21.0975` → `"21.1"`, otherwise the
/// value itself.
pub fn format_best_distance(km: f64) -> String {
    if km >= 1000.0 {
        format!("{}k", (km / 1000.0).round())
    } else if km >= 100.0 {
        format!("{}", km.round())
    } else if km >= 42.195 {
        "42.2".to_string()
    } else if km >= 21.0975 {
        "21.1".to_string()
    } else {
        format!("{}", km)
    }
}
