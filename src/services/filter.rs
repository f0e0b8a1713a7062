// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race discovery filters.

use crate::models::Race;
use crate::taxonomy::Taxonomy;
use chrono::{Datelike, Days, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Restricts upcoming races to a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateWindow {
    /// From today through today + n days (inclusive)
    NextDays(u32),
    /// Calendar month, 1 = January, in any year
    Month(u32),
}

/// Kind of an active filter chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Date,
    Month,
    Category,
    Subtype,
    Continent,
    Country,
    Search,
}

/// One active filter, for display and removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub kind: FilterKind,
    pub label: String,
}

/// Filter for the race discovery list.
///
/// Past races never match. Blank string fields are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Case-insensitive substring of the city
    #[serde(default)]
    pub city_query: Option<String>,
    #[serde(default)]
    pub window: Option<DateWindow>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl RaceFilter {
    pub fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }

    /// Remove every filter of the given kind.
    ///
    /// Removing the category also removes the subtype, and removing the
    /// continent also removes the country.
    pub fn clear(&mut self, kind: FilterKind) {
        match kind {
            FilterKind::Date | FilterKind::Month => self.window = None,
            FilterKind::Category => {
                self.category = None;
                self.subtype = None;
            }
            FilterKind::Subtype => self.subtype = None,
            FilterKind::Continent => {
                self.continent = None;
                self.country = None;
            }
            FilterKind::Country => self.country = None,
            FilterKind::Search => self.city_query = None,
        }
    }

    /// Does this race pass the filter on `today`?
    pub fn matches(&self, race: &Race, taxonomy: &Taxonomy, today: NaiveDate) -> bool {
        if race.date < today {
            return false;
        }

        match self.window {
            Some(DateWindow::NextDays(days)) => {
                let max_date = today
                    .checked_add_days(Days::new(u64::from(days)))
                    .unwrap_or(NaiveDate::MAX);
                if race.date > max_date {
                    return false;
                }
            }
            Some(DateWindow::Month(month)) => {
                if race.date.month() != month {
                    return false;
                }
            }
            None => {}
        }

        let category = active(&self.category);
        let subtype = active(&self.subtype);
        if category.is_some() || subtype.is_some() {
            let sport = taxonomy.resolve_race_sport(race);
            if category.is_some_and(|c| sport.category.as_deref() != Some(c)) {
                return false;
            }
            if subtype.is_some_and(|s| sport.subtype != s) {
                return false;
            }
        }

        if active(&self.continent).is_some_and(|c| race.continent.as_deref() != Some(c)) {
            return false;
        }
        if active(&self.country).is_some_and(|c| race.country.as_deref() != Some(c)) {
            return false;
        }
        if let Some(query) = active(&self.city_query) {
            let query = query.to_lowercase();
            let city_matches = race
                .city
                .as_deref()
                .is_some_and(|city| city.to_lowercase().contains(&query));
            if !city_matches {
                return false;
            }
        }

        true
    }

    /// Races passing the filter, input order preserved.
    pub fn apply(&self, races: &[Race], taxonomy: &Taxonomy, today: NaiveDate) -> Vec<Race> {
        let matched: Vec<Race> = races
            .iter()
            .filter(|race| self.matches(race, taxonomy, today))
            .cloned()
            .collect();
        tracing::debug!(
            races = races.len(),
            matched = matched.len(),
            filters = self.active_filters().len(),
            "Applied race filter"
        );
        matched
    }

    /// Active filters in display order.
    pub fn active_filters(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();

        match self.window {
            Some(DateWindow::NextDays(days)) => chips.push(FilterChip {
                kind: FilterKind::Date,
                label: format!("Next {} days", days),
            }),
            Some(DateWindow::Month(month)) => chips.push(FilterChip {
                kind: FilterKind::Month,
                label: u8::try_from(month)
                    .ok()
                    .and_then(|m| Month::try_from(m).ok())
                    .map(|m| m.name().to_string())
                    .unwrap_or_else(|| format!("Month {}", month)),
            }),
            None => {}
        }

        let text_filters = [
            (FilterKind::Category, active(&self.category), ""),
            (FilterKind::Subtype, active(&self.subtype), ""),
            (FilterKind::Continent, active(&self.continent), ""),
            (FilterKind::Country, active(&self.country), ""),
            (FilterKind::Search, active(&self.city_query), "City: "),
        ];
        for (kind, value, prefix) in text_filters {
            if let Some(value) = value {
                chips.push(FilterChip {
                    kind,
                    label: format!("{}{}", prefix, value),
                });
            }
        }

        chips
    }
}
