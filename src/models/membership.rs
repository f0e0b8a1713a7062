// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! A user's race memberships, as provided by the session layer.

use crate::models::RaceId;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Result details the user entered after finishing a race.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CompletionRecord {
    #[serde(default)]
    pub completion_time: Option<String>,
    /// Finishing place as entered (free text or number)
    #[serde(default, deserialize_with = "string_or_number")]
    pub position: Option<String>,
    #[serde(default)]
    pub certificate_url: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

/// Joined and completed race ids for one user.
///
/// Completed races need not appear in the joined set (backfilled history).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default, alias = "joinedRaceIds", alias = "joinedRaces")]
    pub joined_race_ids: HashSet<RaceId>,
    #[serde(default, alias = "completedRaceIds", alias = "completedRaces")]
    pub completed_race_ids: HashSet<RaceId>,
    #[serde(default, alias = "completionData")]
    pub completion_data: HashMap<RaceId, CompletionRecord>,
}

impl Membership {
    /// Build from id lists of any representation.
    pub fn new<J, C>(joined: J, completed: C) -> Self
    where
        J: IntoIterator,
        J::Item: Into<RaceId>,
        C: IntoIterator,
        C::Item: Into<RaceId>,
    {
        Self {
            joined_race_ids: joined.into_iter().map(Into::into).collect(),
            completed_race_ids: completed.into_iter().map(Into::into).collect(),
            completion_data: HashMap::new(),
        }
    }

    pub fn is_joined(&self, id: &RaceId) -> bool {
        self.joined_race_ids.contains(id)
    }

    pub fn is_completed(&self, id: &RaceId) -> bool {
        self.completed_race_ids.contains(id)
    }

    /// Completion details for a race, if the user recorded any.
    pub fn completion_for(&self, id: &RaceId) -> Option<&CompletionRecord> {
        self.completion_data.get(id)
    }
}
