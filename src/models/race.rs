// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race model: wire record, validated race, and identifiers.

use crate::error::ValidationError;
use crate::time_utils::parse_race_date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Opaque identifier in canonical string form.
///
/// The backend sends ids as numbers or strings depending on the endpoint;
/// both deserialize to the same value, so `42` and `"42"` compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntityId(String);

/// Race identifier.
pub type RaceId = EntityId;
/// User identifier.
pub type UserId = EntityId;

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => n.into(),
            RawId::Signed(n) => n.into(),
            // Whole floats (`42.0`) render like integers, others as written
            RawId::Float(n) if n.fract() == 0.0 && n.abs() < 1e15 => (n as i64).into(),
            RawId::Float(n) => n.to_string().into(),
            RawId::Text(s) => s.into(),
        })
    }
}

/// Race as received from the API or a CSV import, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RaceRecord {
    #[cfg_attr(feature = "binding-generation", ts(type = "string | number"))]
    pub id: RaceId,
    #[serde(default)]
    pub name: String,
    /// Race day, `YYYY-MM-DD` (RFC3339 also accepted)
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Legacy free-text sport label
    #[serde(default)]
    pub sport: Option<String>,
    #[serde(default)]
    pub sport_category: Option<String>,
    #[serde(default)]
    pub sport_subtype: Option<String>,
    /// Free text; may be empty or "TBD"
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub participants: u32,
    #[serde(default, alias = "registeredUsers")]
    #[cfg_attr(feature = "binding-generation", ts(type = "Array<string | number>"))]
    pub registered_users: BTreeSet<UserId>,
}

/// A race whose record passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Race {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub id: RaceId,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub sport: Option<String>,
    pub sport_category: Option<String>,
    pub sport_subtype: Option<String>,
    pub distance: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
    pub description: Option<String>,
    pub participants: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "Array<string>"))]
    pub registered_users: BTreeSet<UserId>,
}

impl TryFrom<RaceRecord> for Race {
    type Error = ValidationError;

    fn try_from(record: RaceRecord) -> Result<Self, Self::Error> {
        if record.id.is_empty() {
            return Err(ValidationError::MissingField {
                race_id: record.id.to_string(),
                field: "id",
            });
        }
        if record.name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                race_id: record.id.to_string(),
                field: "name",
            });
        }

        let date = parse_race_date(&record.date).ok_or_else(|| ValidationError::InvalidDate {
            race_id: record.id.to_string(),
            value: record.date.clone(),
        })?;

        Ok(Self {
            id: record.id,
            name: record.name,
            date,
            start_time: record.start_time,
            sport: record.sport,
            sport_category: record.sport_category,
            sport_subtype: record.sport_subtype,
            distance: record.distance,
            city: record.city,
            country: record.country,
            continent: record.continent,
            description: record.description,
            participants: record.participants,
            registered_users: record.registered_users,
        })
    }
}
