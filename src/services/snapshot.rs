// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loading race and membership snapshots from disk.

use crate::error::ValidationError;
use crate::models::{Membership, Race, RaceRecord};
use crate::services::import;
use crate::taxonomy::Taxonomy;
use anyhow::Context;
use std::fs::{self, File};
use std::path::Path;

/// Load race records from a `.csv` (imported) or JSON file.
pub fn load_race_records<P: AsRef<Path>>(
    path: P,
    taxonomy: &Taxonomy,
    batch_tag: &str,
) -> anyhow::Result<Vec<RaceRecord>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let records = if is_csv {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        import::parse_csv(file, taxonomy, batch_tag)
            .with_context(|| format!("Failed to import {}", path.display()))?
    } else {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse races from {}", path.display()))?
    };

    tracing::info!(path = %path.display(), count = records.len(), "Loaded race records");
    Ok(records)
}

/// Load a user's membership sets from JSON.
pub fn load_membership<P: AsRef<Path>>(path: P) -> anyhow::Result<Membership> {
    let path = path.as_ref();
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let membership: Membership = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse membership from {}", path.display()))?;

    tracing::info!(
        joined = membership.joined_race_ids.len(),
        completed = membership.completed_race_ids.len(),
        "Loaded membership"
    );
    Ok(membership)
}

/// Validate records, keeping the valid races and collecting the rejects.
pub fn validate_records(records: Vec<RaceRecord>) -> (Vec<Race>, Vec<ValidationError>) {
    let mut races = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for record in records {
        match Race::try_from(record) {
            Ok(race) => races.push(race),
            Err(err) => {
                tracing::warn!(race_id = %err.race_id(), error = %err, "Skipping invalid race");
                rejected.push(err);
            }
        }
    }

    (races, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_records_partitions() {
        let records = vec![
            RaceRecord {
                id: 1u64.into(),
                name: "Harbor 5K".to_string(),
                date: "2025-01-01".to_string(),
                ..Default::default()
            },
            RaceRecord {
                id: 2u64.into(),
                name: "Mystery Run".to_string(),
                date: "Invalid Date".to_string(),
                ..Default::default()
            },
        ];

        let (races, rejected) = validate_records(records);

        assert_eq!(races.len(), 1);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].race_id(), "2");
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = load_membership("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
