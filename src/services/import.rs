// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSV race import.
//!
//! Spreadsheets from race organizers use a handful of different column
//! names; each field is read from the first alias present in the header.
//! Sport fields are normalized against the taxonomy on the way in. Dates are
//! left as text and validated later by `Race::try_from`.

use crate::models::{RaceId, RaceRecord};
use crate::taxonomy::{SportClass, Taxonomy};
use std::collections::{BTreeSet, HashMap};
use std::io::Read;

const NAME_COLUMNS: &[&str] = &["name", "eventName", "Event Name"];
const SPORT_COLUMNS: &[&str] = &["sport", "sportType", "Sport Type"];
const CITY_COLUMNS: &[&str] = &["city", "location"];

const DEFAULT_NAME: &str = "Unnamed Race";
const DEFAULT_SPORT: &str = "triathlon";

/// Errors from CSV import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Column positions for one CSV header.
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &csv::StringRecord) -> Self {
        let mut index = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            // First occurrence wins for duplicated headers
            index.entry(header.trim().to_string()).or_insert(i);
        }
        Self { index }
    }

    /// First non-blank value among the given column aliases.
    fn get<'r>(&self, row: &'r csv::StringRecord, aliases: &[&str]) -> Option<&'r str> {
        aliases
            .iter()
            .filter_map(|alias| self.index.get(*alias))
            .filter_map(|&i| row.get(i))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    fn text(&self, row: &csv::StringRecord, aliases: &[&str]) -> Option<String> {
        self.get(row, aliases).map(String::from)
    }
}

/// Leading integer, e.g. `"120 runners"` → 120. Anything else is 0.
fn parse_participants(value: Option<&str>) -> u32 {
    let Some(value) = value else {
        return 0;
    };
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse races from CSV text.
///
/// The first row is the header. Rows with no values are skipped. Imported
/// ids are `imported-race-{batch_tag}-{row index}`.
pub fn parse_csv<R: Read>(
    reader: R,
    taxonomy: &Taxonomy,
    batch_tag: &str,
) -> Result<Vec<RaceRecord>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::new(reader.headers()?);
    let mut races = Vec::new();

    for row in reader.records() {
        let row = row?;
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }

        let index = races.len();
        let sport = columns
            .text(&row, SPORT_COLUMNS)
            .unwrap_or_else(|| DEFAULT_SPORT.to_string())
            .to_lowercase();
        let mut record = RaceRecord {
            id: RaceId::from(format!("imported-race-{}-{}", batch_tag, index)),
            name: columns
                .text(&row, NAME_COLUMNS)
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            date: columns.text(&row, &["date"]).unwrap_or_default(),
            start_time: columns.text(&row, &["start_time"]),
            sport: Some(sport),
            sport_category: columns.text(&row, &["sport_category"]),
            sport_subtype: columns.text(&row, &["sport_subtype"]),
            distance: Some(columns.text(&row, &["distance"]).unwrap_or_default()),
            city: Some(columns.text(&row, CITY_COLUMNS).unwrap_or_default()),
            country: Some(columns.text(&row, &["country"]).unwrap_or_default()),
            continent: Some(columns.text(&row, &["continent"]).unwrap_or_default()),
            description: Some(columns.text(&row, &["description"]).unwrap_or_default()),
            participants: parse_participants(columns.get(&row, &["participants"])),
            registered_users: BTreeSet::new(),
        };
        normalize_sport(&mut record, taxonomy);
        races.push(record);
    }

    tracing::info!(count = races.len(), batch = batch_tag, "Imported races from CSV");
    Ok(races)
}

/// Fill in or repair the canonical sport fields of an imported record.
fn normalize_sport(record: &mut RaceRecord, taxonomy: &Taxonomy) {
    let legacy = record.sport.clone().unwrap_or_default();
    let subtype = record.sport_subtype.clone().unwrap_or_default();

    let class = match record.sport_category.as_deref() {
        Some(category) => taxonomy.repair_pair(category, &subtype),
        // Some exports put the category in the sport column
        None if !subtype.is_empty() => taxonomy.repair_pair(&legacy, &subtype),
        None => Some(taxonomy.normalize_legacy_sport(&legacy)).filter(SportClass::is_recognized),
    };

    match class {
        Some(class) => {
            record.sport_category = class.category;
            record.sport_subtype = Some(class.subtype);
        }
        None if record.sport_category.is_some() || !subtype.is_empty() => {
            tracing::warn!(
                race_id = %record.id,
                category = ?record.sport_category,
                subtype = %subtype,
                "Unrecognized sport in import"
            );
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participants() {
        assert_eq!(parse_participants(Some("120")), 120);
        assert_eq!(parse_participants(Some("45 runners")), 45);
        assert_eq!(parse_participants(Some("3.7")), 3);
        assert_eq!(parse_participants(Some("-5")), 0);
        assert_eq!(parse_participants(Some("many")), 0);
        assert_eq!(parse_participants(None), 0);
    }

    #[test]
    fn test_duplicate_header_first_wins() {
        let csv_text = "name,city,city\nHill Run,Bergen,Oslo\n";
        let races = parse_csv(csv_text.as_bytes(), Taxonomy::standard(), "t").unwrap();
        assert_eq!(races[0].city.as_deref(), Some("Bergen"));
    }
}
