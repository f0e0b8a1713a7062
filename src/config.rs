//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::taxonomy::DistanceUnit;
use crate::time_utils::{today_utc, DATE_FORMAT};

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Race snapshot: `.csv` (imported) or `.json` (array of race records)
    pub races_path: PathBuf,
    /// User membership JSON; no memberships if unset
    pub membership_path: Option<PathBuf>,
    /// Fixed "today" for reproducible output; UTC date at startup if unset
    pub reference_date: Option<NaiveDate>,
    /// Unit for explicit race distances
    pub distance_unit: DistanceUnit,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            races_path: PathBuf::from("data/races.json"),
            membership_path: None,
            reference_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            distance_unit: DistanceUnit::Metric,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &'static str| lookup(key).filter(|v| !v.trim().is_empty());

        let reference_date = value("REFERENCE_DATE")
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                    .map_err(|_| ConfigError::Invalid("REFERENCE_DATE", raw))
            })
            .transpose()?;

        let distance_unit = match value("DISTANCE_UNIT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("DISTANCE_UNIT", raw))?,
            None => DistanceUnit::Metric,
        };

        Ok(Self {
            races_path: value("RACES_PATH")
                .map(PathBuf::from)
                .ok_or(ConfigError::Missing("RACES_PATH"))?,
            membership_path: value("MEMBERSHIP_PATH").map(PathBuf::from),
            reference_date,
            distance_unit,
        })
    }

    /// The reference date for classification.
    pub fn today(&self) -> NaiveDate {
        self.reference_date.unwrap_or_else(today_utc)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_from_env() {
        // Set required env vars for test
        env::set_var("RACES_PATH", "fixtures/races.csv");
        env::set_var("DISTANCE_UNIT", "imperial");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.races_path, PathBuf::from("fixtures/races.csv"));
        assert_eq!(config.distance_unit, DistanceUnit::Imperial);
    }

    #[test]
    fn test_config_full_lookup() {
        let config = Config::from_lookup(lookup(&[
            ("RACES_PATH", "races.json"),
            ("MEMBERSHIP_PATH", "me.json"),
            ("REFERENCE_DATE", "2025-06-01"),
        ]))
        .unwrap();

        assert_eq!(config.membership_path, Some(PathBuf::from("me.json")));
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(config.distance_unit, DistanceUnit::Metric);
    }

    #[test]
    fn test_config_missing_races_path() {
        let err = Config::from_lookup(lookup(&[("RACES_PATH", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("RACES_PATH")));
    }

    #[test]
    fn test_config_invalid_values() {
        let err = Config::from_lookup(lookup(&[
            ("RACES_PATH", "races.json"),
            ("REFERENCE_DATE", "June 1st"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("REFERENCE_DATE", _)));

        let err = Config::from_lookup(lookup(&[
            ("RACES_PATH", "races.json"),
            ("DISTANCE_UNIT", "leagues"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("DISTANCE_UNIT", _)));
    }
}
