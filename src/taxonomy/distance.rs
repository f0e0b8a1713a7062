// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Distance strings: parsing, unit conversion, and the "TBD" sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder for a distance that is not yet known.
pub const TBD: &str = "TBD";

const KM_TO_MILES: f64 = 0.621371;
const MILES_TO_KM: f64 = 1.60934;

/// Display unit preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "km" => Ok(DistanceUnit::Metric),
            "imperial" | "mi" | "miles" => Ok(DistanceUnit::Imperial),
            other => Err(format!("unknown distance unit '{}'", other)),
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Metric => f.write_str("metric"),
            DistanceUnit::Imperial => f.write_str("imperial"),
        }
    }
}

/// Returns the distance text if it is usable as-is: non-empty after
/// trimming and not the "TBD" sentinel.
pub fn explicit_distance(distance: Option<&str>) -> Option<&str> {
    distance.filter(|d| !d.trim().is_empty() && *d != TBD)
}

/// Best-effort leading number, e.g. `"21.0975 km"` → `21.0975`.
///
/// Leading whitespace and a sign are allowed; anything after the number
/// is ignored. Returns `None` when the text does not start with a number.
pub fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }
    text[..end].parse().ok()
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Unit a distance string was written in.
#[derive(Debug, Clone, Copy, PartialEq)]
enum WrittenDistance {
    Km(f64),
    Miles(f64),
}

/// Length of the `digits[.digits]` run at the start of `text`.
fn number_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end > 0 && end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    end
}

/// First number anywhere in `text` that is followed by `unit`
/// (case-insensitive, optional whitespace in between).
fn number_before_unit(text: &str, unit: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    (0..bytes.len())
        .filter(|&i| bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit()))
        .find_map(|i| {
            let tail = &text[i..];
            let len = number_len(tail);
            let rest = tail[len..].trim_start();
            let has_unit = rest
                .get(..unit.len())
                .is_some_and(|u| u.eq_ignore_ascii_case(unit));
            if !has_unit {
                return None;
            }
            tail[..len].trim_end_matches('.').parse().ok()
        })
}

/// Find `<number> km` or `<number> mi|mile|miles` anywhere in the text, or
/// a text that is only a number (km).
fn read_distance(text: &str) -> Option<WrittenDistance> {
    if let Some(km) = number_before_unit(text, "km") {
        return Some(WrittenDistance::Km(km));
    }
    if let Some(miles) = number_before_unit(text, "mi") {
        return Some(WrittenDistance::Miles(miles));
    }

    let trimmed = text.trim();
    let len = number_len(trimmed);
    if len > 0 && len == trimmed.len() {
        return trimmed
            .trim_end_matches('.')
            .parse()
            .ok()
            .map(WrittenDistance::Km);
    }
    None
}

/// Render a distance string in the preferred unit.
///
/// Marathon and half-marathon keep their conventional labels in both units.
/// Text without a recognizable distance is returned unchanged.
pub fn convert_distance(text: &str, unit: DistanceUnit) -> String {
    let Some(written) = read_distance(text) else {
        return text.to_string();
    };

    match written {
        WrittenDistance::Km(km) => {
            if km == 42.195 {
                return match unit {
                    DistanceUnit::Metric => "42.195 km".to_string(),
                    DistanceUnit::Imperial => "26.2 mi".to_string(),
                };
            }
            if km == 21.097 || km == 21.0975 {
                return match unit {
                    DistanceUnit::Metric => "21.097 km".to_string(),
                    DistanceUnit::Imperial => "13.1 mi".to_string(),
                };
            }
            match unit {
                DistanceUnit::Metric => format!("{} km", km),
                DistanceUnit::Imperial => format!("{} mi", round1(km * KM_TO_MILES)),
            }
        }
        WrittenDistance::Miles(miles) => {
            if miles == 26.2 {
                return match unit {
                    DistanceUnit::Metric => "42.195 km".to_string(),
                    DistanceUnit::Imperial => "26.2 mi".to_string(),
                };
            }
            if miles == 13.1 {
                return match unit {
                    DistanceUnit::Metric => "21.097 km".to_string(),
                    DistanceUnit::Imperial => "13.1 mi".to_string(),
                };
            }
            match unit {
                DistanceUnit::Metric => format!("{} km", round1(miles * MILES_TO_KM)),
                DistanceUnit::Imperial => format!("{} mi", miles),
            }
        }
    }
}
