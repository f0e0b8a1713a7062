// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sport taxonomy: canonical categories and subtypes, legacy label
//! normalization, and display helpers.
//!
//! A [`Taxonomy`] is an immutable value. The built-in table is available via
//! [`Taxonomy::standard`]; callers that need different sports build their own
//! with [`Taxonomy::new`] and pass it wherever a taxonomy is expected.
//!
//! Every lookup here is total: unknown input falls back to a documented
//! default instead of returning an error.

pub mod distance;
pub mod standard;

pub use distance::{convert_distance, DistanceUnit, TBD};

use crate::models::Race;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Subtype present in every built-in category for non-standard events.
pub const CUSTOM_DISTANCE: &str = "Custom Distance";

/// Label shown when neither category nor subtype is known.
pub const UNKNOWN: &str = "Unknown";

static STANDARD: LazyLock<Taxonomy> = LazyLock::new(|| {
    Taxonomy::new(
        standard::CATEGORIES,
        standard::LEGACY_ALIASES,
        standard::CANONICAL_DISTANCES,
    )
    .expect("built-in sport tables are consistent")
});

/// Result of classifying a sport label.
///
/// When `category` is `Some`, the pair is guaranteed to exist in the
/// taxonomy that produced it. When it is `None`, `subtype` holds the
/// original text unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SportClass {
    pub category: Option<String>,
    pub subtype: String,
}

impl SportClass {
    /// Unrecognized label, preserved verbatim.
    pub fn unrecognized(text: &str) -> Self {
        Self {
            category: None,
            subtype: text.to_string(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.category.is_some()
    }

    /// Label for race cards, see [`format_sport_display`].
    pub fn display_label(&self) -> String {
        format_sport_display(self.category.as_deref(), Some(self.subtype.as_str()))
    }
}

/// Human-readable sport label.
///
/// - no category: the subtype, or `"Unknown"` if that is missing too
/// - `"Custom Distance"`: `"{category} - Custom"`
/// - otherwise the subtype, falling back to the category
pub fn format_sport_display(category: Option<&str>, subtype: Option<&str>) -> String {
    let category = category.filter(|c| !c.is_empty());
    let subtype = subtype.filter(|s| !s.is_empty());

    match (category, subtype) {
        (None, sub) => sub.unwrap_or(UNKNOWN).to_string(),
        (Some(cat), Some(CUSTOM_DISTANCE)) => format!("{} - Custom", cat),
        (Some(_), Some(sub)) => sub.to_string(),
        (Some(cat), None) => cat.to_string(),
    }
}

/// Errors building a taxonomy from tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Alias '{alias}' points to {category}/{subtype}, which is not in the taxonomy")]
    InvalidAlias {
        alias: String,
        category: String,
        subtype: String,
    },

    #[error("Distance entry for unknown subtype: {0}")]
    UnknownSubtype(String),
}

#[derive(Debug, Clone)]
struct Category {
    name: String,
    subtypes: Vec<String>,
}

/// (category index, subtype index) into `Taxonomy::categories`.
type Slot = (usize, usize);

/// Immutable sport taxonomy with its lookup tables.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
    /// Lowercase label → canonical pair.
    aliases: HashMap<String, Slot>,
    /// Subtype → canonical distance description.
    distances: HashMap<String, String>,
}

impl Taxonomy {
    /// The built-in running/triathlon/cycling/obstacle/swimming taxonomy.
    pub fn standard() -> &'static Taxonomy {
        &STANDARD
    }

    /// Build a taxonomy from raw tables.
    ///
    /// Besides the explicit aliases, every canonical subtype name that occurs
    /// in exactly one category resolves to its own pair. Aliases and distance
    /// entries must refer to pairs that exist.
    pub fn new(
        categories: &[(&str, &[&str])],
        legacy_aliases: &[(&str, &str, &str)],
        canonical_distances: &[(&str, &str)],
    ) -> Result<Self, TaxonomyError> {
        let mut built: Vec<Category> = Vec::with_capacity(categories.len());
        for (name, subtypes) in categories {
            if built.iter().any(|c| c.name.eq_ignore_ascii_case(name)) {
                return Err(TaxonomyError::DuplicateCategory(name.to_string()));
            }
            built.push(Category {
                name: name.to_string(),
                subtypes: subtypes.iter().map(|s| s.to_string()).collect(),
            });
        }

        let mut taxonomy = Self {
            categories: built,
            aliases: HashMap::new(),
            distances: HashMap::new(),
        };

        // Subtype names shared by several categories are ambiguous.
        let mut by_name: HashMap<String, Option<Slot>> = HashMap::new();
        for (ci, category) in taxonomy.categories.iter().enumerate() {
            for (si, subtype) in category.subtypes.iter().enumerate() {
                by_name
                    .entry(subtype.to_lowercase())
                    .and_modify(|slot| *slot = None)
                    .or_insert(Some((ci, si)));
            }
        }
        taxonomy
            .aliases
            .extend(by_name.into_iter().filter_map(|(k, v)| v.map(|slot| (k, slot))));

        for (alias, category, subtype) in legacy_aliases {
            let slot = taxonomy
                .slot(category, subtype)
                .ok_or_else(|| TaxonomyError::InvalidAlias {
                    alias: alias.to_string(),
                    category: category.to_string(),
                    subtype: subtype.to_string(),
                })?;
            taxonomy.aliases.insert(alias.trim().to_lowercase(), slot);
        }

        for (subtype, description) in canonical_distances {
            let known = taxonomy
                .categories
                .iter()
                .any(|c| c.subtypes.iter().any(|s| s == subtype));
            if !known {
                return Err(TaxonomyError::UnknownSubtype(subtype.to_string()));
            }
            taxonomy
                .distances
                .insert(subtype.to_string(), description.to_string());
        }

        tracing::debug!(
            categories = taxonomy.categories.len(),
            aliases = taxonomy.aliases.len(),
            distances = taxonomy.distances.len(),
            "Built sport taxonomy"
        );
        Ok(taxonomy)
    }

    /// Category names in table order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Allowed subtypes for a category (exact name).
    pub fn subtypes(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.subtypes.as_slice())
    }

    /// Whether `subtype` is allowed under `category` (exact names).
    pub fn is_valid_pair(&self, category: &str, subtype: &str) -> bool {
        self.slot(category, subtype).is_some()
    }

    fn slot(&self, category: &str, subtype: &str) -> Option<Slot> {
        let ci = self.categories.iter().position(|c| c.name == category)?;
        let si = self.categories[ci]
            .subtypes
            .iter()
            .position(|s| s == subtype)?;
        Some((ci, si))
    }

    fn class_at(&self, (ci, si): Slot) -> SportClass {
        let category = &self.categories[ci];
        SportClass {
            category: Some(category.name.clone()),
            subtype: category.subtypes[si].clone(),
        }
    }

    fn find_category(&self, text: &str) -> Option<usize> {
        let text = text.trim();
        self.categories
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(text))
    }

    fn find_subtype(&self, ci: usize, text: &str) -> Option<usize> {
        let text = text.trim();
        self.categories[ci]
            .subtypes
            .iter()
            .position(|s| s.eq_ignore_ascii_case(text))
    }

    fn lookup_alias(&self, text: &str) -> Option<Slot> {
        self.aliases.get(&text.trim().to_lowercase()).copied()
    }

    /// Map a free-text legacy sport label to its canonical pair.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unknown labels (including the empty string) come back as
    /// `{ category: None, subtype: text }` with `text` untouched.
    pub fn normalize_legacy_sport(&self, text: &str) -> SportClass {
        match self.lookup_alias(text) {
            Some(slot) => self.class_at(slot),
            None => SportClass::unrecognized(text),
        }
    }

    /// Repair a category/subtype pair from imported data.
    ///
    /// The category may be a canonical name in any case or a legacy alias
    /// (`"Spartan"`, `"Hyrox"`). The subtype is kept if allowed, resolved
    /// through the aliases if that lands in the same category, and otherwise
    /// replaced by the category's default (blank subtype) or
    /// `"Custom Distance"`. Returns `None` if the category is unknown.
    pub fn repair_pair(&self, category: &str, subtype: &str) -> Option<SportClass> {
        let (ci, alias_subtype) = match self.find_category(category) {
            Some(ci) => (ci, None),
            None => {
                let (ci, si) = self.lookup_alias(category)?;
                (ci, Some(si))
            }
        };

        if let Some(si) = self.find_subtype(ci, subtype) {
            return Some(self.class_at((ci, si)));
        }
        if let Some((aci, asi)) = self.lookup_alias(subtype) {
            if aci == ci {
                return Some(self.class_at((aci, asi)));
            }
        }
        if let Some(si) = alias_subtype {
            return Some(self.class_at((ci, si)));
        }
        if subtype.trim().is_empty() {
            let name = self.categories[ci].name.as_str();
            if let Some((aci, asi)) = self.lookup_alias(name) {
                if aci == ci {
                    return Some(self.class_at((aci, asi)));
                }
            }
        }
        self.find_subtype(ci, CUSTOM_DISTANCE)
            .map(|si| self.class_at((ci, si)))
    }

    /// Canonical sport of a race.
    ///
    /// The `sport_category`/`sport_subtype` fields win when they can be
    /// repaired into a valid pair; otherwise the legacy `sport` text is
    /// normalized. A race with no sport information at all resolves to an
    /// unrecognized class with an empty subtype.
    pub fn resolve_race_sport(&self, race: &Race) -> SportClass {
        let category = non_blank(race.sport_category.as_deref());
        let subtype = non_blank(race.sport_subtype.as_deref());

        if let Some(category) = category {
            if let Some(class) = self.repair_pair(category, subtype.unwrap_or("")) {
                return class;
            }
        } else if let Some(slot) = subtype.and_then(|s| self.lookup_alias(s)) {
            return self.class_at(slot);
        }

        match non_blank(race.sport.as_deref()) {
            Some(sport) => self.normalize_legacy_sport(sport),
            None => SportClass::unrecognized(subtype.unwrap_or("")),
        }
    }

    /// Canonical distance description for a subtype, if the table has one.
    pub fn canonical_distance(&self, subtype: &str) -> Option<&str> {
        self.distances.get(subtype).map(String::as_str)
    }

    /// Distance to show for a race.
    ///
    /// An explicit distance (non-blank, not `"TBD"`) is returned verbatim;
    /// otherwise the canonical description for `sport_subtype`; otherwise
    /// `"TBD"`.
    pub fn display_distance(&self, race: &Race) -> String {
        self.display_distance_for(race.distance.as_deref(), race.sport_subtype.as_deref())
    }

    /// [`Self::display_distance`] on raw fields.
    pub fn display_distance_for(&self, distance: Option<&str>, subtype: Option<&str>) -> String {
        if let Some(explicit) = distance::explicit_distance(distance) {
            return explicit.to_string();
        }
        subtype
            .and_then(|s| self.canonical_distance(s))
            .unwrap_or(TBD)
            .to_string()
    }

    /// Like [`Self::display_distance`], but an explicit distance is rendered
    /// in the preferred unit.
    pub fn display_distance_in(&self, race: &Race, unit: DistanceUnit) -> String {
        match distance::explicit_distance(race.distance.as_deref()) {
            Some(explicit) => convert_distance(explicit, unit),
            None => self.display_distance(race),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
