// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for race ingestion and classification.
//!
//! Taxonomy lookups never fail; everything here is raised at a boundary
//! (record validation, table construction, CSV import, configuration).

/// A race record rejected at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Race {race_id}: invalid date {value:?} (expected YYYY-MM-DD or RFC3339)")]
    InvalidDate { race_id: String, value: String },

    #[error("Race {race_id}: missing required field '{field}'")]
    MissingField {
        race_id: String,
        field: &'static str,
    },
}

impl ValidationError {
    /// Id of the offending race record.
    pub fn race_id(&self) -> &str {
        match self {
            ValidationError::InvalidDate { race_id, .. } => race_id,
            ValidationError::MissingField { race_id, .. } => race_id,
        }
    }
}

/// Crate-level error for the command-line driver.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, AppError>;
