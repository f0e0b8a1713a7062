// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Race cohorts: sport taxonomy and race classification for a race
//! calendar and social app.
//!
//! This crate normalizes free-text sport labels into a fixed taxonomy,
//! resolves display distances, and partitions a user's races into
//! upcoming, pending-completion, and completed cohorts.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod taxonomy;
pub mod time_utils;

pub use models::{Membership, Race, RaceId, RaceRecord};
pub use services::{Cohorts, RaceClassifier};
pub use taxonomy::{SportClass, Taxonomy};
