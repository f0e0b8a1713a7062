// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod classifier;
pub mod filter;
pub mod import;
pub mod snapshot;

pub use classifier::{Cohorts, RaceClassifier};
pub use filter::{DateWindow, FilterChip, FilterKind, RaceFilter};
pub use import::ImportError;
