// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod membership;
pub mod race;
pub mod stats;
pub mod view;

pub use membership::{CompletionRecord, Membership};
pub use race::{EntityId, Race, RaceId, RaceRecord, UserId};
pub use stats::RaceSummary;
pub use view::{ProfileView, RaceCard};
