// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race-cohorts command-line driver
//!
//! Loads a race snapshot and a user's memberships, classifies the races,
//! and prints the profile view as JSON on stdout. Logs go to stderr.

use race_cohorts::{
    config::Config,
    error::Result,
    models::{Membership, ProfileView},
    services::{snapshot, RaceClassifier},
    taxonomy::Taxonomy,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    let today = config.today();
    tracing::info!(
        races = %config.races_path.display(),
        %today,
        unit = %config.distance_unit,
        "Starting race classification"
    );

    let taxonomy = Taxonomy::standard();

    // Load and validate the race snapshot
    let batch_tag = today.format("%Y%m%d").to_string();
    let records = snapshot::load_race_records(&config.races_path, taxonomy, &batch_tag)?;
    let (races, rejected) = snapshot::validate_records(records);
    if !rejected.is_empty() {
        tracing::warn!(
            rejected = rejected.len(),
            "Some race records failed validation"
        );
    }

    let membership = match &config.membership_path {
        Some(path) => snapshot::load_membership(path)?,
        None => {
            tracing::info!("No membership file configured");
            Membership::default()
        }
    };

    // Classify and summarize
    let classifier = RaceClassifier::new(taxonomy);
    let cohorts = classifier.classify(&races, &membership, today);
    let summary = classifier.summarize(&cohorts.completed);
    tracing::info!(
        upcoming = cohorts.upcoming.len(),
        past_uncompleted = cohorts.past_uncompleted.len(),
        completed = cohorts.completed.len(),
        best = %summary.best_distance_label,
        "Classification complete"
    );

    let view = ProfileView::build(
        &cohorts,
        summary,
        &membership,
        taxonomy,
        config.distance_unit,
        today,
    );
    let json = serde_json::to_string_pretty(&view).map_err(anyhow::Error::from)?;
    println!("{}", json);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("race_cohorts=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
