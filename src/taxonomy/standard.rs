// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in sport tables.

/// Category → allowed subtypes.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Running",
        &[
            "5K",
            "10K",
            "Half Marathon",
            "Marathon",
            "Ultra Marathon",
            "Trail Running",
            "Cross Country",
            "Custom Distance",
        ],
    ),
    (
        "Triathlon",
        &[
            "Sprint",
            "Olympic",
            "Half Ironman",
            "Ironman",
            "Aquathlon",
            "Duathlon",
            "Custom Distance",
        ],
    ),
    (
        "Cycling",
        &[
            "Criterium",
            "Gran Fondo",
            "Mountain Biking",
            "Road Race",
            "Custom Distance",
        ],
    ),
    (
        "Obstacle",
        &["Spartan Race", "HYROX", "Obstacle Course", "Custom Distance"],
    ),
    (
        "Swimming",
        &["Open Water Swim", "Pool Competition", "Custom Distance"],
    ),
];

/// Historical free-text labels: (lowercase alias, category, subtype).
pub const LEGACY_ALIASES: &[(&str, &str, &str)] = &[
    // Running
    ("5k", "Running", "5K"),
    ("10k", "Running", "10K"),
    ("half marathon", "Running", "Half Marathon"),
    ("half-marathon", "Running", "Half Marathon"),
    ("marathon", "Running", "Marathon"),
    ("ultra marathon", "Running", "Ultra Marathon"),
    ("ultra-marathon", "Running", "Ultra Marathon"),
    ("ultra", "Running", "Ultra Marathon"),
    ("ultra trail", "Running", "Ultra Marathon"),
    ("trail running", "Running", "Trail Running"),
    ("trail", "Running", "Trail Running"),
    ("cross country", "Running", "Cross Country"),
    ("cross-country", "Running", "Cross Country"),
    ("running", "Running", "Custom Distance"),
    // Triathlon
    ("triathlon", "Triathlon", "Olympic"),
    ("ironman", "Triathlon", "Ironman"),
    ("sprint", "Triathlon", "Sprint"),
    ("olympic", "Triathlon", "Olympic"),
    ("half ironman", "Triathlon", "Half Ironman"),
    ("half-ironman", "Triathlon", "Half Ironman"),
    ("70.3", "Triathlon", "Half Ironman"),
    ("aquathlon", "Triathlon", "Aquathlon"),
    ("duathlon", "Triathlon", "Duathlon"),
    // Cycling
    ("cycling", "Cycling", "Road Race"),
    ("bike race", "Cycling", "Road Race"),
    ("bike", "Cycling", "Road Race"),
    ("road race", "Cycling", "Road Race"),
    ("criterium", "Cycling", "Criterium"),
    ("gran fondo", "Cycling", "Gran Fondo"),
    ("mountain biking", "Cycling", "Mountain Biking"),
    ("mountain bike", "Cycling", "Mountain Biking"),
    ("mtb", "Cycling", "Mountain Biking"),
    // Obstacle
    ("spartan race", "Obstacle", "Spartan Race"),
    ("spartan", "Obstacle", "Spartan Race"),
    ("hyrox", "Obstacle", "HYROX"),
    ("obstacle course", "Obstacle", "Obstacle Course"),
    ("obstacle", "Obstacle", "Obstacle Course"),
    ("ocr", "Obstacle", "Obstacle Course"),
    // Swimming
    ("open water swim", "Swimming", "Open Water Swim"),
    ("open water", "Swimming", "Open Water Swim"),
    ("swim", "Swimming", "Open Water Swim"),
    ("swimming", "Swimming", "Open Water Swim"),
];

/// Subtype → canonical distance description, used when a race has no
/// explicit distance. Every built-in subtype has an entry.
pub const CANONICAL_DISTANCES: &[(&str, &str)] = &[
    ("5K", "5 km (3.1 mi)"),
    ("10K", "10 km (6.2 mi)"),
    ("Half Marathon", "21.0975 km (13.1 mi)"),
    ("Marathon", "42.195 km (26.2 mi)"),
    ("Ultra Marathon", "50+ km (31+ mi)"),
    ("Sprint", "0.75 km swim, 20 km bike, 5 km run"),
    ("Olympic", "1.5 km swim, 40 km bike, 10 km run"),
    ("Half Ironman", "1.9 km swim, 90 km bike, 21.1 km run"),
    ("Ironman", "3.8 km swim, 180 km bike, 42.2 km run"),
    ("Criterium", "40-60 km (25-37 mi)"),
    ("Gran Fondo", "100+ km (62+ mi)"),
    ("HYROX", "8 km + 8 workouts"),
    // No fixed distance; short labels
    ("Trail Running", "Trail"),
    ("Cross Country", "XC"),
    ("Aquathlon", "Aquathlon"),
    ("Duathlon", "Duathlon"),
    ("Mountain Biking", "MTB"),
    ("Road Race", "Road Race"),
    ("Spartan Race", "Spartan"),
    ("Obstacle Course", "OCR"),
    ("Open Water Swim", "Open Water"),
    ("Pool Competition", "Pool"),
    ("Custom Distance", "Custom"),
];
