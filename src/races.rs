// ABOUTME: Built-in race definitions
// ABOUTME: NUTS 300 from Njurgulahti to Äkäslompolo with its aid-station cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{NaiveTime, TimeDelta, Weekday};
use endurosync_core::clock::RaceClock;

use crate::config::{CheckpointEntry, Cutoff, RaceConfig};

fn entry(name: &str, distance_km: f64, cutoff: &str) -> CheckpointEntry {
    CheckpointEntry {
        name: name.to_owned(),
        distance_km,
        cutoff: Some(Cutoff::Clock(cutoff.to_owned())),
    }
}

/// NUTS 300: Monday 12:00 start, Saturday 18:00 finish cutoff
#[must_use]
pub fn nuts300() -> RaceConfig {
    RaceConfig {
        name: "NUTS 300".to_owned(),
        start: RaceClock::new(Weekday::Mon, NaiveTime::MIN + TimeDelta::hours(12)),
        checkpoints: vec![
            entry("Njurgulahti", 0.0, "Mon 12:00"),
            entry("Kalmankaltio", 88.0, "Tue 12:00"),
            entry("Hetta", 192.0, "Thu 13:00"),
            entry("Pallas", 256.0, "Fri 13:00"),
            entry("Äkäslompolo", 326.0, "Sat 18:00"),
        ],
    }
}

/// Suggested rest (minutes) at each NUTS 300 aid station, keyed by checkpoint index
#[must_use]
pub fn nuts300_rest_stops() -> [(usize, f64); 3] {
    [(1, 60.0), (2, 120.0), (3, 180.0)]
}
