// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Synthetic north-bound tracks, the NUTS 300 table, and GeoJSON rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test fixtures for `endurosync`

use endurosync::races::nuts300;
use endurosync::{CheckpointTable, TrackPoint};
use serde_json::json;

/// Kilometres per degree of latitude on the 6371 km sphere
pub const KM_PER_DEGREE: f64 = 111.194_926_644_558_73;

/// Track heading due north from 66.0°N, 24.0°E in equal steps
///
/// Elevation rolls between 50 m and 350 m so every section has some climb.
pub fn northbound_track(total_km: f64, step_km: f64) -> Vec<TrackPoint> {
    let steps = (total_km / step_km).ceil() as usize;
    (0..=steps)
        .map(|i| {
            let km = i as f64 * step_km;
            let elevation = 150.0_f64.mul_add((km / 5.0).sin(), 200.0);
            TrackPoint::new(24.0, 66.0 + km / KM_PER_DEGREE, elevation)
        })
        .collect()
}

/// Flat track heading due north without elevation data
pub fn flat_track(total_km: f64, step_km: f64) -> Vec<TrackPoint> {
    northbound_track(total_km, step_km)
        .into_iter()
        .map(|p| TrackPoint::without_elevation(p.longitude, p.latitude))
        .collect()
}

/// A 330 km route long enough for the NUTS 300 checkpoints
pub fn nuts_track() -> Vec<TrackPoint> {
    northbound_track(330.0, 0.5)
}

/// NUTS 300 checkpoint table: 0/88/192/256/326 km, cutoffs 0/1440/4380/5820/7560 min
pub fn nuts_table() -> CheckpointTable {
    nuts300().checkpoint_table().unwrap()
}

/// Render points as a togeojson-style feature collection
pub fn to_geojson(points: &[TrackPoint]) -> String {
    let coordinates: Vec<Vec<f64>> = points
        .iter()
        .map(|p| match p.elevation_m {
            Some(elevation) => vec![p.longitude, p.latitude, elevation],
            None => vec![p.longitude, p.latitude],
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "NUTS 300"},
            "geometry": {"type": "LineString", "coordinates": coordinates}
        }]
    })
    .to_string()
}
