// ABOUTME: GeoJSON route ingestion producing planner track points
// ABOUTME: Reads the first LineString of a FeatureCollection converted from GPX
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route ingestion
//!
//! GPX tracks are converted to GeoJSON before they reach the planner. The
//! result is a `FeatureCollection` whose track features are `LineString`s with
//! `[longitude, latitude, elevation?]` positions. Only the first track is used.

use std::fs;
use std::path::Path;

use endurosync_core::models::TrackPoint;
use endurosync_core::{PlanError, PlanResult};
use serde::Deserialize;
use tracing::debug;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    LineString { coordinates: Vec<Vec<f64>> },
    #[serde(other)]
    Other,
}

fn position_to_point(index: usize, position: &[f64]) -> PlanResult<TrackPoint> {
    match *position {
        [longitude, latitude] => Ok(TrackPoint::without_elevation(longitude, latitude)),
        [longitude, latitude, elevation, ..] => {
            Ok(TrackPoint::new(longitude, latitude, elevation))
        }
        _ => Err(PlanError::malformed_route(format!(
            "position {index} has {} coordinates, expected 2 or 3",
            position.len()
        ))),
    }
}

/// Track points of the first `LineString` in a GeoJSON `FeatureCollection`
///
/// # Errors
///
/// Returns `PlanError::MalformedRoute` if the document is not a feature
/// collection, has no `LineString` feature, or a position is malformed
pub fn track_from_geojson(geojson: &str) -> PlanResult<Vec<TrackPoint>> {
    let collection: FeatureCollection = serde_json::from_str(geojson)
        .map_err(|e| PlanError::malformed_route(format!("not a GeoJSON feature collection: {e}")))?;

    let feature_count = collection.features.len();
    let coordinates = collection
        .features
        .into_iter()
        .find_map(|feature| match feature.geometry {
            Some(Geometry::LineString { coordinates }) => Some(coordinates),
            _ => None,
        })
        .ok_or_else(|| {
            PlanError::malformed_route(format!(
                "none of the {feature_count} features is a LineString track"
            ))
        })?;

    let points = coordinates
        .iter()
        .enumerate()
        .map(|(index, position)| position_to_point(index, position))
        .collect::<PlanResult<Vec<_>>>()?;

    debug!(
        features = feature_count,
        points = points.len(),
        "Read track from GeoJSON"
    );
    Ok(points)
}

/// Read a GeoJSON route file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds no usable track
pub fn load_track(path: &Path) -> AppResult<Vec<TrackPoint>> {
    let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    Ok(track_from_geojson(&content)?)
}
