// ABOUTME: Reduces raw track points to cumulative distance and climb profiles
// ABOUTME: Haversine great-circle distance with positive-only elevation gain accumulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Geodesic reduction
//!
//! Turns an ordered list of [`TrackPoint`]s into arrays aligned index-for-index
//! with the input: cumulative distance, elevation, and cumulative positive gain.
//! Points without elevation count as 0 m.

use endurosync_core::constants::geodesy::{EARTH_RADIUS_KM, MIN_ROUTE_POINTS};
use endurosync_core::models::TrackPoint;
use endurosync_core::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Great-circle distance in km between two (latitude, longitude) pairs in degrees
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (lat1.to_radians().cos() * lat2.to_radians().cos())
        .mul_add((d_lon / 2.0).sin().powi(2), (d_lat / 2.0).sin().powi(2));
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance in km between two track points
#[must_use]
pub fn step_distance_km(from: &TrackPoint, to: &TrackPoint) -> f64 {
    haversine_km(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Cumulative profile of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileArrays")]
pub struct ReducedTrack {
    cumulative_km: Vec<f64>,
    elevation_m: Vec<f64>,
    cumulative_gain_m: Vec<f64>,
}

/// Serialized form of [`ReducedTrack`], checked before use
#[derive(Deserialize)]
struct ProfileArrays {
    cumulative_km: Vec<f64>,
    elevation_m: Vec<f64>,
    cumulative_gain_m: Vec<f64>,
}

impl TryFrom<ProfileArrays> for ReducedTrack {
    type Error = PlanError;

    fn try_from(arrays: ProfileArrays) -> PlanResult<Self> {
        let ProfileArrays {
            cumulative_km,
            elevation_m,
            cumulative_gain_m,
        } = arrays;
        let points = cumulative_km.len();
        if elevation_m.len() != points || cumulative_gain_m.len() != points {
            return Err(PlanError::malformed_route(format!(
                "profile arrays differ in length: {points} distances, {} elevations, {} gains",
                elevation_m.len(),
                cumulative_gain_m.len()
            )));
        }
        if points < MIN_ROUTE_POINTS {
            return Err(PlanError::malformed_route(format!(
                "route needs at least {MIN_ROUTE_POINTS} points, got {points}"
            )));
        }
        if !is_cumulative(&cumulative_km) || !is_cumulative(&cumulative_gain_m) {
            return Err(PlanError::malformed_route(
                "cumulative distance and gain must start at 0 and never decrease",
            ));
        }
        if elevation_m.iter().any(|e| !e.is_finite()) {
            return Err(PlanError::malformed_route("elevation must be finite"));
        }
        Ok(Self {
            cumulative_km,
            elevation_m,
            cumulative_gain_m,
        })
    }
}

fn is_cumulative(values: &[f64]) -> bool {
    values.first() == Some(&0.0)
        && values.iter().all(|v| v.is_finite())
        && values.windows(2).all(|w| w[0] <= w[1])
}

impl ReducedTrack {
    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.cumulative_km.len()
    }

    /// Always false for a successfully reduced track
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cumulative_km.is_empty()
    }

    /// Cumulative distance at each point (km), non-decreasing, starting at 0
    #[must_use]
    pub fn cumulative_km(&self) -> &[f64] {
        &self.cumulative_km
    }

    /// Elevation at each point (m), 0 where the source had none
    #[must_use]
    pub fn elevation_m(&self) -> &[f64] {
        &self.elevation_m
    }

    /// Cumulative positive elevation gain at each point (m)
    #[must_use]
    pub fn cumulative_gain_m(&self) -> &[f64] {
        &self.cumulative_gain_m
    }

    /// Total route length (km)
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.cumulative_km.last().copied().unwrap_or(0.0)
    }

    /// Total positive elevation gain (m)
    #[must_use]
    pub fn total_gain_m(&self) -> f64 {
        self.cumulative_gain_m.last().copied().unwrap_or(0.0)
    }
}

/// Reduce a route to its cumulative distance and climb profile
///
/// # Errors
///
/// Returns `PlanError::MalformedRoute` if there are fewer than two points or any
/// point has a non-finite or out-of-range coordinate
pub fn reduce_track(points: &[TrackPoint]) -> PlanResult<ReducedTrack> {
    if points.len() < MIN_ROUTE_POINTS {
        return Err(PlanError::malformed_route(format!(
            "route needs at least {MIN_ROUTE_POINTS} points, got {}",
            points.len()
        )));
    }
    if let Some(index) = points.iter().position(|p| !p.has_valid_coordinates()) {
        return Err(PlanError::malformed_route(format!(
            "point {index} has invalid coordinates"
        )));
    }

    let mut cumulative_km = Vec::with_capacity(points.len());
    let mut elevation_m = Vec::with_capacity(points.len());
    let mut cumulative_gain_m = Vec::with_capacity(points.len());

    cumulative_km.push(0.0);
    elevation_m.push(points[0].elevation_or_zero());
    cumulative_gain_m.push(0.0);

    let mut distance = 0.0;
    let mut gain = 0.0;
    for pair in points.windows(2) {
        let [from, to] = pair else { continue };
        let climb = to.elevation_or_zero() - from.elevation_or_zero();
        distance += step_distance_km(from, to);
        gain += climb.max(0.0);
        cumulative_km.push(distance);
        elevation_m.push(to.elevation_or_zero());
        cumulative_gain_m.push(gain);
    }

    debug!(
        points = points.len(),
        distance_km = distance,
        gain_m = gain,
        "Reduced route"
    );

    Ok(ReducedTrack {
        cumulative_km,
        elevation_m,
        cumulative_gain_m,
    })
}
