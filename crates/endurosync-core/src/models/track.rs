// ABOUTME: Recorded GPS track point with optional elevation
// ABOUTME: Produced once from parsed route data and never mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::geodesy::{MAX_LATITUDE_DEG, MAX_LONGITUDE_DEG};

/// A single recorded route point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Elevation in meters, absent when the source had no `<ele>` sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

impl TrackPoint {
    /// Create a point with elevation
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64, elevation_m: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation_m: Some(elevation_m),
        }
    }

    /// Create a point without an elevation sample
    #[must_use]
    pub const fn without_elevation(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation_m: None,
        }
    }

    /// Elevation with the documented fallback: missing or non-finite samples count as 0 m
    #[must_use]
    pub fn elevation_or_zero(&self) -> f64 {
        self.elevation_m.filter(|e| e.is_finite()).unwrap_or(0.0)
    }

    /// Whether both coordinates are finite and within geographic range
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= MAX_LATITUDE_DEG
            && self.longitude.abs() <= MAX_LONGITUDE_DEG
    }
}
