// ABOUTME: Benchmark fixtures generating synthetic race routes of configurable density
// ABOUTME: Deterministic rolling terrain so repeated runs measure the same work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for synthetic race routes.

use endurosync::races::nuts300;
use endurosync::{CheckpointTable, PlanResult, TrackPoint};

/// Kilometres per degree of latitude on the 6371 km sphere
const KM_PER_DEGREE: f64 = 111.194_926_644_558_73;

/// Length of the generated routes (km), enough to cover NUTS 300
const ROUTE_KM: f64 = 330.0;

/// Predefined recording densities
#[derive(Debug, Clone, Copy)]
pub enum TrackDensity {
    /// One point every 100 m (about 3 300 points)
    Sparse,
    /// One point every 20 m (about 16 500 points)
    Typical,
    /// One point every 5 m (about 66 000 points), a raw watch export
    Dense,
}

impl TrackDensity {
    /// Spacing between points (km)
    #[must_use]
    pub const fn step_km(self) -> f64 {
        match self {
            Self::Sparse => 0.1,
            Self::Typical => 0.02,
            Self::Dense => 0.005,
        }
    }

    /// Number of points generated at this density
    #[must_use]
    pub fn point_count(self) -> usize {
        (ROUTE_KM / self.step_km()).ceil() as usize + 1
    }

    /// Label used in benchmark ids
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Typical => "typical",
            Self::Dense => "dense",
        }
    }
}

/// Northbound route with rolling hills
#[must_use]
pub fn generate_track(density: TrackDensity) -> Vec<TrackPoint> {
    let step = density.step_km();
    (0..density.point_count())
        .map(|i| {
            let km = i as f64 * step;
            // hills every ~30 km with a few metres of GPS noise on top
            let elevation = 150.0_f64.mul_add((km / 5.0).sin(), 200.0) + ((i * 37) % 7) as f64;
            TrackPoint::new(24.0, 66.0 + km / KM_PER_DEGREE, elevation)
        })
        .collect()
}

/// NUTS 300 checkpoint table
///
/// # Errors
///
/// Returns an error if the built-in race definition is invalid
pub fn nuts_table() -> PlanResult<CheckpointTable> {
    nuts300().checkpoint_table()
}
