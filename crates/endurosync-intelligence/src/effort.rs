// ABOUTME: Terrain effort scoring converting climb into equivalent flat distance
// ABOUTME: Effort = distance + gain/1000 * coefficient, always at least the raw distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use endurosync_core::constants::effort::METERS_PER_KM;
use endurosync_core::models::Section;

use crate::config::EffortConfig;

/// Scores sections by distance-equivalent effort
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainEffortScorer {
    climb_km_per_1000m: f64,
}

impl TerrainEffortScorer {
    /// Scorer treating 1000 m of climbing as `climb_km_per_1000m` flat kilometres
    #[must_use]
    pub const fn new(climb_km_per_1000m: f64) -> Self {
        Self { climb_km_per_1000m }
    }

    /// Scorer from effort configuration
    #[must_use]
    pub const fn from_config(config: &EffortConfig) -> Self {
        Self::new(config.climb_km_per_1000m)
    }

    /// Effort for a raw distance and positive climb
    #[must_use]
    pub fn effort(&self, distance_km: f64, elevation_gain_m: f64) -> f64 {
        (elevation_gain_m.max(0.0) / METERS_PER_KM).mul_add(self.climb_km_per_1000m, distance_km)
    }

    /// Effort for a measured section
    #[must_use]
    pub fn score(&self, section: &Section) -> f64 {
        self.effort(section.distance_km, section.elevation_gain_m)
    }
}

impl Default for TerrainEffortScorer {
    fn default() -> Self {
        Self::from_config(&EffortConfig::default())
    }
}
