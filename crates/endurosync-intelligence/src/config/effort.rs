// ABOUTME: Effort, segmentation and planning-default configuration
// ABOUTME: Climb-to-distance coefficient, checkpoint tolerance, and default safety buffer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use endurosync_core::constants::effort::DEFAULT_CLIMB_KM_PER_1000M;
use endurosync_core::constants::race::DEFAULT_SAFETY_BUFFER_MINUTES;
use serde::{Deserialize, Serialize};

/// Terrain effort scoring settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortConfig {
    /// Flat kilometres equivalent to 1000 m of climbing
    pub climb_km_per_1000m: f64,
}

/// Route segmentation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Allowed shortfall between measured route length and the terminal checkpoint (km)
    pub checkpoint_tolerance_km: f64,
}

/// Values used when a request leaves them unset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningDefaults {
    /// Safety buffer subtracted from every intermediate cutoff (minutes)
    pub safety_buffer_minutes: f64,
}

impl Default for EffortConfig {
    fn default() -> Self {
        Self {
            climb_km_per_1000m: DEFAULT_CLIMB_KM_PER_1000M,
        }
    }
}

impl Default for PlanningDefaults {
    fn default() -> Self {
        Self {
            safety_buffer_minutes: DEFAULT_SAFETY_BUFFER_MINUTES,
        }
    }
}
