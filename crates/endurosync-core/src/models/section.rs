// ABOUTME: Route section bounded by two consecutive checkpoints
// ABOUTME: Carries measured distance and climb as produced by the segmenter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::race::SECTION_NAME_SEPARATOR;

/// Measured stretch of route between two checkpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Zero-based position in route order
    pub index: usize,
    /// Name of the checkpoint the section starts at
    pub start_name: String,
    /// Name of the checkpoint the section ends at
    pub end_name: String,
    /// Official distance of the start checkpoint (km)
    pub start_km: f64,
    /// Official distance of the end checkpoint (km)
    pub end_km: f64,
    /// Distance measured along the reduced track (km)
    pub distance_km: f64,
    /// Positive elevation gain measured along the reduced track (m)
    pub elevation_gain_m: f64,
    /// Cutoff of the end checkpoint, `None` when it has none
    pub deadline_minutes: Option<f64>,
    /// Whether the section ends at the finish
    pub is_terminal: bool,
}

impl Section {
    /// Display name, e.g. "Kalmankaltio → Hetta"
    #[must_use]
    pub fn name(&self) -> String {
        format!(
            "{}{SECTION_NAME_SEPARATOR}{}",
            self.start_name, self.end_name
        )
    }
}
