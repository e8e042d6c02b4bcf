// ABOUTME: Successful race plan output exposed to reporting layers
// ABOUTME: Per-section allocated time, pace, arrival and departure offsets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::section::Section;

/// A section with its committed time budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSection {
    /// The measured section
    #[serde(flatten)]
    pub section: Section,
    /// Distance-equivalent effort score
    pub effort: f64,
    /// Fatigue multiplier applied to the effort
    pub fatigue_factor: f64,
    /// Moving time budget (minutes), always > 0
    pub allocated_minutes: f64,
    /// Whether the deadline ceiling cut the proportional share
    pub clamped: bool,
    /// Average pace over the measured distance (min/km)
    pub pace_min_per_km: f64,
    /// Race time at arrival at the end checkpoint (minutes)
    pub arrival_minutes: f64,
    /// Planned rest at the end checkpoint (minutes)
    pub rest_minutes: f64,
    /// Race time when leaving the end checkpoint (minutes)
    pub departure_minutes: f64,
}

impl PlannedSection {
    /// Display name, e.g. "Pallas → Finish"
    #[must_use]
    pub fn name(&self) -> String {
        self.section.name()
    }

    /// Minutes between arrival and the official cutoff, `None` without a cutoff
    #[must_use]
    pub fn margin_to_cutoff_minutes(&self) -> Option<f64> {
        self.section
            .deadline_minutes
            .map(|cutoff| cutoff - self.arrival_minutes)
    }
}

/// Complete feasible plan, produced only when every section committed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePlan {
    /// Requested finish time (minutes)
    pub goal_minutes: f64,
    /// Buffer subtracted from every intermediate cutoff (minutes)
    pub safety_buffer_minutes: f64,
    /// Sections in route order
    pub sections: Vec<PlannedSection>,
}

impl RacePlan {
    /// Sum of measured section distances (km)
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.sections.iter().map(|s| s.section.distance_km).sum()
    }

    /// Sum of moving time budgets (minutes)
    #[must_use]
    pub fn moving_minutes(&self) -> f64 {
        self.sections.iter().map(|s| s.allocated_minutes).sum()
    }

    /// Sum of planned rests (minutes)
    #[must_use]
    pub fn rest_minutes(&self) -> f64 {
        self.sections.iter().map(|s| s.rest_minutes).sum()
    }

    /// Arrival at the finish (minutes); equals the goal for any returned plan
    #[must_use]
    pub fn finish_minutes(&self) -> f64 {
        self.sections.last().map_or(0.0, |s| s.arrival_minutes)
    }

    /// Sections whose proportional share was cut by a deadline
    pub fn clamped_sections(&self) -> impl Iterator<Item = &PlannedSection> {
        self.sections.iter().filter(|s| s.clamped)
    }
}
