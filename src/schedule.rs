// ABOUTME: Wall-clock schedule rows derived from a race plan
// ABOUTME: Arrival, departure, and cutoff moments expressed on the race clock with margins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use endurosync_core::clock::{format_duration, RaceClock};
use endurosync_core::models::RacePlan;
use endurosync_intelligence::EnergyEstimate;
use serde::{Deserialize, Serialize};

/// One section of the printed schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Section display name
    pub section: String,
    /// Measured distance (km)
    pub distance_km: f64,
    /// Positive climb (m)
    pub elevation_gain_m: f64,
    /// Moving time (minutes)
    pub moving_minutes: f64,
    /// Moving time as `H:MM`
    pub moving_time: String,
    /// Average pace (min/km)
    pub pace_min_per_km: f64,
    /// Rest after arriving (minutes)
    pub rest_minutes: f64,
    /// Arrival offset from the start (minutes)
    pub arrival_minutes: f64,
    /// Arrival on the race clock, e.g. `"Tue 10:45"`
    pub arrival: String,
    /// Departure offset from the start (minutes)
    pub departure_minutes: f64,
    /// Departure on the race clock
    pub departure: String,
    /// Cutoff on the race clock, if the checkpoint has one
    pub cutoff: Option<String>,
    /// Minutes to spare at arrival, if the checkpoint has a cutoff
    pub margin_minutes: Option<f64>,
    /// Whether the cutoff limited this section's time
    pub clamped: bool,
    /// Estimated burn (kcal), when energy figures are available
    pub calories: Option<f64>,
}

/// Race-clock view of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Start moment
    pub start: String,
    /// Finish moment
    pub finish: String,
    /// Goal duration as `H:MM`
    pub goal: String,
    /// Rows in route order
    pub rows: Vec<ScheduleRow>,
}

impl Schedule {
    /// Render a plan on a race clock
    #[must_use]
    pub fn from_plan(plan: &RacePlan, clock: &RaceClock) -> Self {
        let rows = plan
            .sections
            .iter()
            .map(|planned| ScheduleRow {
                section: planned.name(),
                distance_km: planned.section.distance_km,
                elevation_gain_m: planned.section.elevation_gain_m,
                moving_minutes: planned.allocated_minutes,
                moving_time: format_duration(planned.allocated_minutes),
                pace_min_per_km: planned.pace_min_per_km,
                rest_minutes: planned.rest_minutes,
                arrival_minutes: planned.arrival_minutes,
                arrival: clock.format(planned.arrival_minutes),
                departure_minutes: planned.departure_minutes,
                departure: clock.format(planned.departure_minutes),
                cutoff: planned
                    .section
                    .deadline_minutes
                    .map(|cutoff| clock.format(cutoff)),
                margin_minutes: planned.margin_to_cutoff_minutes(),
                clamped: planned.clamped,
                calories: None,
            })
            .collect();

        Self {
            start: clock.to_string(),
            finish: clock.format(plan.finish_minutes()),
            goal: format_duration(plan.goal_minutes),
            rows,
        }
    }

    /// Fill in per-row calories from an energy estimate
    #[must_use]
    pub fn with_energy(mut self, energy: &EnergyEstimate) -> Self {
        if let Some(report) = energy.report() {
            for (row, section) in self.rows.iter_mut().zip(&report.sections) {
                row.calories = Some(section.total_calories);
            }
        }
        self
    }

    /// Smallest margin to any cutoff (minutes)
    #[must_use]
    pub fn tightest_margin_minutes(&self) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.margin_minutes)
            .min_by(f64::total_cmp)
    }
}
