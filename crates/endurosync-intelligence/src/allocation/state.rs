// ABOUTME: Running state of the forward allocation pass and its single-section transition
// ABOUTME: Clamps non-terminal sections to the buffered deadline and detects infeasibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use endurosync_core::models::{PlannedSection, Section};
use endurosync_core::{PlanError, PlanResult};
use tracing::debug;

/// One section as seen by the allocator
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationInput {
    /// Measured section
    pub section: Section,
    /// Distance-equivalent effort
    pub effort: f64,
    /// Fatigue multiplier for this position in the race
    pub fatigue_factor: f64,
    /// Rest planned at the end checkpoint (minutes), 0 at the finish
    pub rest_minutes: f64,
}

impl AllocationInput {
    /// Weight used to share the remaining moving time
    #[must_use]
    pub fn fatigued_effort(&self) -> f64 {
        self.effort * self.fatigue_factor
    }
}

/// Everything the allocator carries from one section to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationState {
    /// Requested finish time (minutes)
    pub goal_minutes: f64,
    /// Buffer subtracted from intermediate deadlines (minutes)
    pub safety_buffer_minutes: f64,
    /// Moving time not yet committed (minutes)
    pub remaining_moving_minutes: f64,
    /// Fatigued effort of the sections not yet committed
    pub remaining_effort: f64,
    /// Race time when leaving the current section's start checkpoint (minutes)
    pub elapsed_minutes: f64,
}

impl AllocationState {
    /// State before the first section
    #[must_use]
    pub const fn initial(
        goal_minutes: f64,
        safety_buffer_minutes: f64,
        moving_minutes: f64,
        total_effort: f64,
    ) -> Self {
        Self {
            goal_minutes,
            safety_buffer_minutes,
            remaining_moving_minutes: moving_minutes,
            remaining_effort: total_effort,
            elapsed_minutes: 0.0,
        }
    }

    /// Commit one section and return the state for the next
    ///
    /// Terminal sections take exactly the time left to the goal. Other sections
    /// take their effort-proportional share of the remaining moving time, cut to
    /// the buffered deadline when that share would arrive too late.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InfeasibleAllocation` if the committed time would not be
    /// strictly positive
    pub fn step(self, input: AllocationInput) -> PlanResult<(Self, PlannedSection)> {
        let weight = input.fatigued_effort();
        let tentative = if input.section.is_terminal {
            self.goal_minutes - self.elapsed_minutes
        } else if self.remaining_effort > 0.0 {
            self.remaining_moving_minutes * (weight / self.remaining_effort)
        } else {
            self.remaining_moving_minutes
        };

        let max_allowed = if input.section.is_terminal {
            None
        } else {
            input
                .section
                .deadline_minutes
                .map(|deadline| deadline - self.safety_buffer_minutes - self.elapsed_minutes)
        };

        let clamped = max_allowed.is_some_and(|ceiling| tentative > ceiling);
        let minutes = match max_allowed {
            Some(ceiling) if clamped => ceiling,
            _ => tentative,
        };

        if minutes.is_nan() || minutes <= 0.0 {
            return Err(PlanError::InfeasibleAllocation {
                section_index: input.section.index,
                section_name: input.section.name(),
                tentative_minutes: tentative,
                max_allowed_minutes: max_allowed,
                elapsed_at_start_minutes: self.elapsed_minutes,
            });
        }

        let arrival = if input.section.is_terminal {
            self.goal_minutes
        } else {
            self.elapsed_minutes + minutes
        };
        let rest = if input.section.is_terminal {
            0.0
        } else {
            input.rest_minutes
        };

        debug!(
            section = %input.section.name(),
            tentative_minutes = tentative,
            allocated_minutes = minutes,
            clamped,
            arrival_minutes = arrival,
            "Committed section"
        );

        let next = Self {
            remaining_moving_minutes: self.remaining_moving_minutes - minutes,
            remaining_effort: self.remaining_effort - weight,
            elapsed_minutes: arrival + rest,
            ..self
        };
        let pace_min_per_km = minutes / input.section.distance_km;
        let planned = PlannedSection {
            section: input.section,
            effort: input.effort,
            fatigue_factor: input.fatigue_factor,
            allocated_minutes: minutes,
            clamped,
            pace_min_per_km,
            arrival_minutes: arrival,
            rest_minutes: rest,
            departure_minutes: arrival + rest,
        };
        Ok((next, planned))
    }
}
