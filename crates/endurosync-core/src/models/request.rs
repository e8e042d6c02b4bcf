// ABOUTME: Caller-supplied plan request (goal time, buffer, runner mass, overrides, rests)
// ABOUTME: Validated against the checkpoint table before any allocation starts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::checkpoint::CheckpointTable;
use crate::clock::parse_goal_time;
use crate::errors::{PlanError, PlanResult};

/// Inputs a runner provides for one plan computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePlanRequest {
    /// Target finish time (minutes from start)
    pub goal_minutes: f64,
    /// Minutes subtracted from every intermediate cutoff; `None` uses the configured default
    #[serde(default)]
    pub safety_buffer_minutes: Option<f64>,
    /// Runner body mass for energy estimation (kg)
    #[serde(default)]
    pub runner_mass_kg: Option<f64>,
    /// Carried pack mass added to the runner mass for energy estimation (kg)
    #[serde(default)]
    pub pack_mass_kg: Option<f64>,
    /// Per-section fatigue factor overrides, keyed by section index
    #[serde(default)]
    pub fatigue_overrides: BTreeMap<usize, f64>,
    /// Planned rest at intermediate checkpoints, keyed by checkpoint index (minutes)
    #[serde(default)]
    pub rest_stops: BTreeMap<usize, f64>,
}

impl RacePlanRequest {
    /// Request with only a goal time
    #[must_use]
    pub fn new(goal_minutes: f64) -> Self {
        Self {
            goal_minutes,
            safety_buffer_minutes: None,
            runner_mass_kg: None,
            pack_mass_kg: None,
            fatigue_overrides: BTreeMap::new(),
            rest_stops: BTreeMap::new(),
        }
    }

    /// Request from a goal duration string such as "96:00"
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidGoalTime` if the string is not a valid duration
    pub fn from_goal_str(goal: &str) -> PlanResult<Self> {
        Ok(Self::new(parse_goal_time(goal)?))
    }

    /// Set the safety buffer (minutes)
    #[must_use]
    pub const fn with_safety_buffer(mut self, minutes: f64) -> Self {
        self.safety_buffer_minutes = Some(minutes);
        self
    }

    /// Set the runner mass (kg)
    #[must_use]
    pub const fn with_runner_mass(mut self, kg: f64) -> Self {
        self.runner_mass_kg = Some(kg);
        self
    }

    /// Set the pack mass (kg)
    #[must_use]
    pub const fn with_pack_mass(mut self, kg: f64) -> Self {
        self.pack_mass_kg = Some(kg);
        self
    }

    /// Override the fatigue factor of one section
    #[must_use]
    pub fn with_fatigue_override(mut self, section_index: usize, factor: f64) -> Self {
        self.fatigue_overrides.insert(section_index, factor);
        self
    }

    /// Plan a rest at an intermediate checkpoint
    #[must_use]
    pub fn with_rest_stop(mut self, checkpoint_index: usize, minutes: f64) -> Self {
        self.rest_stops.insert(checkpoint_index, minutes);
        self
    }

    /// Total planned rest (minutes)
    #[must_use]
    pub fn total_rest_minutes(&self) -> f64 {
        self.rest_stops.values().sum()
    }

    /// Rest planned at a checkpoint, 0 when none
    #[must_use]
    pub fn rest_at(&self, checkpoint_index: usize) -> f64 {
        self.rest_stops.get(&checkpoint_index).copied().unwrap_or(0.0)
    }

    /// Check the request against a checkpoint table
    ///
    /// # Errors
    ///
    /// - `PlanError::InvalidGoalTime` if the goal is non-finite, non-positive, not below
    ///   the final cutoff, or does not exceed the total planned rest
    /// - `PlanError::InvalidRequest` if the buffer is negative or a rest stop / override
    ///   refers to an invalid index or carries an invalid value
    pub fn validate(&self, table: &CheckpointTable, safety_buffer_minutes: f64) -> PlanResult<()> {
        if !self.goal_minutes.is_finite() || self.goal_minutes <= 0.0 {
            return Err(PlanError::invalid_goal_time(format!(
                "goal time must be positive, got {} min",
                self.goal_minutes
            )));
        }
        if let Some(final_cutoff) = table.final_cutoff_minutes() {
            if self.goal_minutes >= final_cutoff {
                return Err(PlanError::invalid_goal_time(format!(
                    "goal {} min is not below the final cutoff {final_cutoff} min",
                    self.goal_minutes
                )));
            }
        }
        if !safety_buffer_minutes.is_finite() || safety_buffer_minutes < 0.0 {
            return Err(PlanError::invalid_request(format!(
                "safety buffer must be a non-negative number of minutes, got {safety_buffer_minutes}"
            )));
        }

        let terminal_index = table.section_count();
        for (&index, &minutes) in &self.rest_stops {
            if index == 0 || index >= terminal_index {
                return Err(PlanError::invalid_request(format!(
                    "rest stop at checkpoint {index} is not an intermediate checkpoint"
                )));
            }
            if !minutes.is_finite() || minutes < 0.0 {
                return Err(PlanError::invalid_request(format!(
                    "rest at checkpoint {index} must be non-negative, got {minutes} min"
                )));
            }
        }
        let total_rest = self.total_rest_minutes();
        if total_rest >= self.goal_minutes {
            return Err(PlanError::invalid_goal_time(format!(
                "goal {} min leaves no moving time after {total_rest} min of rest",
                self.goal_minutes
            )));
        }

        if let Some(index) = self
            .fatigue_overrides
            .keys()
            .find(|&&index| index >= table.section_count())
        {
            return Err(PlanError::invalid_request(format!(
                "fatigue override for section {index} but the race has {} sections",
                table.section_count()
            )));
        }

        if let Some(mass) = self.pack_mass_kg {
            if !mass.is_finite() || mass < 0.0 {
                return Err(PlanError::invalid_request(format!(
                    "pack mass must be non-negative, got {mass} kg"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::Checkpoint;

    fn table() -> CheckpointTable {
        CheckpointTable::new(vec![
            Checkpoint::new("Start", 0.0, 0.0),
            Checkpoint::new("Mid", 50.0, 900.0),
            Checkpoint::finish("Finish", 100.0, 2000.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_goal_at_or_beyond_final_cutoff_is_rejected() {
        let err = RacePlanRequest::new(2000.0)
            .validate(&table(), 60.0)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidGoalTime);
        assert!(err.to_string().contains("2000"));
    }

    #[test]
    fn test_non_positive_goal_is_rejected() {
        assert!(RacePlanRequest::new(0.0).validate(&table(), 60.0).is_err());
        assert!(RacePlanRequest::new(f64::NAN).validate(&table(), 60.0).is_err());
    }

    #[test]
    fn test_rest_stops_must_be_intermediate() {
        let at_start = RacePlanRequest::new(1500.0).with_rest_stop(0, 30.0);
        assert_eq!(
            at_start.validate(&table(), 60.0).unwrap_err().code(),
            ErrorCode::InvalidRequest
        );
        let at_finish = RacePlanRequest::new(1500.0).with_rest_stop(2, 30.0);
        assert!(at_finish.validate(&table(), 60.0).is_err());
        let ok = RacePlanRequest::new(1500.0).with_rest_stop(1, 30.0);
        assert!(ok.validate(&table(), 60.0).is_ok());
    }

    #[test]
    fn test_rest_cannot_consume_goal() {
        let err = RacePlanRequest::new(100.0)
            .with_rest_stop(1, 100.0)
            .validate(&table(), 60.0)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidGoalTime);
    }

    #[test]
    fn test_negative_buffer_and_bad_override_index() {
        assert!(RacePlanRequest::new(1500.0).validate(&table(), -1.0).is_err());
        let err = RacePlanRequest::new(1500.0)
            .with_fatigue_override(2, 1.3)
            .validate(&table(), 60.0)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
