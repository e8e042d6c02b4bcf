// ABOUTME: End-to-end race plan pipeline from track points to paced, energy-annotated sections
// ABOUTME: Reduce, segment, validate, score, allocate, then estimate energy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Race Planner
//!
//! [`RacePlanner::plan`] runs the whole pipeline over immutable inputs and
//! returns a fresh [`PlanOutcome`]. Route measurement does not depend on the
//! request, so [`RacePlanner::prepare`] and [`RacePlanner::plan_prepared`] let
//! callers measure once and plan many goals against the same route.

use endurosync_core::models::{CheckpointTable, RacePlan, RacePlanRequest, Section, TrackPoint};
use endurosync_core::PlanResult;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::allocation::{allocate, AllocationInput};
use crate::config::PlannerConfig;
use crate::effort::TerrainEffortScorer;
use crate::energy::{EnergyEstimate, EnergyEstimator};
use crate::geodesic::{reduce_track, ReducedTrack};
use crate::segmenter::segment_route;

/// A route measured against its checkpoint table
///
/// Only [`RacePlanner::prepare`] builds one, so its sections always agree
/// with its table and profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRoute {
    reduced: ReducedTrack,
    table: CheckpointTable,
    sections: Vec<Section>,
}

impl PreparedRoute {
    /// Cumulative profile of the track
    #[must_use]
    pub const fn reduced(&self) -> &ReducedTrack {
        &self.reduced
    }

    /// Checkpoints the route was measured against
    #[must_use]
    pub const fn table(&self) -> &CheckpointTable {
        &self.table
    }

    /// Measured sections in route order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

/// Result of a successful planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Paced sections
    pub plan: RacePlan,
    /// Calorie figures, or why they are missing
    pub energy: EnergyEstimate,
}

/// Race pacing planner
#[derive(Debug, Clone)]
pub struct RacePlanner {
    config: PlannerConfig,
}

impl RacePlanner {
    /// Planner using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::global().clone())
    }

    /// Planner with an explicit configuration
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Measure a track and split it at the checkpoints
    ///
    /// # Errors
    ///
    /// - `PlanError::MalformedRoute` if the track is degenerate
    /// - `PlanError::RouteCheckpointMismatch` if the checkpoints do not fit the track
    pub fn prepare(&self, track: &[TrackPoint], table: &CheckpointTable) -> PlanResult<PreparedRoute> {
        let reduced = reduce_track(track)?;
        let sections = segment_route(
            &reduced,
            table,
            self.config.segmentation.checkpoint_tolerance_km,
        )?;
        Ok(PreparedRoute {
            reduced,
            table: table.clone(),
            sections,
        })
    }

    /// Run the full pipeline
    ///
    /// # Errors
    ///
    /// Any error from [`Self::prepare`] or [`Self::plan_prepared`]
    pub fn plan(
        &self,
        track: &[TrackPoint],
        table: &CheckpointTable,
        request: &RacePlanRequest,
    ) -> PlanResult<PlanOutcome> {
        let route = self.prepare(track, table)?;
        self.plan_prepared(&route, request)
    }

    /// Plan a request against an already measured route
    ///
    /// # Errors
    ///
    /// - `PlanError::InvalidGoalTime` or `PlanError::InvalidRequest` if the request
    ///   does not fit the checkpoint table
    /// - `PlanError::InvalidFatigueProfile` if fatigue overrides break monotonicity
    /// - `PlanError::InfeasibleAllocation` if a section cannot be given positive time
    #[instrument(skip_all, fields(goal_minutes = request.goal_minutes, sections = route.sections.len()))]
    pub fn plan_prepared(
        &self,
        route: &PreparedRoute,
        request: &RacePlanRequest,
    ) -> PlanResult<PlanOutcome> {
        let safety_buffer_minutes = request
            .safety_buffer_minutes
            .unwrap_or(self.config.defaults.safety_buffer_minutes);
        request.validate(&route.table, safety_buffer_minutes)?;

        let factors = self
            .config
            .fatigue
            .resolve(route.sections.len(), &request.fatigue_overrides)?;
        let scorer = TerrainEffortScorer::from_config(&self.config.effort);
        let inputs: Vec<AllocationInput> = route
            .sections
            .iter()
            .zip(factors)
            .map(|(section, fatigue_factor)| AllocationInput {
                effort: scorer.score(section),
                fatigue_factor,
                rest_minutes: request.rest_at(section.index + 1),
                section: section.clone(),
            })
            .collect();

        let plan = allocate(inputs, request.goal_minutes, safety_buffer_minutes).inspect_err(
            |error| warn!(code = ?error.code(), error = %error, "Goal time cannot be planned"),
        )?;
        let energy = EnergyEstimator::new(&self.config.energy).estimate(
            &plan,
            request.runner_mass_kg,
            request.pack_mass_kg,
        );

        info!(
            goal_minutes = plan.goal_minutes,
            clamped_sections = plan.clamped_sections().count(),
            energy_available = energy.report().is_some(),
            "Race plan computed"
        );
        Ok(PlanOutcome { plan, energy })
    }
}

impl Default for RacePlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use endurosync_core::models::Checkpoint;
    use endurosync_core::ErrorCode;

    fn straight_track(km: f64) -> Vec<TrackPoint> {
        // ~1.11 km per 0.01 degree at the equator
        let steps = (km / 1.1).ceil() as usize + 1;
        (0..=steps)
            .map(|i| TrackPoint::new(i as f64 * 0.01, 0.0, ((i % 4) * 25) as f64))
            .collect()
    }

    fn table() -> CheckpointTable {
        CheckpointTable::new(vec![
            Checkpoint::new("Start", 0.0, 0.0),
            Checkpoint::new("Mid", 20.0, 300.0),
            Checkpoint::finish("Finish", 40.0, 900.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_plan_finishes_on_goal() {
        let planner = RacePlanner::with_config(PlannerConfig::default());
        let outcome = planner
            .plan(&straight_track(40.0), &table(), &RacePlanRequest::new(480.0).with_runner_mass(65.0))
            .unwrap();
        assert_eq!(outcome.plan.finish_minutes(), 480.0);
        assert_eq!(outcome.plan.safety_buffer_minutes, 60.0);
        assert!(outcome.energy.report().is_some());
    }

    #[test]
    fn test_request_buffer_overrides_default() {
        let planner = RacePlanner::with_config(PlannerConfig::default());
        let request = RacePlanRequest::new(480.0).with_safety_buffer(15.0);
        let outcome = planner.plan(&straight_track(40.0), &table(), &request).unwrap();
        assert_eq!(outcome.plan.safety_buffer_minutes, 15.0);
        assert!(matches!(outcome.energy, EnergyEstimate::Unavailable { .. }));
    }

    #[test]
    fn test_errors_surface_in_pipeline_order() {
        let planner = RacePlanner::with_config(PlannerConfig::default());
        let bad_track = [TrackPoint::without_elevation(0.0, 0.0)];
        let err = planner
            .plan(&bad_track, &table(), &RacePlanRequest::new(-1.0))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::MalformedRoute);

        let err = planner
            .plan(&straight_track(10.0), &table(), &RacePlanRequest::new(-1.0))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::RouteCheckpointMismatch);

        let err = planner
            .plan(&straight_track(40.0), &table(), &RacePlanRequest::new(900.0))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidGoalTime);
    }

    #[test]
    fn test_prepared_route_is_reusable() {
        let planner = RacePlanner::with_config(PlannerConfig::default());
        let route = planner.prepare(&straight_track(40.0), &table()).unwrap();
        let fast = planner.plan_prepared(&route, &RacePlanRequest::new(300.0)).unwrap();
        let slow = planner.plan_prepared(&route, &RacePlanRequest::new(600.0)).unwrap();
        assert!(fast.plan.sections[1].allocated_minutes < slow.plan.sections[1].allocated_minutes);
        assert_eq!(route.sections().len(), 2);
    }
}
