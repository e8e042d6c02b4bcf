// ABOUTME: Plans many goal times against one measured route
// ABOUTME: Finds the earliest feasible goal; runs in parallel with the "parallel" feature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal sweeps
//!
//! Every goal is an independent planning run over the same [`PreparedRoute`],
//! so the runs share nothing mutable and can be spread across threads.

use endurosync_core::constants::sweep::MAX_GRID_POINTS;
use endurosync_core::models::RacePlanRequest;
use endurosync_core::{ErrorCode, PlanError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::planner::{PreparedRoute, RacePlanner};

/// Outcome of planning one goal time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Goal time tried (minutes)
    pub goal_minutes: f64,
    /// Number of sections cut by a deadline, `None` when planning failed
    pub clamped_sections: Option<usize>,
    /// Why planning failed, `None` on success
    pub failure: Option<ErrorCode>,
    /// Failure message for display
    pub message: Option<String>,
}

impl SweepPoint {
    /// Whether this goal produced a plan
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        self.failure.is_none()
    }

    fn failed(goal_minutes: f64, error: &PlanError) -> Self {
        Self {
            goal_minutes,
            clamped_sections: None,
            failure: Some(error.code()),
            message: Some(error.to_string()),
        }
    }
}

fn probe(
    planner: &RacePlanner,
    route: &PreparedRoute,
    template: &RacePlanRequest,
    goal_minutes: f64,
) -> SweepPoint {
    let request = RacePlanRequest {
        goal_minutes,
        ..template.clone()
    };
    match planner.plan_prepared(route, &request) {
        Ok(outcome) => SweepPoint {
            goal_minutes,
            clamped_sections: Some(outcome.plan.clamped_sections().count()),
            failure: None,
            message: None,
        },
        Err(error) => {
            debug!(goal_minutes, error = %error, "Goal time not plannable");
            SweepPoint::failed(goal_minutes, &error)
        }
    }
}

/// Plan each goal with the other request settings taken from `template`
///
/// Results come back in the order of `goals`.
#[must_use]
pub fn sweep_goal_times(
    planner: &RacePlanner,
    route: &PreparedRoute,
    template: &RacePlanRequest,
    goals: &[f64],
) -> Vec<SweepPoint> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        goals
            .par_iter()
            .map(|&goal| probe(planner, route, template, goal))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        goals
            .iter()
            .map(|&goal| probe(planner, route, template, goal))
            .collect()
    }
}

/// Smallest goal in `goals` that produces a plan
#[must_use]
pub fn earliest_feasible_goal(
    planner: &RacePlanner,
    route: &PreparedRoute,
    template: &RacePlanRequest,
    goals: &[f64],
) -> Option<f64> {
    sweep_goal_times(planner, route, template, goals)
        .into_iter()
        .filter(SweepPoint::is_feasible)
        .map(|point| point.goal_minutes)
        .min_by(f64::total_cmp)
}

/// Goal times from `first` to `last` inclusive in steps of `step` minutes
///
/// Empty when the bounds are unusable or the grid would exceed
/// `MAX_GRID_POINTS` entries.
#[must_use]
pub fn goal_grid(first: f64, last: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !first.is_finite() || !last.is_finite() || last < first {
        return Vec::new();
    }
    let span = ((last - first) / step).floor();
    if !span.is_finite() || span >= MAX_GRID_POINTS as f64 {
        debug!(first, last, step, "Goal grid too large");
        return Vec::new();
    }
    let count = span as usize;
    (0..=count).map(|i| (i as f64).mul_add(step, first)).collect()
}
