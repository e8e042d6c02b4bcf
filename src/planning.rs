// ABOUTME: One-call race planning from a race definition, a track, and a request
// ABOUTME: Bundles the plan, its energy estimate, and the race-clock schedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use endurosync_core::models::{RacePlanRequest, TrackPoint};
use endurosync_intelligence::{PlanOutcome, RacePlanner};
use serde::{Deserialize, Serialize};

use crate::config::RaceConfig;
use crate::errors::AppResult;
use crate::logging::PlanLogger;
use crate::schedule::Schedule;

/// Everything produced for one race and goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePlanReport {
    /// Race name
    pub race: String,
    /// Plan and energy estimate
    pub outcome: PlanOutcome,
    /// Race-clock schedule with calories filled in when available
    pub schedule: Schedule,
}

/// Plan a race end to end
///
/// # Errors
///
/// Returns `AppError::Plan` if the race definition, track, or request cannot
/// produce a feasible plan
pub fn plan_race(
    planner: &RacePlanner,
    race: &RaceConfig,
    track: &[TrackPoint],
    request: &RacePlanRequest,
) -> AppResult<RacePlanReport> {
    let table = race.checkpoint_table()?;
    let outcome = planner
        .plan(track, &table, request)
        .inspect_err(|error| PlanLogger::log_plan_failure(&race.name, request.goal_minutes, error))?;
    PlanLogger::log_plan(&race.name, &outcome.plan, &outcome.energy);

    let schedule = Schedule::from_plan(&outcome.plan, &race.start).with_energy(&outcome.energy);
    Ok(RacePlanReport {
        race: race.name.clone(),
        outcome,
        schedule,
    })
}
