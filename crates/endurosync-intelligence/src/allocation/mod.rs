// ABOUTME: Fatigue-weighted greedy time allocation across race sections
// ABOUTME: A single forward fold that shares moving time by effort and clamps to cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fatigue-Adjusted Allocation
//!
//! Sections are visited in route order. Each takes its share of the remaining
//! moving time in proportion to its fatigued effort among the sections still to
//! come. A share that would arrive later than `cutoff - buffer` is cut to fit,
//! and the unused time flows forward only: earlier sections are never revisited.
//!
//! The pass is a left fold over [`AllocationState`], so every step is a pure
//! `(state, section) -> (state, planned section)` transition.

mod state;

pub use state::{AllocationInput, AllocationState};

use endurosync_core::models::{PlannedSection, RacePlan};
use endurosync_core::{PlanError, PlanResult};

/// Allocate `goal_minutes` across the inputs
///
/// Planned rests are taken out of the goal before sharing, so moving time is
/// `goal - total rest`.
///
/// # Errors
///
/// - `PlanError::InvalidRequest` if there are no sections or the last one is not terminal
/// - `PlanError::InvalidGoalTime` if the rests leave no moving time
/// - `PlanError::InfeasibleAllocation` if any section ends up with a non-positive budget
pub fn allocate(
    inputs: Vec<AllocationInput>,
    goal_minutes: f64,
    safety_buffer_minutes: f64,
) -> PlanResult<RacePlan> {
    if !inputs.last().is_some_and(|input| input.section.is_terminal) {
        return Err(PlanError::invalid_request(
            "allocation needs a route ending at a terminal checkpoint",
        ));
    }

    let total_rest: f64 = inputs
        .iter()
        .filter(|input| !input.section.is_terminal)
        .map(|input| input.rest_minutes)
        .sum();
    let moving_minutes = goal_minutes - total_rest;
    if moving_minutes <= 0.0 {
        return Err(PlanError::invalid_goal_time(format!(
            "goal {goal_minutes} min leaves no moving time after {total_rest} min of rest"
        )));
    }

    let total_effort: f64 = inputs.iter().map(AllocationInput::fatigued_effort).sum();
    let initial = AllocationState::initial(
        goal_minutes,
        safety_buffer_minutes,
        moving_minutes,
        total_effort,
    );

    let section_count = inputs.len();
    let (_, sections) = inputs.into_iter().try_fold(
        (initial, Vec::with_capacity(section_count)),
        |(state, mut planned): (AllocationState, Vec<PlannedSection>), input| {
            let (next, section) = state.step(input)?;
            planned.push(section);
            Ok::<_, PlanError>((next, planned))
        },
    )?;

    Ok(RacePlan {
        goal_minutes,
        safety_buffer_minutes,
        sections,
    })
}
