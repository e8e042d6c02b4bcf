// ABOUTME: Integration tests for cutoff-aware time allocation
// ABOUTME: NUTS 300 feasibility, goal validation, and forward-only slack propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use endurosync::{ErrorCode, PlanError, RacePlanRequest, RacePlanner, Section};
use endurosync_intelligence::{allocate, AllocationInput, PlannerConfig};

const EPSILON: f64 = 1e-6;

fn planner() -> RacePlanner {
    RacePlanner::with_config(PlannerConfig::default())
}

/// Four flat 10 km sections with an optional deadline at the end of section 1
fn equal_inputs(second_deadline: Option<f64>) -> Vec<AllocationInput> {
    (0..4)
        .map(|index| AllocationInput {
            section: Section {
                index,
                start_name: format!("CP{index}"),
                end_name: format!("CP{}", index + 1),
                start_km: index as f64 * 10.0,
                end_km: (index + 1) as f64 * 10.0,
                distance_km: 10.0,
                elevation_gain_m: 0.0,
                deadline_minutes: if index == 1 { second_deadline } else { None },
                is_terminal: index == 3,
            },
            effort: 10.0,
            fatigue_factor: 1.0,
            rest_minutes: 0.0,
        })
        .collect()
}

#[test]
fn test_nuts300_plan_respects_buffered_cutoffs() {
    let request = RacePlanRequest::new(5760.0).with_safety_buffer(60.0);
    let outcome = planner()
        .plan(&common::flat_track(330.0, 0.5), &common::nuts_table(), &request)
        .unwrap();
    let plan = &outcome.plan;

    assert_eq!(plan.sections.len(), 4);
    for planned in &plan.sections {
        assert!(planned.allocated_minutes > 0.0, "{}", planned.name());
        if !planned.section.is_terminal {
            let cutoff = planned.section.deadline_minutes.unwrap();
            assert!(
                planned.arrival_minutes <= cutoff - 60.0 + EPSILON,
                "{} arrives at {} against cutoff {cutoff}",
                planned.name(),
                planned.arrival_minutes
            );
        }
    }

    let last = plan.sections.last().unwrap();
    assert_eq!(last.arrival_minutes, 5760.0);
    assert!((plan.moving_minutes() - 5760.0).abs() < EPSILON);

    // Kalmankaltio at 88 km is the binding cutoff for a 96 h goal
    assert!(plan.sections[0].clamped);
    assert!((plan.sections[0].arrival_minutes - 1380.0).abs() < EPSILON);
    assert_eq!(plan.clamped_sections().count(), 1);
}

#[test]
fn test_nuts300_with_rests_still_finishes_on_goal() {
    let mut request = RacePlanRequest::new(5760.0).with_safety_buffer(60.0);
    for (checkpoint, minutes) in endurosync::races::nuts300_rest_stops() {
        request = request.with_rest_stop(checkpoint, minutes);
    }
    let plan = planner()
        .plan(&common::nuts_track(), &common::nuts_table(), &request)
        .unwrap()
        .plan;

    assert!((plan.rest_minutes() - 360.0).abs() < EPSILON);
    assert!((plan.moving_minutes() + plan.rest_minutes() - 5760.0).abs() < EPSILON);
    assert_eq!(plan.finish_minutes(), 5760.0);
    for pair in plan.sections.windows(2) {
        assert!((pair[1].arrival_minutes
            - pair[0].departure_minutes
            - pair[1].allocated_minutes)
            .abs()
            < EPSILON);
    }
}

#[test]
fn test_goal_beyond_final_cutoff_is_invalid() {
    let request = RacePlanRequest::new(7600.0).with_safety_buffer(60.0);
    let err = planner()
        .plan(&common::nuts_track(), &common::nuts_table(), &request)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidGoalTime);
}

#[test]
fn test_fast_goal_needs_no_clamping() {
    let request = RacePlanRequest::new(2000.0).with_safety_buffer(60.0);
    let plan = planner()
        .plan(&common::nuts_track(), &common::nuts_table(), &request)
        .unwrap()
        .plan;
    assert_eq!(plan.clamped_sections().count(), 0);
    assert_eq!(plan.finish_minutes(), 2000.0);
}

#[test]
fn test_tight_deadline_only_moves_slack_forward() {
    let open = allocate(equal_inputs(None), 400.0, 0.0).unwrap();
    let tight = allocate(equal_inputs(Some(150.0)), 400.0, 0.0).unwrap();

    let open_minutes: Vec<f64> = open.sections.iter().map(|s| s.allocated_minutes).collect();
    let tight_minutes: Vec<f64> = tight.sections.iter().map(|s| s.allocated_minutes).collect();
    assert!(open_minutes.iter().all(|&m| (m - 100.0).abs() < EPSILON));

    // the section before the constraint is untouched
    assert_eq!(tight_minutes[0], open_minutes[0]);
    assert!(tight.sections[1].clamped);
    assert!((tight_minutes[1] - 50.0).abs() < EPSILON);
    // the cut is shared by the later sections in proportion to effort
    assert!((tight_minutes[2] - 125.0).abs() < EPSILON);
    assert!((tight_minutes[3] - 125.0).abs() < EPSILON);
    assert_eq!(tight.finish_minutes(), 400.0);
}

#[test]
fn test_impossible_deadline_is_reported_at_its_section() {
    let err = allocate(equal_inputs(Some(100.0)), 400.0, 0.0).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InfeasibleAllocation);
    assert!(matches!(
        err,
        PlanError::InfeasibleAllocation { section_index: 1, max_allowed_minutes, .. }
            if max_allowed_minutes == Some(0.0)
    ));

    // the buffer alone can make a deadline unreachable
    let err = allocate(equal_inputs(Some(160.0)), 400.0, 70.0).unwrap_err();
    assert!(matches!(
        err,
        PlanError::InfeasibleAllocation { section_index: 1, .. }
    ));
}
