// ABOUTME: Main library entry point for the EnduroSync race pacing planner
// ABOUTME: Loads races and routes, runs the planner, and renders race-clock schedules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # EnduroSync
//!
//! Checkpoint-aware pacing for multi-day point-to-point ultra races. Given a
//! recorded route, the race's checkpoints with their cutoffs, and a goal finish
//! time, EnduroSync gives every section a time budget that reaches the goal
//! without arriving anywhere later than its cutoff minus a safety buffer.
//!
//! ## Architecture
//!
//! - **`endurosync-core`**: errors, constants, data model, race clock
//! - **`endurosync-intelligence`**: reduction, segmentation, effort, allocation, energy
//! - **this crate**: race files, GeoJSON tracks, logging, schedules
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use endurosync::config::load_race_config;
//! use endurosync::errors::AppResult;
//! use endurosync::planning::plan_race;
//! use endurosync::route::load_track;
//! use endurosync::{RacePlanRequest, RacePlanner};
//! use std::path::Path;
//!
//! fn main() -> AppResult<()> {
//!     let race = load_race_config(None)?;
//!     let track = load_track(Path::new("nuts300.geojson"))?;
//!     let request = RacePlanRequest::from_goal_str("96:00")?.with_runner_mass(68.0);
//!     let report = plan_race(&RacePlanner::new(), &race, &track, &request)?;
//!     println!("finish {}", report.schedule.finish);
//!     Ok(())
//! }
//! ```

/// Race definitions and planner configuration
pub mod config;

/// Application error type
pub mod errors;

/// Structured logging setup
pub mod logging;

/// End-to-end planning helper
pub mod planning;

/// Built-in races
pub mod races;

/// GeoJSON route ingestion
pub mod route;

/// Race-clock schedules
pub mod schedule;

pub use endurosync_core::clock::{format_duration, parse_goal_time, RaceClock};
pub use endurosync_core::models::{
    Checkpoint, CheckpointTable, PlannedSection, RacePlan, RacePlanRequest, Section, TrackPoint,
};
pub use endurosync_core::{ErrorCode, PlanError, PlanResult};
pub use endurosync_intelligence::{
    earliest_feasible_goal, sweep_goal_times, EnergyEstimate, PlanOutcome, PreparedRoute,
    RacePlanner, SweepPoint,
};
