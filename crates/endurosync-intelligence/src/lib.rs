// ABOUTME: Race pacing engine: route reduction, segmentation, effort scoring, allocation, energy
// ABOUTME: Pure synchronous computations over immutable inputs, configured via PlannerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Endurosync Intelligence
//!
//! Turns a recorded route and a checkpoint table into a time budget per section
//! that reaches a goal finish time without missing any cutoff.
//!
//! Pipeline: [`geodesic`] reduces track points to cumulative distance and climb,
//! [`segmenter`] splits that profile at checkpoints, [`effort`] scores each
//! section, [`allocation`] shares the goal time across sections, and [`energy`]
//! attaches calorie figures. [`planner::RacePlanner`] runs the whole chain.

/// Fatigue-weighted greedy time allocation
pub mod allocation;
/// Planner configuration and environment overrides
pub mod config;
/// Terrain effort scoring
pub mod effort;
/// Calorie estimation from planned pace
pub mod energy;
/// Haversine distance and cumulative route profile
pub mod geodesic;
/// End-to-end planning pipeline
pub mod planner;
/// Checkpoint-bounded section measurement
pub mod segmenter;
/// Multi-goal planning
pub mod sweep;

pub use allocation::{allocate, AllocationInput, AllocationState};
pub use config::{ConfigError, FatigueTable, MetBreakpoint, MetTable, PlannerConfig};
pub use effort::TerrainEffortScorer;
pub use energy::{EnergyEstimate, EnergyEstimator, EnergyReport, SectionEnergy};
pub use geodesic::{haversine_km, reduce_track, ReducedTrack};
pub use planner::{PlanOutcome, PreparedRoute, RacePlanner};
pub use segmenter::segment_route;
pub use sweep::{earliest_feasible_goal, goal_grid, sweep_goal_times, SweepPoint};
