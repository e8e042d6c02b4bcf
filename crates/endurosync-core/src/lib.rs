// ABOUTME: Core types and constants for the EnduroSync race pacing planner
// ABOUTME: Foundation crate with error taxonomy, race clock, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # EnduroSync Core
//!
//! Foundation crate providing shared types and constants for the EnduroSync
//! pacing planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Planning error taxonomy with `PlanError` and stable `ErrorCode`s
//! - **constants**: Geodesy, effort, energy and race constants organized by domain
//! - **models**: Track points, checkpoints, sections and plan requests
//! - **clock**: Goal-time parsing and weekday race-clock conversion

/// Planning error taxonomy with stable error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`TrackPoint`, `Checkpoint`, `Section`, `RacePlanRequest`)
pub mod models;

/// Goal-time parsing and race-clock offsets ("Tue 12:00" relative to the start)
pub mod clock;

pub use errors::{ErrorCode, PlanError, PlanResult};
