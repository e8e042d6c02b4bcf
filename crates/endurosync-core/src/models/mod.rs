// ABOUTME: Core data models for race pacing (track, checkpoints, sections, requests, plans)
// ABOUTME: Immutable value types shared by the intelligence crate and integration layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! All models are plain values: the planner builds new ones on every call and
//! never mutates them after returning.

/// Checkpoint and checkpoint table with ordering validation
pub mod checkpoint;
/// Final plan output types
pub mod plan;
/// Caller-supplied plan request
pub mod request;
/// Route sections bounded by consecutive checkpoints
pub mod section;
/// Recorded track points
pub mod track;

pub use checkpoint::{Checkpoint, CheckpointTable};
pub use plan::{PlannedSection, RacePlan};
pub use request::RacePlanRequest;
pub use section::Section;
pub use track::TrackPoint;
