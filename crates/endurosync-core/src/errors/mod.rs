// ABOUTME: Planning error taxonomy for route reduction, segmentation, and allocation
// ABOUTME: Maps every failure to a stable error code so callers can explain why a plan failed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Error Types
//!
//! Every failure of the planning pipeline is a value of [`PlanError`]. Fatal
//! variants abort the pipeline before any partial plan is exposed; the
//! infeasibility variant carries the numbers that caused it so a caller can
//! explain *why* a goal does not fit the cutoffs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes for planning failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Route data (1000-1999)
    #[serde(rename = "MALFORMED_ROUTE")]
    MalformedRoute = 1000,

    // Race configuration (2000-2999)
    #[serde(rename = "ROUTE_CHECKPOINT_MISMATCH")]
    RouteCheckpointMismatch = 2000,
    #[serde(rename = "INVALID_FATIGUE_PROFILE")]
    InvalidFatigueProfile = 2001,
    #[serde(rename = "INVALID_MET_TABLE")]
    InvalidMetTable = 2002,

    // Request validation (3000-3999)
    #[serde(rename = "INVALID_GOAL_TIME")]
    InvalidGoalTime = 3000,
    #[serde(rename = "INVALID_REQUEST")]
    InvalidRequest = 3001,

    // Allocation (4000-4999)
    #[serde(rename = "INFEASIBLE_ALLOCATION")]
    InfeasibleAllocation = 4000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MalformedRoute => "The route has too few points or invalid coordinates",
            Self::RouteCheckpointMismatch => {
                "The checkpoint table is inconsistent with itself or with the route"
            }
            Self::InvalidFatigueProfile => "Fatigue factors must be positive and non-decreasing",
            Self::InvalidMetTable => "MET breakpoints must be ordered and positive",
            Self::InvalidGoalTime => "The goal time is unparseable or outside the race cutoffs",
            Self::InvalidRequest => "The plan request contains an invalid value",
            Self::InfeasibleAllocation => "The goal time cannot be distributed within the cutoffs",
        }
    }

    /// Whether the failure comes from static race configuration rather than the request
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::RouteCheckpointMismatch | Self::InvalidFatigueProfile | Self::InvalidMetTable
        )
    }
}

/// Errors produced by the planning pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Fewer than two points, or a point with non-finite or out-of-range coordinates
    #[error("Malformed route: {reason}")]
    MalformedRoute {
        /// What is wrong with the route
        reason: String,
    },

    /// Checkpoint table is not strictly increasing or extends beyond the route
    #[error("Route/checkpoint mismatch: {reason}")]
    RouteCheckpointMismatch {
        /// Which consistency rule failed
        reason: String,
    },

    /// Goal time unparseable, non-positive, or not below the final cutoff
    #[error("Invalid goal time: {reason}")]
    InvalidGoalTime {
        /// The comparison or parse that failed
        reason: String,
    },

    /// A request field other than the goal time is invalid
    #[error("Invalid request: {reason}")]
    InvalidRequest {
        /// The offending field and value
        reason: String,
    },

    /// Fatigue factors are not positive, finite and non-decreasing
    #[error("Invalid fatigue profile: {reason}")]
    InvalidFatigueProfile {
        /// Which factor broke the rule
        reason: String,
    },

    /// MET breakpoints are unordered or non-positive
    #[error("Invalid MET table: {reason}")]
    InvalidMetTable {
        /// Which breakpoint broke the rule
        reason: String,
    },

    /// A section received a non-positive time budget during allocation
    #[error(
        "Infeasible allocation: {section_name} (section {section_index}) budget is non-positive \
         (tentative {tentative_minutes:.1} min, maximum allowed {}, elapsed at start {elapsed_at_start_minutes:.1} min)",
        .max_allowed_minutes.map_or_else(|| "unbounded".to_owned(), |m| format!("{m:.1} min"))
    )]
    InfeasibleAllocation {
        /// Zero-based index of the failing section
        section_index: usize,
        /// Display name, e.g. "Kalmankaltio → Hetta"
        section_name: String,
        /// Proportional share before clamping
        tentative_minutes: f64,
        /// Deadline-derived ceiling, `None` for the terminal section
        max_allowed_minutes: Option<f64>,
        /// Race time already spent when the section starts
        elapsed_at_start_minutes: f64,
    },
}

impl PlanError {
    /// Stable error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedRoute { .. } => ErrorCode::MalformedRoute,
            Self::RouteCheckpointMismatch { .. } => ErrorCode::RouteCheckpointMismatch,
            Self::InvalidGoalTime { .. } => ErrorCode::InvalidGoalTime,
            Self::InvalidRequest { .. } => ErrorCode::InvalidRequest,
            Self::InvalidFatigueProfile { .. } => ErrorCode::InvalidFatigueProfile,
            Self::InvalidMetTable { .. } => ErrorCode::InvalidMetTable,
            Self::InfeasibleAllocation { .. } => ErrorCode::InfeasibleAllocation,
        }
    }

    /// Create a malformed route error
    #[must_use]
    pub fn malformed_route(reason: impl Into<String>) -> Self {
        Self::MalformedRoute {
            reason: reason.into(),
        }
    }

    /// Create a route/checkpoint mismatch error
    #[must_use]
    pub fn checkpoint_mismatch(reason: impl Into<String>) -> Self {
        Self::RouteCheckpointMismatch {
            reason: reason.into(),
        }
    }

    /// Create an invalid goal time error
    #[must_use]
    pub fn invalid_goal_time(reason: impl Into<String>) -> Self {
        Self::InvalidGoalTime {
            reason: reason.into(),
        }
    }

    /// Create an invalid request error
    #[must_use]
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Create an invalid fatigue profile error
    #[must_use]
    pub fn invalid_fatigue(reason: impl Into<String>) -> Self {
        Self::InvalidFatigueProfile {
            reason: reason.into(),
        }
    }

    /// Create an invalid MET table error
    #[must_use]
    pub fn invalid_met_table(reason: impl Into<String>) -> Self {
        Self::InvalidMetTable {
            reason: reason.into(),
        }
    }
}

/// Result alias used across the planning crates
pub type PlanResult<T> = Result<T, PlanError>;
