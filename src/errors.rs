// ABOUTME: Application-level error type joining planning, configuration, and I/O failures
// ABOUTME: Used by the integration helpers that load races and routes from files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The planning engine reports [`PlanError`]s and the configuration layer
//! reports [`ConfigError`]s. Code that also touches files goes through
//! [`AppError`] so callers handle a single type.

use std::io;
use std::path::{Path, PathBuf};

use endurosync_core::{ErrorCode, PlanError};
use endurosync_intelligence::ConfigError;
use thiserror::Error;

/// Unified error type for the application
#[derive(Debug, Error)]
pub enum AppError {
    /// Planning pipeline rejected its inputs
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Configuration could not be loaded or validated
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input was readable but not usable
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// I/O failure for a specific file
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Stable planning error code, when the failure came from the planner
    #[must_use]
    pub const fn plan_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Plan(error) => Some(error.code()),
            Self::Config(ConfigError::InvalidTable(error)) => Some(error.code()),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_errors_keep_their_code() {
        let error: AppError = PlanError::invalid_goal_time("too slow").into();
        assert_eq!(error.plan_code(), Some(ErrorCode::InvalidGoalTime));
        assert!(error.to_string().contains("too slow"));
    }

    #[test]
    fn test_io_error_names_the_file() {
        let error = AppError::io(
            "/nowhere/race.yaml",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(error.to_string().contains("/nowhere/race.yaml"));
        assert_eq!(error.plan_code(), None);
    }
}
