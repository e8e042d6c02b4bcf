// ABOUTME: Configuration module for race definitions and planner settings
// ABOUTME: Resolves which race to plan from an explicit path, the environment, or the built-in race
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! - **Race**: checkpoint tables with cutoffs, read from JSON or YAML
//! - **Planner**: algorithm settings, re-exported from the intelligence crate

use std::env;
use std::path::{Path, PathBuf};

use tracing::info;

/// Race definition files
pub mod race;

pub use endurosync_intelligence::config::{
    ConfigError, EffortConfig, FatigueTable, MetBreakpoint, MetTable, PlannerConfig,
    PlanningDefaults, SegmentationConfig,
};
pub use race::{CheckpointEntry, Cutoff, RaceConfig, RaceFileFormat};

use crate::errors::AppResult;
use crate::races;

/// Environment variable naming a race definition file
pub const ENV_RACE_FILE: &str = "ENDUROSYNC_RACE_FILE";

/// Load the race to plan
///
/// Uses `path` when given, otherwise the file named by `ENDUROSYNC_RACE_FILE`,
/// otherwise the built-in NUTS 300 definition.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed
pub fn load_race_config(path: Option<&Path>) -> AppResult<RaceConfig> {
    let chosen: Option<PathBuf> = path
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(ENV_RACE_FILE).map(PathBuf::from));

    match chosen {
        Some(file) => RaceConfig::from_file(&file),
        None => {
            let race = races::nuts300();
            info!(race = %race.name, "No race file configured, using built-in race");
            Ok(race)
        }
    }
}
