// ABOUTME: Race definition files: name, start clock, and checkpoints with cutoffs
// ABOUTME: Parses JSON or YAML and resolves wall-clock cutoffs into minutes from the start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use endurosync_core::clock::RaceClock;
use endurosync_core::models::{Checkpoint, CheckpointTable};
use endurosync_core::PlanResult;
use endurosync_intelligence::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// When a checkpoint closes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cutoff {
    /// Minutes after the start
    Minutes(f64),
    /// Race-clock moment such as `"Thu 13:00"`
    Clock(String),
}

/// One checkpoint as written in a race file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointEntry {
    /// Display name
    pub name: String,
    /// Distance from the start along the route (km)
    pub distance_km: f64,
    /// Cutoff, absent for checkpoints without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff: Option<Cutoff>,
}

/// A race: start time and the checkpoints along the route
///
/// The last checkpoint is the finish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Race name
    pub name: String,
    /// Start weekday and time, e.g. `"Mon 12:00"`
    pub start: RaceClock,
    /// Checkpoints in route order, starting at 0 km
    pub checkpoints: Vec<CheckpointEntry>,
}

/// Supported race file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceFileFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl RaceFileFormat {
    /// Format implied by a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl RaceConfig {
    /// Parse a race definition
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Format` if the content does not describe a race
    pub fn parse(content: &str, format: RaceFileFormat) -> Result<Self, ConfigError> {
        match format {
            RaceFileFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::Format(format!("Invalid race JSON: {e}"))),
            RaceFileFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::Format(format!("Invalid race YAML: {e}"))),
        }
    }

    /// Read a race definition from a `.json`, `.yaml` or `.yml` file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension, or
    /// does not parse
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let format = RaceFileFormat::from_path(path).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Race file {} must end in .json, .yaml or .yml",
                path.display()
            ))
        })?;
        let content = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let race = Self::parse(&content, format)?;
        debug!(
            race = %race.name,
            checkpoints = race.checkpoints.len(),
            path = %path.display(),
            "Loaded race definition"
        );
        Ok(race)
    }

    /// Cutoff of one entry in minutes from the start
    ///
    /// # Errors
    ///
    /// Returns `PlanError::RouteCheckpointMismatch` if a clock cutoff cannot be read
    pub fn cutoff_minutes(&self, entry: &CheckpointEntry) -> PlanResult<Option<f64>> {
        match &entry.cutoff {
            None => Ok(None),
            Some(Cutoff::Minutes(minutes)) => Ok(Some(*minutes)),
            Some(Cutoff::Clock(moment)) => self.start.offset_minutes(moment).map(Some),
        }
    }

    /// Validated checkpoint table for the planner
    ///
    /// # Errors
    ///
    /// Returns `PlanError::RouteCheckpointMismatch` if a cutoff cannot be read or the
    /// checkpoints are not a valid table
    pub fn checkpoint_table(&self) -> PlanResult<CheckpointTable> {
        let last = self.checkpoints.len().saturating_sub(1);
        let checkpoints = self
            .checkpoints
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Ok(Checkpoint {
                    name: entry.name.clone(),
                    distance_km: entry.distance_km,
                    cutoff_minutes: self.cutoff_minutes(entry)?,
                    is_terminal: index == last,
                })
            })
            .collect::<PlanResult<Vec<_>>>()?;
        CheckpointTable::new(checkpoints)
    }
}
