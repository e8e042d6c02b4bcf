// ABOUTME: Planner configuration with environment overrides and validation
// ABOUTME: Aggregates effort, fatigue, energy, segmentation, and default settings behind a global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! Defaults are compiled in, then overridden from `ENDUROSYNC_*` environment
//! variables, then validated. [`PlannerConfig::global`] loads once per process
//! and falls back to the defaults if loading fails.

/// Configuration error types
pub mod error;

/// Effort, segmentation, and default settings
pub mod effort;

/// MET table for energy estimation
pub mod energy;

/// Fatigue factor table
pub mod fatigue;

pub use effort::{EffortConfig, PlanningDefaults, SegmentationConfig};
pub use energy::{MetBreakpoint, MetTable};
pub use error::ConfigError;
pub use fatigue::FatigueTable;

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding the climb coefficient
pub const ENV_CLIMB_KM_PER_1000M: &str = "ENDUROSYNC_CLIMB_KM_PER_1000M";
/// Environment variable holding a comma-separated fatigue table
pub const ENV_FATIGUE_FACTORS: &str = "ENDUROSYNC_FATIGUE_FACTORS";
/// Environment variable overriding the default safety buffer
pub const ENV_SAFETY_BUFFER_MINUTES: &str = "ENDUROSYNC_SAFETY_BUFFER_MINUTES";
/// Environment variable overriding the checkpoint tolerance
pub const ENV_CHECKPOINT_TOLERANCE_KM: &str = "ENDUROSYNC_CHECKPOINT_TOLERANCE_KM";

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Terrain effort scoring
    pub effort: EffortConfig,
    /// Fatigue multipliers by section index
    pub fatigue: FatigueTable,
    /// Pace to MET lookup
    pub energy: MetTable,
    /// Route segmentation
    pub segmentation: SegmentationConfig,
    /// Request defaults
    pub defaults: PlanningDefaults,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Fatigue and MET tables validate themselves on construction.
    ///
    /// # Errors
    ///
    /// Returns an error if a scalar setting is negative or non-finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let climb = self.effort.climb_km_per_1000m;
        if !climb.is_finite() || climb < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "climb_km_per_1000m must be a non-negative number",
            ));
        }

        let buffer = self.defaults.safety_buffer_minutes;
        if !buffer.is_finite() || buffer < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "safety_buffer_minutes must be a non-negative number",
            ));
        }

        let tolerance = self.segmentation.checkpoint_tolerance_km;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidRange(
                "checkpoint_tolerance_km must be >= 0",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            ENV_CLIMB_KM_PER_1000M,
            &mut self.effort.climb_km_per_1000m,
        )?;
        Self::apply_env_var(
            ENV_SAFETY_BUFFER_MINUTES,
            &mut self.defaults.safety_buffer_minutes,
        )?;
        Self::apply_env_var(
            ENV_CHECKPOINT_TOLERANCE_KM,
            &mut self.segmentation.checkpoint_tolerance_km,
        )?;

        if let Ok(list) = env::var(ENV_FATIGUE_FACTORS) {
            let factors = list
                .split(',')
                .map(|item| item.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| ConfigError::Parse(format!("Invalid {ENV_FATIGUE_FACTORS}")))?;
            self.fatigue = FatigueTable::new(factors)?;
        }

        Ok(self)
    }
}
