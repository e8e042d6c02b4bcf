// ABOUTME: Pace-to-MET step table used for section energy estimation
// ABOUTME: Breakpoints are ordered fast to slow; paces past the slowest breakpoint use the floor MET
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Configuration
//!
//! Running MET values come from compendium-style pace bands. The table maps an
//! average pace (min/km) to the MET of the first band whose upper pace bound is
//! not exceeded. Anything slower than the last band is treated as hiking at the
//! floor MET.

use endurosync_core::constants::energy::{DEFAULT_FLOOR_MET, DEFAULT_MET_BREAKPOINTS};
use endurosync_core::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};

/// One pace band of the MET table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetBreakpoint {
    /// Slowest pace (min/km) still inside this band, inclusive
    pub max_pace_min_per_km: f64,
    /// Metabolic equivalent for the band
    pub met: f64,
}

/// Energy estimation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMetTable")]
pub struct MetTable {
    breakpoints: Vec<MetBreakpoint>,
    floor_met: f64,
}

#[derive(Deserialize)]
struct RawMetTable {
    breakpoints: Vec<MetBreakpoint>,
    floor_met: f64,
}

impl MetTable {
    /// Build a validated table
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidMetTable` if the table is empty, pace bounds are not
    /// strictly increasing, a MET is not positive, or METs rise as pace slows
    pub fn new(breakpoints: Vec<MetBreakpoint>, floor_met: f64) -> PlanResult<Self> {
        if breakpoints.is_empty() {
            return Err(PlanError::invalid_met_table("MET table has no pace bands"));
        }
        if !floor_met.is_finite() || floor_met <= 0.0 {
            return Err(PlanError::invalid_met_table(format!(
                "floor MET must be positive, got {floor_met}"
            )));
        }
        let mut previous_pace = 0.0_f64;
        let mut previous_met = f64::INFINITY;
        for band in &breakpoints {
            if !band.max_pace_min_per_km.is_finite() || band.max_pace_min_per_km <= previous_pace {
                return Err(PlanError::invalid_met_table(format!(
                    "pace bound {} min/km must be finite and above {previous_pace}",
                    band.max_pace_min_per_km
                )));
            }
            if !band.met.is_finite() || band.met <= 0.0 {
                return Err(PlanError::invalid_met_table(format!(
                    "MET for pace {} min/km must be positive, got {}",
                    band.max_pace_min_per_km, band.met
                )));
            }
            if band.met > previous_met {
                return Err(PlanError::invalid_met_table(format!(
                    "MET {} at pace {} min/km is above the faster band's {previous_met}",
                    band.met, band.max_pace_min_per_km
                )));
            }
            previous_pace = band.max_pace_min_per_km;
            previous_met = band.met;
        }
        if floor_met > previous_met {
            return Err(PlanError::invalid_met_table(format!(
                "floor MET {floor_met} is above the slowest band's {previous_met}"
            )));
        }
        Ok(Self {
            breakpoints,
            floor_met,
        })
    }

    /// Pace bands, fast to slow
    #[must_use]
    pub fn breakpoints(&self) -> &[MetBreakpoint] {
        &self.breakpoints
    }

    /// MET used beyond the slowest band
    #[must_use]
    pub const fn floor_met(&self) -> f64 {
        self.floor_met
    }

    /// MET for an average pace (min/km)
    #[must_use]
    pub fn met_for_pace(&self, pace_min_per_km: f64) -> f64 {
        self.breakpoints
            .iter()
            .find(|band| pace_min_per_km <= band.max_pace_min_per_km)
            .map_or(self.floor_met, |band| band.met)
    }
}

impl Default for MetTable {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_MET_BREAKPOINTS
                .iter()
                .map(|&(max_pace_min_per_km, met)| MetBreakpoint {
                    max_pace_min_per_km,
                    met,
                })
                .collect(),
            floor_met: DEFAULT_FLOOR_MET,
        }
    }
}

impl TryFrom<RawMetTable> for MetTable {
    type Error = PlanError;

    fn try_from(raw: RawMetTable) -> PlanResult<Self> {
        Self::new(raw.breakpoints, raw.floor_met)
    }
}
