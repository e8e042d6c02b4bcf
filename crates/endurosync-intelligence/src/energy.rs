// ABOUTME: Section calorie estimation from planned pace via the MET table
// ABOUTME: Missing or invalid mass degrades to an unavailable estimate instead of failing the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Estimation
//!
//! kcal/h = MET × carried mass, and a section burns `kcal/h × minutes / 60`.
//! Energy figures are informational only, so a bad mass never blocks a plan.

use endurosync_core::constants::energy::MINUTES_PER_HOUR;
use endurosync_core::models::RacePlan;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::MetTable;

/// Energy figures for one planned section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEnergy {
    /// Section display name
    pub section_name: String,
    /// Planned average pace (min/km)
    pub pace_min_per_km: f64,
    /// MET for that pace
    pub met: f64,
    /// Hourly burn (kcal/h)
    pub calories_per_hour: f64,
    /// Burn over the section's moving time (kcal)
    pub total_calories: f64,
}

/// Energy figures for a whole plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReport {
    /// Runner plus pack mass used for the estimate (kg)
    pub carried_mass_kg: f64,
    /// Per-section figures in route order
    pub sections: Vec<SectionEnergy>,
    /// Sum over all sections (kcal)
    pub total_calories: f64,
}

/// Outcome of energy estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnergyEstimate {
    /// Estimate computed
    Available(EnergyReport),
    /// Estimate skipped; the pacing plan is still valid
    Unavailable {
        /// Why no estimate was produced
        reason: String,
    },
}

impl EnergyEstimate {
    /// The report, if one was produced
    #[must_use]
    pub const fn report(&self) -> Option<&EnergyReport> {
        match self {
            Self::Available(report) => Some(report),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Maps planned paces to calorie figures
#[derive(Debug, Clone)]
pub struct EnergyEstimator<'a> {
    table: &'a MetTable,
}

impl<'a> EnergyEstimator<'a> {
    /// Estimator over a MET table
    #[must_use]
    pub const fn new(table: &'a MetTable) -> Self {
        Self { table }
    }

    /// Estimate calories for every section of a plan
    ///
    /// `pack_mass_kg` is added to the runner mass when present.
    #[must_use]
    pub fn estimate(
        &self,
        plan: &RacePlan,
        runner_mass_kg: Option<f64>,
        pack_mass_kg: Option<f64>,
    ) -> EnergyEstimate {
        let Some(runner_mass) = runner_mass_kg else {
            return EnergyEstimate::Unavailable {
                reason: "no runner mass provided".to_owned(),
            };
        };
        if !runner_mass.is_finite() || runner_mass <= 0.0 {
            warn!(runner_mass_kg = runner_mass, "Skipping energy estimate for invalid runner mass");
            return EnergyEstimate::Unavailable {
                reason: format!("runner mass {runner_mass} kg is not a positive mass"),
            };
        }
        let pack_mass = pack_mass_kg.filter(|kg| kg.is_finite() && *kg > 0.0).unwrap_or(0.0);
        let carried_mass_kg = runner_mass + pack_mass;

        let sections: Vec<SectionEnergy> = plan
            .sections
            .iter()
            .map(|planned| {
                let met = self.table.met_for_pace(planned.pace_min_per_km);
                let calories_per_hour = met * carried_mass_kg;
                SectionEnergy {
                    section_name: planned.name(),
                    pace_min_per_km: planned.pace_min_per_km,
                    met,
                    calories_per_hour,
                    total_calories: calories_per_hour * planned.allocated_minutes / MINUTES_PER_HOUR,
                }
            })
            .collect();
        let total_calories = sections.iter().map(|s| s.total_calories).sum();

        EnergyEstimate::Available(EnergyReport {
            carried_mass_kg,
            sections,
            total_calories,
        })
    }
}
