// ABOUTME: Fatigue factor lookup table indexed by section position
// ABOUTME: Validates positive, finite, non-decreasing multipliers and resolves per-request overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use endurosync_core::constants::fatigue::DEFAULT_FACTORS;
use endurosync_core::{PlanError, PlanResult};
use serde::{Deserialize, Serialize};

/// Fatigue multipliers by section index
///
/// Sections beyond the end of the table reuse its last factor, so a short table
/// describes any number of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct FatigueTable {
    factors: Vec<f64>,
}

impl FatigueTable {
    /// Build a validated table
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidFatigueProfile` if the table is empty or any factor
    /// is non-finite, non-positive, or smaller than its predecessor
    pub fn new(factors: Vec<f64>) -> PlanResult<Self> {
        if factors.is_empty() {
            return Err(PlanError::invalid_fatigue(
                "fatigue table needs at least one factor",
            ));
        }
        validate_factors(&factors)?;
        Ok(Self { factors })
    }

    /// Table with the same factor for every section
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidFatigueProfile` if the factor is not positive and finite
    pub fn flat(factor: f64) -> PlanResult<Self> {
        Self::new(vec![factor])
    }

    /// Raw factors in section order
    #[must_use]
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }

    /// Factor for a section, repeating the last entry past the end of the table
    #[must_use]
    pub fn factor_for(&self, section_index: usize) -> f64 {
        self.factors
            .get(section_index)
            .or_else(|| self.factors.last())
            .copied()
            .unwrap_or(1.0)
    }

    /// Factors for `section_count` sections with request overrides applied
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidFatigueProfile` if the overridden sequence is no
    /// longer positive, finite and non-decreasing
    pub fn resolve(
        &self,
        section_count: usize,
        overrides: &BTreeMap<usize, f64>,
    ) -> PlanResult<Vec<f64>> {
        let resolved: Vec<f64> = (0..section_count)
            .map(|index| {
                overrides
                    .get(&index)
                    .copied()
                    .unwrap_or_else(|| self.factor_for(index))
            })
            .collect();
        validate_factors(&resolved)?;
        Ok(resolved)
    }
}

fn validate_factors(factors: &[f64]) -> PlanResult<()> {
    let mut previous = 0.0_f64;
    for (index, &factor) in factors.iter().enumerate() {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlanError::invalid_fatigue(format!(
                "factor for section {index} must be positive, got {factor}"
            )));
        }
        if factor < previous {
            return Err(PlanError::invalid_fatigue(format!(
                "factor for section {index} ({factor}) is below the previous section ({previous})"
            )));
        }
        previous = factor;
    }
    Ok(())
}

impl Default for FatigueTable {
    fn default() -> Self {
        Self {
            factors: DEFAULT_FACTORS.to_vec(),
        }
    }
}

impl TryFrom<Vec<f64>> for FatigueTable {
    type Error = PlanError;

    fn try_from(factors: Vec<f64>) -> PlanResult<Self> {
        Self::new(factors)
    }
}

impl From<FatigueTable> for Vec<f64> {
    fn from(table: FatigueTable) -> Self {
        table.factors
    }
}
