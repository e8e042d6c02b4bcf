// ABOUTME: Race checkpoints with hard cutoffs and the validated checkpoint table
// ABOUTME: Enforces strictly increasing distances and cutoffs, a zero start, and a terminal finish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::race::SECTION_NAME_SEPARATOR;
use crate::errors::{PlanError, PlanResult};

/// A fixed point on the route with an optional binding cutoff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Display name, e.g. "Hetta"
    pub name: String,
    /// Official distance from the start (km)
    pub distance_km: f64,
    /// Latest permitted arrival in minutes from race start; `None` means no cutoff
    #[serde(default)]
    pub cutoff_minutes: Option<f64>,
    /// Whether this is the finish
    #[serde(default)]
    pub is_terminal: bool,
}

impl Checkpoint {
    /// Intermediate checkpoint with a cutoff
    #[must_use]
    pub fn new(name: impl Into<String>, distance_km: f64, cutoff_minutes: f64) -> Self {
        Self {
            name: name.into(),
            distance_km,
            cutoff_minutes: Some(cutoff_minutes),
            is_terminal: false,
        }
    }

    /// Intermediate checkpoint without a cutoff (water-only station)
    #[must_use]
    pub fn without_cutoff(name: impl Into<String>, distance_km: f64) -> Self {
        Self {
            name: name.into(),
            distance_km,
            cutoff_minutes: None,
            is_terminal: false,
        }
    }

    /// Finish checkpoint with its cutoff
    #[must_use]
    pub fn finish(name: impl Into<String>, distance_km: f64, cutoff_minutes: f64) -> Self {
        Self {
            name: name.into(),
            distance_km,
            cutoff_minutes: Some(cutoff_minutes),
            is_terminal: true,
        }
    }

    /// Cutoff as a comparable deadline, `+inf` when the checkpoint has none
    #[must_use]
    pub fn deadline_minutes(&self) -> f64 {
        self.cutoff_minutes.unwrap_or(f64::INFINITY)
    }
}

/// Ordered, validated list of checkpoints from start to finish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Checkpoint>", into = "Vec<Checkpoint>")]
pub struct CheckpointTable {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointTable {
    /// Validate and wrap an ordered checkpoint list
    ///
    /// # Errors
    ///
    /// Returns `PlanError::RouteCheckpointMismatch` if the list has fewer than two
    /// checkpoints, does not start at 0 km / 0 min, is not strictly increasing in
    /// distance and cutoff, or does not end with exactly one terminal checkpoint.
    pub fn new(checkpoints: Vec<Checkpoint>) -> PlanResult<Self> {
        Self::validate(&checkpoints)?;
        Ok(Self { checkpoints })
    }

    fn validate(checkpoints: &[Checkpoint]) -> PlanResult<()> {
        let (Some(first), Some(last)) = (checkpoints.first(), checkpoints.last()) else {
            return Err(PlanError::checkpoint_mismatch(
                "checkpoint table is empty",
            ));
        };
        if checkpoints.len() < 2 {
            return Err(PlanError::checkpoint_mismatch(
                "at least a start and a finish checkpoint are required",
            ));
        }
        if first.distance_km != 0.0 {
            return Err(PlanError::checkpoint_mismatch(format!(
                "first checkpoint '{}' must be at 0 km, found {} km",
                first.name, first.distance_km
            )));
        }
        if first.cutoff_minutes.is_some_and(|c| c != 0.0) {
            return Err(PlanError::checkpoint_mismatch(format!(
                "first checkpoint '{}' is the race start and must have cutoff 0",
                first.name
            )));
        }
        if !last.is_terminal {
            return Err(PlanError::checkpoint_mismatch(format!(
                "last checkpoint '{}' must be terminal",
                last.name
            )));
        }

        let mut last_cutoff = 0.0_f64;
        for (index, pair) in checkpoints.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.is_terminal {
                return Err(PlanError::checkpoint_mismatch(format!(
                    "checkpoint '{}' is terminal but is followed by '{}'",
                    prev.name, next.name
                )));
            }
            if !next.distance_km.is_finite() || next.distance_km <= prev.distance_km {
                return Err(PlanError::checkpoint_mismatch(format!(
                    "checkpoint {} '{}' at {} km is not beyond '{}' at {} km",
                    index + 1,
                    next.name,
                    next.distance_km,
                    prev.name,
                    prev.distance_km
                )));
            }
            if let Some(cutoff) = next.cutoff_minutes {
                if !cutoff.is_finite() || cutoff <= last_cutoff {
                    return Err(PlanError::checkpoint_mismatch(format!(
                        "cutoff of '{}' ({cutoff} min) must be later than {last_cutoff} min",
                        next.name
                    )));
                }
                last_cutoff = cutoff;
            }
        }
        Ok(())
    }

    /// Checkpoints in route order
    #[must_use]
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Number of sections (consecutive checkpoint pairs)
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.checkpoints.len() - 1
    }

    /// The finish checkpoint
    #[must_use]
    pub fn terminal(&self) -> &Checkpoint {
        // Invariant: validated tables hold at least two checkpoints
        &self.checkpoints[self.checkpoints.len() - 1]
    }

    /// Official race distance (km)
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.terminal().distance_km
    }

    /// Finish cutoff, if the race has one
    #[must_use]
    pub fn final_cutoff_minutes(&self) -> Option<f64> {
        self.terminal().cutoff_minutes
    }

    /// Display name of the section starting at checkpoint `section_index`
    #[must_use]
    pub fn section_name(&self, section_index: usize) -> String {
        match (
            self.checkpoints.get(section_index),
            self.checkpoints.get(section_index + 1),
        ) {
            (Some(start), Some(end)) => {
                format!("{}{SECTION_NAME_SEPARATOR}{}", start.name, end.name)
            }
            _ => format!("section {section_index}"),
        }
    }
}

impl TryFrom<Vec<Checkpoint>> for CheckpointTable {
    type Error = PlanError;

    fn try_from(checkpoints: Vec<Checkpoint>) -> PlanResult<Self> {
        Self::new(checkpoints)
    }
}

impl From<CheckpointTable> for Vec<Checkpoint> {
    fn from(table: CheckpointTable) -> Self {
        table.checkpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn nuts_like() -> Vec<Checkpoint> {
        vec![
            Checkpoint::new("Start", 0.0, 0.0),
            Checkpoint::new("Kalmankaltio", 88.0, 1440.0),
            Checkpoint::new("Hetta", 192.0, 4380.0),
            Checkpoint::new("Pallas", 256.0, 5820.0),
            Checkpoint::finish("Finish", 326.0, 7560.0),
        ]
    }

    #[test]
    fn test_valid_table() {
        let table = CheckpointTable::new(nuts_like()).unwrap();
        assert_eq!(table.section_count(), 4);
        assert_eq!(table.total_distance_km(), 326.0);
        assert_eq!(table.final_cutoff_minutes(), Some(7560.0));
        assert_eq!(table.section_name(1), "Kalmankaltio → Hetta");
    }

    #[test]
    fn test_rejects_non_increasing_distance() {
        let mut checkpoints = nuts_like();
        checkpoints[2].distance_km = 88.0;
        let err = CheckpointTable::new(checkpoints).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RouteCheckpointMismatch);
    }

    #[test]
    fn test_rejects_non_increasing_cutoff() {
        let mut checkpoints = nuts_like();
        checkpoints[3].cutoff_minutes = Some(4000.0);
        assert!(CheckpointTable::new(checkpoints).is_err());
    }

    #[test]
    fn test_missing_cutoff_is_unbounded_and_skipped_in_ordering() {
        let mut checkpoints = nuts_like();
        checkpoints[2] = Checkpoint::without_cutoff("Hetta water", 192.0);
        let table = CheckpointTable::new(checkpoints).unwrap();
        assert!(table.checkpoints()[2].deadline_minutes().is_infinite());
    }

    #[test]
    fn test_requires_zero_start_and_terminal_finish() {
        let mut checkpoints = nuts_like();
        checkpoints[0].distance_km = 1.0;
        assert!(CheckpointTable::new(checkpoints).is_err());

        let mut checkpoints = nuts_like();
        checkpoints[4].is_terminal = false;
        assert!(CheckpointTable::new(checkpoints).is_err());

        let mut checkpoints = nuts_like();
        checkpoints[2].is_terminal = true;
        assert!(CheckpointTable::new(checkpoints).is_err());

        assert!(CheckpointTable::new(vec![Checkpoint::finish("Only", 0.0, 0.0)]).is_err());
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"[
            {"name": "Start", "distance_km": 0.0, "cutoff_minutes": 0.0},
            {"name": "Finish", "distance_km": 50.0, "cutoff_minutes": 600.0, "is_terminal": true}
        ]"#;
        let table: CheckpointTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.section_count(), 1);

        let bad = r#"[{"name": "Finish", "distance_km": 50.0, "is_terminal": true}]"#;
        assert!(serde_json::from_str::<CheckpointTable>(bad).is_err());
    }
}
