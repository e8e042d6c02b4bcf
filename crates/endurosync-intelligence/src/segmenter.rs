// ABOUTME: Splits a reduced route into sections bounded by consecutive checkpoints
// ABOUTME: Single forward scan attributing each track step to exactly one section
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Section segmentation
//!
//! Each checkpoint is snapped to the first track point whose cumulative
//! distance reaches the checkpoint distance. A section covers the track steps
//! after its start point up to and including its end point, so the step that
//! crosses a checkpoint belongs to the section it completes.

use endurosync_core::models::{CheckpointTable, Section};
use endurosync_core::{PlanError, PlanResult};
use tracing::debug;

use crate::geodesic::ReducedTrack;

/// Partition a reduced route into one [`Section`] per consecutive checkpoint pair
///
/// `tolerance_km` allows the measured route to fall short of the terminal
/// checkpoint by that much; the last section then ends at the final point.
///
/// # Errors
///
/// Returns `PlanError::RouteCheckpointMismatch` if a checkpoint lies beyond the
/// measured route, or two checkpoints snap to the same track point
pub fn segment_route(
    track: &ReducedTrack,
    table: &CheckpointTable,
    tolerance_km: f64,
) -> PlanResult<Vec<Section>> {
    let cumulative = track.cumulative_km();
    let gains = track.cumulative_gain_m();
    let route_km = track.total_distance_km();
    let required_km = table.total_distance_km();
    if required_km - tolerance_km > route_km {
        return Err(PlanError::checkpoint_mismatch(format!(
            "checkpoints extend to {required_km:.2} km but the route measures {route_km:.2} km"
        )));
    }

    let last_index = track.len().saturating_sub(1);
    let mut cursor = 0_usize;
    let mut boundaries = Vec::with_capacity(table.checkpoints().len());
    for checkpoint in table.checkpoints() {
        while cursor < last_index && cumulative[cursor] < checkpoint.distance_km {
            cursor += 1;
        }
        boundaries.push(cursor);
    }

    let checkpoints = table.checkpoints();
    let mut sections = Vec::with_capacity(table.section_count());
    for (index, bounds) in boundaries.windows(2).enumerate() {
        let [from, to] = *bounds else { continue };
        let start = &checkpoints[index];
        let end = &checkpoints[index + 1];
        if to <= from {
            return Err(PlanError::checkpoint_mismatch(format!(
                "no track between {} and {}; the route is too coarse for these checkpoints",
                start.name, end.name
            )));
        }

        let section = Section {
            index,
            start_name: start.name.clone(),
            end_name: end.name.clone(),
            start_km: start.distance_km,
            end_km: end.distance_km,
            distance_km: cumulative[to] - cumulative[from],
            elevation_gain_m: gains[to] - gains[from],
            deadline_minutes: end.cutoff_minutes,
            is_terminal: end.is_terminal,
        };
        debug!(
            section = %section.name(),
            distance_km = section.distance_km,
            gain_m = section.elevation_gain_m,
            "Measured section"
        );
        sections.push(section);
    }
    Ok(sections)
}
