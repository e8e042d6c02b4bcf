// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Geodesy, effort scoring, energy, race and service constants for the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.
//! Values here are defaults; anything tunable per race is surfaced through
//! `PlannerConfig` in the intelligence crate.

/// Great-circle distance constants
pub mod geodesy {
    /// Mean Earth radius used by the haversine formula (km)
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Valid latitude magnitude (degrees)
    pub const MAX_LATITUDE_DEG: f64 = 90.0;
    /// Valid longitude magnitude (degrees)
    pub const MAX_LONGITUDE_DEG: f64 = 180.0;
    /// Minimum number of points a route needs to have any length
    pub const MIN_ROUTE_POINTS: usize = 2;
}

/// Terrain effort scoring defaults
pub mod effort {
    /// Flat-km equivalent of 1000 m of climbing (100 m of climb ≈ 1 extra km)
    pub const DEFAULT_CLIMB_KM_PER_1000M: f64 = 10.0;
    /// Meters per kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
}

/// Fatigue modelling defaults
pub mod fatigue {
    /// Default per-section fatigue multipliers, last entry repeats for later sections
    pub const DEFAULT_FACTORS: [f64; 5] = [1.00, 1.05, 1.10, 1.15, 1.20];
}

/// Energy expenditure constants
pub mod energy {
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Default MET step table as `(slowest pace in min/km that still qualifies, MET)`.
    ///
    /// Values follow the running and hiking entries of the Compendium of Physical
    /// Activities (Ainsworth et al., 2011), ordered fast to slow.
    pub const DEFAULT_MET_BREAKPOINTS: [(f64, f64); 9] = [
        (4.0, 14.5),
        (4.5, 12.8),
        (5.0, 11.5),
        (5.5, 11.0),
        (6.25, 9.8),
        (7.5, 8.3),
        (9.0, 6.5),
        (12.0, 5.3),
        (15.0, 4.3),
    ];

    /// MET used for paces slower than the last breakpoint (slow hiking, aid-station shuffle)
    pub const DEFAULT_FLOOR_MET: f64 = 3.5;
}

/// Race planning defaults
pub mod race {
    /// Default safety buffer subtracted from every intermediate cutoff (minutes)
    pub const DEFAULT_SAFETY_BUFFER_MINUTES: f64 = 60.0;
    /// Minutes per day
    pub const MINUTES_PER_DAY: i64 = 1440;
    /// Days per week, race clocks wrap within one week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Separator used for section display names
    pub const SECTION_NAME_SEPARATOR: &str = " → ";
}

/// Goal sweep limits
pub mod sweep {
    /// Largest goal grid built in one call
    pub const MAX_GRID_POINTS: usize = 100_000;
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported by the logging layer
    pub const ENDUROSYNC: &str = "endurosync";
}
