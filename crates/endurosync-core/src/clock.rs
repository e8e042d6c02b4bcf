// ABOUTME: Goal-time parsing and weekday race-clock conversion
// ABOUTME: Turns "96:00" into minutes and "Thu 13:00" into an offset from the race start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Race clock utilities
//!
//! Multi-day races publish cutoffs as weekday + wall-clock time ("Thu 13:00")
//! relative to a start such as Monday 12:00. The planner works in minutes from
//! the start, so this module converts in both directions. Offsets wrap within
//! one week.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::race::{DAYS_PER_WEEK, MINUTES_PER_DAY};
use crate::errors::{PlanError, PlanResult};

/// Parse a goal duration such as `"96:00"` or `"95:30:00"` into minutes
///
/// Hours are unbounded; minutes and seconds must be below 60.
///
/// # Errors
///
/// Returns `PlanError::InvalidGoalTime` if the string is not `H:MM` or `H:MM:SS`
pub fn parse_goal_time(input: &str) -> PlanResult<f64> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(PlanError::invalid_goal_time(format!(
            "'{trimmed}' is not in HH:MM or HH:MM:SS form"
        )));
    }

    let mut fields = [0_u32; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(PlanError::invalid_goal_time(format!(
                "'{trimmed}' contains a non-numeric field '{part}'"
            )));
        }
        *slot = part.parse().map_err(|_| {
            PlanError::invalid_goal_time(format!("'{trimmed}' has an out-of-range field '{part}'"))
        })?;
    }

    let [hours, minutes, seconds] = fields;
    if minutes >= 60 || seconds >= 60 {
        return Err(PlanError::invalid_goal_time(format!(
            "'{trimmed}' has minutes or seconds of 60 or more"
        )));
    }
    Ok(f64::from(hours).mul_add(60.0, f64::from(minutes)) + f64::from(seconds) / 60.0)
}

/// Format minutes as `H:MM`, rounded to the nearest minute
#[must_use]
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Race start expressed as weekday and wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RaceClock {
    weekday: Weekday,
    time: NaiveTime,
}

impl RaceClock {
    /// Create a race clock from its start weekday and time
    #[must_use]
    pub const fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }

    /// Start weekday
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Start wall-clock time
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Minutes from the start until a `"Tue 12:00"` style wall-clock moment
    ///
    /// # Errors
    ///
    /// Returns `PlanError::RouteCheckpointMismatch` if the string cannot be read
    /// as a weekday and time
    pub fn offset_minutes(&self, moment: &str) -> PlanResult<f64> {
        let target: Self = moment.parse()?;
        let day_delta = i64::from(target.weekday.num_days_from_monday())
            - i64::from(self.weekday.num_days_from_monday());
        let time_delta = target.time.signed_duration_since(self.time).num_minutes();
        let offset = (day_delta * MINUTES_PER_DAY + time_delta)
            .rem_euclid(DAYS_PER_WEEK * MINUTES_PER_DAY);
        Ok(offset as f64)
    }

    /// Wall-clock moment `minutes` after the start, e.g. `"Thu 13:00"`
    #[must_use]
    pub fn format(&self, minutes: f64) -> String {
        let start_of_day = i64::from(self.time.num_seconds_from_midnight() / 60);
        let total = start_of_day + minutes.round() as i64;
        let days = total.div_euclid(MINUTES_PER_DAY).rem_euclid(DAYS_PER_WEEK);
        let minute_of_day = total.rem_euclid(MINUTES_PER_DAY);
        let weekday = (0..days).fold(self.weekday, |day, _| day.succ());
        format!(
            "{weekday} {:02}:{:02}",
            minute_of_day / 60,
            minute_of_day % 60
        )
    }
}

impl FromStr for RaceClock {
    type Err = PlanError;

    fn from_str(s: &str) -> PlanResult<Self> {
        let unreadable =
            || PlanError::checkpoint_mismatch(format!("cannot read race clock '{s}'"));
        let mut tokens = s.split_whitespace();
        let (Some(day), Some(clock), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(unreadable());
        };
        let weekday = day.parse::<Weekday>().map_err(|_| unreadable())?;
        let time = NaiveTime::parse_from_str(clock, "%H:%M").map_err(|_| unreadable())?;
        Ok(Self { weekday, time })
    }
}

impl fmt::Display for RaceClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.time.format("%H:%M"))
    }
}

impl TryFrom<String> for RaceClock {
    type Error = PlanError;

    fn try_from(value: String) -> PlanResult<Self> {
        value.parse()
    }
}

impl From<RaceClock> for String {
    fn from(clock: RaceClock) -> Self {
        clock.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_goal_time() {
        assert_eq!(parse_goal_time("96:00").unwrap(), 5760.0);
        assert_eq!(parse_goal_time(" 7:05 ").unwrap(), 425.0);
        assert_eq!(parse_goal_time("95:30:30").unwrap(), 5730.5);
    }

    #[test]
    fn test_parse_goal_time_rejects_garbage() {
        for bad in ["", "96", "96:60", "aa:10", "-1:00", "1:2:3:4", "12:5x"] {
            let err = parse_goal_time(bad).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidGoalTime, "input {bad:?}");
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5760.0), "96:00");
        assert_eq!(format_duration(425.4), "7:05");
    }

    #[test]
    fn test_offsets_match_published_cutoffs() {
        let clock: RaceClock = "Mon 12:00".parse().unwrap();
        assert_eq!(clock.offset_minutes("Mon 12:00").unwrap(), 0.0);
        assert_eq!(clock.offset_minutes("Tue 12:00").unwrap(), 1440.0);
        assert_eq!(clock.offset_minutes("Thu 13:00").unwrap(), 4380.0);
        assert_eq!(clock.offset_minutes("Fri 13:00").unwrap(), 5820.0);
        assert_eq!(clock.offset_minutes("Sat 18:00").unwrap(), 7560.0);
    }

    #[test]
    fn test_offsets_wrap_within_week() {
        let clock: RaceClock = "Fri 18:00".parse().unwrap();
        assert_eq!(clock.offset_minutes("Mon 06:00").unwrap(), 2.0 * 1440.0 + 720.0);
        assert_eq!(clock.offset_minutes("Fri 17:00").unwrap(), 7.0 * 1440.0 - 60.0);
    }

    #[test]
    fn test_format_round_trips_offsets() {
        let clock: RaceClock = "Mon 12:00".parse().unwrap();
        assert_eq!(clock.format(4380.0), "Thu 13:00");
        assert_eq!(clock.format(750.0), "Tue 00:30");
        assert_eq!(clock.to_string(), "Mon 12:00");
    }

    #[test]
    fn test_unreadable_clock() {
        assert!("Funday 12:00".parse::<RaceClock>().is_err());
        assert!("Mon".parse::<RaceClock>().is_err());
        assert!("Mon 25:00".parse::<RaceClock>().is_err());
    }
}
