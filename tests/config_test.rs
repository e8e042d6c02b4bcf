// ABOUTME: Integration tests for planner settings and race definition loading
// ABOUTME: Environment overrides, invalid values, and JSON/YAML race files on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::fs;
use std::io::Write;

use endurosync::config::{load_race_config, ConfigError, PlannerConfig, RaceConfig, ENV_RACE_FILE};
use endurosync::errors::AppError;
use endurosync::ErrorCode;
use endurosync_intelligence::config::{
    ENV_CHECKPOINT_TOLERANCE_KM, ENV_CLIMB_KM_PER_1000M, ENV_FATIGUE_FACTORS,
    ENV_SAFETY_BUFFER_MINUTES,
};
use serial_test::serial;
use tempfile::{Builder, NamedTempFile, TempDir};

const PLANNER_VARS: [&str; 4] = [
    ENV_CLIMB_KM_PER_1000M,
    ENV_FATIGUE_FACTORS,
    ENV_SAFETY_BUFFER_MINUTES,
    ENV_CHECKPOINT_TOLERANCE_KM,
];

fn clear_planner_env() {
    for var in PLANNER_VARS {
        env::remove_var(var);
    }
}

const RACE_YAML: &str = r#"
name: Fell Loop
start: "Sat 07:00"
checkpoints:
  - name: Village
    distance_km: 0
    cutoff: 0
  - name: Summit
    distance_km: 18
    cutoff: "Sat 13:00"
  - name: Village finish
    distance_km: 35
    cutoff: "Sat 19:30"
"#;

const RACE_JSON: &str = r#"{
    "name": "Night Traverse",
    "start": "Fri 22:00",
    "checkpoints": [
        {"name": "Trailhead", "distance_km": 0},
        {"name": "Lake", "distance_km": 40, "cutoff": "Sat 08:00"},
        {"name": "Road end", "distance_km": 80, "cutoff": 1320}
    ]
}"#;

fn race_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
#[serial]
fn test_planner_defaults_without_environment() {
    clear_planner_env();
    let config = PlannerConfig::load().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.effort.climb_km_per_1000m, 10.0);
    assert_eq!(config.defaults.safety_buffer_minutes, 60.0);
    assert_eq!(config.segmentation.checkpoint_tolerance_km, 0.0);
    assert_eq!(config.fatigue.factors(), &[1.00, 1.05, 1.10, 1.15, 1.20]);
}

#[test]
#[serial]
fn test_planner_environment_overrides() {
    clear_planner_env();
    env::set_var(ENV_CLIMB_KM_PER_1000M, "8");
    env::set_var(ENV_SAFETY_BUFFER_MINUTES, "45");
    env::set_var(ENV_CHECKPOINT_TOLERANCE_KM, "1.5");
    env::set_var(ENV_FATIGUE_FACTORS, "1.0, 1.1,1.3");

    let config = PlannerConfig::load();
    clear_planner_env();

    let config = config.unwrap();
    assert_eq!(config.effort.climb_km_per_1000m, 8.0);
    assert_eq!(config.defaults.safety_buffer_minutes, 45.0);
    assert_eq!(config.segmentation.checkpoint_tolerance_km, 1.5);
    assert_eq!(config.fatigue.factors(), &[1.0, 1.1, 1.3]);
}

#[test]
#[serial]
fn test_unparseable_environment_value() {
    clear_planner_env();
    env::set_var(ENV_CLIMB_KM_PER_1000M, "steep");
    let result = PlannerConfig::load();
    clear_planner_env();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_out_of_range_environment_values() {
    clear_planner_env();
    env::set_var(ENV_SAFETY_BUFFER_MINUTES, "-5");
    let result = PlannerConfig::load();
    clear_planner_env();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));

    env::set_var(ENV_CHECKPOINT_TOLERANCE_KM, "-0.1");
    let result = PlannerConfig::load();
    clear_planner_env();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_decreasing_fatigue_environment_is_rejected() {
    clear_planner_env();
    env::set_var(ENV_FATIGUE_FACTORS, "1.2,1.0");
    let result = PlannerConfig::load();
    clear_planner_env();
    match result {
        Err(ConfigError::InvalidTable(error)) => {
            assert_eq!(error.code(), ErrorCode::InvalidFatigueProfile);
        }
        other => unreachable!("expected an invalid table, got {other:?}"),
    }
}

#[test]
fn test_yaml_race_file() {
    let file = race_file(".yaml", RACE_YAML);
    let race = RaceConfig::from_file(file.path()).unwrap();
    assert_eq!(race.name, "Fell Loop");
    let table = race.checkpoint_table().unwrap();
    let cutoffs: Vec<Option<f64>> = table
        .checkpoints()
        .iter()
        .map(|c| c.cutoff_minutes)
        .collect();
    assert_eq!(cutoffs, vec![Some(0.0), Some(360.0), Some(750.0)]);
    assert!(table.terminal().is_terminal);
}

#[test]
fn test_json_race_file_crossing_midnight() {
    let file = race_file(".json", RACE_JSON);
    let race = RaceConfig::from_file(file.path()).unwrap();
    let table = race.checkpoint_table().unwrap();
    assert_eq!(table.checkpoints()[0].cutoff_minutes, None);
    assert_eq!(table.checkpoints()[1].cutoff_minutes, Some(600.0));
    assert_eq!(table.final_cutoff_minutes(), Some(1320.0));
}

#[test]
fn test_race_file_errors() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("absent.yaml");
    assert!(matches!(
        RaceConfig::from_file(&missing),
        Err(AppError::Io { .. })
    ));

    let toml = dir.path().join("race.toml");
    fs::write(&toml, "name = 'x'").unwrap();
    assert!(matches!(
        RaceConfig::from_file(&toml),
        Err(AppError::InvalidInput(_))
    ));

    let broken = dir.path().join("race.json");
    fs::write(&broken, "{\"name\": ").unwrap();
    assert!(matches!(
        RaceConfig::from_file(&broken),
        Err(AppError::Config(ConfigError::Format(_)))
    ));
}

#[test]
#[serial]
fn test_race_file_from_environment() {
    let file = race_file(".json", RACE_JSON);
    env::set_var(ENV_RACE_FILE, file.path());
    let from_env = load_race_config(None);
    env::remove_var(ENV_RACE_FILE);
    assert_eq!(from_env.unwrap().name, "Night Traverse");

    // an explicit path wins over the environment
    let yaml = race_file(".yml", RACE_YAML);
    env::set_var(ENV_RACE_FILE, file.path());
    let explicit = load_race_config(Some(yaml.path()));
    env::remove_var(ENV_RACE_FILE);
    assert_eq!(explicit.unwrap().name, "Fell Loop");
}

#[test]
#[serial]
fn test_builtin_race_without_file() {
    env::remove_var(ENV_RACE_FILE);
    let race = load_race_config(None).unwrap();
    assert_eq!(race.name, "NUTS 300");
    assert_eq!(race.checkpoints[4].name, "Äkäslompolo");
}
