// ABOUTME: Common benchmark utilities and fixtures for planner benchmarks
// ABOUTME: Shares deterministic route and race generators between Criterion benches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and fixtures.

pub mod fixtures;
