// ABOUTME: Error handling re-exports for the nutriplan library crate
// ABOUTME: Keeps `crate::errors::AppError` paths stable while the types live in nutriplan-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types are defined in `nutriplan-core` so the model crate can
//! validate profiles without depending on the planner.

pub use nutriplan_core::errors::{AppError, AppResult, ErrorCode};

use crate::config::ConfigError;

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
