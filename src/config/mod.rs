// ABOUTME: Planner configuration combining nutrition formulas and generator tuning
// ABOUTME: Provides environment overrides, validation, and a process-wide default instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Defaults reproduce the fixed constants of the planning algorithms. A few
//! limits can be overridden from the environment:
//!
//! - `NUTRIPLAN_CALORIE_FLOOR` - minimum daily calorie target (kcal)
//! - `NUTRIPLAN_MAX_ATTEMPTS` - fill-loop attempts per meal
//! - `NUTRIPLAN_CATEGORY_REPEAT_LIMIT` - additions before a category is dropped from a meal

/// Configuration error types
pub mod error;
/// Food-fill loop tuning
pub mod generator;
/// BMR, TDEE, calorie goal, and macro split constants
pub mod nutrition;

pub use error::ConfigError;
pub use generator::{GeneratorConfig, MAX_FILL_ATTEMPTS};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, MacroDistribution, MacroSplitsConfig,
    NutritionConfig, MIN_CALORIE_FLOOR,
};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Environment variable overriding the calorie floor
pub const ENV_CALORIE_FLOOR: &str = "NUTRIPLAN_CALORIE_FLOOR";
/// Environment variable overriding the fill-loop attempt cap
pub const ENV_MAX_ATTEMPTS: &str = "NUTRIPLAN_MAX_ATTEMPTS";
/// Environment variable overriding the per-meal category repeat limit
pub const ENV_CATEGORY_REPEAT_LIMIT: &str = "NUTRIPLAN_CATEGORY_REPEAT_LIMIT";

/// Complete planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Nutrition target formulas
    pub nutrition: NutritionConfig,
    /// Meal plan generator tuning
    pub generator: GeneratorConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first nutrition or generator setting that is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.generator.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a set variable does not parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            ENV_CALORIE_FLOOR,
            &mut self.nutrition.calorie_goals.calorie_floor,
        )?;
        Self::apply_env_var(ENV_MAX_ATTEMPTS, &mut self.generator.max_attempts)?;
        Self::apply_env_var(
            ENV_CATEGORY_REPEAT_LIMIT,
            &mut self.generator.category_repeat_limit,
        )?;
        Ok(self)
    }
}
