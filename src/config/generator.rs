// ABOUTME: Meal plan generator tuning for the food-fill loop and portion sizing
// ABOUTME: Attempt cap, category weights, repeat limit, and quantity heuristic thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Hard ceiling on fill attempts per meal; overrides may only lower it
pub const MAX_FILL_ATTEMPTS: u32 = 50;

/// Food-fill loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Attempts per meal before accepting an under-filled meal
    pub max_attempts: u32,
    /// Additions after which a category is dropped from a meal's candidates
    pub category_repeat_limit: usize,
    /// Minimum servings when the diet has no recommendation for a category
    pub default_min_servings: u32,
    /// Maximum servings when the diet has no recommendation for a category
    pub default_max_servings: u32,
    /// Sampling weight for a category below its minimum servings
    pub under_min_weight: f64,
    /// Sampling weight for a category within its serving range
    pub in_range_weight: f64,
    /// Foods under this many kcal per serving start at `small_food_quantity`
    pub small_food_kcal: f64,
    /// Starting quantity for low-calorie foods
    pub small_food_quantity: f64,
    /// A portion may overshoot the remaining calories by this factor before shrinking
    pub overshoot_factor: f64,
    /// Smallest quantity a shrunken portion may take
    pub min_quantity: f64,
    /// Share of daily calories used when regenerating a meal of an unlisted type
    pub fallback_meal_pct: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_FILL_ATTEMPTS,
            category_repeat_limit: 2,
            default_min_servings: 1,
            default_max_servings: 3,
            under_min_weight: 5.0,
            in_range_weight: 2.0,
            small_food_kcal: 50.0,
            small_food_quantity: 2.0,
            overshoot_factor: 1.5,
            min_quantity: 0.5,
            fallback_meal_pct: 30.0,
        }
    }
}

impl GeneratorConfig {
    /// Validate generator limits
    ///
    /// # Errors
    ///
    /// Returns an error if the attempt cap is zero or above 50, the repeat limit is zero, default
    /// serving bounds are inverted, or a weight or quantity is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_attempts must be greater than 0",
            ));
        }
        if self.max_attempts > MAX_FILL_ATTEMPTS {
            return Err(ConfigError::ValueOutOfRange(
                "max_attempts must not exceed 50",
            ));
        }
        if self.category_repeat_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "category_repeat_limit must be greater than 0",
            ));
        }
        if self.default_min_servings > self.default_max_servings {
            return Err(ConfigError::InvalidRange(
                "default_min_servings must be <= default_max_servings",
            ));
        }
        if self.under_min_weight <= 0.0 || self.in_range_weight <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Category weights must be positive",
            ));
        }
        if self.min_quantity <= 0.0 || self.small_food_quantity <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Portion quantities must be positive",
            ));
        }
        if self.overshoot_factor < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "overshoot_factor must be at least 1.0",
            ));
        }
        if !(0.0..=100.0).contains(&self.fallback_meal_pct) {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_meal_pct must be between 0 and 100",
            ));
        }
        Ok(())
    }
}
