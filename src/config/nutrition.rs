// ABOUTME: Nutrition formula configuration for BMR, TDEE, calorie goals, and macro splits
// ABOUTME: Defaults reproduce the Mifflin-St Jeor coefficients and fixed diet percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Lowest daily calorie target the calculator may produce; overrides may only raise it
pub const MIN_CALORIE_FLOOR: f64 = 1200.0;

/// Nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie floor and weight-goal adjustments
    pub calorie_goals: CalorieGoalConfig,
    /// Protein/carb/fat percentage splits per diet family
    pub macro_splits: MacroSplitsConfig,
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female and other constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard daily exercise): 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

/// Daily calorie target adjustments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieGoalConfig {
    /// Minimum daily calorie target (kcal), always enforced
    pub calorie_floor: f64,
    /// Adjustment for a weight loss goal (kcal)
    pub lose_adjustment: f64,
    /// Adjustment for a weight gain goal (kcal)
    pub gain_adjustment: f64,
}

impl Default for CalorieGoalConfig {
    fn default() -> Self {
        Self {
            calorie_floor: MIN_CALORIE_FLOOR,
            lose_adjustment: -500.0,
            gain_adjustment: 500.0,
        }
    }
}

/// Macro percentages (protein%, carbs%, fat%) of daily calories
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.protein_pct
            .saturating_add(self.carbs_pct)
            .saturating_add(self.fat_pct)
    }
}

/// Macro splits per diet family
///
/// Paleo, Mediterranean and unrecognized diets share the balanced split;
/// vegan and vegetarian share the plant-based split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// Balanced: 30/45/25
    pub balanced: MacroDistribution,
    /// Keto: 25/5/70
    pub keto: MacroDistribution,
    /// Low carb: 35/20/45
    pub low_carb: MacroDistribution,
    /// High protein: 40/40/20
    pub high_protein: MacroDistribution,
    /// Vegan and vegetarian: 25/55/20
    pub plant_based: MacroDistribution,
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            balanced: MacroDistribution::new(30, 45, 25),
            keto: MacroDistribution::new(25, 5, 70),
            low_carb: MacroDistribution::new(35, 20, 45),
            high_protein: MacroDistribution::new(40, 40, 20),
            plant_based: MacroDistribution::new(25, 55, 20),
        }
    }
}

impl MacroSplitsConfig {
    /// Validate that every split sums to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first split whose
    /// percentages do not sum to exactly 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("balanced", &self.balanced),
            ("keto", &self.keto),
            ("low_carb", &self.low_carb),
            ("high_protein", &self.high_protein),
            ("plant_based", &self.plant_based),
        ];

        for (name, split) in splits {
            let sum = split.total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} macro percentages must sum to 100, got {sum}"
                )));
            }
        }

        Ok(())
    }
}

impl NutritionConfig {
    /// Validate formula constants
    ///
    /// # Errors
    ///
    /// Returns an error if BMR coefficients are not positive, activity factors
    /// are outside 1.0-2.5 or not ascending, the calorie floor is below 1200 kcal,
    /// goal adjustments point the wrong way, or a macro split does not sum to 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &self.calorie_goals;
        if goals.calorie_floor < MIN_CALORIE_FLOOR {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie floor must be at least 1200 kcal",
            ));
        }
        if goals.lose_adjustment > 0.0 || goals.gain_adjustment < 0.0 {
            return Err(ConfigError::InvalidRange(
                "Weight loss adjustment must be <= 0 and gain adjustment >= 0",
            ));
        }

        self.macro_splits.validate()
    }
}
