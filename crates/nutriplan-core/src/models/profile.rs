// ABOUTME: User profile model with demographics, goals, health tags, and diet preferences
// ABOUTME: Enumerations parse leniently so unknown catalog strings fall back to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Gender used by the BMR formula and micronutrient reference table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Gender {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
    /// Other or unspecified; uses the female constants
    #[default]
    Other,
}

impl Gender {
    /// Parse gender from string, defaulting to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Five-level activity scale for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Parse activity level from string; unknown levels are treated as sedentary
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Direction of the weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum WeightGoal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

impl WeightGoal {
    /// Parse weight goal from string, defaulting to `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

impl From<String> for WeightGoal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Dietary pattern selecting the macro split and the diet rule set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum DietType {
    /// Mix of all food groups
    #[default]
    Balanced,
    /// No meat; dairy and eggs allowed
    Vegetarian,
    /// No animal products
    Vegan,
    /// High fat, very low carbohydrate
    Keto,
    /// Reduced carbohydrate
    LowCarb,
    /// Protein-forward split
    HighProtein,
    /// Mediterranean pattern
    Mediterranean,
    /// Paleolithic pattern
    Paleo,
}

impl DietType {
    /// All supported diet types
    pub const ALL: [Self; 8] = [
        Self::Balanced,
        Self::Vegetarian,
        Self::Vegan,
        Self::Keto,
        Self::LowCarb,
        Self::HighProtein,
        Self::Mediterranean,
        Self::Paleo,
    ];

    /// Parse diet type from string; unrecognized diets fall back to balanced
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|diet| diet.as_str() == normalized)
            .unwrap_or_default()
    }

    /// Rule store key for this diet type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
            Self::Mediterranean => "mediterranean",
            Self::Paleo => "paleo",
        }
    }

    /// Human-readable label, e.g. `Low_carb` for plan names
    #[must_use]
    pub fn display_name(&self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

impl From<String> for DietType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Liked and disliked food names
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoodPreferences {
    /// Foods the user enjoys
    #[serde(default)]
    pub liked: Vec<String>,
    /// Foods the user avoids by preference
    #[serde(default)]
    pub disliked: Vec<String>,
}

/// Read-only view of the person a plan is generated for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Owner identifier
    #[serde(default = "Uuid::new_v4")]
    pub user_id: Uuid,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    #[serde(default)]
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    #[serde(default)]
    pub activity_level: ActivityLevel,
    /// Target body weight in kilograms
    #[serde(default)]
    pub target_weight_kg: f64,
    /// Weight goal
    #[serde(default)]
    pub weight_goal: WeightGoal,
    /// Medical condition tags, evaluated in order
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    /// Allergy tags, evaluated in order
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Diet type
    #[serde(default)]
    pub diet_type: DietType,
    /// Liked and disliked foods
    #[serde(default)]
    pub food_preferences: FoodPreferences,
    /// Meals per day (3, 5 or 6)
    #[serde(default = "default_meal_count")]
    pub meal_count: u8,
    /// Pregnancy raises folate and iron targets
    #[serde(default)]
    pub pregnant: bool,
    /// Lactation raises vitamin A and vitamin C targets
    #[serde(default)]
    pub lactating: bool,
}

const fn default_meal_count() -> u8 {
    3
}

/// Meal counts with a dedicated calorie distribution
pub const SUPPORTED_MEAL_COUNTS: [u8; 3] = [3, 5, 6];

impl UserProfile {
    /// Create a profile with the given demographics and default preferences
    #[must_use]
    pub fn new(age: u32, gender: Gender, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            name: String::new(),
            age,
            gender,
            weight_kg,
            height_cm,
            activity_level: ActivityLevel::default(),
            target_weight_kg: weight_kg,
            weight_goal: WeightGoal::default(),
            medical_conditions: Vec::new(),
            allergies: Vec::new(),
            diet_type: DietType::default(),
            food_preferences: FoodPreferences::default(),
            meal_count: default_meal_count(),
            pregnant: false,
            lactating: false,
        }
    }

    /// Body Mass Index, or `None` when height or weight is not positive
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        if self.height_cm > 0.0 && self.weight_kg > 0.0 {
            let height_m = self.height_cm / 100.0;
            Some(self.weight_kg / (height_m * height_m))
        } else {
            None
        }
    }

    /// WHO BMI band for this profile
    #[must_use]
    pub fn bmi_category(&self) -> &'static str {
        match self.bmi() {
            None => "Unknown",
            Some(bmi) if bmi < 18.5 => "Underweight",
            Some(bmi) if bmi < 25.0 => "Normal weight",
            Some(bmi) if bmi < 30.0 => "Overweight",
            Some(_) => "Obese",
        }
    }

    /// Check demographic ranges before handing the profile to the planner
    ///
    /// The calculator itself never validates; this is for callers that accept
    /// profiles from outside.
    ///
    /// # Errors
    ///
    /// Returns an error if age, weight or height is not positive, or the meal
    /// count has no distribution table
    pub fn validate(&self) -> AppResult<()> {
        if self.age == 0 {
            return Err(AppError::out_of_range("Age must be greater than 0"));
        }
        if self.weight_kg <= 0.0 {
            return Err(AppError::out_of_range("Weight must be greater than 0 kg"));
        }
        if self.height_cm <= 0.0 {
            return Err(AppError::out_of_range("Height must be greater than 0 cm"));
        }
        if !SUPPORTED_MEAL_COUNTS.contains(&self.meal_count) {
            return Err(AppError::invalid_input(format!(
                "Meal count must be one of 3, 5 or 6 (got {})",
                self.meal_count
            )));
        }
        Ok(())
    }
}
