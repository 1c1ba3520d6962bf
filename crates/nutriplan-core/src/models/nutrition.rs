// ABOUTME: Nutrition target records, macro totals, and meal slot types
// ABOUTME: Field names match the JSON records exchanged with storage and reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::food::NutrientMap;

/// The five nutrients tracked at meal and plan level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MacroNutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
    /// Fiber (g)
    Fiber,
}

impl MacroNutrient {
    /// All tracked nutrients in reporting order
    pub const ALL: [Self; 5] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::Fiber,
    ];

    /// Key used in meal and summary records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::Fiber => "fiber",
        }
    }

    /// Key used in food catalog nutrient maps (`carbs` is stored as `carbohydrates`)
    #[must_use]
    pub const fn catalog_key(&self) -> &'static str {
        match self {
            Self::Carbs => "carbohydrates",
            other => other.as_str(),
        }
    }
}

/// Calories plus the four macro gram totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Fiber (g)
    #[serde(default)]
    pub fiber: f64,
}

impl MacroTotals {
    /// Value for one tracked nutrient
    #[must_use]
    pub const fn get(&self, nutrient: MacroNutrient) -> f64 {
        match nutrient {
            MacroNutrient::Calories => self.calories,
            MacroNutrient::Protein => self.protein,
            MacroNutrient::Carbs => self.carbs,
            MacroNutrient::Fat => self.fat,
            MacroNutrient::Fiber => self.fiber,
        }
    }

    /// Mutable slot for one tracked nutrient
    pub fn get_mut(&mut self, nutrient: MacroNutrient) -> &mut f64 {
        match nutrient {
            MacroNutrient::Calories => &mut self.calories,
            MacroNutrient::Protein => &mut self.protein,
            MacroNutrient::Carbs => &mut self.carbs,
            MacroNutrient::Fat => &mut self.fat,
            MacroNutrient::Fiber => &mut self.fiber,
        }
    }
}

/// Daily macro gram targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g)
    pub fiber: f64,
}

/// Daily vitamin and mineral reference intakes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroTargets {
    /// Vitamins (mg or mcg, by nutrient)
    pub vitamins: NutrientMap,
    /// Minerals (mg)
    pub minerals: NutrientMap,
}

/// Full daily target set derived from a profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Daily calorie target (kcal)
    pub calories: f64,
    /// Protein target (g)
    #[serde(rename = "protein")]
    pub protein_g: f64,
    /// Carbohydrate target (g)
    #[serde(rename = "carbs")]
    pub carbs_g: f64,
    /// Fat target (g)
    #[serde(rename = "fat")]
    pub fat_g: f64,
    /// Fiber target (g)
    #[serde(rename = "fiber")]
    pub fiber_g: f64,
    /// Vitamin targets
    #[serde(default)]
    pub vitamins: NutrientMap,
    /// Mineral targets
    #[serde(default)]
    pub minerals: NutrientMap,
    /// Basal Metabolic Rate (kcal/day)
    #[serde(default)]
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    #[serde(default)]
    pub tdee: f64,
}

impl NutritionTargets {
    /// Calories and macro grams, the shape stored as a plan's daily targets
    #[must_use]
    pub const fn macro_totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.calories,
            protein: self.protein_g,
            carbs: self.carbs_g,
            fat: self.fat_g,
            fiber: self.fiber_g,
        }
    }
}

/// Plan-level nutrient totals, rebuilt from the meals on every change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSummary {
    /// Summed meal macro totals
    #[serde(flatten)]
    pub macros: MacroTotals,
    /// Summed vitamin amounts from food entries
    #[serde(default)]
    pub vitamins: NutrientMap,
    /// Summed mineral amounts from food entries
    #[serde(default)]
    pub minerals: NutrientMap,
}

/// Named meal occasion within a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MealType {
    /// First meal of the day
    Breakfast,
    /// Snack between breakfast and lunch
    MorningSnack,
    /// Midday meal
    Lunch,
    /// Snack between lunch and dinner
    AfternoonSnack,
    /// Evening meal
    Dinner,
    /// Snack after dinner
    EveningSnack,
    /// Any slot name outside the fixed tables
    Other,
}

impl MealType {
    /// Parse meal type from string; unknown names map to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "breakfast" => Self::Breakfast,
            "morning_snack" => Self::MorningSnack,
            "lunch" => Self::Lunch,
            "afternoon_snack" => Self::AfternoonSnack,
            "dinner" => Self::Dinner,
            "evening_snack" => Self::EveningSnack,
            _ => Self::Other,
        }
    }

    /// Record key for this meal type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::MorningSnack => "morning_snack",
            Self::Lunch => "lunch",
            Self::AfternoonSnack => "afternoon_snack",
            Self::Dinner => "dinner",
            Self::EveningSnack => "evening_snack",
            Self::Other => "other",
        }
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}
