// ABOUTME: Domain model module wiring for profiles, foods, targets, and rules
// ABOUTME: Re-exports the public record types used across the nutriplan workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food catalog records and nutrient maps
pub mod food;
/// Nutrition targets, macro totals, and meal slots
pub mod nutrition;
/// User profile and its enumerations
pub mod profile;
/// Diet, medical-condition, and allergy rule records
pub mod rules;

pub use food::{FoodItem, NutrientMap};
pub use nutrition::{
    MacroNutrient, MacroTargets, MacroTotals, MealType, MicroTargets, NutrientSummary,
    NutritionTargets,
};
pub use profile::{ActivityLevel, DietType, FoodPreferences, Gender, UserProfile, WeightGoal};
pub use rules::{
    AllergyRules, AlternativeFood, Constraint, ConstraintKind, DietRules, MedicalAdvice,
    MedicalRules, RuleSet, ServingRecommendation,
};
