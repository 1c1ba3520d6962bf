// ABOUTME: Planning intelligence: target calculation, constraint rules, and plan generation
// ABOUTME: Re-exports the calculator functions, rule engine, sampler, generator, and analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Decision logic of the planner. Everything here is synchronous and, apart
//! from the injected random source used by the generator, deterministic.

/// Meal plan generation and editing
pub mod meal_planner;
/// Intake analysis and plan summary reports
pub mod nutrient_analysis;
/// BMR, TDEE, calorie, macro, and micronutrient targets
pub mod nutrition_calculator;
/// Diet, medical-condition, and allergy constraint evaluation
pub mod rule_engine;
/// Cumulative-distribution sampling over an injectable RNG
pub mod sampling;

pub use meal_planner::{meal_distribution, suitable_categories, MealAdjustment, MealPlanGenerator};
pub use nutrient_analysis::{
    analyze_nutrient_intake, macro_distribution, summarize_meal_plan, MacroSplit,
    MealPlanSummary, NutrientAnalysis, NutrientGap, NutrientStatus, NutrientSummaryEntry,
};
pub use nutrition_calculator::{
    calculate_bmr, calculate_calorie_target, calculate_macro_targets,
    calculate_micronutrient_targets, calculate_nutrition_targets, calculate_tdee,
    macro_distribution_for,
};
pub use rule_engine::{ConstraintEvaluation, ConstraintRuleEngine, FoodAlternative, Recommendation};
pub use sampling::{choose_uniform, pick_weighted, sample_weighted};
