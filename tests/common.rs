// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a small food catalog, and reference profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_arguments,
    clippy::too_many_lines
)]
//! Shared test utilities for `nutriplan`

use std::sync::{Arc, Once};

use nutriplan::catalog::{InMemoryFoodCatalog, InMemoryRuleStore};
use nutriplan::config::PlannerConfig;
use nutriplan::intelligence::{ConstraintRuleEngine, MealPlanGenerator};
use nutriplan::models::{ActivityLevel, DietType, FoodItem, Gender, UserProfile, WeightGoal};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

fn food(
    id: &str,
    name: &str,
    category: &str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
) -> FoodItem {
    FoodItem::new(id, name, category)
        .with_nutrient("calories", calories)
        .with_nutrient("protein", protein)
        .with_nutrient("carbohydrates", carbs)
        .with_nutrient("fat", fat)
        .with_nutrient("fiber", fiber)
}

/// Foods covering every meal category, with allergen and glycemic tags
pub fn fixture_foods() -> Vec<FoodItem> {
    vec![
        food("apple", "Apple", "fruits", 52.0, 0.3, 14.0, 0.2, 2.4)
            .with_nutrient("vitamin_c", 4.6)
            .with_glycemic_index("low"),
        food("banana", "Banana", "fruits", 89.0, 1.1, 23.0, 0.3, 2.6)
            .with_nutrient("potassium", 358.0)
            .with_glycemic_index("medium"),
        food("strawberries", "Strawberries", "fruits", 32.0, 0.7, 7.7, 0.3, 2.0)
            .with_nutrient("vitamin_c", 58.8),
        food("oats", "Regular Oats", "grains", 389.0, 16.9, 66.0, 6.9, 10.6)
            .with_nutrient("iron", 4.7)
            .containing("gluten"),
        food("white_rice", "White Rice", "grains", 130.0, 2.7, 28.0, 0.3, 0.4)
            .with_glycemic_index("high"),
        food("wheat_bread", "Wheat Bread", "grains", 265.0, 9.0, 49.0, 3.2, 2.7)
            .with_nutrient("sodium", 491.0)
            .containing("gluten"),
        food("greek_yogurt", "Greek Yogurt", "dairy", 59.0, 10.0, 3.6, 0.4, 0.0)
            .with_nutrient("calcium", 110.0)
            .containing("dairy"),
        food("cheddar", "Cheddar Cheese", "dairy", 403.0, 25.0, 1.3, 33.0, 0.0)
            .with_nutrient("calcium", 721.0)
            .with_nutrient("saturated_fat", 19.0)
            .containing("dairy"),
        food("chicken_breast", "Chicken Breast", "proteins", 165.0, 31.0, 0.0, 3.6, 0.0)
            .with_subcategory("meat"),
        food("salmon", "Salmon", "proteins", 208.0, 20.0, 0.0, 13.0, 0.0)
            .with_subcategory("animal")
            .with_nutrient("vitamin_d", 11.0),
        food("tofu", "Tofu", "proteins", 76.0, 8.0, 1.9, 4.8, 0.3)
            .with_subcategory("plant_based")
            .with_nutrient("calcium", 350.0),
        food("peanut_butter", "Peanut Butter", "proteins", 588.0, 25.0, 20.0, 50.0, 6.0)
            .with_subcategory("plant_based")
            .containing("nuts"),
        food("broccoli", "Broccoli", "vegetables", 34.0, 2.8, 7.0, 0.4, 2.6)
            .with_nutrient("vitamin_c", 89.2)
            .with_nutrient("vitamin_k", 101.6),
        food("spinach", "Spinach", "vegetables", 23.0, 2.9, 3.6, 0.4, 2.2)
            .with_nutrient("iron", 2.7)
            .with_nutrient("magnesium", 79.0),
        food("sweet_potato", "Sweet Potato", "vegetables", 86.0, 1.6, 20.0, 0.1, 3.0)
            .with_nutrient("vitamin_a", 709.0),
    ]
}

/// Catalog over [`fixture_foods`]
pub fn fixture_catalog() -> InMemoryFoodCatalog {
    InMemoryFoodCatalog::from_foods(fixture_foods())
}

/// Engine over the built-in rules
pub fn default_rule_engine() -> ConstraintRuleEngine {
    ConstraintRuleEngine::new(Arc::new(InMemoryRuleStore::with_defaults()))
}

/// Generator over the fixture catalog, built-in rules, and default config
pub fn fixture_generator() -> MealPlanGenerator {
    MealPlanGenerator::new(
        Arc::new(fixture_catalog()),
        default_rule_engine(),
        PlannerConfig::default(),
    )
}

/// 30-year-old moderately active man, 80 kg, 180 cm, maintaining weight
pub fn reference_male_profile() -> UserProfile {
    let mut profile = UserProfile::new(30, Gender::Male, 80.0, 180.0);
    profile.name = "Alex".to_owned();
    profile.activity_level = ActivityLevel::Moderate;
    profile.weight_goal = WeightGoal::Maintain;
    profile.diet_type = DietType::Balanced;
    profile
}

/// 45-year-old lightly active woman, 65 kg, 165 cm, losing weight
pub fn reference_female_profile() -> UserProfile {
    let mut profile = UserProfile::new(45, Gender::Female, 65.0, 165.0);
    profile.name = "Sam".to_owned();
    profile.activity_level = ActivityLevel::Light;
    profile.weight_goal = WeightGoal::Lose;
    profile
}
