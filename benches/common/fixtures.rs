// ABOUTME: Benchmark fixtures generating synthetic food catalogs and user profiles
// ABOUTME: Deterministic data so repeated runs measure the same workload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating food catalogs.

use nutriplan::catalog::InMemoryFoodCatalog;
use nutriplan::models::{ActivityLevel, DietType, FoodItem, Gender, UserProfile, WeightGoal};

const CATEGORIES: [&str; 5] = ["fruits", "grains", "dairy", "proteins", "vegetables"];

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// 25 foods, five per category
    Small,
    /// 250 foods, fifty per category
    Medium,
    /// 2500 foods
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 25,
            Self::Medium => 250,
            Self::Large => 2500,
        }
    }
}

/// Generate one food with nutrient values derived from its index
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_food(index: usize) -> FoodItem {
    let category = CATEGORIES[index % CATEGORIES.len()];
    let mut food = FoodItem::new(
        format!("bench_food_{index}"),
        format!("Benchmark Food {index}"),
        category,
    )
    .with_nutrient("calories", 30.0 + ((index * 37) % 400) as f64)
    .with_nutrient("protein", ((index * 7) % 30) as f64)
    .with_nutrient("carbohydrates", ((index * 11) % 60) as f64)
    .with_nutrient("fat", ((index * 5) % 25) as f64)
    .with_nutrient("fiber", ((index * 3) % 8) as f64)
    .with_nutrient("sodium", ((index * 97) % 1800) as f64);

    if category == "proteins" {
        food = food.with_subcategory(if index % 2 == 0 { "animal" } else { "plant_based" });
    }
    if index % 9 == 0 {
        food = food.containing("gluten");
    }
    if index % 4 == 0 {
        food = food.with_glycemic_index("high");
    }
    food
}

/// Generate a catalog of the given size
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> InMemoryFoodCatalog {
    InMemoryFoodCatalog::from_foods((0..size.count()).map(generate_food))
}

/// Moderately active adult on a balanced diet
#[must_use]
pub fn balanced_profile() -> UserProfile {
    let mut profile = UserProfile::new(35, Gender::Female, 68.0, 170.0);
    profile.name = "Bench".to_owned();
    profile.activity_level = ActivityLevel::Moderate;
    profile.weight_goal = WeightGoal::Maintain;
    profile
}

/// Profile that triggers every rule phase
#[must_use]
pub fn constrained_profile() -> UserProfile {
    let mut profile = balanced_profile();
    profile.diet_type = DietType::Vegan;
    profile.medical_conditions = vec!["hypertension".to_owned(), "diabetes".to_owned()];
    profile.allergies = vec!["gluten".to_owned()];
    profile
}
