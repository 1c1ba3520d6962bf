// ABOUTME: Nutrient key names and energy densities shared by models and algorithms
// ABOUTME: Centralizes the catalog vocabulary so lookups never drift between modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrient vocabulary used by food catalogs and meal plan summaries.

/// Catalog nutrient keys
pub mod nutrient_keys {
    /// Energy per serving (kcal)
    pub const CALORIES: &str = "calories";
    /// Protein per serving (g)
    pub const PROTEIN: &str = "protein";
    /// Carbohydrates per serving (g); meals track this as `carbs`
    pub const CARBOHYDRATES: &str = "carbohydrates";
    /// Fat per serving (g)
    pub const FAT: &str = "fat";
    /// Fiber per serving (g)
    pub const FIBER: &str = "fiber";

    /// Keys already tracked by the meal-level macro totals
    pub const MACRO_KEYS: [&str; 5] = [CALORIES, PROTEIN, CARBOHYDRATES, FAT, FIBER];

    /// Prefixes that classify a nutrient key as a vitamin
    pub const VITAMIN_PREFIXES: [&str; 2] = ["vitamin", "vit_"];

    /// Nutrient keys classified as minerals
    pub const MINERALS: [&str; 6] = ["calcium", "iron", "magnesium", "sodium", "potassium", "zinc"];
}

/// Energy densities (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrates: 4 kcal/g
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal/g
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Fiber recommendation: 14 g per 1000 kcal
    pub const FIBER_G_PER_1000_KCAL: f64 = 14.0;
}
