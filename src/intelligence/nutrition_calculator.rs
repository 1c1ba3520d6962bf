// ABOUTME: Nutrition target calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, TDEE, calorie target, macro grams, and micronutrient reference intakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Pure functions from a profile to its daily targets. Inputs are not
//! validated here: callers that accept outside profiles should run
//! `UserProfile::validate` first.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Institute of Medicine. Dietary Reference Intakes (DRI) tables for vitamins and elements.

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CalorieGoalConfig, MacroDistribution, MacroSplitsConfig,
    NutritionConfig,
};
use crate::constants::energy::{
    FIBER_G_PER_1000_KCAL, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::models::{
    ActivityLevel, DietType, Gender, MacroTargets, MicroTargets, NutrientMap, NutritionTargets,
    UserProfile, WeightGoal,
};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women and other: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    config: &BmrConfig,
) -> f64 {
    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg
        + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age)
        + gender_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };

    bmr * activity_factor
}

/// Daily calorie target: TDEE plus the weight-goal adjustment, never below the floor
#[must_use]
pub fn calculate_calorie_target(tdee: f64, weight_goal: WeightGoal, config: &CalorieGoalConfig) -> f64 {
    let adjustment = match weight_goal {
        WeightGoal::Lose => config.lose_adjustment,
        WeightGoal::Maintain => 0.0,
        WeightGoal::Gain => config.gain_adjustment,
    };

    (tdee + adjustment).max(config.calorie_floor)
}

/// Macro percentage split for a diet type
#[must_use]
pub const fn macro_distribution_for(
    diet_type: DietType,
    config: &MacroSplitsConfig,
) -> MacroDistribution {
    match diet_type {
        DietType::Keto => config.keto,
        DietType::LowCarb => config.low_carb,
        DietType::HighProtein => config.high_protein,
        DietType::Vegan | DietType::Vegetarian => config.plant_based,
        DietType::Balanced | DietType::Mediterranean | DietType::Paleo => config.balanced,
    }
}

/// Grams of a macro providing `pct` percent of `calories`, rounded up
fn macro_grams(calories: f64, pct: u8, kcal_per_gram: f64) -> f64 {
    // Integer percent keeps exact products exact before the ceiling
    (calories * f64::from(pct) / (100.0 * kcal_per_gram)).ceil()
}

/// Macro gram targets for a calorie target and diet type
///
/// Protein and carbs use 4 kcal/g, fat 9 kcal/g; fiber is 14 g per 1000 kcal.
/// Every value is rounded up to a whole gram.
#[must_use]
pub fn calculate_macro_targets(
    calorie_target: f64,
    diet_type: DietType,
    config: &MacroSplitsConfig,
) -> MacroTargets {
    let split = macro_distribution_for(diet_type, config);

    MacroTargets {
        protein: macro_grams(calorie_target, split.protein_pct, KCAL_PER_G_PROTEIN),
        carbs: macro_grams(calorie_target, split.carbs_pct, KCAL_PER_G_CARBS),
        fat: macro_grams(calorie_target, split.fat_pct, KCAL_PER_G_FAT),
        fiber: (FIBER_G_PER_1000_KCAL * calorie_target / 1000.0).ceil(),
    }
}

/// Daily vitamin and mineral reference intakes
///
/// Gender selects the base column. Over 50, calcium rises to 1200 mg and
/// female iron drops to 8 mg. Pregnancy (female only) sets folate 600 mcg and
/// iron 27 mg; otherwise lactation sets vitamin A 1300 mcg and vitamin C 120 mg.
#[must_use]
pub fn calculate_micronutrient_targets(
    age: u32,
    gender: Gender,
    pregnant: bool,
    lactating: bool,
) -> MicroTargets {
    let male = gender == Gender::Male;
    let by_gender = |male_value: f64, other_value: f64| {
        if male {
            male_value
        } else {
            other_value
        }
    };

    let mut vitamins: NutrientMap = [
        ("vitamin_a", by_gender(900.0, 700.0)), // mcg RAE
        ("vitamin_c", by_gender(90.0, 75.0)),   // mg
        ("vitamin_d", 15.0),                    // mcg
        ("vitamin_e", 15.0),                    // mg
        ("vitamin_k", by_gender(120.0, 90.0)),  // mcg
        ("vitamin_b6", 1.3),                    // mg
        ("vitamin_b12", 2.4),                   // mcg
        ("folate", 400.0),                      // mcg DFE
    ]
    .into_iter()
    .collect();

    let mut minerals: NutrientMap = [
        ("calcium", 1000.0),
        ("iron", by_gender(8.0, 18.0)),
        ("magnesium", by_gender(400.0, 310.0)),
        ("zinc", by_gender(11.0, 8.0)),
        ("potassium", by_gender(3400.0, 2600.0)),
        ("sodium", 1500.0),
    ]
    .into_iter()
    .collect();

    if age > 50 {
        minerals.insert("calcium", 1200.0);
        if gender == Gender::Female {
            minerals.insert("iron", 8.0);
        }
    }

    if gender == Gender::Female && pregnant {
        vitamins.insert("folate", 600.0);
        minerals.insert("iron", 27.0);
    } else if gender == Gender::Female && lactating {
        vitamins.insert("vitamin_a", 1300.0);
        vitamins.insert("vitamin_c", 120.0);
    }

    MicroTargets { vitamins, minerals }
}

/// Full daily target set for a profile
#[must_use]
pub fn calculate_nutrition_targets(profile: &UserProfile, config: &NutritionConfig) -> NutritionTargets {
    let bmr = calculate_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let calories = calculate_calorie_target(tdee, profile.weight_goal, &config.calorie_goals);
    let macros = calculate_macro_targets(calories, profile.diet_type, &config.macro_splits);
    let micros = calculate_micronutrient_targets(
        profile.age,
        profile.gender,
        profile.pregnant,
        profile.lactating,
    );

    NutritionTargets {
        calories,
        protein_g: macros.protein,
        carbs_g: macros.carbs,
        fat_g: macros.fat,
        fiber_g: macros.fiber,
        vitamins: micros.vitamins,
        minerals: micros.minerals,
        bmr,
        tdee,
    }
}
