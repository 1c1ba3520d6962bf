// ABOUTME: Tests for intake analysis, plan summary reports, and macro calorie splits
// ABOUTME: Checks threshold boundaries, advice ordering, status grading, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::intelligence::{
    analyze_nutrient_intake, macro_distribution, summarize_meal_plan, NutrientStatus,
};
use nutriplan::meal_plan::MealPlan;
use nutriplan::models::{
    FoodItem, MacroNutrient, MacroTotals, MealType, NutrientSummary, NutritionTargets,
};
use uuid::Uuid;

mod common;

fn targets() -> NutritionTargets {
    NutritionTargets {
        calories: 2000.0,
        protein_g: 100.0,
        carbs_g: 250.0,
        fat_g: 70.0,
        fiber_g: 30.0,
        ..NutritionTargets::default()
    }
}

fn summary(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> NutrientSummary {
    NutrientSummary {
        macros: MacroTotals {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        },
        ..NutrientSummary::default()
    }
}

// ============================================================================
// Intake analysis
// ============================================================================

#[test]
fn test_on_target_intake_is_balanced() {
    let analysis = analyze_nutrient_intake(&summary(2000.0, 100.0, 250.0, 70.0, 30.0), &targets());

    assert!(analysis.is_balanced());
    assert!(analysis.recommendations.is_empty());
    assert_eq!(analysis.targets_met.len(), 5);
    assert!((analysis.targets_met[&MacroNutrient::Calories] - 100.0).abs() < 1e-9);
}

#[test]
fn test_threshold_boundaries_are_inclusive() {
    // Exactly 80% and exactly 120% are within the band
    let analysis = analyze_nutrient_intake(&summary(1600.0, 120.0, 250.0, 70.0, 30.0), &targets());
    assert!(analysis.is_balanced());

    let analysis = analyze_nutrient_intake(&summary(1599.0, 121.0, 250.0, 70.0, 30.0), &targets());
    assert_eq!(analysis.deficiencies.len(), 1);
    assert_eq!(analysis.deficiencies[0].nutrient, MacroNutrient::Calories);
    assert_eq!(analysis.excesses.len(), 1);
    assert_eq!(analysis.excesses[0].nutrient, MacroNutrient::Protein);
    assert!((analysis.excesses[0].percentage - 121.0).abs() < 1e-9);
}

#[test]
fn test_recommendations_list_deficiencies_before_excesses() {
    let analysis = analyze_nutrient_intake(&summary(3000.0, 50.0, 250.0, 100.0, 10.0), &targets());

    let deficient: Vec<MacroNutrient> = analysis.deficiencies.iter().map(|g| g.nutrient).collect();
    let excess: Vec<MacroNutrient> = analysis.excesses.iter().map(|g| g.nutrient).collect();
    assert_eq!(deficient, vec![MacroNutrient::Protein, MacroNutrient::Fiber]);
    assert_eq!(excess, vec![MacroNutrient::Calories, MacroNutrient::Fat]);

    assert_eq!(
        analysis.recommendations,
        vec![
            "Add more protein-rich foods like lean meats, fish, eggs, or plant proteins.",
            "Increase fiber intake with more whole grains, legumes, fruits, and vegetables.",
            "Reduce overall food intake to avoid exceeding your calorie target.",
            "Consider reducing high-fat foods, particularly saturated fats.",
        ]
    );
}

#[test]
fn test_excess_protein_has_no_advice() {
    let analysis = analyze_nutrient_intake(&summary(2000.0, 200.0, 250.0, 70.0, 30.0), &targets());
    assert_eq!(analysis.excesses.len(), 1);
    assert!(analysis.recommendations.is_empty());
}

#[test]
fn test_zero_targets_are_skipped() {
    let mut zero_fiber = targets();
    zero_fiber.fiber_g = 0.0;

    let analysis = analyze_nutrient_intake(&summary(2000.0, 100.0, 250.0, 70.0, 0.0), &zero_fiber);
    assert!(!analysis.targets_met.contains_key(&MacroNutrient::Fiber));
    assert!(analysis.is_balanced());
}

// ============================================================================
// Plan summary
// ============================================================================

#[test]
fn test_status_bands() {
    assert_eq!(NutrientStatus::from_percentage(0.0), NutrientStatus::Deficient);
    assert_eq!(NutrientStatus::from_percentage(69.9), NutrientStatus::Deficient);
    assert_eq!(NutrientStatus::from_percentage(70.0), NutrientStatus::BelowTarget);
    assert_eq!(NutrientStatus::from_percentage(90.0), NutrientStatus::OnTarget);
    assert_eq!(NutrientStatus::from_percentage(110.0), NutrientStatus::OnTarget);
    assert_eq!(NutrientStatus::from_percentage(110.5), NutrientStatus::AboveTarget);
    assert_eq!(NutrientStatus::from_percentage(130.0), NutrientStatus::AboveTarget);
    assert_eq!(NutrientStatus::from_percentage(131.0), NutrientStatus::Excess);
}

#[test]
fn test_summarize_meal_plan_rounds_and_grades() {
    let mut plan = MealPlan::new(Uuid::new_v4());
    plan.name = "Test Plan".to_owned();
    let breakfast = plan.add_meal(MealType::Breakfast, 1);
    let lunch = plan.add_meal(MealType::Lunch, 1);
    let snack = plan.add_meal(MealType::Breakfast, 2);
    let food = FoodItem::new("blend", "Blend", "grains")
        .with_nutrient("calories", 333.33)
        .with_nutrient("protein", 10.0)
        .with_nutrient("carbohydrates", 40.0)
        .with_nutrient("fat", 12.0)
        .with_nutrient("fiber", 5.0);
    for meal_id in [breakfast, lunch, snack] {
        plan.add_food_to_meal(meal_id, &food, 1.0).unwrap();
    }

    let report = summarize_meal_plan(&plan, &targets());
    assert_eq!(report.plan_id, plan.plan_id);
    assert_eq!(report.plan_name, "Test Plan");
    assert_eq!(report.total_meals, 3);
    assert_eq!(report.total_foods, 3);
    assert_eq!(report.meal_types, vec![MealType::Breakfast, MealType::Lunch]);

    let calories = &report.nutrient_summary[&MacroNutrient::Calories];
    assert!((calories.actual - 1000.0).abs() < 1e-9);
    assert!((calories.target - 2000.0).abs() < 1e-9);
    assert!((calories.percentage - 50.0).abs() < 1e-9);
    assert_eq!(calories.status, NutrientStatus::Deficient);

    // 30 / 100 protein, 120 / 250 carbs, 36 / 70 fat = 51.43%
    let fat = &report.nutrient_summary[&MacroNutrient::Fat];
    assert!((fat.percentage - 51.4).abs() < 1e-9);
    let fiber = &report.nutrient_summary[&MacroNutrient::Fiber];
    assert!((fiber.percentage - 50.0).abs() < 1e-9);
}

#[test]
fn test_summary_status_uses_unrounded_percentage() {
    let mut plan = MealPlan::new(Uuid::new_v4());
    let meal_id = plan.add_meal(MealType::Dinner, 1);
    // 1799.1 / 2000 = 89.955%, which rounds to 90.0 but grades below target
    let food = FoodItem::new("feast", "Feast", "proteins").with_nutrient("calories", 1799.1);
    plan.add_food_to_meal(meal_id, &food, 1.0).unwrap();

    let report = summarize_meal_plan(&plan, &targets());
    let calories = &report.nutrient_summary[&MacroNutrient::Calories];
    assert!((calories.percentage - 90.0).abs() < 1e-9);
    assert_eq!(calories.status, NutrientStatus::BelowTarget);
}

#[test]
fn test_summary_serializes_status_in_snake_case() {
    let mut plan = MealPlan::new(Uuid::new_v4());
    let meal_id = plan.add_meal(MealType::Lunch, 1);
    let food = FoodItem::new("bowl", "Bowl", "grains").with_nutrient("calories", 2000.0);
    plan.add_food_to_meal(meal_id, &food, 1.0).unwrap();

    let json = serde_json::to_value(summarize_meal_plan(&plan, &targets())).unwrap();
    assert_eq!(json["nutrient_summary"]["calories"]["status"], "on_target");
    assert_eq!(json["nutrient_summary"]["protein"]["status"], "deficient");
}

// ============================================================================
// Macro distribution
// ============================================================================

#[test]
fn test_macro_distribution_shares() {
    let mut plan = MealPlan::new(Uuid::new_v4());
    let meal_id = plan.add_meal(MealType::Lunch, 1);
    let food = FoodItem::new("mix", "Mix", "grains")
        .with_nutrient("calories", 400.0)
        .with_nutrient("protein", 25.0)
        .with_nutrient("carbohydrates", 50.0)
        .with_nutrient("fat", 100.0 / 9.0);
    plan.add_food_to_meal(meal_id, &food, 1.0).unwrap();

    // 100 kcal protein, 200 kcal carbs, 100 kcal fat
    let split = macro_distribution(&plan);
    assert!((split.protein_pct - 25.0).abs() < 1e-9);
    assert!((split.carbs_pct - 50.0).abs() < 1e-9);
    assert!((split.fat_pct - 25.0).abs() < 1e-9);
}

#[test]
fn test_macro_distribution_of_empty_plan_is_zero() {
    let plan = MealPlan::new(Uuid::new_v4());
    let split = macro_distribution(&plan);
    assert!(split.protein_pct.abs() < f64::EPSILON);
    assert!(split.carbs_pct.abs() < f64::EPSILON);
    assert!(split.fat_pct.abs() < f64::EPSILON);
}

#[test]
fn test_generated_plan_summary_covers_all_macros() {
    let generator = common::fixture_generator();
    let profile = common::reference_male_profile();
    let mut rng = <rand_chacha::ChaCha8Rng as rand::SeedableRng>::seed_from_u64(99);
    let plan = generator.generate_meal_plan(&profile, Some(1), &mut rng);

    let targets = nutriplan::intelligence::calculate_nutrition_targets(
        &profile,
        &nutriplan::config::PlannerConfig::default().nutrition,
    );
    let report = summarize_meal_plan(&plan, &targets);
    assert_eq!(report.nutrient_summary.len(), 5);
    assert_eq!(
        report.meal_types,
        vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner]
    );
    assert!(report.completion_percentage > 0.0);
}
