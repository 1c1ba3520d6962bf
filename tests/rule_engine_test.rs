// ABOUTME: Tests for food constraint evaluation, recommendations, and allergen alternatives
// ABOUTME: Exercises diet, medical-condition, and allergy phases against built-in and custom rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::Arc;

use nutriplan::catalog::InMemoryRuleStore;
use nutriplan::intelligence::{ConstraintRuleEngine, Recommendation};
use nutriplan::models::{DietType, FoodItem, UserProfile};

mod common;

fn fixture(id: &str) -> FoodItem {
    common::fixture_foods()
        .into_iter()
        .find(|food| food.id == id)
        .unwrap()
}

fn profile_with_diet(diet_type: DietType) -> UserProfile {
    let mut profile = common::reference_male_profile();
    profile.diet_type = diet_type;
    profile
}

// ============================================================================
// Diet phase
// ============================================================================

#[test]
fn test_balanced_diet_allows_everything() {
    common::init_test_logging();
    let engine = common::default_rule_engine();
    let profile = profile_with_diet(DietType::Balanced);

    for food in common::fixture_foods() {
        let evaluation = engine.evaluate_food_constraints(&food, &profile);
        assert!(evaluation.allowed, "{} should be allowed", food.id);
        assert!(evaluation.message.is_none());
    }
}

#[test]
fn test_vegetarian_restricts_matching_subcategory_only() {
    let engine = common::default_rule_engine();
    let profile = profile_with_diet(DietType::Vegetarian);

    let chicken = engine.evaluate_food_constraints(&fixture("chicken_breast"), &profile);
    assert!(!chicken.allowed);
    assert_eq!(
        chicken.message.as_deref(),
        Some("Meat is not allowed in a vegetarian diet")
    );

    assert!(engine.evaluate_food_constraints(&fixture("tofu"), &profile).allowed);
    // A different protein subcategory is not covered by the meat restriction
    assert!(engine.evaluate_food_constraints(&fixture("salmon"), &profile).allowed);
    assert!(engine.evaluate_food_constraints(&fixture("cheddar"), &profile).allowed);
}

#[test]
fn test_vegan_restricts_dairy_and_animal_proteins() {
    let engine = common::default_rule_engine();
    let profile = profile_with_diet(DietType::Vegan);

    let salmon = engine.evaluate_food_constraints(&fixture("salmon"), &profile);
    assert!(!salmon.allowed);
    assert_eq!(
        salmon.message.as_deref(),
        Some("Animal proteins are not allowed in a vegan diet")
    );

    let cheddar = engine.evaluate_food_constraints(&fixture("cheddar"), &profile);
    assert!(!cheddar.allowed);
    assert_eq!(
        cheddar.message.as_deref(),
        Some("Dairy is not allowed in a vegan diet")
    );

    assert!(engine.evaluate_food_constraints(&fixture("tofu"), &profile).allowed);
}

#[test]
fn test_subcategory_rule_restricts_whole_category_when_food_has_none() {
    let engine = common::default_rule_engine();
    let profile = profile_with_diet(DietType::Vegan);
    let eggs = FoodItem::new("eggs", "Eggs", "proteins").with_nutrient("calories", 155.0);

    let evaluation = engine.evaluate_food_constraints(&eggs, &profile);
    assert!(!evaluation.allowed);
}

#[test]
fn test_keto_carb_ceiling() {
    let engine = common::default_rule_engine();
    let profile = profile_with_diet(DietType::Keto);

    let oats = engine.evaluate_food_constraints(&fixture("oats"), &profile);
    assert!(!oats.allowed);
    assert_eq!(
        oats.message.as_deref(),
        Some("Keto diet requires limiting carbs to 50g or less")
    );

    assert!(engine.evaluate_food_constraints(&fixture("banana"), &profile).allowed);

    // Foods without the nutrient key are never checked against the ceiling
    let water = FoodItem::new("water", "Water", "beverages");
    assert!(engine.evaluate_food_constraints(&water, &profile).allowed);
}

#[test]
fn test_diet_without_rules_allows_everything() {
    let engine = common::default_rule_engine();
    let profile = profile_with_diet(DietType::Paleo);

    assert!(engine.evaluate_food_constraints(&fixture("oats"), &profile).allowed);
    assert!(engine.get_recommendations(&profile).is_empty());
}

// ============================================================================
// Medical and allergy phases
// ============================================================================

#[test]
fn test_diabetes_restricts_high_glycemic_foods() {
    let engine = common::default_rule_engine();
    let mut profile = common::reference_male_profile();
    profile.medical_conditions = vec!["diabetes".to_owned()];

    let rice = engine.evaluate_food_constraints(&fixture("white_rice"), &profile);
    assert!(!rice.allowed);
    assert_eq!(
        rice.message.as_deref(),
        Some("Avoid high glycemic index foods for diabetes management")
    );

    assert!(engine.evaluate_food_constraints(&fixture("banana"), &profile).allowed);

    // The sugars rule is a lower bound and never excludes a food
    let candy = FoodItem::new("candy", "Candy", "snacks").with_nutrient("sugars", 60.0);
    assert!(engine.evaluate_food_constraints(&candy, &profile).allowed);
}

#[test]
fn test_hypertension_sodium_ceiling() {
    let engine = common::default_rule_engine();
    let mut profile = common::reference_male_profile();
    profile.medical_conditions = vec!["hypertension".to_owned()];

    assert!(engine.evaluate_food_constraints(&fixture("wheat_bread"), &profile).allowed);

    let soy_sauce = FoodItem::new("soy_sauce", "Soy Sauce", "condiments")
        .with_nutrient("sodium", 5493.0);
    let evaluation = engine.evaluate_food_constraints(&soy_sauce, &profile);
    assert!(!evaluation.allowed);
    assert_eq!(
        evaluation.message.as_deref(),
        Some("Limit sodium to 1500mg per day for hypertension management")
    );
}

#[test]
fn test_high_cholesterol_rejects_any_saturated_fat() {
    let engine = common::default_rule_engine();
    let mut profile = common::reference_male_profile();
    profile.medical_conditions = vec!["high_cholesterol".to_owned()];

    assert!(!engine.evaluate_food_constraints(&fixture("cheddar"), &profile).allowed);
    assert!(engine.evaluate_food_constraints(&fixture("tofu"), &profile).allowed);
}

#[test]
fn test_allergy_restricts_tagged_foods() {
    let engine = common::default_rule_engine();
    let mut profile = common::reference_male_profile();
    profile.allergies = vec!["nuts".to_owned(), "gluten".to_owned()];

    let peanut = engine.evaluate_food_constraints(&fixture("peanut_butter"), &profile);
    assert!(!peanut.allowed);
    assert_eq!(peanut.message.as_deref(), Some("Avoid foods containing nuts"));

    assert!(!engine.evaluate_food_constraints(&fixture("oats"), &profile).allowed);
    assert!(engine.evaluate_food_constraints(&fixture("white_rice"), &profile).allowed);
}

#[test]
fn test_unknown_tags_are_ignored() {
    let engine = common::default_rule_engine();
    let mut profile = common::reference_male_profile();
    profile.medical_conditions = vec!["gout".to_owned()];
    profile.allergies = vec!["shellfish".to_owned()];

    for food in common::fixture_foods() {
        assert!(engine.evaluate_food_constraints(&food, &profile).allowed);
    }
}

#[test]
fn test_last_violation_message_wins() {
    let engine = common::default_rule_engine();
    let mut profile = profile_with_diet(DietType::Vegan);
    profile.medical_conditions = vec!["high_cholesterol".to_owned()];
    profile.allergies = vec!["dairy".to_owned()];

    let evaluation = engine.evaluate_food_constraints(&fixture("cheddar"), &profile);
    assert!(!evaluation.allowed);
    assert_eq!(
        evaluation.message.as_deref(),
        Some("Avoid dairy-containing foods")
    );
}

// ============================================================================
// Default messages from a custom rule document
// ============================================================================

const CUSTOM_RULES: &str = r#"{
    "diet_types": {
        "paleo": {
            "description": "Paleo",
            "constraints": [
                {"condition": "category", "value": "grains", "constraint": "restrict"},
                {"condition": "nutrient", "value": "sugars", "constraint": "max", "amount": 10}
            ],
            "recommendations": [
                {"category": "proteins", "min_servings": 3, "max_servings": 6},
                {"category": "proteins", "min_servings": 4, "max_servings": 8}
            ]
        }
    },
    "medical_conditions": {
        "hypertension": {
            "description": "Blood pressure",
            "constraints": [
                {"condition": "nutrient", "value": "sodium", "constraint": "max", "amount": 400},
                {"condition": "glycemic_index", "value": "high", "constraint": "restrict"},
                {"condition": "future_rule", "value": "x"}
            ],
            "recommendations": [{"advice": "Eat fresh food"}]
        }
    },
    "allergies": {
        "soy": {
            "description": "Soy allergy",
            "constraints": [{"condition": "contains", "value": "soy", "constraint": "restrict"}],
            "alternative_foods": [{"avoid": "Soy Milk", "alternative": "oat milk"}]
        }
    }
}"#;

fn custom_engine() -> ConstraintRuleEngine {
    let store = InMemoryRuleStore::from_json_str(CUSTOM_RULES).unwrap();
    ConstraintRuleEngine::new(Arc::new(store))
}

#[test]
fn test_default_messages() {
    let engine = custom_engine();
    let mut profile = profile_with_diet(DietType::Paleo);

    let rice = fixture("white_rice");
    assert_eq!(
        engine.evaluate_food_constraints(&rice, &profile).message.as_deref(),
        Some("This food is not allowed in a paleo diet")
    );

    let juice = FoodItem::new("juice", "Juice", "beverages").with_nutrient("sugars", 24.0);
    assert_eq!(
        engine.evaluate_food_constraints(&juice, &profile).message.as_deref(),
        Some("This food exceeds the sugars limit for a paleo diet")
    );

    profile.medical_conditions = vec!["hypertension".to_owned()];
    assert_eq!(
        engine.evaluate_food_constraints(&fixture("wheat_bread"), &profile).message.as_deref(),
        Some("This food exceeds the sodium limit recommended for hypertension")
    );

    let potato = FoodItem::new("potato", "Baked Potato", "vegetables").with_glycemic_index("high");
    assert_eq!(
        engine.evaluate_food_constraints(&potato, &profile).message.as_deref(),
        Some("This food has a high glycemic index, which is not recommended for hypertension")
    );

    profile.allergies = vec!["soy".to_owned()];
    let edamame = FoodItem::new("edamame", "Edamame", "vegetables").containing("soy");
    assert_eq!(
        engine.evaluate_food_constraints(&edamame, &profile).message.as_deref(),
        Some("This food contains soy, which you are allergic to")
    );
}

// ============================================================================
// Recommendations and alternatives
// ============================================================================

#[test]
fn test_recommendations_diet_then_conditions() {
    let engine = common::default_rule_engine();
    let mut profile = profile_with_diet(DietType::Keto);
    profile.medical_conditions = vec!["diabetes".to_owned(), "unknown".to_owned()];

    let recommendations = engine.get_recommendations(&profile);
    assert_eq!(recommendations.len(), 2);

    match &recommendations[0] {
        Recommendation::Diet { name, servings, .. } => {
            assert_eq!(name, "keto");
            assert_eq!(servings.len(), 6);
        }
        other => panic!("expected diet recommendation, got {other:?}"),
    }
    match &recommendations[1] {
        Recommendation::MedicalCondition { name, advice, .. } => {
            assert_eq!(name, "diabetes");
            assert_eq!(advice.len(), 4);
        }
        other => panic!("expected condition advice, got {other:?}"),
    }

    let json = serde_json::to_value(&recommendations).unwrap();
    assert_eq!(json[0]["type"], "diet");
    assert_eq!(json[1]["type"], "medical_condition");
}

#[test]
fn test_serving_recommendations_later_entry_wins() {
    let engine = custom_engine();
    let profile = profile_with_diet(DietType::Paleo);

    let servings = engine.serving_recommendations(&profile);
    let proteins = servings.get("proteins").unwrap();
    assert_eq!(proteins.min_servings, 4);
    assert_eq!(proteins.max_servings, 8);
}

#[test]
fn test_food_alternatives_case_insensitive() {
    let engine = common::default_rule_engine();
    let mut profile = common::reference_male_profile();
    profile.allergies = vec!["gluten".to_owned(), "dairy".to_owned()];

    let bread = FoodItem::new("bread", "Whole WHEAT BREAD loaf", "grains");
    let alternatives = engine.get_food_alternatives(&bread, &profile);
    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0].avoid, "wheat bread");
    assert_eq!(alternatives[0].alternative, "gluten-free bread");
    assert_eq!(alternatives[0].reason, "Due to gluten allergy");

    let custom = custom_engine();
    profile.allergies = vec!["soy".to_owned()];
    let milk = FoodItem::new("soy_milk", "soy milk", "dairy");
    assert_eq!(custom.get_food_alternatives(&milk, &profile).len(), 1);

    assert!(engine
        .get_food_alternatives(&fixture("apple"), &profile)
        .is_empty());
}
