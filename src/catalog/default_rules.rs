// ABOUTME: Built-in rule set used when no rules document is supplied
// ABOUTME: Five diet types, three medical conditions, and three allergies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use crate::models::{
    AllergyRules, AlternativeFood, Constraint, ConstraintKind, DietRules, MedicalAdvice,
    MedicalRules, RuleSet, ServingRecommendation,
};

/// The built-in rule document
#[must_use]
pub fn default_rule_set() -> RuleSet {
    RuleSet {
        diet_types: default_diet_types(),
        medical_conditions: default_medical_conditions(),
        allergies: default_allergies(),
    }
}

fn servings(category: &str, min: u32, max: u32) -> ServingRecommendation {
    ServingRecommendation::new(category, min, max)
}

fn default_diet_types() -> BTreeMap<String, DietRules> {
    let mut diets = BTreeMap::new();

    diets.insert(
        "balanced".to_owned(),
        DietRules {
            description: "A balanced diet with a healthy mix of all food groups".to_owned(),
            constraints: Vec::new(),
            recommendations: vec![
                servings("fruits", 2, 4),
                servings("vegetables", 3, 5),
                servings("grains", 3, 8),
                servings("proteins", 2, 3),
                servings("dairy", 2, 3),
                servings("fats_oils", 1, 3),
            ],
        },
    );

    diets.insert(
        "vegetarian".to_owned(),
        DietRules {
            description: "Diet excluding meat but includes dairy and eggs".to_owned(),
            constraints: vec![Constraint::restrict_subcategory(
                "proteins",
                "meat",
                "Meat is not allowed in a vegetarian diet",
            )],
            recommendations: vec![
                servings("fruits", 2, 4),
                servings("vegetables", 4, 6),
                servings("grains", 4, 8),
                servings("proteins", 3, 5).with_subcategory("plant_based"),
                servings("dairy", 2, 3),
                servings("fats_oils", 1, 3),
            ],
        },
    );

    diets.insert(
        "vegan".to_owned(),
        DietRules {
            description: "Diet excluding all animal products".to_owned(),
            constraints: vec![
                Constraint::restrict_subcategory(
                    "proteins",
                    "animal",
                    "Animal proteins are not allowed in a vegan diet",
                ),
                Constraint::restrict_category("dairy", "Dairy is not allowed in a vegan diet"),
            ],
            recommendations: vec![
                servings("fruits", 3, 5),
                servings("vegetables", 5, 8),
                servings("grains", 4, 8),
                servings("proteins", 4, 6).with_subcategory("plant_based"),
                servings("fats_oils", 2, 4),
            ],
        },
    );

    diets.insert(
        "keto".to_owned(),
        DietRules {
            description: "High-fat, low-carb diet".to_owned(),
            constraints: vec![carb_limit(
                50.0,
                "Keto diet requires limiting carbs to 50g or less",
            )],
            recommendations: vec![
                servings("fruits", 0, 1).with_note("Choose low-carb berries only"),
                servings("vegetables", 3, 5)
                    .with_note("Focus on leafy greens and low-carb vegetables"),
                servings("grains", 0, 0).with_note("Grains are generally avoided on keto"),
                servings("proteins", 3, 5),
                servings("dairy", 2, 4).with_note("Choose full-fat options"),
                servings("fats_oils", 4, 8),
            ],
        },
    );

    diets.insert(
        "low_carb".to_owned(),
        DietRules {
            description: "Diet with reduced carbohydrate intake".to_owned(),
            constraints: vec![carb_limit(
                100.0,
                "Low-carb diet requires limiting carbs to 100g or less",
            )],
            recommendations: vec![
                servings("fruits", 1, 2),
                servings("vegetables", 4, 6),
                servings("grains", 1, 2).with_note("Choose whole grains only"),
                servings("proteins", 3, 5),
                servings("dairy", 2, 3),
                servings("fats_oils", 2, 5),
            ],
        },
    );

    diets
}

fn carb_limit(grams: f64, message: &str) -> Constraint {
    Constraint::Nutrient {
        value: "carbohydrates".to_owned(),
        constraint: ConstraintKind::Max,
        amount: Some(grams),
        unit: Some("g".to_owned()),
        percentage: None,
        of: None,
        message: Some(message.to_owned()),
    }
}

fn advice(items: &[&str]) -> Vec<MedicalAdvice> {
    items
        .iter()
        .map(|text| MedicalAdvice {
            advice: (*text).to_owned(),
        })
        .collect()
}

fn default_medical_conditions() -> BTreeMap<String, MedicalRules> {
    let mut conditions = BTreeMap::new();

    conditions.insert(
        "diabetes".to_owned(),
        MedicalRules {
            description: "Recommendations for managing diabetes".to_owned(),
            constraints: vec![
                // Lower bounds never exclude a food; kept for reporting
                Constraint::Nutrient {
                    value: "sugars".to_owned(),
                    constraint: ConstraintKind::Min,
                    amount: None,
                    unit: None,
                    percentage: None,
                    of: None,
                    message: Some(
                        "Limit foods with added sugars for diabetes management".to_owned(),
                    ),
                },
                Constraint::restrict_glycemic_index(
                    "high",
                    "Avoid high glycemic index foods for diabetes management",
                ),
            ],
            recommendations: advice(&[
                "Choose complex carbohydrates over simple sugars",
                "Spread carbohydrate intake throughout the day",
                "Include fiber-rich foods to help manage blood sugar",
                "Monitor portion sizes carefully",
            ]),
        },
    );

    conditions.insert(
        "hypertension".to_owned(),
        MedicalRules {
            description: "Recommendations for managing high blood pressure".to_owned(),
            constraints: vec![Constraint::Nutrient {
                value: "sodium".to_owned(),
                constraint: ConstraintKind::Max,
                amount: Some(1500.0),
                unit: Some("mg".to_owned()),
                percentage: None,
                of: None,
                message: Some(
                    "Limit sodium to 1500mg per day for hypertension management".to_owned(),
                ),
            }],
            recommendations: advice(&[
                "Follow the DASH diet approach",
                "Include potassium-rich foods to help counter sodium effects",
                "Limit alcohol consumption",
                "Choose fresh foods over processed foods which tend to be high in sodium",
            ]),
        },
    );

    conditions.insert(
        "high_cholesterol".to_owned(),
        MedicalRules {
            description: "Recommendations for managing high cholesterol".to_owned(),
            // No per-serving amount: any saturated fat exceeds the zero default
            constraints: vec![Constraint::Nutrient {
                value: "saturated_fat".to_owned(),
                constraint: ConstraintKind::Max,
                amount: None,
                unit: None,
                percentage: Some(5.0),
                of: Some("calories".to_owned()),
                message: Some(
                    "Limit saturated fat to less than 5% of daily calories for cholesterol management"
                        .to_owned(),
                ),
            }],
            recommendations: advice(&[
                "Choose lean proteins and low-fat dairy",
                "Increase soluble fiber intake",
                "Include plant sterols/stanols in your diet",
                "Replace saturated fats with unsaturated fats like olive oil and nuts",
            ]),
        },
    );

    conditions
}

fn alternatives(pairs: &[(&str, &str)]) -> Vec<AlternativeFood> {
    pairs
        .iter()
        .map(|(avoid, alternative)| AlternativeFood {
            avoid: (*avoid).to_owned(),
            alternative: (*alternative).to_owned(),
        })
        .collect()
}

fn default_allergies() -> BTreeMap<String, AllergyRules> {
    let mut allergies = BTreeMap::new();

    allergies.insert(
        "gluten".to_owned(),
        AllergyRules {
            description: "Gluten allergy/intolerance".to_owned(),
            constraints: vec![Constraint::restrict_allergen(
                "gluten",
                "Avoid gluten-containing foods",
            )],
            alternative_foods: alternatives(&[
                ("wheat bread", "gluten-free bread"),
                ("wheat pasta", "rice or corn pasta"),
                ("regular oats", "certified gluten-free oats"),
            ]),
        },
    );

    allergies.insert(
        "dairy".to_owned(),
        AllergyRules {
            description: "Dairy allergy/intolerance".to_owned(),
            constraints: vec![Constraint::restrict_allergen(
                "dairy",
                "Avoid dairy-containing foods",
            )],
            alternative_foods: alternatives(&[
                ("cow's milk", "almond milk, soy milk, oat milk"),
                ("cheese", "dairy-free cheese alternatives"),
                ("yogurt", "coconut or soy yogurt"),
            ]),
        },
    );

    allergies.insert(
        "nuts".to_owned(),
        AllergyRules {
            description: "Nut allergies".to_owned(),
            constraints: vec![Constraint::restrict_allergen(
                "nuts",
                "Avoid foods containing nuts",
            )],
            alternative_foods: alternatives(&[
                ("peanut butter", "sunflower seed butter"),
                ("almond flour", "seed-based flours or coconut flour"),
                ("nut milks", "oat milk, rice milk, or hemp milk"),
            ]),
        },
    );

    allergies
}
