// ABOUTME: Constraint rule engine evaluating foods against diet, medical, and allergy rules
// ABOUTME: Also lists serving recommendations, condition advice, and allergen substitutions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constraint Rule Engine
//!
//! A food is checked in three phases: the profile's diet type, then each
//! medical condition, then each allergy, in profile order. Every constraint is
//! evaluated; there is no early exit. When several constraints are violated
//! the reported message is the one evaluated last.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RuleStore;
use crate::models::{Constraint, ConstraintKind, FoodItem, ServingRecommendation, UserProfile};

/// Outcome of evaluating one food for one profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintEvaluation {
    /// False when at least one constraint was violated
    pub allowed: bool,
    /// Message of the last violated constraint
    pub message: Option<String>,
}

impl ConstraintEvaluation {
    /// Evaluation with no violations
    #[must_use]
    pub const fn allowed() -> Self {
        Self {
            allowed: true,
            message: None,
        }
    }

    fn record_violation(&mut self, message: String) {
        self.allowed = false;
        self.message = Some(message);
    }
}

/// Recommendation listing for a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recommendation {
    /// Serving guidance for the profile's diet type
    Diet {
        /// Diet type key
        name: String,
        /// Diet description
        description: String,
        /// Per-category serving recommendations
        servings: Vec<ServingRecommendation>,
    },
    /// Advice for one medical condition
    MedicalCondition {
        /// Condition tag
        name: String,
        /// Condition description
        description: String,
        /// Advice text items
        advice: Vec<String>,
    },
}

/// Substitution suggested because of an allergy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodAlternative {
    /// Phrase matched in the food name
    pub avoid: String,
    /// Suggested replacement
    pub alternative: String,
    /// Why the substitution is suggested
    pub reason: String,
}

/// Evaluates foods against the rules of a `RuleStore`
#[derive(Clone)]
pub struct ConstraintRuleEngine {
    store: Arc<dyn RuleStore>,
}

impl ConstraintRuleEngine {
    /// Create an engine over a rule store
    #[must_use]
    pub fn new(store: Arc<dyn RuleStore>) -> Self {
        Self { store }
    }

    /// Check whether `food` may appear in a plan for `profile`
    #[must_use]
    pub fn evaluate_food_constraints(
        &self,
        food: &FoodItem,
        profile: &UserProfile,
    ) -> ConstraintEvaluation {
        let mut evaluation = ConstraintEvaluation::allowed();
        let diet = profile.diet_type.as_str();

        if let Some(rules) = self.store.diet_rules(diet) {
            for constraint in &rules.constraints {
                if let Some(message) = diet_violation(constraint, food, diet) {
                    evaluation.record_violation(message);
                }
            }
        }

        for condition in &profile.medical_conditions {
            let Some(rules) = self.store.medical_rules(condition) else {
                continue;
            };
            for constraint in &rules.constraints {
                if let Some(message) = medical_violation(constraint, food, condition) {
                    evaluation.record_violation(message);
                }
            }
        }

        for allergy in &profile.allergies {
            let Some(rules) = self.store.allergy_rules(allergy) else {
                continue;
            };
            for constraint in &rules.constraints {
                if let Some(message) = allergy_violation(constraint, food) {
                    evaluation.record_violation(message);
                }
            }
        }

        if !evaluation.allowed {
            debug!(
                food_id = %food.id,
                reason = evaluation.message.as_deref().unwrap_or_default(),
                "Food excluded by constraints"
            );
        }
        evaluation
    }

    /// Diet serving guidance followed by advice for each known medical condition
    #[must_use]
    pub fn get_recommendations(&self, profile: &UserProfile) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();
        let diet = profile.diet_type.as_str();

        if let Some(rules) = self.store.diet_rules(diet) {
            recommendations.push(Recommendation::Diet {
                name: diet.to_owned(),
                description: rules.description.clone(),
                servings: rules.recommendations.clone(),
            });
        }

        for condition in &profile.medical_conditions {
            if let Some(rules) = self.store.medical_rules(condition) {
                recommendations.push(Recommendation::MedicalCondition {
                    name: condition.clone(),
                    description: rules.description.clone(),
                    advice: rules
                        .recommendations
                        .iter()
                        .map(|item| item.advice.clone())
                        .collect(),
                });
            }
        }

        recommendations
    }

    /// Serving recommendations keyed by category
    ///
    /// When a category appears more than once the later entry wins.
    #[must_use]
    pub fn serving_recommendations(
        &self,
        profile: &UserProfile,
    ) -> BTreeMap<String, ServingRecommendation> {
        self.get_recommendations(profile)
            .into_iter()
            .filter_map(|recommendation| match recommendation {
                Recommendation::Diet { servings, .. } => Some(servings),
                Recommendation::MedicalCondition { .. } => None,
            })
            .flatten()
            .map(|serving| (serving.category.clone(), serving))
            .collect()
    }

    /// Substitutions whose `avoid` phrase appears in the food name (case-insensitive)
    #[must_use]
    pub fn get_food_alternatives(
        &self,
        food: &FoodItem,
        profile: &UserProfile,
    ) -> Vec<FoodAlternative> {
        let name = food.name.to_lowercase();
        let mut alternatives = Vec::new();

        for allergy in &profile.allergies {
            let Some(rules) = self.store.allergy_rules(allergy) else {
                continue;
            };
            for candidate in &rules.alternative_foods {
                if name.contains(&candidate.avoid.to_lowercase()) {
                    alternatives.push(FoodAlternative {
                        avoid: candidate.avoid.clone(),
                        alternative: candidate.alternative.clone(),
                        reason: format!("Due to {allergy} allergy"),
                    });
                }
            }
        }

        alternatives
    }
}

/// Message for a violated per-serving nutrient ceiling
///
/// Only foods that carry the nutrient are checked; a missing limit means zero.
fn nutrient_limit_violation(
    constraint: &Constraint,
    food: &FoodItem,
    default_message: impl FnOnce(&str) -> String,
) -> Option<String> {
    let Constraint::Nutrient {
        value,
        constraint: kind,
        amount,
        message,
        ..
    } = constraint
    else {
        return None;
    };

    let nutrient_value = food.nutrients.get(value)?;
    (*kind == ConstraintKind::Max && nutrient_value > amount.unwrap_or(0.0))
        .then(|| message.clone().unwrap_or_else(|| default_message(value)))
}

fn diet_violation(constraint: &Constraint, food: &FoodItem, diet: &str) -> Option<String> {
    match constraint {
        Constraint::Category {
            value,
            subcategory,
            constraint: kind,
            message,
        } if *value == food.category => {
            let restricts = *kind == ConstraintKind::Restrict
                && match (subcategory, &food.subcategory) {
                    (Some(scope), Some(food_subcategory)) => scope == food_subcategory,
                    _ => true,
                };
            restricts.then(|| {
                message
                    .clone()
                    .unwrap_or_else(|| format!("This food is not allowed in a {diet} diet"))
            })
        }
        Constraint::Nutrient { .. } => nutrient_limit_violation(constraint, food, |nutrient| {
            format!("This food exceeds the {nutrient} limit for a {diet} diet")
        }),
        _ => None,
    }
}

fn medical_violation(constraint: &Constraint, food: &FoodItem, condition: &str) -> Option<String> {
    match constraint {
        Constraint::Nutrient { .. } => nutrient_limit_violation(constraint, food, |nutrient| {
            format!("This food exceeds the {nutrient} limit recommended for {condition}")
        }),
        Constraint::GlycemicIndex {
            value,
            constraint: kind,
            message,
        } => {
            let band = food.glycemic_index.as_deref()?;
            (*kind == ConstraintKind::Restrict && value == band).then(|| {
                message.clone().unwrap_or_else(|| {
                    format!(
                        "This food has a high glycemic index, which is not recommended for {condition}"
                    )
                })
            })
        }
        _ => None,
    }
}

fn allergy_violation(constraint: &Constraint, food: &FoodItem) -> Option<String> {
    let Constraint::Contains {
        value,
        constraint: kind,
        message,
    } = constraint
    else {
        return None;
    };

    (*kind == ConstraintKind::Restrict && food.contains.contains(value)).then(|| {
        message
            .clone()
            .unwrap_or_else(|| format!("This food contains {value}, which you are allergic to"))
    })
}
