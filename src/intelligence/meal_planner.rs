// ABOUTME: Meal plan generator filling meal slots with constraint-checked, weighted-random foods
// ABOUTME: Also regenerates single meals and applies discrete edits to existing plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Generator
//!
//! Each day is split into meal slots by a fixed calorie distribution. A slot is
//! filled by repeatedly picking a category (weighted towards categories still
//! under their recommended servings), picking an allowed food from it, and
//! sizing the portion against the calories still needed. The loop stops at the
//! slot's calorie target or after a bounded number of attempts; an under-filled
//! meal is accepted.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::nutrition_calculator::calculate_nutrition_targets;
use super::rule_engine::ConstraintRuleEngine;
use super::sampling::{choose_uniform, sample_weighted};
use crate::catalog::FoodCatalog;
use crate::config::PlannerConfig;
use crate::errors::{AppError, AppResult};
use crate::meal_plan::MealPlan;
use crate::models::{FoodItem, MealType, ServingRecommendation, UserProfile};

const THREE_MEALS: [(MealType, f64); 3] = [
    (MealType::Breakfast, 25.0),
    (MealType::Lunch, 35.0),
    (MealType::Dinner, 40.0),
];

const FIVE_MEALS: [(MealType, f64); 5] = [
    (MealType::Breakfast, 20.0),
    (MealType::MorningSnack, 10.0),
    (MealType::Lunch, 30.0),
    (MealType::AfternoonSnack, 10.0),
    (MealType::Dinner, 30.0),
];

const SIX_MEALS: [(MealType, f64); 6] = [
    (MealType::Breakfast, 20.0),
    (MealType::MorningSnack, 10.0),
    (MealType::Lunch, 25.0),
    (MealType::AfternoonSnack, 10.0),
    (MealType::Dinner, 25.0),
    (MealType::EveningSnack, 10.0),
];

/// Meal slots and their percentage of daily calories for a meals-per-day count
///
/// Counts other than 5 and 6 use the three-meal table.
#[must_use]
pub const fn meal_distribution(meal_count: u8) -> &'static [(MealType, f64)] {
    match meal_count {
        5 => &FIVE_MEALS,
        6 => &SIX_MEALS,
        _ => &THREE_MEALS,
    }
}

/// Candidate food categories for a meal slot
///
/// Slots outside the fixed table use every catalog category.
#[must_use]
pub fn suitable_categories(meal_type: MealType, catalog: &dyn FoodCatalog) -> Vec<String> {
    let categories: &[&str] = match meal_type {
        MealType::Breakfast => &["fruits", "grains", "dairy", "proteins"],
        MealType::MorningSnack => &["fruits", "dairy", "proteins"],
        MealType::Lunch => &["grains", "proteins", "vegetables", "dairy", "fruits"],
        MealType::AfternoonSnack => &["fruits", "vegetables", "dairy", "proteins"],
        MealType::Dinner => &["proteins", "vegetables", "grains", "dairy"],
        MealType::EveningSnack => &["dairy", "fruits", "proteins"],
        MealType::Other => return catalog.categories(),
    };
    categories.iter().map(|&category| category.to_owned()).collect()
}

fn default_quantity() -> f64 {
    1.0
}

/// A discrete edit applied to an existing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MealAdjustment {
    /// Remove the food at `food_index` from a meal
    RemoveFood {
        /// Target meal
        meal_id: Uuid,
        /// Position of the food entry in the meal
        food_index: usize,
    },
    /// Add a catalog food to a meal
    AddFood {
        /// Target meal
        meal_id: Uuid,
        /// Catalog id of the food
        food_id: String,
        /// Servings to add
        #[serde(default = "default_quantity")]
        quantity: f64,
    },
    /// Replace a meal with a freshly filled one
    ///
    /// The replacement is appended on the removed meal's day, not day 1.
    ReplaceMeal {
        /// Meal to replace
        meal_id: Uuid,
        /// Slot of the replacement meal
        meal_type: MealType,
        /// Calorie target for the replacement meal
        target_calories: f64,
    },
}

/// Builds and edits meal plans from a food catalog and a rule engine
#[derive(Clone)]
pub struct MealPlanGenerator {
    catalog: Arc<dyn FoodCatalog>,
    rule_engine: ConstraintRuleEngine,
    config: PlannerConfig,
}

impl MealPlanGenerator {
    /// Create a generator
    #[must_use]
    pub fn new(
        catalog: Arc<dyn FoodCatalog>,
        rule_engine: ConstraintRuleEngine,
        config: PlannerConfig,
    ) -> Self {
        Self {
            catalog,
            rule_engine,
            config,
        }
    }

    /// The rule engine foods are checked against
    #[must_use]
    pub const fn rule_engine(&self) -> &ConstraintRuleEngine {
        &self.rule_engine
    }

    /// Generate a plan of `days` days (default 1) for `profile`
    pub fn generate_meal_plan<R>(
        &self,
        profile: &UserProfile,
        days: Option<u32>,
        rng: &mut R,
    ) -> MealPlan
    where
        R: Rng + ?Sized,
    {
        let targets = calculate_nutrition_targets(profile, &self.config.nutrition);
        let days = days.unwrap_or(1).max(1);
        let distribution = meal_distribution(profile.meal_count);

        let mut plan = MealPlan::new(profile.user_id);
        plan.name = format!("{} Meal Plan", profile.diet_type.display_name());
        plan.description = format!("Custom meal plan based on {}'s profile", profile.name);
        plan.days = days;
        plan.daily_targets = targets.macro_totals();

        info!(
            plan_id = %plan.plan_id,
            days,
            meal_count = distribution.len(),
            calories = targets.calories,
            diet_type = profile.diet_type.as_str(),
            "Generating meal plan"
        );

        for day in 1..=days {
            for &(meal_type, pct) in distribution {
                let meal_id = plan.add_meal(meal_type, day);
                self.fill_meal(
                    &mut plan,
                    meal_id,
                    targets.calories * pct / 100.0,
                    profile,
                    rng,
                );
            }
        }

        plan.recompute_nutritional_summary();
        info!(
            plan_id = %plan.plan_id,
            meals = plan.meals.len(),
            foods = plan.total_foods(),
            completion = plan.calculate_completion_percentage(),
            "Meal plan generated"
        );
        plan
    }

    /// Fill a meal towards `target_calories` and return the calories added
    pub fn fill_meal<R>(
        &self,
        plan: &mut MealPlan,
        meal_id: Uuid,
        target_calories: f64,
        profile: &UserProfile,
        rng: &mut R,
    ) -> f64
    where
        R: Rng + ?Sized,
    {
        let Some(meal_type) = plan.meal(meal_id).map(|meal| meal.meal_type) else {
            warn!(%meal_id, "Cannot fill unknown meal");
            return 0.0;
        };

        let generator = &self.config.generator;
        let servings = self.rule_engine.serving_recommendations(profile);
        let mut candidates = suitable_categories(meal_type, self.catalog.as_ref());
        let mut tally: BTreeMap<String, usize> = BTreeMap::new();
        let mut current_calories = 0.0;
        let mut attempts = 0;

        while current_calories < target_calories && attempts < generator.max_attempts {
            attempts += 1;

            // Candidates only shrink, so an empty list stays empty for every later attempt
            let Some(category) = self.choose_category(&candidates, &tally, &servings, rng) else {
                debug!(meal_type = meal_type.as_str(), "No candidate categories left");
                break;
            };

            let eligible: Vec<FoodItem> = self
                .catalog
                .foods_by_category(&category)
                .into_iter()
                .filter(|food| {
                    self.rule_engine
                        .evaluate_food_constraints(food, profile)
                        .allowed
                })
                .collect();
            let Some(food) = choose_uniform(&eligible, rng) else {
                debug!(attempt = attempts, category = %category, "No allowed foods in category");
                continue;
            };

            let food_calories = food.calories();
            if food_calories > 0.0 {
                let quantity =
                    self.portion_quantity(food_calories, target_calories - current_calories);
                if let Err(e) = plan.add_food_to_meal(meal_id, food, quantity) {
                    warn!(%meal_id, error = %e, "Stopping meal fill");
                    break;
                }
                current_calories += food_calories * quantity;
                *tally.entry(food.category.clone()).or_insert(0) += 1;
                debug!(
                    attempt = attempts,
                    food_id = %food.id,
                    quantity,
                    current_calories,
                    "Food added to meal"
                );
            } else {
                debug!(attempt = attempts, food_id = %food.id, "Skipping food without calories");
            }

            if tally.get(&food.category).copied().unwrap_or(0) >= generator.category_repeat_limit {
                candidates.retain(|candidate| *candidate != food.category);
            }
        }

        if current_calories < target_calories {
            warn!(
                meal_type = meal_type.as_str(),
                target_calories,
                current_calories,
                attempts,
                "Meal finished under its calorie target"
            );
        }
        current_calories
    }

    /// Servings of a food with `food_calories` per serving given the calories still needed
    ///
    /// Low-calorie foods start at a larger portion. A portion overshooting the
    /// remaining need by more than the overshoot factor is shrunk to fit, but
    /// never below the minimum quantity.
    #[must_use]
    pub fn portion_quantity(&self, food_calories: f64, remaining_calories: f64) -> f64 {
        let generator = &self.config.generator;
        let mut quantity = 1.0;
        if food_calories < generator.small_food_kcal {
            quantity = generator.small_food_quantity;
        }
        if food_calories * quantity > remaining_calories * generator.overshoot_factor {
            quantity = generator.min_quantity.max(remaining_calories / food_calories);
        }
        quantity
    }

    fn category_weight(
        &self,
        category: &str,
        tally: &BTreeMap<String, usize>,
        servings: &BTreeMap<String, ServingRecommendation>,
    ) -> f64 {
        let generator = &self.config.generator;
        let count = tally.get(category).copied().unwrap_or(0);
        let (min, max) = servings.get(category).map_or(
            (generator.default_min_servings, generator.default_max_servings),
            |serving| (serving.min_servings, serving.max_servings),
        );
        let count = u32::try_from(count).unwrap_or(u32::MAX);

        if count >= max {
            0.0
        } else if count < min {
            generator.under_min_weight
        } else {
            generator.in_range_weight
        }
    }

    /// Weighted category pick, uniform over all candidates when every weight is zero
    fn choose_category<R>(
        &self,
        candidates: &[String],
        tally: &BTreeMap<String, usize>,
        servings: &BTreeMap<String, ServingRecommendation>,
        rng: &mut R,
    ) -> Option<String>
    where
        R: Rng + ?Sized,
    {
        let weighted: Vec<(&str, f64)> = candidates
            .iter()
            .map(|category| {
                (
                    category.as_str(),
                    self.category_weight(category, tally, servings),
                )
            })
            .collect();

        if let Some(category) = sample_weighted(&weighted, rng) {
            return Some((*category).to_owned());
        }
        choose_uniform(candidates, rng).cloned()
    }

    /// Replace a meal with a refilled one of the same type on the same day
    ///
    /// The calorie share comes from the distribution table sized by the plan's
    /// distinct meal types. Returns the new meal id, or `None` (plan unchanged)
    /// when the meal does not exist.
    pub fn regenerate_meal<R>(
        &self,
        plan: &mut MealPlan,
        profile: &UserProfile,
        meal_id: Uuid,
        rng: &mut R,
    ) -> Option<Uuid>
    where
        R: Rng + ?Sized,
    {
        let (meal_type, day) = plan.meal(meal_id).map(|meal| (meal.meal_type, meal.day))?;

        let distinct = u8::try_from(plan.distinct_meal_types().len()).unwrap_or(0);
        let pct = meal_distribution(distinct)
            .iter()
            .find(|(slot, _)| *slot == meal_type)
            .map_or(self.config.generator.fallback_meal_pct, |(_, pct)| *pct);
        let target_calories = plan.daily_targets.calories * pct / 100.0;

        plan.remove_meal(meal_id).ok()?;
        let new_meal_id = plan.add_meal(meal_type, day);
        self.fill_meal(plan, new_meal_id, target_calories, profile, rng);
        plan.recompute_nutritional_summary();

        info!(
            plan_id = %plan.plan_id,
            old_meal_id = %meal_id,
            %new_meal_id,
            meal_type = meal_type.as_str(),
            "Meal regenerated"
        );
        Some(new_meal_id)
    }

    /// Apply edits in order and return how many succeeded
    ///
    /// Edits naming an unknown meal, food, or index are skipped.
    pub fn adjust_meal_plan<R>(
        &self,
        plan: &mut MealPlan,
        profile: &UserProfile,
        adjustments: &[MealAdjustment],
        rng: &mut R,
    ) -> usize
    where
        R: Rng + ?Sized,
    {
        let mut applied = 0;
        for adjustment in adjustments {
            match self.apply_adjustment(plan, profile, adjustment, rng) {
                Ok(()) => applied += 1,
                Err(e) => warn!(?adjustment, error = %e, "Skipping meal plan edit"),
            }
        }
        plan.recompute_nutritional_summary();
        applied
    }

    fn apply_adjustment<R>(
        &self,
        plan: &mut MealPlan,
        profile: &UserProfile,
        adjustment: &MealAdjustment,
        rng: &mut R,
    ) -> AppResult<()>
    where
        R: Rng + ?Sized,
    {
        match adjustment {
            MealAdjustment::RemoveFood {
                meal_id,
                food_index,
            } => plan
                .remove_food_from_meal(*meal_id, *food_index)
                .map(|_| ()),
            MealAdjustment::AddFood {
                meal_id,
                food_id,
                quantity,
            } => {
                let food = self
                    .catalog
                    .food(food_id)
                    .ok_or_else(|| AppError::not_found(format!("Food {food_id}")))?;
                plan.add_food_to_meal(*meal_id, &food, *quantity)
            }
            MealAdjustment::ReplaceMeal {
                meal_id,
                meal_type,
                target_calories,
            } => {
                let removed = plan.remove_meal(*meal_id)?;
                let new_meal_id = plan.add_meal(*meal_type, removed.day);
                self.fill_meal(plan, new_meal_id, *target_calories, profile, rng);
                Ok(())
            }
        }
    }
}
