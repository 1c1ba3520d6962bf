// ABOUTME: MealPlan aggregate owning meals, food entries, and the derived nutrient summary
// ABOUTME: Mutators keep meal totals in step and rebuild the plan summary after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Aggregate
//!
//! Meal totals are updated as foods are added and removed, while the plan-level
//! `nutritional_summary` is always rebuilt from the meals so it never drifts.
//! A plan has a single writer; callers serialize mutations themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::nutrient_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{FoodItem, MacroNutrient, MacroTotals, MealType, NutrientMap, NutrientSummary};

/// A food placed in a meal, with nutrients already scaled by quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Catalog id of the food
    pub id: String,
    /// Display name
    pub name: String,
    /// Catalog category at the time the food was added
    #[serde(default)]
    pub category: String,
    /// Servings eaten
    pub quantity: f64,
    /// Serving size as printed on the catalog entry
    pub serving_size: String,
    /// Unit of the serving size
    pub serving_unit: String,
    /// Nutrient amounts for `quantity` servings
    pub nutrients: NutrientMap,
}

impl FoodEntry {
    /// Snapshot `food` scaled to `quantity` servings
    #[must_use]
    pub fn from_food(food: &FoodItem, quantity: f64) -> Self {
        Self {
            id: food.id.clone(),
            name: food.name.clone(),
            category: food.category.clone(),
            quantity,
            serving_size: food.serving_size.clone(),
            serving_unit: food.serving_unit.clone(),
            nutrients: food.nutrients.scaled(quantity),
        }
    }
}

/// One meal slot on one day of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal id
    pub id: Uuid,
    /// Day number, starting at 1
    pub day: u32,
    /// Meal slot
    #[serde(rename = "type")]
    pub meal_type: MealType,
    /// Foods in insertion order
    #[serde(default)]
    pub foods: Vec<FoodEntry>,
    /// Running totals of the five tracked nutrients
    #[serde(default)]
    pub nutrients: MacroTotals,
}

impl Meal {
    fn new(meal_type: MealType, day: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            day,
            meal_type,
            foods: Vec::new(),
            nutrients: MacroTotals::default(),
        }
    }

    /// Add (`sign` = 1) or subtract (`sign` = -1) an entry's tracked nutrients
    fn apply_entry(&mut self, entry: &FoodEntry, sign: f64) {
        for nutrient in MacroNutrient::ALL {
            *self.nutrients.get_mut(nutrient) +=
                sign * entry.nutrients.get_or_zero(nutrient.catalog_key());
        }
    }
}

/// A multi-day meal plan for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    /// Plan id
    pub plan_id: Uuid,
    /// Owner of the plan
    pub user_id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Number of days covered
    pub days: u32,
    /// Meals in insertion order
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Totals over all meals
    #[serde(default)]
    pub nutritional_summary: NutrientSummary,
    /// Daily calorie and macro targets the plan was built against
    #[serde(default)]
    pub daily_targets: MacroTotals,
}

impl MealPlan {
    /// Create an empty one-day plan for `user_id`
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            plan_id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            name: String::new(),
            description: String::new(),
            days: 1,
            meals: Vec::new(),
            nutritional_summary: NutrientSummary::default(),
            daily_targets: MacroTotals::default(),
        }
    }

    /// Parse a plan record from JSON
    ///
    /// Meal `type` names are normalised on the way in: spacing, hyphens and
    /// case are folded, and names outside the fixed slots (e.g. `"snack"`)
    /// become [`MealType::Other`], which is written back as `"other"`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is not a plan record
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the plan record as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append an empty meal and return its id
    pub fn add_meal(&mut self, meal_type: MealType, day: u32) -> Uuid {
        let meal = Meal::new(meal_type, day);
        let id = meal.id;
        self.meals.push(meal);
        id
    }

    /// Meal by id
    #[must_use]
    pub fn meal(&self, meal_id: Uuid) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == meal_id)
    }

    fn meal_mut(&mut self, meal_id: Uuid) -> AppResult<&mut Meal> {
        self.meals
            .iter_mut()
            .find(|meal| meal.id == meal_id)
            .ok_or_else(|| AppError::not_found(format!("Meal {meal_id}")))
    }

    /// Add `quantity` servings of `food` to a meal
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a non-positive quantity, or a
    /// not-found error when the meal does not exist
    pub fn add_food_to_meal(
        &mut self,
        meal_id: Uuid,
        food: &FoodItem,
        quantity: f64,
    ) -> AppResult<()> {
        if quantity <= 0.0 || !quantity.is_finite() {
            return Err(AppError::invalid_input(format!(
                "Quantity must be positive, got {quantity}"
            )));
        }

        let meal = self.meal_mut(meal_id)?;
        let entry = FoodEntry::from_food(food, quantity);
        meal.apply_entry(&entry, 1.0);
        meal.foods.push(entry);

        self.recompute_nutritional_summary();
        Ok(())
    }

    /// Remove the food at `index` from a meal and return it
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the meal or the index does not exist
    pub fn remove_food_from_meal(&mut self, meal_id: Uuid, index: usize) -> AppResult<FoodEntry> {
        let meal = self.meal_mut(meal_id)?;
        if index >= meal.foods.len() {
            return Err(AppError::not_found(format!(
                "Food entry {index} in meal {meal_id}"
            )));
        }
        let entry = meal.foods.remove(index);
        meal.apply_entry(&entry, -1.0);

        self.recompute_nutritional_summary();
        Ok(entry)
    }

    /// Remove a meal and return it
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the meal does not exist
    pub fn remove_meal(&mut self, meal_id: Uuid) -> AppResult<Meal> {
        let position = self
            .meals
            .iter()
            .position(|meal| meal.id == meal_id)
            .ok_or_else(|| AppError::not_found(format!("Meal {meal_id}")))?;
        let meal = self.meals.remove(position);

        self.recompute_nutritional_summary();
        Ok(meal)
    }

    /// Rebuild `nutritional_summary` from the meals
    ///
    /// Macros come from the meal totals. Vitamins (keys prefixed `vitamin` or
    /// `vit_`) and minerals are summed from the food entries.
    pub fn recompute_nutritional_summary(&mut self) {
        let mut summary = NutrientSummary::default();

        for meal in &self.meals {
            for nutrient in MacroNutrient::ALL {
                *summary.macros.get_mut(nutrient) += meal.nutrients.get(nutrient);
            }

            for entry in &meal.foods {
                for (key, amount) in entry.nutrients.entries() {
                    if nutrient_keys::MACRO_KEYS.contains(&key) {
                        continue;
                    }
                    if nutrient_keys::VITAMIN_PREFIXES
                        .iter()
                        .any(|prefix| key.starts_with(prefix))
                    {
                        summary.vitamins.accumulate(key, amount);
                    } else if nutrient_keys::MINERALS.contains(&key) {
                        summary.minerals.accumulate(key, amount);
                    }
                }
            }
        }

        self.nutritional_summary = summary;
    }

    /// Mean of per-nutrient target attainment, each capped at 100
    ///
    /// Only nutrients with a positive daily target are included; 0 when none are.
    #[must_use]
    pub fn calculate_completion_percentage(&self) -> f64 {
        let attained: Vec<f64> = MacroNutrient::ALL
            .iter()
            .filter_map(|&nutrient| {
                let target = self.daily_targets.get(nutrient);
                (target > 0.0).then(|| {
                    let actual = self.nutritional_summary.macros.get(nutrient);
                    (actual / target * 100.0).min(100.0)
                })
            })
            .collect();

        if attained.is_empty() {
            return 0.0;
        }
        let count = attained.len() as f64;
        attained.iter().sum::<f64>() / count
    }

    /// Distinct meal types in the plan, in first-seen order
    #[must_use]
    pub fn distinct_meal_types(&self) -> Vec<MealType> {
        let mut types = Vec::new();
        for meal in &self.meals {
            if !types.contains(&meal.meal_type) {
                types.push(meal.meal_type);
            }
        }
        types
    }

    /// Total number of food entries across all meals
    #[must_use]
    pub fn total_foods(&self) -> usize {
        self.meals.iter().map(|meal| meal.foods.len()).sum()
    }
}
