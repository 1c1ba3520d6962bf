// ABOUTME: Read interfaces for the food catalog and the diet/medical/allergy rule store
// ABOUTME: In-memory JSON-backed implementations are injected into the planner at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Built-in diet, medical-condition, and allergy rules
pub mod default_rules;
/// In-memory food catalog loaded from JSON
pub mod food_catalog;
/// In-memory rule store loaded from JSON or built-in defaults
pub mod rule_store;

pub use food_catalog::InMemoryFoodCatalog;
pub use rule_store::InMemoryRuleStore;

use crate::models::{AllergyRules, DietRules, FoodItem, MedicalRules};

/// Food lookup interface consumed by the meal plan generator
///
/// # Examples
///
/// ```rust
/// use nutriplan::catalog::{FoodCatalog, InMemoryFoodCatalog};
/// use nutriplan::models::FoodItem;
///
/// let catalog = InMemoryFoodCatalog::from_foods(vec![
///     FoodItem::new("apple", "Apple", "fruits").with_nutrient("calories", 52.0),
/// ]);
/// assert_eq!(catalog.categories(), vec!["fruits".to_owned()]);
/// assert_eq!(catalog.foods_by_category("fruits").len(), 1);
/// assert!(catalog.food("pear").is_none());
/// ```
pub trait FoodCatalog: Send + Sync {
    /// All category keys
    fn categories(&self) -> Vec<String>;

    /// Foods listed under `category`; empty for unknown categories
    fn foods_by_category(&self, category: &str) -> Vec<FoodItem>;

    /// Food by catalog id
    fn food(&self, id: &str) -> Option<FoodItem>;
}

/// Rule lookup interface consumed by the constraint rule engine
pub trait RuleStore: Send + Sync {
    /// Rules for a diet type key, e.g. `low_carb`
    fn diet_rules(&self, diet_type: &str) -> Option<&DietRules>;

    /// Rules for a medical condition tag, e.g. `diabetes`
    fn medical_rules(&self, condition: &str) -> Option<&MedicalRules>;

    /// Rules for an allergy tag, e.g. `nuts`
    fn allergy_rules(&self, allergy: &str) -> Option<&AllergyRules>;
}
