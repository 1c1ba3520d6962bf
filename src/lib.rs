// ABOUTME: Main library entry point for the nutriplan nutrition planning engine
// ABOUTME: Target calculation, constraint rules, meal plan generation, and reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan
//!
//! Computes daily nutrient targets for a person and builds candidate meal plans
//! that respect their diet type, medical conditions, and allergies.
//!
//! ## Architecture
//!
//! - **Catalog**: read interfaces for foods (`FoodCatalog`) and rules (`RuleStore`)
//!   with in-memory, JSON-backed implementations
//! - **Intelligence**: the nutrition calculator, the constraint rule engine, the
//!   weighted sampler, the meal plan generator, and nutrient analysis
//! - **Meal plan**: the `MealPlan` aggregate with its nutrient summary
//! - **Config**: tunable formula constants and generator limits
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutriplan::catalog::{InMemoryFoodCatalog, InMemoryRuleStore};
//! use nutriplan::config::PlannerConfig;
//! use nutriplan::intelligence::{ConstraintRuleEngine, MealPlanGenerator};
//! use nutriplan::models::{Gender, UserProfile};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn main() -> nutriplan::errors::AppResult<()> {
//! let catalog = Arc::new(InMemoryFoodCatalog::from_path("data/foods.json")?);
//! let engine = ConstraintRuleEngine::new(Arc::new(InMemoryRuleStore::with_defaults()));
//! let generator = MealPlanGenerator::new(catalog, engine, PlannerConfig::global().clone());
//!
//! let profile = UserProfile::new(30, Gender::Male, 80.0, 180.0);
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let plan = generator.generate_meal_plan(&profile, Some(1), &mut rng);
//! println!("{} meals, {:.0}% complete", plan.meals.len(), plan.calculate_completion_percentage());
//! # Ok(())
//! # }
//! ```

/// Food catalog and rule store interfaces with in-memory implementations
pub mod catalog;

/// Formula constants and generator tuning
pub mod config;

/// Unified error handling, re-exported from `nutriplan-core`
pub mod errors;

/// Target calculation, rule evaluation, plan generation, and analysis
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// `MealPlan` aggregate and its meal and food entry records
pub mod meal_plan;

/// Nutrient keys and energy densities, re-exported from `nutriplan-core`
pub use nutriplan_core::constants;

/// Domain models, re-exported from `nutriplan-core`
pub use nutriplan_core::models;
