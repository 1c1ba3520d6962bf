// ABOUTME: Core types for the nutriplan nutrition planning engine
// ABOUTME: Foundation crate with error handling, domain models, and nutrient constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing the shared types of the nutriplan engine. It holds
//! no algorithms: target calculation, constraint evaluation and plan generation
//! live in the main crate and build on these records.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Nutrient keys and energy densities shared across modules
//! - **models**: User profile, food items, nutrition targets, and rule records

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrient keys, mineral names, and energy densities
pub mod constants;

/// Core data models (`UserProfile`, `FoodItem`, `NutritionTargets`, rules)
pub mod models;
