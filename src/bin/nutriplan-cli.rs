// ABOUTME: Command-line shell over the planner: targets, plan generation, and plan analysis
// ABOUTME: Reads profile, catalog, rule, and plan JSON files and prints JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Usage:
//! ```bash
//! # Daily targets for a profile
//! cargo run --bin nutriplan-cli -- targets --profile profile.json
//!
//! # Three-day plan with a fixed seed
//! cargo run --bin nutriplan-cli -- plan --profile profile.json --foods data/foods.json --days 3 --seed 42
//!
//! # Summary and intake analysis of a saved plan
//! cargo run --bin nutriplan-cli -- analyze --plan plan.json --profile profile.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nutriplan::catalog::{InMemoryFoodCatalog, InMemoryRuleStore};
use nutriplan::config::PlannerConfig;
use nutriplan::intelligence::{
    analyze_nutrient_intake, calculate_nutrition_targets, macro_distribution,
    summarize_meal_plan, ConstraintRuleEngine, MealPlanGenerator,
};
use nutriplan::logging::LoggingConfig;
use nutriplan::meal_plan::MealPlan;
use nutriplan::models::UserProfile;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutrition targets and meal plan generation",
    long_about = "Compute daily nutrient targets for a profile, generate constraint-aware meal plans, and analyze saved plans."
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print daily nutrition targets for a profile
    Targets {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Generate a meal plan
    Plan {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Food catalog JSON file
        #[arg(long)]
        foods: PathBuf,

        /// Rule document JSON file (built-in rules when omitted)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Number of days to plan
        #[arg(long, default_value = "1")]
        days: u32,

        /// Seed for reproducible plans
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Summarize a saved plan and analyze its intake
    Analyze {
        /// Meal plan JSON file
        #[arg(long)]
        plan: PathBuf,

        /// Profile JSON file the plan was built for
        #[arg(long)]
        profile: PathBuf,
    },
}

fn load_profile(path: &Path) -> Result<UserProfile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: UserProfile = serde_json::from_str(&json)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    profile.validate()?;
    Ok(profile)
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = PlannerConfig::global().clone();

    match args.command {
        Command::Targets { profile } => {
            let profile = load_profile(&profile)?;
            let targets = calculate_nutrition_targets(&profile, &config.nutrition);
            print_json(&targets)?;
        }
        Command::Plan {
            profile,
            foods,
            rules,
            days,
            seed,
        } => {
            let profile = load_profile(&profile)?;
            let catalog = InMemoryFoodCatalog::from_path(&foods)
                .with_context(|| format!("Failed to load food catalog {}", foods.display()))?;
            let store = match rules {
                Some(path) => InMemoryRuleStore::from_path(&path)
                    .with_context(|| format!("Failed to load rules {}", path.display()))?,
                None => InMemoryRuleStore::with_defaults(),
            };

            let generator = MealPlanGenerator::new(
                Arc::new(catalog),
                ConstraintRuleEngine::new(Arc::new(store)),
                config,
            );
            let mut rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
            let plan = generator.generate_meal_plan(&profile, Some(days), &mut rng);

            info!(plan_id = %plan.plan_id, "Plan ready");
            println!("{}", plan.to_json()?);
        }
        Command::Analyze { plan, profile } => {
            let profile = load_profile(&profile)?;
            let json = fs::read_to_string(&plan)
                .with_context(|| format!("Failed to read plan {}", plan.display()))?;
            let plan = MealPlan::from_json_str(&json)?;

            let targets = calculate_nutrition_targets(&profile, &config.nutrition);
            print_json(&json!({
                "summary": summarize_meal_plan(&plan, &targets),
                "analysis": analyze_nutrient_intake(&plan.nutritional_summary, &targets),
                "macro_distribution": macro_distribution(&plan),
            }))?;
        }
    }

    Ok(())
}
