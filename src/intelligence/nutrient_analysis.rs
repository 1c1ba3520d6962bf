// ABOUTME: Intake analysis against nutrition targets and meal plan summary reports
// ABOUTME: Flags deficiencies and excesses, grades each macro, and splits calories by macro
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::meal_plan::MealPlan;
use crate::models::{MacroNutrient, MealType, NutrientSummary, NutritionTargets};

/// Below this share of target a nutrient is deficient
const DEFICIENCY_THRESHOLD_PCT: f64 = 80.0;
/// Above this share of target a nutrient is in excess
const EXCESS_THRESHOLD_PCT: f64 = 120.0;

/// A nutrient outside the acceptable band around its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientGap {
    /// Nutrient concerned
    pub nutrient: MacroNutrient,
    /// Current intake
    pub current: f64,
    /// Daily target
    pub target: f64,
    /// Intake as a percentage of target
    pub percentage: f64,
}

/// Result of comparing intake to targets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientAnalysis {
    /// Percentage of target reached, per nutrient with a positive target
    pub targets_met: BTreeMap<MacroNutrient, f64>,
    /// Nutrients under 80% of target
    pub deficiencies: Vec<NutrientGap>,
    /// Nutrients over 120% of target
    pub excesses: Vec<NutrientGap>,
    /// Advice for the deficiencies, then for the excesses
    pub recommendations: Vec<String>,
}

impl NutrientAnalysis {
    /// True when no nutrient is deficient or in excess
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.deficiencies.is_empty() && self.excesses.is_empty()
    }
}

const fn deficiency_advice(nutrient: MacroNutrient) -> &'static str {
    match nutrient {
        MacroNutrient::Calories => "Increase overall food intake to meet calorie requirements.",
        MacroNutrient::Protein => {
            "Add more protein-rich foods like lean meats, fish, eggs, or plant proteins."
        }
        MacroNutrient::Carbs => {
            "Include more whole grains, fruits, and vegetables for healthy carbohydrates."
        }
        MacroNutrient::Fat => {
            "Add healthy fats from sources like avocados, nuts, seeds, and olive oil."
        }
        MacroNutrient::Fiber => {
            "Increase fiber intake with more whole grains, legumes, fruits, and vegetables."
        }
    }
}

const fn excess_advice(nutrient: MacroNutrient) -> Option<&'static str> {
    match nutrient {
        MacroNutrient::Calories => {
            Some("Reduce overall food intake to avoid exceeding your calorie target.")
        }
        MacroNutrient::Fat => Some("Consider reducing high-fat foods, particularly saturated fats."),
        MacroNutrient::Protein | MacroNutrient::Carbs | MacroNutrient::Fiber => None,
    }
}

/// Compare summed intake to daily targets
#[must_use]
pub fn analyze_nutrient_intake(
    summary: &NutrientSummary,
    targets: &NutritionTargets,
) -> NutrientAnalysis {
    let target_totals = targets.macro_totals();
    let mut analysis = NutrientAnalysis::default();

    for nutrient in MacroNutrient::ALL {
        let target = target_totals.get(nutrient);
        if target <= 0.0 {
            continue;
        }
        let current = summary.macros.get(nutrient);
        let percentage = current / target * 100.0;
        analysis.targets_met.insert(nutrient, percentage);

        let gap = NutrientGap {
            nutrient,
            current,
            target,
            percentage,
        };
        if percentage < DEFICIENCY_THRESHOLD_PCT {
            analysis.deficiencies.push(gap);
        } else if percentage > EXCESS_THRESHOLD_PCT {
            analysis.excesses.push(gap);
        }
    }

    let deficiency_lines = analysis
        .deficiencies
        .iter()
        .map(|gap| deficiency_advice(gap.nutrient));
    let excess_lines = analysis
        .excesses
        .iter()
        .filter_map(|gap| excess_advice(gap.nutrient));
    analysis.recommendations = deficiency_lines
        .chain(excess_lines)
        .map(str::to_owned)
        .collect();

    analysis
}

/// Grade of a nutrient's intake relative to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientStatus {
    /// Under 70%
    Deficient,
    /// 70% up to 90%
    BelowTarget,
    /// 90% to 110%
    OnTarget,
    /// Over 110% up to 130%
    AboveTarget,
    /// Over 130%
    Excess,
}

impl NutrientStatus {
    /// Grade a percentage of target
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 70.0 {
            Self::Deficient
        } else if percentage < 90.0 {
            Self::BelowTarget
        } else if percentage <= 110.0 {
            Self::OnTarget
        } else if percentage <= 130.0 {
            Self::AboveTarget
        } else {
            Self::Excess
        }
    }
}

/// One row of a plan summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSummaryEntry {
    /// Daily target, one decimal
    pub target: f64,
    /// Plan total, one decimal
    pub actual: f64,
    /// Total as a percentage of target, one decimal
    pub percentage: f64,
    /// Grade of the unrounded percentage
    pub status: NutrientStatus,
}

/// Report-ready overview of a meal plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanSummary {
    /// Plan id
    pub plan_id: Uuid,
    /// Plan name
    pub plan_name: String,
    /// Plan creation time
    pub created_at: DateTime<Utc>,
    /// Number of meals
    pub total_meals: usize,
    /// Distinct meal types in first-seen order
    pub meal_types: Vec<MealType>,
    /// Number of food entries across all meals
    pub total_foods: usize,
    /// Per-nutrient rows for nutrients with a positive target
    pub nutrient_summary: BTreeMap<MacroNutrient, NutrientSummaryEntry>,
    /// Plan completion percentage
    pub completion_percentage: f64,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Summarize a plan against `targets`
#[must_use]
pub fn summarize_meal_plan(plan: &MealPlan, targets: &NutritionTargets) -> MealPlanSummary {
    let target_totals = targets.macro_totals();
    let nutrient_summary = MacroNutrient::ALL
        .iter()
        .filter_map(|&nutrient| {
            let target = target_totals.get(nutrient);
            if target <= 0.0 {
                return None;
            }
            let actual = plan.nutritional_summary.macros.get(nutrient);
            let percentage = actual / target * 100.0;
            Some((
                nutrient,
                NutrientSummaryEntry {
                    target: round_one_decimal(target),
                    actual: round_one_decimal(actual),
                    percentage: round_one_decimal(percentage),
                    status: NutrientStatus::from_percentage(percentage),
                },
            ))
        })
        .collect();

    MealPlanSummary {
        plan_id: plan.plan_id,
        plan_name: plan.name.clone(),
        created_at: plan.created_at,
        total_meals: plan.meals.len(),
        meal_types: plan.distinct_meal_types(),
        total_foods: plan.total_foods(),
        nutrient_summary,
        completion_percentage: plan.calculate_completion_percentage(),
    }
}

/// Share of macro calories from protein, carbs, and fat (percent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein share
    pub protein_pct: f64,
    /// Carbohydrate share
    pub carbs_pct: f64,
    /// Fat share
    pub fat_pct: f64,
}

/// Calorie split of the plan's macro totals; all zero when there are none
#[must_use]
pub fn macro_distribution(plan: &MealPlan) -> MacroSplit {
    let macros = &plan.nutritional_summary.macros;
    let protein_kcal = macros.protein * KCAL_PER_G_PROTEIN;
    let carbs_kcal = macros.carbs * KCAL_PER_G_CARBS;
    let fat_kcal = macros.fat * KCAL_PER_G_FAT;
    let total = protein_kcal + carbs_kcal + fat_kcal;

    if total <= 0.0 {
        return MacroSplit::default();
    }
    MacroSplit {
        protein_pct: protein_kcal / total * 100.0,
        carbs_pct: carbs_kcal / total * 100.0,
        fat_pct: fat_kcal / total * 100.0,
    }
}
