// ABOUTME: Typed rule records for diet types, medical conditions, and allergies
// ABOUTME: Constraints are a tagged enum keyed by their `condition` field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What a constraint does when it matches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ConstraintKind {
    /// Matching foods are excluded
    Restrict,
    /// Foods whose nutrient amount exceeds the limit are excluded
    Max,
    /// Lower bound; recorded but never excludes a food
    Min,
    /// Any other kind; kept and ignored
    Unknown,
}

impl ConstraintKind {
    /// Parse constraint kind from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "restrict" => Self::Restrict,
            "max" => Self::Max,
            "min" => Self::Min,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for ConstraintKind {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// A single rule condition evaluated against a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum Constraint {
    /// Restricts a food category, optionally narrowed to one subcategory
    Category {
        /// Category key
        value: String,
        /// Subcategory the restriction is scoped to
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subcategory: Option<String>,
        /// Constraint kind
        constraint: ConstraintKind,
        /// Message reported when violated
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Bounds a nutrient amount per serving
    Nutrient {
        /// Nutrient key in the food's nutrient map
        value: String,
        /// Constraint kind
        constraint: ConstraintKind,
        /// Limit per serving; a missing limit is treated as zero
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<f64>,
        /// Unit of `amount`, informational
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        /// Limit expressed as a share of another quantity, informational
        #[serde(default, skip_serializing_if = "Option::is_none")]
        percentage: Option<f64>,
        /// Quantity `percentage` refers to, e.g. `calories`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        of: Option<String>,
        /// Message reported when violated
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Restricts foods in a glycemic index band
    GlycemicIndex {
        /// Glycemic index band, e.g. `high`
        value: String,
        /// Constraint kind
        constraint: ConstraintKind,
        /// Message reported when violated
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Restricts foods carrying an allergen tag
    Contains {
        /// Allergen tag
        value: String,
        /// Constraint kind
        constraint: ConstraintKind,
        /// Message reported when violated
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Condition name not understood by this engine
    #[serde(other)]
    Unknown,
}

impl Constraint {
    /// Category restriction with no subcategory scope
    #[must_use]
    pub fn restrict_category(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Category {
            value: category.into(),
            subcategory: None,
            constraint: ConstraintKind::Restrict,
            message: Some(message.into()),
        }
    }

    /// Category restriction scoped to one subcategory
    #[must_use]
    pub fn restrict_subcategory(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Category {
            value: category.into(),
            subcategory: Some(subcategory.into()),
            constraint: ConstraintKind::Restrict,
            message: Some(message.into()),
        }
    }

    /// Per-serving nutrient ceiling
    #[must_use]
    pub fn nutrient_max(nutrient: impl Into<String>, amount: f64, message: impl Into<String>) -> Self {
        Self::Nutrient {
            value: nutrient.into(),
            constraint: ConstraintKind::Max,
            amount: Some(amount),
            unit: None,
            percentage: None,
            of: None,
            message: Some(message.into()),
        }
    }

    /// Glycemic index band restriction
    #[must_use]
    pub fn restrict_glycemic_index(band: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GlycemicIndex {
            value: band.into(),
            constraint: ConstraintKind::Restrict,
            message: Some(message.into()),
        }
    }

    /// Allergen restriction
    #[must_use]
    pub fn restrict_allergen(allergen: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Contains {
            value: allergen.into(),
            constraint: ConstraintKind::Restrict,
            message: Some(message.into()),
        }
    }
}

const fn default_min_servings() -> u32 {
    1
}

const fn default_max_servings() -> u32 {
    3
}

/// Recommended daily servings for one food category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServingRecommendation {
    /// Category key
    pub category: String,
    /// Preferred subcategory, informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Minimum servings
    #[serde(default = "default_min_servings")]
    pub min_servings: u32,
    /// Maximum servings
    #[serde(default = "default_max_servings")]
    pub max_servings: u32,
    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ServingRecommendation {
    /// Recommendation with the given bounds and no note
    #[must_use]
    pub fn new(category: impl Into<String>, min_servings: u32, max_servings: u32) -> Self {
        Self {
            category: category.into(),
            subcategory: None,
            min_servings,
            max_servings,
            note: None,
        }
    }

    /// Builder: set the preferred subcategory
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Builder: attach a note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Rules for one diet type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DietRules {
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Constraints evaluated in order
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Per-category serving recommendations
    #[serde(default)]
    pub recommendations: Vec<ServingRecommendation>,
}

/// One piece of free-text advice for a medical condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalAdvice {
    /// Advice text
    pub advice: String,
}

/// Rules for one medical condition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalRules {
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Constraints evaluated in order
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Advice items
    #[serde(default)]
    pub recommendations: Vec<MedicalAdvice>,
}

/// Substitution suggestion for an allergen-bearing food
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeFood {
    /// Phrase to look for in food names
    pub avoid: String,
    /// Suggested replacement
    pub alternative: String,
}

/// Rules for one allergy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllergyRules {
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Constraints evaluated in order
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Substitution suggestions
    #[serde(default)]
    pub alternative_foods: Vec<AlternativeFood>,
}

/// Complete rule document keyed by diet type, condition, and allergy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Rules per diet type key
    #[serde(default)]
    pub diet_types: BTreeMap<String, DietRules>,
    /// Rules per medical condition tag
    #[serde(default)]
    pub medical_conditions: BTreeMap<String, MedicalRules>,
    /// Rules per allergy tag
    #[serde(default)]
    pub allergies: BTreeMap<String, AllergyRules>,
}
