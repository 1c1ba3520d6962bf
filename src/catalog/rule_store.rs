// ABOUTME: In-memory rule store over a typed rule document
// ABOUTME: Loads diet, medical-condition, and allergy rules from JSON or built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use tracing::debug;

use super::default_rules::default_rule_set;
use super::RuleStore;
use crate::errors::AppResult;
use crate::models::{AllergyRules, DietRules, MedicalRules, RuleSet};

/// Rule store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleStore {
    rules: RuleSet,
}

impl InMemoryRuleStore {
    /// Wrap an already-built rule document
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Store holding the built-in rules
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(default_rule_set())
    }

    /// Parse a rule document from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is malformed
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let rules: RuleSet = serde_json::from_str(json)?;
        debug!(
            diet_types = rules.diet_types.len(),
            medical_conditions = rules.medical_conditions.len(),
            allergies = rules.allergies.len(),
            "Rule document loaded"
        );
        Ok(Self::new(rules))
    }

    /// Load a rule document from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the file is missing, or a serialization
    /// error if it is not a rule document
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// The underlying rule document
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl RuleStore for InMemoryRuleStore {
    fn diet_rules(&self, diet_type: &str) -> Option<&DietRules> {
        self.rules.diet_types.get(diet_type)
    }

    fn medical_rules(&self, condition: &str) -> Option<&MedicalRules> {
        self.rules.medical_conditions.get(condition)
    }

    fn allergy_rules(&self, allergy: &str) -> Option<&AllergyRules> {
        self.rules.allergies.get(allergy)
    }
}
