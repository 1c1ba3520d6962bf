// ABOUTME: Food catalog item model and per-serving nutrient map
// ABOUTME: FoodItem snapshots are immutable once read from a catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::nutrient_keys;

/// Nutrient name to amount mapping, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientMap(BTreeMap<String, f64>);

impl NutrientMap {
    /// Create an empty nutrient map
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Amount for `key`, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Amount for `key`, treating a missing key as zero
    #[must_use]
    pub fn get_or_zero(&self, key: &str) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Whether the map carries `key` at all
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set the amount for `key`
    pub fn insert(&mut self, key: impl Into<String>, amount: f64) {
        self.0.insert(key.into(), amount);
    }

    /// Add `amount` to the existing value for `key` (zero if absent)
    pub fn accumulate(&mut self, key: &str, amount: f64) {
        *self.0.entry(key.to_owned()).or_insert(0.0) += amount;
    }

    /// Copy of this map with every amount multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, amount)| (key.clone(), amount * factor))
                .collect(),
        )
    }

    /// Iterate `(nutrient, amount)` pairs in name order
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, amount)| (key.as_str(), *amount))
    }

    /// Number of nutrients tracked
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no nutrients are tracked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for NutrientMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn default_serving_size() -> String {
    "100g".to_owned()
}

fn default_serving_unit() -> String {
    "g".to_owned()
}

/// Catalogs written by hand store serving sizes either as `"100g"` or as `100`
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Null => Ok(default_serving_size()),
        other => Ok(other.to_string()),
    }
}

/// A single food from the catalog with nutrient amounts for one serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalog identifier
    #[serde(default)]
    pub id: String,
    /// Display name
    pub name: String,
    /// Category key, e.g. `proteins`
    #[serde(default)]
    pub category: String,
    /// Optional finer grouping, e.g. `meat` or `plant_based`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Nutrient amounts per serving
    #[serde(default)]
    pub nutrients: NutrientMap,
    /// Serving size as printed on the catalog entry
    #[serde(
        default = "default_serving_size",
        deserialize_with = "string_or_number"
    )]
    pub serving_size: String,
    /// Unit of the serving size
    #[serde(default = "default_serving_unit")]
    pub serving_unit: String,
    /// Glycemic index band (`low`, `medium`, `high`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glycemic_index: Option<String>,
    /// Allergen tags present in the food
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<String>,
}

impl FoodItem {
    /// Create a food with no nutrients and the default `100g` serving
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            subcategory: None,
            nutrients: NutrientMap::new(),
            serving_size: default_serving_size(),
            serving_unit: default_serving_unit(),
            glycemic_index: None,
            contains: Vec::new(),
        }
    }

    /// Builder: set the subcategory
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Builder: set one nutrient amount
    #[must_use]
    pub fn with_nutrient(mut self, key: impl Into<String>, amount: f64) -> Self {
        self.nutrients.insert(key, amount);
        self
    }

    /// Builder: set the glycemic index band
    #[must_use]
    pub fn with_glycemic_index(mut self, band: impl Into<String>) -> Self {
        self.glycemic_index = Some(band.into());
        self
    }

    /// Builder: add an allergen tag
    #[must_use]
    pub fn containing(mut self, allergen: impl Into<String>) -> Self {
        self.contains.push(allergen.into());
        self
    }

    /// Energy per serving (kcal), zero when the catalog omits it
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.nutrients.get_or_zero(nutrient_keys::CALORIES)
    }
}
