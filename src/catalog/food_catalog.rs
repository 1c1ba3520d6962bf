// ABOUTME: In-memory food catalog keyed by category and food id
// ABOUTME: Loads the `{categories, items}` JSON document and supports name search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::FoodCatalog;
use crate::errors::AppResult;
use crate::models::FoodItem;

/// On-disk catalog shape: category membership lists plus items keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCatalogDocument {
    /// Food ids per category
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    /// Foods by id; the id key fills in a missing `id` field
    #[serde(default)]
    pub items: BTreeMap<String, FoodItem>,
}

/// Food catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodCatalog {
    categories: BTreeMap<String, Vec<String>>,
    items: BTreeMap<String, FoodItem>,
}

impl InMemoryFoodCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed document
    ///
    /// Items that no category lists are registered under their own category.
    #[must_use]
    pub fn from_document(document: FoodCatalogDocument) -> Self {
        let mut catalog = Self {
            categories: document.categories,
            items: BTreeMap::new(),
        };

        for (id, mut item) in document.items {
            if item.id.is_empty() {
                item.id.clone_from(&id);
            }
            if item.category.is_empty() {
                if let Some((category, _)) = catalog
                    .categories
                    .iter()
                    .find(|(_, ids)| ids.contains(&id))
                {
                    item.category.clone_from(category);
                }
            }
            catalog.register(&item);
            catalog.items.insert(id, item);
        }

        for (category, ids) in &catalog.categories {
            let dangling = ids.iter().filter(|id| !catalog.items.contains_key(*id)).count();
            if dangling > 0 {
                warn!(category = %category, dangling, "Catalog lists food ids with no item");
            }
        }

        debug!(
            categories = catalog.categories.len(),
            items = catalog.items.len(),
            "Food catalog loaded"
        );
        catalog
    }

    /// Build a catalog from a list of foods, registering each food's category
    #[must_use]
    pub fn from_foods(foods: impl IntoIterator<Item = FoodItem>) -> Self {
        let mut catalog = Self::new();
        for food in foods {
            catalog.add_food(food);
        }
        catalog
    }

    /// Parse a catalog document from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is malformed
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: FoodCatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    /// Load a catalog document from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the file is missing, or a serialization
    /// error if it is not a catalog document
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Insert or replace a food and list it under its category
    pub fn add_food(&mut self, food: FoodItem) {
        self.register(&food);
        self.items.insert(food.id.clone(), food);
    }

    fn register(&mut self, food: &FoodItem) {
        if food.category.is_empty() {
            return;
        }
        let ids = self.categories.entry(food.category.clone()).or_default();
        if !ids.contains(&food.id) {
            ids.push(food.id.clone());
        }
    }

    /// Case-insensitive name search, optionally limited to one category
    #[must_use]
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<FoodItem> {
        let query = query.to_lowercase();
        self.items
            .values()
            .filter(|food| category.is_none_or(|wanted| food.category == wanted))
            .filter(|food| food.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Number of foods in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the catalog in its on-disk shape
    #[must_use]
    pub fn to_document(&self) -> FoodCatalogDocument {
        FoodCatalogDocument {
            categories: self.categories.clone(),
            items: self.items.clone(),
        }
    }
}

impl FoodCatalog for InMemoryFoodCatalog {
    fn categories(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    fn foods_by_category(&self, category: &str) -> Vec<FoodItem> {
        self.categories
            .get(category)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.items.get(id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn food(&self, id: &str) -> Option<FoodItem> {
        self.items.get(id).cloned()
    }
}
