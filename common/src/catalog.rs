use std::collections::HashSet;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

// category shown when no tab is marked active
pub const DEFAULT_CATEGORY: &str = "mobiles";

// the product catalog
//
// authored once in the site document and never mutated; order matters, since
// tabs and cards are rendered in the order they are written
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Category {
    // doubles as the tab's data-category
    pub key: String,
    pub title: String,
    pub note: String,

    // tab marked active on first render
    #[serde(default)]
    pub active: bool,

    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Subcategory {
    pub brand: String,
    pub desc: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl Catalog {
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    // the first category marked active, otherwise DEFAULT_CATEGORY
    //
    // the fallback is returned even if the catalog has no such category, in which
    // case the explorer renders nothing
    pub fn initial_key(&self) -> &str {
        self.categories
            .iter()
            .find(|c| c.active)
            .map(|c| c.key.as_str())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for category in &self.categories {
            if category.key.trim().is_empty() {
                bail!("category '{}' has an empty key", category.title);
            }

            if !seen.insert(category.key.as_str()) {
                bail!("duplicate category key '{}'", category.key);
            }
        }

        Ok(())
    }
}
