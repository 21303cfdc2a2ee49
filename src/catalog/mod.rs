//! Practice-item catalog.
//!
//! A [`Catalog`] is the validated, ordered set of items the planner draws
//! from. Catalog order is significant: it is the final tie-break when two
//! items score the same.
//!
//! # Loading
//!
//! ```
//! use u_studyplan::catalog::Catalog;
//! use u_studyplan::models::StudyConfig;
//!
//! let json = r#"[
//!     {"id": 1, "title": "Two Sum", "difficulty": "Medium", "duration": 20,
//!      "companies": ["Google"], "company_count": 50,
//!      "relatedTopics": [{"name": "Array"}]}
//! ]"#;
//! let catalog = Catalog::from_json_str(json).unwrap();
//! assert_eq!(catalog.len(), 1);
//!
//! let plan = catalog.plan(&StudyConfig::default());
//! assert_eq!(plan.item_count(), 1);
//! ```

mod facets;

use std::collections::HashMap;

use tracing::debug;

use crate::error::CatalogError;
use crate::models::{Item, StudyConfig, StudyPlan};
use crate::planner;
use crate::validation::validate_catalog;

/// An ordered, ID-indexed collection of items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates a catalog from items without validating them.
    ///
    /// If IDs repeat, [`Catalog::get`] resolves to the first occurrence.
    pub fn new(items: Vec<Item>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            index.entry(item.id.clone()).or_insert(pos);
        }
        Self { items, index }
    }

    /// Creates a catalog after validating the items.
    pub fn try_new(items: Vec<Item>) -> Result<Self, CatalogError> {
        validate_catalog(&items).map_err(CatalogError::Invalid)?;
        Ok(Self::new(items))
    }

    /// Parses and validates a JSON array of item records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        let catalog = Self::try_new(items)?;
        debug!(items = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Parses and validates item records from a reader.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_reader(reader)?;
        Self::try_new(items)
    }

    /// Looks up an item by ID.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Whether an item with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Generates a plan from this catalog with the standard weights.
    pub fn plan(&self, config: &StudyConfig) -> StudyPlan {
        planner::generate_plan(&self.items, config)
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
