//! # Unit Registry
//!
//! The registry is built once, on first access, and never mutated. Lookups
//! by category id go through an index map; unit lookups scan the (short)
//! unit list of one category.
//!
//! ## Example
//!
//! ```rust
//! use convert_core::units::{list_categories, lookup_category};
//!
//! assert_eq!(list_categories()[0].id, "currency");
//!
//! let length = lookup_category("length").unwrap();
//! assert_eq!(length.lookup_unit("mi").unwrap().to_base(1.0), 1609.344);
//! assert!(lookup_category("pressure").is_none());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::tables;
use super::Category;
use crate::errors::{ConvertError, ConvertResult};

/// Process-wide registry
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Ordered, immutable set of categories.
#[derive(Debug)]
pub struct Registry {
    categories: Vec<Category>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    fn new() -> Self {
        let categories = tables::all_categories();
        let index = categories
            .iter()
            .enumerate()
            .map(|(position, category)| (category.id, position))
            .collect();
        Registry { categories, index }
    }

    /// All categories in display order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Find a category by id
    pub fn lookup(&self, category_id: &str) -> Option<&Category> {
        self.index
            .get(category_id)
            .map(|&position| &self.categories[position])
    }

    /// Find a category by id, as a typed error when absent
    pub fn find(&self, category_id: &str) -> ConvertResult<&Category> {
        self.lookup(category_id)
            .ok_or_else(|| ConvertError::category_not_found(category_id))
    }

    /// The first category, used when nothing else is selected
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    /// First category (in display order) holding both units.
    ///
    /// Unit ids are only unique within a category, so this is a best guess
    /// for front ends that take bare unit ids.
    pub fn category_for_units(&self, from_id: &str, to_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.contains(from_id) && category.contains(to_id))
    }
}

/// All categories in display order
pub fn list_categories() -> &'static [Category] {
    REGISTRY.categories()
}

/// Find a category by id
pub fn lookup_category(category_id: &str) -> Option<&'static Category> {
    REGISTRY.lookup(category_id)
}

/// Find a category by id, as a typed error when absent
pub fn find_category(category_id: &str) -> ConvertResult<&'static Category> {
    REGISTRY.find(category_id)
}

/// The first category in the registry
pub fn default_category() -> &'static Category {
    REGISTRY.default_category()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_stable() {
        let ids: Vec<_> = list_categories().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            [
                "currency",
                "length",
                "mass",
                "temperature",
                "volume",
                "data",
                "speed",
                "area",
                "time",
                "energy"
            ]
        );
        assert_eq!(default_category().id, "currency");
    }

    #[test]
    fn test_lookup_matches_index() {
        for category in list_categories() {
            assert_eq!(lookup_category(category.id).unwrap().id, category.id);
        }
    }

    #[test]
    fn test_find_unknown_category() {
        assert_eq!(
            find_category("pressure").unwrap_err(),
            ConvertError::category_not_found("pressure")
        );
        assert!(find_category("energy").is_ok());
    }

    #[test]
    fn test_category_for_units() {
        assert_eq!(REGISTRY.category_for_units("m", "ft").unwrap().id, "length");
        assert_eq!(REGISTRY.category_for_units("c", "k").unwrap().id, "temperature");
        assert!(REGISTRY.category_for_units("m", "kg").is_none());
    }

    #[test]
    fn test_registry_serializes() {
        let json = serde_json::to_value(list_categories()).unwrap();
        assert_eq!(json[0]["id"], "currency");
        assert_eq!(json[3]["units"][1]["formula"]["kind"], "affine");
        assert!(json[1].get("note").is_none());
    }
}
