//! Catalog Construction and Query Surface
//!
//! The catalog is assembled once from the hand-authored content in `data`,
//! validated, and then only ever read. Validation runs a single pass over the
//! whole structure and rejects duplicate ids at load time, before any lookup
//! can observe them.
//!
//! Every query is a bounded linear scan over the fixed, fully-resident
//! structure; absence of an id is an expected outcome (`None`), not an error.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use thiserror::Error;

use super::data;
use super::model::{CategoryLayout, MenuCategory, MenuItem, MenuTag};

/// Authoring errors caught by the one-time validation pass
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate category id `{0}`")]
    DuplicateCategoryId(String),

    #[error("duplicate section id `{section}` in category `{category}`")]
    DuplicateSectionId { category: String, section: String },

    #[error("duplicate item id `{id}` (in category `{first}` and again in `{second}`)")]
    DuplicateItemId {
        id: String,
        first: String,
        second: String,
    },
}

/// The full menu: an ordered, immutable sequence of categories
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    categories: Vec<MenuCategory>,
}

impl Catalog {
    /// Build and validate the Sukino menu
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_categories(data::categories())
    }

    /// Build a catalog from explicit categories, running the validation pass
    pub fn from_categories(categories: Vec<MenuCategory>) -> Result<Self, CatalogError> {
        validate(&categories)?;
        Ok(Self { categories })
    }

    /// Categories in display/navigation order
    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Find a category by id: first exact match in catalog order
    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find an item by id anywhere in the catalog.
    ///
    /// Scans categories in catalog order, items in each category's display
    /// order (section order then item order for sectioned categories).
    /// Deterministic: ids are unique after validation, and even on unvalidated
    /// data the first match in traversal order wins every time.
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items())
            .find(|i| i.id == id)
    }

    /// All items carrying `tag`, in catalog traversal order
    /// (catalog → category → section → item); no re-sorting.
    pub fn items_with_tag(&self, tag: MenuTag) -> Vec<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items())
            .filter(|i| i.has_tag(tag))
            .collect()
    }

    /// Total item count across all categories and sections
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items().len()).sum()
    }
}

/// One-time validation pass: duplicate category ids, duplicate section ids
/// within a category, and duplicate item ids anywhere in the catalog.
fn validate(categories: &[MenuCategory]) -> Result<(), CatalogError> {
    let mut category_ids: FxHashSet<&str> = FxHashSet::default();
    // item id -> owning category id, so the error names both sites
    let mut item_owners: FxHashMap<&str, &str> = FxHashMap::default();

    for category in categories {
        if !category_ids.insert(&category.id) {
            return Err(CatalogError::DuplicateCategoryId(category.id.clone()));
        }

        if let CategoryLayout::Sectioned { sections } = &category.layout {
            let mut section_ids: FxHashSet<&str> = FxHashSet::default();
            for section in sections {
                if !section_ids.insert(&section.id) {
                    return Err(CatalogError::DuplicateSectionId {
                        category: category.id.clone(),
                        section: section.id.clone(),
                    });
                }
            }
        }

        for item in category.items() {
            if let Some(first) = item_owners.insert(&item.id, &category.id) {
                return Err(CatalogError::DuplicateItemId {
                    id: item.id.clone(),
                    first: first.to_string(),
                    second: category.id.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::model::MenuSection;

    fn item(id: &str, tags: &[MenuTag]) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            price: 200,
            tags: tags.iter().copied().collect(),
        }
    }

    fn flat(id: &str, items: Vec<MenuItem>) -> MenuCategory {
        MenuCategory {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            layout: CategoryLayout::Flat { items },
        }
    }

    fn sectioned(id: &str, sections: Vec<(&str, Vec<MenuItem>)>) -> MenuCategory {
        MenuCategory {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            layout: CategoryLayout::Sectioned {
                sections: sections
                    .into_iter()
                    .map(|(sid, items)| MenuSection {
                        id: sid.to_string(),
                        name: sid.to_string(),
                        description: None,
                        items,
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_duplicate_item_id_rejected_across_categories() {
        let result = Catalog::from_categories(vec![
            flat("a", vec![item("fries", &[])]),
            sectioned("b", vec![("snacks", vec![item("fries", &[])])]),
        ]);

        match result {
            Err(CatalogError::DuplicateItemId { id, first, second }) => {
                assert_eq!(id, "fries");
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
            other => panic!("expected DuplicateItemId, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_duplicate_category_id_rejected() {
        let result = Catalog::from_categories(vec![flat("a", vec![]), flat("a", vec![])]);
        assert!(matches!(result, Err(CatalogError::DuplicateCategoryId(id)) if id == "a"));
    }

    #[test]
    fn test_duplicate_section_id_rejected_within_category() {
        let result = Catalog::from_categories(vec![sectioned(
            "a",
            vec![("s", vec![item("x", &[])]), ("s", vec![item("y", &[])])],
        )]);
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateSectionId { category, section })
                if category == "a" && section == "s"
        ));
    }

    #[test]
    fn test_same_section_id_allowed_in_different_categories() {
        // Section ids are only unique within their parent category
        let result = Catalog::from_categories(vec![
            sectioned("a", vec![("veg", vec![item("x", &[])])]),
            sectioned("b", vec![("veg", vec![item("y", &[])])]),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_lookup_absence_is_none_not_error() {
        let catalog = Catalog::from_categories(vec![flat("a", vec![item("x", &[])])]).unwrap();
        assert!(catalog.category("does-not-exist").is_none());
        assert!(catalog.item("does-not-exist").is_none());
    }

    #[test]
    fn test_items_with_tag_preserves_traversal_order() {
        let catalog = Catalog::from_categories(vec![
            sectioned(
                "a",
                vec![
                    ("s1", vec![item("a1", &[MenuTag::Spicy]), item("a2", &[])]),
                    ("s2", vec![item("a3", &[MenuTag::Spicy])]),
                ],
            ),
            flat("b", vec![item("b1", &[MenuTag::Spicy, MenuTag::Veg])]),
        ]);
        let catalog = catalog.unwrap();

        let ids: Vec<&str> = catalog
            .items_with_tag(MenuTag::Spicy)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a1", "a3", "b1"]);
    }

    #[test]
    fn test_items_with_unused_tag_is_empty() {
        let catalog =
            Catalog::from_categories(vec![flat("a", vec![item("x", &[MenuTag::Veg])])]).unwrap();
        assert!(catalog.items_with_tag(MenuTag::NonVeg).is_empty());
    }

    #[test]
    fn test_item_count_sums_sections() {
        let catalog = Catalog::from_categories(vec![
            sectioned("a", vec![("s1", vec![item("x", &[]), item("y", &[])])]),
            flat("b", vec![item("z", &[])]),
        ])
        .unwrap();
        assert_eq!(catalog.item_count(), 3);
    }
}
