//! Menu Data Model
//!
//! Typed shape of the catalog: categories contain either sections or direct
//! items (tagged union, never both), sections contain items, items carry a
//! small fixed tag set. All ordering is display-significant and preserved
//! exactly as authored.

use serde::Serialize;
use smallvec::SmallVec;

/// Dietary/display tags attached to menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuTag {
    /// Vegetarian
    Veg,

    /// Non-vegetarian
    NonVeg,

    /// Noticeably spicy preparation
    Spicy,

    /// House recommendation, badged on the menu
    SukinoSpecial,
}

impl MenuTag {
    /// Parse the wire/slug form (exact, case-sensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "veg" => Some(MenuTag::Veg),
            "non_veg" => Some(MenuTag::NonVeg),
            "spicy" => Some(MenuTag::Spicy),
            "sukino_special" => Some(MenuTag::SukinoSpecial),
            _ => None,
        }
    }

    /// Slug form used in data, URLs, and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuTag::Veg => "veg",
            MenuTag::NonVeg => "non_veg",
            MenuTag::Spicy => "spicy",
            MenuTag::SukinoSpecial => "sukino_special",
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            MenuTag::Veg => "Veg",
            MenuTag::NonVeg => "Non-Veg",
            MenuTag::Spicy => "Spicy",
            MenuTag::SukinoSpecial => "Sukino Special",
        }
    }

    /// Get all tags, in legend order
    pub fn all() -> &'static [MenuTag] {
        &[
            MenuTag::Veg,
            MenuTag::NonVeg,
            MenuTag::Spicy,
            MenuTag::SukinoSpecial,
        ]
    }
}

/// Per-item tag set. Four fixed tags exist, so this never spills to the heap.
pub type TagSet = SmallVec<[MenuTag; 4]>;

/// Individual menu item
#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    /// Stable identifier, unique across the entire catalog
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in whole INR
    pub price: u32,
    pub tags: TagSet,
}

impl MenuItem {
    pub fn has_tag(&self, tag: MenuTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Price formatted for display ("₹235")
    pub fn price_label(&self) -> String {
        format!("₹{}", self.price)
    }
}

/// Sub-grouping of items within a sectioned category
/// Example: "Waffles & Pancakes" within "All Day Breakfast"
#[derive(Debug, Clone, Serialize)]
pub struct MenuSection {
    /// Unique within the parent category
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Listed order is display order
    pub items: Vec<MenuItem>,
}

/// Category contents: sections or direct items, never both.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CategoryLayout {
    Sectioned { sections: Vec<MenuSection> },
    Flat { items: Vec<MenuItem> },
}

/// Top-level menu grouping
#[derive(Debug, Clone, Serialize)]
pub struct MenuCategory {
    /// Unique across the catalog
    pub id: String,
    pub name: String,
    /// One-line blurb shown under the category heading
    pub description: String,
    #[serde(flatten)]
    pub layout: CategoryLayout,
}

impl MenuCategory {
    /// All items of the category in display order: a flat category yields its
    /// items as listed; a sectioned category yields the concatenation of each
    /// section's items, preserving section order then item order.
    pub fn items(&self) -> Vec<&MenuItem> {
        match &self.layout {
            CategoryLayout::Flat { items } => items.iter().collect(),
            CategoryLayout::Sectioned { sections } => {
                sections.iter().flat_map(|s| s.items.iter()).collect()
            }
        }
    }

    /// Sections of the category, or `None` for a flat category
    pub fn sections(&self) -> Option<&[MenuSection]> {
        match &self.layout {
            CategoryLayout::Sectioned { sections } => Some(sections),
            CategoryLayout::Flat { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn item(id: &str, tags: &[MenuTag]) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            price: 100,
            tags: tags.iter().copied().collect(),
        }
    }

    #[test]
    fn test_tag_round_trip() {
        for tag in MenuTag::all() {
            assert_eq!(MenuTag::parse(tag.as_str()), Some(*tag));
        }
        assert_eq!(MenuTag::parse("vegan"), None);
        assert_eq!(MenuTag::parse("Veg"), None); // case-sensitive
        assert_eq!(MenuTag::parse("sukino_special"), Some(MenuTag::SukinoSpecial));
    }

    #[test]
    fn test_flat_category_items_keep_listed_order() {
        let category = MenuCategory {
            id: "drinks".to_string(),
            name: "Drinks".to_string(),
            description: "Cold things".to_string(),
            layout: CategoryLayout::Flat {
                items: vec![item("coke", &[MenuTag::Veg]), item("soda", &[MenuTag::Veg])],
            },
        };

        let ids: Vec<&str> = category.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["coke", "soda"]);
        assert!(category.sections().is_none());
    }

    #[test]
    fn test_sectioned_category_flattens_in_double_order() {
        let category = MenuCategory {
            id: "food".to_string(),
            name: "Food".to_string(),
            description: "Plates".to_string(),
            layout: CategoryLayout::Sectioned {
                sections: vec![
                    MenuSection {
                        id: "a".to_string(),
                        name: "A".to_string(),
                        description: None,
                        items: vec![item("a1", &[]), item("a2", &[])],
                    },
                    MenuSection {
                        id: "b".to_string(),
                        name: "B".to_string(),
                        description: Some("second".to_string()),
                        items: vec![item("b1", &[])],
                    },
                ],
            },
        };

        let ids: Vec<&str> = category.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1"]);
        assert_eq!(category.items().len(), 3);
        assert_eq!(category.sections().map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_item_tag_membership() {
        let shakshuka = MenuItem {
            id: "shakshuka".to_string(),
            name: "Shakshuka".to_string(),
            description: None,
            price: 325,
            tags: smallvec![MenuTag::Veg, MenuTag::Spicy, MenuTag::SukinoSpecial],
        };
        assert!(shakshuka.has_tag(MenuTag::SukinoSpecial));
        assert!(!shakshuka.has_tag(MenuTag::NonVeg));
        assert_eq!(shakshuka.price_label(), "₹325");
    }

    #[test]
    fn test_category_serializes_with_inline_layout() {
        let category = MenuCategory {
            id: "drinks".to_string(),
            name: "Drinks".to_string(),
            description: "Cold things".to_string(),
            layout: CategoryLayout::Flat {
                items: vec![item("coke", &[MenuTag::Veg])],
            },
        };

        let json = serde_json::to_value(&category).unwrap();
        // Layout flattens into the category object, matching the authored shape
        assert_eq!(json["id"], "drinks");
        assert_eq!(json["items"][0]["id"], "coke");
        assert_eq!(json["items"][0]["tags"][0], "veg");
        assert!(json.get("sections").is_none());
    }
}
