//! Frontend Models
//!
//! Data structures matching the backend's JSON bodies.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Login form payload for `/api/post_login_credentials`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Username remembered for the lifetime of the browser tab
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub username: Option<String>,
}

/// Server-assigned item id.
///
/// The backend hands out document ids as strings; plain integers are accepted
/// too. The id is echoed back in the JSON type it arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

/// Item categories offered by the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Green,
    Red,
    Yellow,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Green, Category::Red, Category::Yellow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Green => "green",
            Category::Red => "red",
            Category::Yellow => "yellow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Green => "Green",
            Category::Red => "Red",
            Category::Yellow => "Yellow",
        }
    }

    /// Style class of a rendered list entry, e.g. `red_li`
    pub fn css_class(&self) -> String {
        format!("{}_li", self.as_str())
    }

    #[cfg(test)]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

/// Item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub item_value: String,
    pub category: Category,
}

/// Body of `/api/get_todo_list_items`: `{"items": null}` when the user has no items
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemList {
    pub items: Option<Vec<Item>>,
}

/// Categories currently checked in the filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter(BTreeSet<Category>);

impl Default for CategoryFilter {
    fn default() -> Self {
        Self(Category::ALL.into_iter().collect())
    }
}

impl CategoryFilter {
    #[cfg(test)]
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    #[cfg(test)]
    pub fn from_checked(categories: impl IntoIterator<Item = Category>) -> Self {
        Self(categories.into_iter().collect())
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    /// Mirror a checkbox change
    pub fn set(&mut self, category: Category, checked: bool) {
        if checked {
            self.0.insert(category);
        } else {
            self.0.remove(&category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_list_null_and_array() {
        let empty: ItemList = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert_eq!(empty.items, None);

        let list: ItemList = serde_json::from_str(
            r#"{"items": [
                {"id": "5a1f0c", "item_value": "sleep", "category": "green"},
                {"id": 7, "item_value": "eat", "category": "red"}
            ]}"#,
        )
        .unwrap();
        let items = list.items.unwrap();
        assert_eq!(items[0].id, ItemId::Text("5a1f0c".to_string()));
        assert_eq!(items[1].id, ItemId::Number(7));
        assert_eq!(items[1].category, Category::Red);
    }

    #[test]
    fn test_item_id_keeps_json_type() {
        assert_eq!(serde_json::to_string(&ItemId::Number(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&ItemId::Text("ab".into())).unwrap(), r#""ab""#);
        assert_eq!(ItemId::Number(7).to_string(), "7");
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result: Result<Item, _> =
            serde_json::from_str(r#"{"id": 1, "item_value": "x", "category": "blue"}"#);
        assert!(result.is_err());
        assert_eq!(Category::parse("yellow"), Some(Category::Yellow));
        assert_eq!(Category::parse("blue"), None);
        assert_eq!(Category::Yellow.css_class(), "yellow_li");
    }

    #[test]
    fn test_category_filter_toggle() {
        let mut filter = CategoryFilter::default();
        assert!(Category::ALL.iter().all(|c| filter.contains(*c)));

        filter.set(Category::Red, false);
        assert!(!filter.contains(Category::Red));
        filter.set(Category::Red, true);
        assert!(filter.contains(Category::Red));

        assert!(!CategoryFilter::none().contains(Category::Green));
    }
}
