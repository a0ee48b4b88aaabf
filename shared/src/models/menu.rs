//! Menu Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category value that selects every menu item
pub const ALL_CATEGORIES: &str = "all";

/// Menu item (read-only, loaded from the menu fixture)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in currency unit
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: String,
    /// Image reference (URL or public path)
    #[serde(default)]
    pub image: String,
}

/// Category entry for the category selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub value: String,
    /// Display label: first character upper-cased
    pub label: String,
}

impl MenuCategory {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let label = category_label(&value);
        Self { value, label }
    }
}

/// Upper-case the first character of a category name ("drinks" -> "Drinks")
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The menu as served to the browser and the ordering page
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `"all"` followed by each distinct category in first-appearance order
    pub fn categories(&self) -> Vec<MenuCategory> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.category.as_str()) {
                seen.push(&item.category);
            }
        }

        std::iter::once(ALL_CATEGORIES)
            .chain(seen)
            .map(MenuCategory::new)
            .collect()
    }

    /// Items in `category`; `"all"` selects everything
    pub fn filter<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items
            .iter()
            .filter(move |item| category == ALL_CATEGORIES || item.category == category)
    }

    pub fn find(&self, id: i64) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn item(id: i64, name: &str, category: &str, price: Decimal) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            category: category.to_string(),
            image: format!("/images/{id}.jpg"),
        }
    }

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(vec![
            item(1, "Bruschetta", "starters", dec("6.50")),
            item(2, "Lasagna", "mains", dec("14.00")),
            item(3, "Caprese", "starters", dec("8.25")),
            item(4, "Tiramisu", "desserts", dec("7.00")),
        ])
    }

    #[test]
    fn test_categories_keep_first_appearance_order() {
        let values: Vec<String> = catalog()
            .categories()
            .into_iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(values, vec!["all", "starters", "mains", "desserts"]);
    }

    #[test]
    fn test_categories_of_empty_menu() {
        let categories = MenuCatalog::default().categories();
        assert_eq!(categories, vec![MenuCategory::new("all")]);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("starters"), "Starters");
        assert_eq!(category_label("all"), "All");
        assert_eq!(category_label(""), "");
        assert_eq!(category_label("échalote"), "Échalote");
    }

    #[test]
    fn test_filter() {
        let catalog = catalog();
        let starters: Vec<i64> = catalog.filter("starters").map(|i| i.id).collect();
        assert_eq!(starters, vec![1, 3]);

        assert_eq!(catalog.filter(ALL_CATEGORIES).count(), 4);
        assert_eq!(catalog.filter("drinks").count(), 0);
    }

    #[test]
    fn test_find() {
        let catalog = catalog();
        assert_eq!(catalog.find(2).map(|i| i.name.as_str()), Some("Lasagna"));
        assert!(catalog.find(99).is_none());
    }

    #[test]
    fn test_deserialize_float_price() {
        let json = r#"{"id":7,"name":"Espresso","description":"Short","price":2.5,"category":"drinks","image":"/espresso.jpg"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, dec("2.5"));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["price"], serde_json::json!(2.5));
    }
}
