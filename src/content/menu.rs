use super::model::{MenuContent, MenuItem};

/// Category label that disables filtering.
pub const ALL_CATEGORY: &str = "All";

/// First listed category, or "All" when the menu lists none.
pub fn initial_category(menu: &MenuContent) -> String {
    menu.categories
        .first()
        .cloned()
        .unwrap_or_else(|| ALL_CATEGORY.to_string())
}

pub fn filter_menu<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORY || item.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: &str) -> MenuItem {
        MenuItem {
            id,
            name: format!("Item {}", id),
            description: String::new(),
            price: "NPR 100".to_string(),
            category: category.to_string(),
            image: String::new(),
            featured: false,
        }
    }

    fn menu(categories: &[&str]) -> MenuContent {
        MenuContent {
            title: "Signature Creations".to_string(),
            description: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            items: vec![item(1, "Mains"), item(2, "Cocktails"), item(3, "Mains")],
        }
    }

    #[test]
    fn test_initial_category_is_first_listed() {
        assert_eq!(initial_category(&menu(&["All", "Mains"])), "All");
        assert_eq!(initial_category(&menu(&["Teas", "Coffee"])), "Teas");
    }

    #[test]
    fn test_initial_category_defaults_to_all() {
        assert_eq!(initial_category(&menu(&[])), ALL_CATEGORY);
    }

    #[test]
    fn test_all_keeps_every_item_in_order() {
        let m = menu(&["All", "Mains", "Cocktails"]);
        let ids: Vec<_> = filter_menu(&m.items, "All").iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_category_filter() {
        let m = menu(&["All", "Mains", "Cocktails"]);
        let ids: Vec<_> = filter_menu(&m.items, "Mains").iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 3]);
        assert!(filter_menu(&m.items, "Specials").is_empty());
    }
}
