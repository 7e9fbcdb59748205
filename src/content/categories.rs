//! Derives the filter categories offered for a sequence of items.

use crate::domain::{Item, ALL_CATEGORY};
use std::collections::HashSet;

/// Returns `["All", ...distinct categories in first-seen order]`.
///
/// Items with a missing or empty category contribute nothing. The featured
/// item is treated like any other member of the sequence.
///
/// ```
/// use brandfolio::{content::extract_categories, Item};
///
/// let items = vec![
///     Item::new("1", "One").with_category("Tech"),
///     Item::new("2", "Two").with_category("Growth"),
///     Item::new("3", "Three").with_category("Tech"),
/// ];
/// assert_eq!(extract_categories(&items), vec!["All", "Tech", "Growth"]);
/// assert_eq!(extract_categories(&[]), vec!["All"]);
/// ```
#[must_use]
pub fn extract_categories(items: &[Item]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_CATEGORY);

    let mut categories = vec![ALL_CATEGORY.to_string()];
    for category in items.iter().filter_map(Item::category_label) {
        if seen.insert(category) {
            categories.push(category.to_string());
        }
    }

    categories
}
