//! "Related articles" selection for an item detail page.

use crate::domain::Item;

/// Default number of related items shown under an article.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Picks up to `limit` items related to `current_id`.
///
/// The current item is excluded. Items sharing `category` move to the front;
/// otherwise the input order is kept (the sort is stable).
///
/// ```
/// use brandfolio::{content::related, Item};
///
/// let items = vec![
///     Item::new("a", "A").with_category("Tech"),
///     Item::new("b", "B").with_category("Ads"),
///     Item::new("c", "C").with_category("Ads"),
///     Item::new("d", "D").with_category("Tech"),
/// ];
/// let picked: Vec<_> = related(&items, "a", "Tech", 3).iter().map(|i| i.id.as_str()).collect();
/// assert_eq!(picked, vec!["d", "b", "c"]);
/// ```
#[must_use]
pub fn related<'a>(items: &'a [Item], current_id: &str, category: &str, limit: usize) -> Vec<&'a Item> {
    let mut candidates: Vec<&Item> = items.iter().filter(|item| item.id != current_id).collect();
    candidates.sort_by_key(|item| item.category.as_deref() != Some(category));
    candidates.truncate(limit);

    tracing::trace!(
        current_id = %current_id,
        category = %category,
        picked = candidates.len(),
        "related items selected"
    );

    candidates
}
