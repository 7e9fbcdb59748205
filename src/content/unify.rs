//! Merges the featured item and the regular list into one sequence.

use crate::domain::{ContentSource, Item};
use std::collections::HashSet;

/// Produces the logical ordered sequence for a content snapshot.
///
/// The featured item is prepended unless an item with the same `id` is already
/// in the list, in which case the list is returned in its original order. No
/// other reordering happens. Duplicate ids inside the list itself are also
/// dropped (first occurrence wins) so the output never repeats an id.
///
/// # Example
///
/// ```
/// use brandfolio::{content::unify, ContentSource, Item};
///
/// let source = ContentSource::new(
///     Some(Item::new("a", "Foo")),
///     vec![Item::new("b", "Bar"), Item::new("a", "Foo")],
/// );
/// let ids: Vec<_> = unify(&source).into_iter().map(|i| i.id).collect();
/// assert_eq!(ids, vec!["b", "a"]);
/// ```
#[must_use]
pub fn unify(source: &ContentSource) -> Vec<Item> {
    if source.is_empty() {
        return vec![];
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(source.list.len() + 1);
    let mut items = Vec::with_capacity(source.list.len() + 1);
    for item in &source.list {
        if seen.insert(item.id.as_str()) {
            items.push(item.clone());
        }
    }

    if let Some(featured) = &source.featured {
        if !seen.contains(featured.id.as_str()) {
            items.insert(0, featured.clone());
        }
    }

    tracing::trace!(
        list_len = source.list.len(),
        has_featured = source.featured.is_some(),
        unified_len = items.len(),
        "content unified"
    );

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_source_yields_nothing() {
        assert!(unify(&ContentSource::default()).is_empty());
    }

    #[test]
    fn featured_already_listed_keeps_list_order() {
        let source = ContentSource::new(
            Some(Item::new("a", "Foo").with_category("Tech")),
            vec![
                Item::new("b", "Bar").with_category("Tech"),
                Item::new("a", "Foo").with_category("Tech"),
            ],
        );

        let unified = unify(&source);
        assert_eq!(ids(&unified), vec!["b", "a"]);
    }

    #[test]
    fn featured_not_listed_is_prepended() {
        let source = ContentSource::new(
            Some(Item::new("f", "Featured")),
            vec![Item::new("b", "B"), Item::new("c", "C")],
        );

        assert_eq!(ids(&unify(&source)), vec!["f", "b", "c"]);
    }

    #[test]
    fn featured_only() {
        let source = ContentSource::new(Some(Item::new("f", "Featured")), vec![]);
        assert_eq!(ids(&unify(&source)), vec!["f"]);
    }

    #[test]
    fn output_never_repeats_an_id() {
        let source = ContentSource::new(
            Some(Item::new("x", "X")),
            vec![
                Item::new("y", "Y"),
                Item::new("y", "Y again"),
                Item::new("z", "Z"),
                Item::new("x", "X"),
            ],
        );

        let unified = unify(&source);
        let unique: HashSet<_> = unified.iter().map(|i| &i.id).collect();
        assert_eq!(unique.len(), unified.len());
        assert_eq!(ids(&unified), vec!["y", "z", "x"]);
    }
}
