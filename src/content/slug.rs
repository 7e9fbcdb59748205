//! URL slugs derived from CMS document ids.
//!
//! CMS ids are relative document paths such as `content/posts/launch-day.mdx`.
//! Detail pages are addressed by the file stem.

use crate::domain::ContentSource;

/// Default number of detail pages pre-generated per collection.
pub const DEFAULT_STATIC_PATH_LIMIT: usize = 5;

const DOCUMENT_EXTENSIONS: [&str; 3] = [".mdx", ".md", ".json"];

/// Last path segment of `id` with a document extension removed.
///
/// ```
/// use brandfolio::content::slug;
///
/// assert_eq!(slug("content/posts/launch-day.mdx").as_deref(), Some("launch-day"));
/// assert_eq!(slug("notes.json").as_deref(), Some("notes"));
/// assert_eq!(slug("content/posts/"), None);
/// ```
#[must_use]
pub fn slug(id: &str) -> Option<String> {
    let last = id.rsplit('/').next().unwrap_or(id);
    let stem = DOCUMENT_EXTENSIONS
        .iter()
        .find_map(|ext| last.strip_suffix(ext))
        .unwrap_or(last);

    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

/// Slugs to pre-generate for a collection.
///
/// List slugs come first in list order; the featured slug is prepended when the
/// list does not already contain it. The result is capped at `limit`.
#[must_use]
pub fn static_paths(source: &ContentSource, limit: usize) -> Vec<String> {
    let mut paths: Vec<String> = source.list.iter().filter_map(|item| slug(&item.id)).collect();

    if let Some(featured_slug) = source.featured.as_ref().and_then(|f| slug(&f.id)) {
        if !paths.contains(&featured_slug) {
            paths.insert(0, featured_slug);
        }
    }

    paths.truncate(limit);
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    #[test]
    fn only_the_final_extension_is_stripped() {
        assert_eq!(slug("a/b/report.v2.md").as_deref(), Some("report.v2"));
        assert_eq!(slug("plain").as_deref(), Some("plain"));
        assert_eq!(slug(".md"), None);
    }

    #[test]
    fn featured_prepended_when_missing() {
        let source = ContentSource::new(
            Some(Item::new("posts/hero.md", "Hero")),
            vec![Item::new("posts/one.md", "One"), Item::new("posts/two.md", "Two")],
        );
        assert_eq!(static_paths(&source, 5), vec!["hero", "one", "two"]);
    }

    #[test]
    fn featured_not_duplicated_and_limit_applies() {
        let list = (0..8).map(|n| Item::new(format!("posts/p{n}.md"), "p")).collect();
        let source = ContentSource::new(Some(Item::new("posts/p3.md", "p")), list);

        let paths = static_paths(&source, DEFAULT_STATIC_PATH_LIMIT);
        assert_eq!(paths, vec!["p0", "p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn empty_ids_are_skipped() {
        let source = ContentSource::new(None, vec![Item::new("", "blank"), Item::new("x.md", "x")]);
        assert_eq!(static_paths(&source, 5), vec!["x"]);
    }
}
