//! Category and free-text matching for content items.
//!
//! An item matches a [`FilterState`] when it passes both the category check
//! and the text check:
//!
//! - **Category**: the active category is the catch-all `"All"`, or equals the
//!   item's category exactly.
//! - **Text**: an empty query always matches. Otherwise the lowercased query
//!   must occur in the title, the excerpt, or any tag. A missing excerpt only
//!   fails its own field.
//!
//! The text check has two strategies. [`MatchStrategy::Substring`] is the
//! default and does plain case-insensitive containment.
//! [`MatchStrategy::Fuzzy`] splits the query on whitespace and requires every
//! token to skim-match one of the same fields.

use crate::domain::{Item, ALL_CATEGORY};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// Active category plus search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub active_category: String,
    pub search_query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            search_query: String::new(),
        }
    }
}

impl FilterState {
    /// True when the state lets every item through.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.active_category == ALL_CATEGORY && self.search_query.is_empty()
    }
}

/// How the free-text query is compared against item text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Every whitespace-separated token must skim-fuzzy-match.
    Fuzzy,
}

impl MatchStrategy {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "substring" => Some(Self::Substring),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// Reusable predicate built once per recompute.
///
/// Lowercases the query and sets up the fuzzy matcher a single time rather
/// than per item.
pub struct FilterPredicate<'a> {
    filter: &'a FilterState,
    query_lower: String,
    tokens: Vec<String>,
    matcher: Option<SkimMatcherV2>,
}

impl<'a> FilterPredicate<'a> {
    #[must_use]
    pub fn new(filter: &'a FilterState, strategy: MatchStrategy) -> Self {
        let query_lower = filter.search_query.to_lowercase();
        let (tokens, matcher) = match strategy {
            MatchStrategy::Fuzzy if !query_lower.trim().is_empty() => (
                query_lower.split_whitespace().map(String::from).collect(),
                Some(SkimMatcherV2::default()),
            ),
            _ => (vec![], None),
        };

        Self {
            filter,
            query_lower,
            tokens,
            matcher,
        }
    }

    /// Category match AND text match.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.matches_category(item) && self.matches_text(item)
    }

    fn matches_category(&self, item: &Item) -> bool {
        self.filter.active_category == ALL_CATEGORY
            || item.category.as_deref() == Some(self.filter.active_category.as_str())
    }

    fn matches_text(&self, item: &Item) -> bool {
        if self.filter.search_query.is_empty() {
            return true;
        }

        match &self.matcher {
            Some(matcher) => self.tokens.iter().all(|token| {
                searchable_fields(item)
                    .any(|field| matcher.fuzzy_match(&field.to_lowercase(), token).is_some())
            }),
            None => searchable_fields(item).any(|field| field.to_lowercase().contains(&self.query_lower)),
        }
    }
}

/// Title, then excerpt if present, then each tag.
fn searchable_fields(item: &Item) -> impl Iterator<Item = &str> {
    std::iter::once(item.title.as_str())
        .chain(item.excerpt.as_deref())
        .chain(item.tags.iter().map(String::as_str))
}

/// One-off form of [`FilterPredicate::matches`] using substring matching.
///
/// ```
/// use brandfolio::content::{matches, FilterState};
/// use brandfolio::Item;
///
/// let item = Item::new("1", "Scaling PPC").with_category("Ads");
/// let filter = FilterState {
///     active_category: "Ads".to_string(),
///     search_query: "ppc".to_string(),
/// };
/// assert!(matches(&item, &filter));
/// ```
#[must_use]
pub fn matches(item: &Item, filter: &FilterState) -> bool {
    FilterPredicate::new(filter, MatchStrategy::Substring).matches(item)
}
