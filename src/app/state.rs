//! Content browser state and view model computation.
//!
//! [`ContentBrowser`] owns exactly three things: the immutable content snapshot
//! for the session, the [`FilterState`], and the [`PaginationState`].
//! Everything else (unified sequence, categories, filtered list, display
//! slice) is recomputed from those on every read, so derived state can never go
//! stale.
//!
//! # Recompute Pipeline
//!
//! 1. Unify featured + list
//! 2. Extract categories from the unified sequence
//! 3. Filter by category and query
//! 4. Slice to the visible window
//!
//! # Example
//!
//! ```rust
//! use brandfolio::{ContentBrowser, ContentKind, ContentSource, Item};
//!
//! let source = ContentSource::new(
//!     None,
//!     (0..6).map(|n| Item::new(n.to_string(), format!("Study {n}"))).collect(),
//! );
//! let mut browser = ContentBrowser::new(ContentKind::CaseStudies, source, 4);
//!
//! let vm = browser.compute_viewmodel();
//! assert_eq!(vm.displayed.len(), 4);
//! assert!(vm.has_more);
//!
//! browser.load_more();
//! let vm = browser.compute_viewmodel();
//! assert_eq!(vm.displayed.len(), 6);
//! assert!(!vm.has_more);
//! ```

use crate::content::{self, FilterPredicate, FilterState, MatchStrategy, PaginationState};
use crate::domain::{ContentKind, ContentSource, Item, ALL_CATEGORY};
use crate::ui::viewmodel::{BrowserViewModel, EmptyState, HeaderInfo, ItemCard};

/// Client-side controller for browsing one content collection.
#[derive(Debug, Clone)]
pub struct ContentBrowser {
    kind: ContentKind,

    /// Snapshot supplied at session start. Never mutated.
    source: ContentSource,

    strategy: MatchStrategy,

    filter: FilterState,

    pagination: PaginationState,
}

impl ContentBrowser {
    /// Creates a browser showing the first `page_size` items with no filter.
    #[must_use]
    pub fn new(kind: ContentKind, source: ContentSource, page_size: usize) -> Self {
        tracing::debug!(
            kind = ?kind,
            list_len = source.list.len(),
            has_featured = source.featured.is_some(),
            page_size,
            "content browser created"
        );

        Self {
            kind,
            source,
            strategy: MatchStrategy::default(),
            filter: FilterState::default(),
            pagination: PaginationState::new(page_size),
        }
    }

    /// Switches the text matching strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        self.kind
    }

    #[must_use]
    pub const fn source(&self) -> &ContentSource {
        &self.source
    }

    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub const fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.pagination.visible_count()
    }

    /// Selects a category and returns to the first page.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.active_category = category.into();
        self.pagination.reset();
        tracing::debug!(category = %self.filter.active_category, "category changed");
    }

    /// Replaces the search query and returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.pagination.reset();
        tracing::debug!(query = %self.filter.search_query, "search query changed");
    }

    /// Reveals one more page. Filter state is untouched.
    pub fn load_more(&mut self) {
        self.pagination.load_more();
        tracing::debug!(visible_count = self.pagination.visible_count(), "loaded more");
    }

    /// Resets both filter and pagination to their defaults.
    pub fn clear(&mut self) {
        self.filter = FilterState::default();
        self.pagination.reset();
        tracing::debug!("filters cleared");
    }

    /// Featured + list, deduplicated by id.
    #[must_use]
    pub fn unified(&self) -> Vec<Item> {
        content::unify(&self.source)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        content::extract_categories(&self.unified())
    }

    /// Whether `category` is selectable for the current content.
    #[must_use]
    pub fn offers_category(&self, category: &str) -> bool {
        category == ALL_CATEGORY || self.categories().iter().any(|c| c == category)
    }

    /// Unified items passing the current filter, in unified order.
    #[must_use]
    pub fn filtered(&self) -> Vec<Item> {
        let predicate = FilterPredicate::new(&self.filter, self.strategy);
        self.unified().into_iter().filter(|item| predicate.matches(item)).collect()
    }

    /// Looks up an item of this collection by its URL slug.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<Item> {
        self.unified()
            .into_iter()
            .find(|item| content::slug(&item.id).as_deref() == Some(slug))
    }

    /// Items to suggest under `item`'s detail page.
    #[must_use]
    pub fn related_to(&self, item: &Item, limit: usize) -> Vec<Item> {
        let unified = self.unified();
        let category = item.category.as_deref().unwrap_or_default();
        content::related(&unified, &item.id, category, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Slugs of detail pages to pre-generate.
    #[must_use]
    pub fn static_paths(&self, limit: usize) -> Vec<String> {
        content::static_paths(&self.source, limit)
    }

    /// Computes the full view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> BrowserViewModel {
        let _span = tracing::debug_span!("compute_viewmodel",
            kind = ?self.kind,
            category = %self.filter.active_category,
            query_len = self.filter.search_query.len(),
            visible_count = self.pagination.visible_count()
        )
        .entered();

        let unified = self.unified();
        let categories = content::extract_categories(&unified);

        let predicate = FilterPredicate::new(&self.filter, self.strategy);
        let filtered: Vec<Item> = unified.into_iter().filter(|item| predicate.matches(item)).collect();

        let page = content::slice(&filtered, self.pagination.visible_count());
        let displayed = page.displayed.to_vec();
        let has_more = page.has_more;
        let is_empty = displayed.is_empty();
        let total_count = filtered.len();

        tracing::debug!(
            categories = categories.len(),
            total_count,
            displayed = displayed.len(),
            has_more,
            "view model computed"
        );

        BrowserViewModel {
            cards: displayed.iter().map(ItemCard::from_item).collect(),
            header: HeaderInfo::showing(self.kind, total_count),
            empty_state: is_empty.then(|| EmptyState::for_kind(self.kind)),
            load_more_label: has_more.then(|| format!("Load More {}", self.kind.noun())),
            categories,
            active_category: self.filter.active_category.clone(),
            search_query: self.filter.search_query.clone(),
            displayed,
            total_count,
            has_more,
            is_empty,
        }
    }
}
