//! View model types handed to the presentation layer.
//!
//! View models are recomputed from browser state on every read via
//! [`ContentBrowser::compute_viewmodel`](crate::app::ContentBrowser::compute_viewmodel).
//! They carry no behavior, only display-ready data. All types serialize to
//! camelCase JSON so a front end can consume them directly.

use crate::content;
use crate::domain::{ContentKind, Item};
use serde::Serialize;

/// Everything a grid + filter bar needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserViewModel {
    /// `"All"` followed by distinct categories in first-seen order.
    pub categories: Vec<String>,

    pub active_category: String,

    pub search_query: String,

    /// Visible slice of the filtered sequence.
    pub displayed: Vec<Item>,

    /// Number of items passing the filter, regardless of pagination.
    pub total_count: usize,

    pub has_more: bool,

    pub is_empty: bool,

    /// One card per displayed item, same order.
    pub cards: Vec<ItemCard>,

    pub header: HeaderInfo,

    /// Present only when nothing is displayed.
    pub empty_state: Option<EmptyState>,

    /// Present only when more items can be revealed.
    pub load_more_label: Option<String>,
}

/// How a card should be drawn within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Featured,
    Standard,
}

/// Display-ready summary of a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCard {
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    pub category: Option<String>,
    pub variant: CardVariant,
    /// Short month + day, e.g. `"Mar 4"`. Empty when the item has no date.
    pub date_label: String,
    /// e.g. `"5 min"`.
    pub reading_time_label: Option<String>,
    pub primary_tag: Option<String>,
}

impl ItemCard {
    #[must_use]
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            slug: content::slug(&item.id),
            title: item.title.clone(),
            category: item.category_label().map(String::from),
            variant: if item.featured_flag {
                CardVariant::Featured
            } else {
                CardVariant::Standard
            },
            date_label: item
                .date
                .map(|d| d.format("%b %-d").to_string())
                .unwrap_or_default(),
            reading_time_label: item.reading_time.map(|m| format!("{m} min")),
            primary_tag: item.tags.first().cloned(),
        }
    }
}

/// Grid header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub title: String,
}

impl HeaderInfo {
    #[must_use]
    pub fn showing(kind: ContentKind, total_count: usize) -> Self {
        Self {
            title: format!("Showing {total_count} {}", kind.noun()),
        }
    }
}

/// Shown in place of the grid when the filter matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl EmptyState {
    #[must_use]
    pub fn for_kind(kind: ContentKind) -> Self {
        Self {
            message: format!("No {} found", kind.noun().to_lowercase()),
            subtitle: "Try adjusting your filters or search query.".to_string(),
        }
    }
}
