//! Event handling for the content browser.
//!
//! The presentation layer translates clicks and keystrokes into [`Event`]s and
//! feeds them to [`handle_event`]. The handler mutates the browser and reports
//! whether the view needs recomputing.
//!
//! # Event Types
//!
//! - **Filter**: `SetCategory`, `SetQuery` (both reset pagination)
//! - **Pagination**: `LoadMore`
//! - **Reset**: `Clear`
//!
//! # Example
//!
//! ```rust
//! use brandfolio::{handle_event, ContentBrowser, ContentKind, ContentSource, Event, Item};
//!
//! let source = ContentSource::new(None, vec![Item::new("1", "One").with_category("Tech")]);
//! let mut browser = ContentBrowser::new(ContentKind::Blog, source, 6);
//!
//! assert!(handle_event(&mut browser, &Event::SetCategory("Tech".into()))?);
//! assert!(handle_event(&mut browser, &Event::SetCategory("Cooking".into())).is_err());
//! # Ok::<(), brandfolio::BrowserError>(())
//! ```

use crate::app::ContentBrowser;
use crate::domain::error::{BrowserError, Result};
use serde::{Deserialize, Serialize};

/// User interactions understood by the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Event {
    /// A category pill was clicked.
    SetCategory(String),
    /// The search box content changed.
    SetQuery(String),
    /// "Load more" was clicked.
    LoadMore,
    /// "Clear filters" was clicked.
    Clear,
}

/// Applies `event` to `browser`.
///
/// Returns `Ok(true)` when the view model should be recomputed. Every event
/// currently changes state, so successful calls always return `true`.
///
/// # Errors
///
/// Returns [`BrowserError::UnknownCategory`] for a `SetCategory` naming a
/// category the current content does not offer; the browser is left untouched.
pub fn handle_event(browser: &mut ContentBrowser, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetCategory(category) => {
            if !browser.offers_category(category) {
                tracing::debug!(category = %category, "rejecting unknown category");
                return Err(BrowserError::UnknownCategory(category.clone()));
            }
            browser.set_category(category.clone());
            Ok(true)
        }
        Event::SetQuery(query) => {
            browser.set_query(query.clone());
            Ok(true)
        }
        Event::LoadMore => {
            browser.load_more();
            Ok(true)
        }
        Event::Clear => {
            browser.clear();
            Ok(true)
        }
    }
}
