//! Pure content-browsing logic.
//!
//! Every function here is side-effect free and deterministic. The browser in
//! [`crate::app`] composes them on each recompute:
//!
//! ```text
//! ContentSource ─▶ unify ─▶ extract_categories
//!                    │
//!                    └─▶ FilterPredicate ─▶ slice ─▶ view model
//! ```
//!
//! # Modules
//!
//! - [`unify`]: Featured + list merge with duplicate suppression
//! - [`categories`]: Catch-all plus first-seen category labels
//! - [`filter`]: Category and text matching
//! - [`pagination`]: Load-more window
//! - [`related`]: Same-category-first related item picks
//! - [`slug`]: Document id to URL slug, static path lists

pub mod categories;
pub mod filter;
pub mod pagination;
pub mod related;
pub mod slug;
pub mod unify;

pub use categories::extract_categories;
pub use filter::{matches, FilterPredicate, FilterState, MatchStrategy};
pub use pagination::{slice, PageSlice, PaginationState};
pub use related::{related, DEFAULT_RELATED_LIMIT};
pub use slug::{slug, static_paths, DEFAULT_STATIC_PATH_LIMIT};
pub use unify::unify;
