//! Presentation-facing types.
//!
//! Rendering itself happens elsewhere (a web front end, or the CLI's JSON
//! dump). This layer only defines the display-ready shapes:
//!
//! ```text
//! ContentBrowser → compute_viewmodel → BrowserViewModel → presentation
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Grid view model, item cards, header and empty-state labels

pub mod viewmodel;

pub use viewmodel::{BrowserViewModel, CardVariant, EmptyState, HeaderInfo, ItemCard};
