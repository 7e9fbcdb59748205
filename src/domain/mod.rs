//! Domain layer: content records, snapshots and errors.
//!
//! Nothing here knows about filtering or pagination; these are the plain data
//! shapes the rest of the crate operates on.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Content item model and content kinds
//! - [`source`]: Featured + list snapshot supplied by the CMS

pub mod error;
pub mod item;
pub mod source;

pub use error::{BrowserError, Result};
pub use item::{ContentKind, Item, ALL_CATEGORY};
pub use source::ContentSource;
