//! The content snapshot handed to a browser at session start.

use super::item::Item;
use serde::{Deserialize, Serialize};

/// A featured record plus the ordered regular list, as supplied by the CMS.
///
/// The featured item may or may not also appear in `list`; unification takes
/// care of suppressing the duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSource {
    #[serde(default)]
    pub featured: Option<Item>,
    #[serde(default)]
    pub list: Vec<Item>,
}

impl ContentSource {
    #[must_use]
    pub const fn new(featured: Option<Item>, list: Vec<Item>) -> Self {
        Self { featured, list }
    }

    /// True when neither a featured item nor any list item is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_none() && self.list.is_empty()
    }
}
