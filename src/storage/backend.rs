//! Content provider abstraction.
//!
//! The browser never fetches anything itself; it is handed a [`ContentSource`]
//! snapshot at session start. A [`ContentProvider`] is whatever produces that
//! snapshot: a CMS export on disk, an in-memory fixture, or a network client
//! living outside this crate.

use crate::domain::error::Result;
use crate::domain::{ContentKind, ContentSource};

/// Supplies content snapshots per collection.
///
/// # Examples
///
/// ```no_run
/// use brandfolio::storage::{ContentProvider, JsonContentProvider};
/// use brandfolio::ContentKind;
/// use std::path::PathBuf;
///
/// let provider = JsonContentProvider::open(PathBuf::from("content/global.json"))?;
/// let source = provider.load(ContentKind::Blog)?;
/// println!("{} posts", source.list.len());
/// # Ok::<(), brandfolio::BrowserError>(())
/// ```
pub trait ContentProvider {
    /// Returns the featured item and list for `kind`.
    ///
    /// A collection absent from the backing data yields an empty source rather
    /// than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read or decoded.
    fn load(&self, kind: ContentKind) -> Result<ContentSource>;
}

/// Fixed in-memory snapshots, mostly useful for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticContentProvider {
    pub blog: ContentSource,
    pub case_studies: ContentSource,
}

impl ContentProvider for StaticContentProvider {
    fn load(&self, kind: ContentKind) -> Result<ContentSource> {
        Ok(match kind {
            ContentKind::Blog => self.blog.clone(),
            ContentKind::CaseStudies => self.case_studies.clone(),
        })
    }
}
