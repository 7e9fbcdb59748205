//! JSON export-file content provider.
//!
//! Reads a CMS "global" export document once at open time and serves both
//! collections from memory.
//!
//! # File Format
//!
//! ```json
//! {
//!   "blogConfig": {
//!     "featuredPost": { "id": "content/posts/hero.md", "title": "..." },
//!     "postList": [ { "post": { "id": "content/posts/a.md", "title": "..." } } ]
//!   },
//!   "caseStudyConfig": {
//!     "featuredStudy": null,
//!     "studyList": [ { "study": { "id": "content/studies/x.md", "headline": "..." } } ]
//!   }
//! }
//! ```

use crate::domain::error::{BrowserError, Result};
use crate::domain::{ContentKind, ContentSource};
use crate::storage::backend::ContentProvider;
use crate::storage::models::ExportRecord;
use std::path::{Path, PathBuf};

/// Content provider backed by a JSON export file.
#[derive(Debug, Clone)]
pub struct JsonContentProvider {
    file_path: PathBuf,
    data: ExportRecord,
}

impl JsonContentProvider {
    /// Reads and decodes the export at `file_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not valid JSON or does not match the export layout
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening content export");
        let data = Self::load_from_file(&file_path)?;

        tracing::debug!(
            has_blog = data.blog_config.is_some(),
            has_case_studies = data.case_study_config.is_some(),
            "content export loaded"
        );

        Ok(Self { file_path, data })
    }

    /// Decodes an export already held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Parse`] if `json` does not match the export layout.
    pub fn from_json(json: &str) -> Result<Self> {
        let data = serde_json::from_str(json)
            .map_err(|e| BrowserError::Parse(format!("failed to parse content export: {e}")))?;
        Ok(Self {
            file_path: PathBuf::new(),
            data,
        })
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<ExportRecord> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            BrowserError::Parse(format!("failed to parse content export {}: {e}", path.display()))
        })
    }
}

impl ContentProvider for JsonContentProvider {
    fn load(&self, kind: ContentKind) -> Result<ContentSource> {
        let _span = tracing::debug_span!("json_load_content", kind = ?kind).entered();

        let source = match kind {
            ContentKind::Blog => self
                .data
                .blog_config
                .clone()
                .map(|config| config.into_source())
                .unwrap_or_default(),
            ContentKind::CaseStudies => self
                .data
                .case_study_config
                .clone()
                .map(|config| config.into_source())
                .unwrap_or_default(),
        };

        tracing::debug!(
            list_len = source.list.len(),
            has_featured = source.featured.is_some(),
            "content loaded"
        );
        Ok(source)
    }
}
