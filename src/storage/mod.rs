//! Content snapshot sources.
//!
//! # Modules
//!
//! - `backend`: Provider trait and an in-memory implementation
//! - `json`: CMS export-file provider
//! - `models`: Raw export record shapes, separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::{ContentProvider, StaticContentProvider};
pub use json::JsonContentProvider;
pub use models::{BlogConfigRecord, CaseStudyConfigRecord, ExportRecord, PostEntry, StudyEntry};
