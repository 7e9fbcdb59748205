//! Brandfolio: content browsing for a CMS-backed portfolio site.
//!
//! Brandfolio is the client-side controller behind the blog and case-study
//! listings of a personal brand site. It provides:
//! - Merging of a featured item with the regular list, without duplicates
//! - Category pills derived from the content itself, always led by `"All"`
//! - Case-insensitive text search over titles, excerpts and tags
//! - Incremental "load more" pagination that resets whenever the filter changes
//! - Related-item picks and URL slugs for detail pages

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ContentBrowser state                             │
//! │  - Event dispatch                                   │
//! │  - Session flags                                    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Content (pure)│   │ Storage       │   │ UI            │
//! │ (content/)    │   │ (storage/)    │   │ (ui/)         │
//! │ - unify       │   │ - Provider    │   │ - View model  │
//! │ - categories  │   │ - JSON export │   │ - Cards       │
//! │ - filter/page │   │               │   │ - Labels      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) + Observability (observability/)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Browser state, event handling, session flags
//! - [`content`]: Pure unify/categorize/filter/paginate logic
//! - [`domain`]: Items, content snapshots, errors
//! - [`storage`]: Content providers (CMS JSON export)
//! - [`ui`]: View models for the presentation layer
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! blog_page_size = 6
//! case_study_page_size = 4
//! match_strategy = "substring"   # or "fuzzy"
//! related_limit = 3
//! static_path_limit = 5
//! trace_level = "info"
//! ```
//!
//! # Example
//!
//! ```rust
//! use brandfolio::storage::StaticContentProvider;
//! use brandfolio::{handle_event, initialize, Config, ContentKind, ContentSource, Event, Item};
//!
//! let provider = StaticContentProvider {
//!     blog: ContentSource::new(
//!         Some(Item::new("posts/hero.md", "Launching on Amazon").with_category("Launch")),
//!         vec![Item::new("posts/ppc.md", "PPC basics").with_category("Ads")],
//!     ),
//!     ..Default::default()
//! };
//!
//! let mut session = initialize(&Config::default());
//! let mut browser = session.open(&provider, ContentKind::Blog)?;
//! assert!(session.ready().is_finished());
//!
//! handle_event(&mut browser, &Event::SetCategory("Ads".to_string()))?;
//! let vm = browser.compute_viewmodel();
//! assert_eq!(vm.categories, vec!["All", "Launch", "Ads"]);
//! assert_eq!(vm.total_count, 1);
//! # Ok::<(), brandfolio::BrowserError>(())
//! ```

pub mod app;
pub mod content;
pub mod domain;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, ContentBrowser, Event, OnceFlag};
pub use content::{FilterState, MatchStrategy, PaginationState};
pub use domain::{BrowserError, ContentKind, ContentSource, Item, Result, ALL_CATEGORY};
pub use ui::BrowserViewModel;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use storage::ContentProvider;

const DEFAULT_BLOG_PAGE_SIZE: usize = 6;
const DEFAULT_CASE_STUDY_PAGE_SIZE: usize = 4;

/// Browser configuration.
///
/// Loaded from a TOML file with [`Config::from_file`] and/or from `key=value`
/// overrides with [`Config::with_overrides`]. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page for the blog. Default: 6
    pub blog_page_size: usize,

    /// Items per page for case studies. Default: 4
    pub case_study_page_size: usize,

    /// Text matching strategy. Default: substring
    pub match_strategy: MatchStrategy,

    /// Maximum related items under a detail page. Default: 3
    pub related_limit: usize,

    /// Maximum detail pages pre-generated per collection. Default: 5
    pub static_path_limit: usize,

    /// Tracing level (`trace`, `debug`, `info`, `warn`, `error`). `RUST_LOG`
    /// takes precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blog_page_size: DEFAULT_BLOG_PAGE_SIZE,
            case_study_page_size: DEFAULT_CASE_STUDY_PAGE_SIZE,
            match_strategy: MatchStrategy::default(),
            related_limit: content::DEFAULT_RELATED_LIMIT,
            static_path_limit: content::DEFAULT_STATIC_PATH_LIMIT,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or sets
    /// a page size of zero.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Parse`] for malformed TOML and
    /// [`BrowserError::Config`] for a zero page size.
    ///
    /// ```rust
    /// use brandfolio::{Config, MatchStrategy};
    ///
    /// let config = Config::from_toml("blog_page_size = 9\nmatch_strategy = \"fuzzy\"")?;
    /// assert_eq!(config.blog_page_size, 9);
    /// assert_eq!(config.case_study_page_size, 4);
    /// assert_eq!(config.match_strategy, MatchStrategy::Fuzzy);
    /// # Ok::<(), brandfolio::BrowserError>(())
    /// ```
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| BrowserError::Parse(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `key=value` overrides, keeping current values for keys that
    /// are missing or fail to parse.
    ///
    /// # Parsing Rules
    ///
    /// - `blog_page_size`, `case_study_page_size`: positive integer
    /// - `related_limit`, `static_path_limit`: integer
    /// - `match_strategy`: `substring` or `fuzzy`
    /// - `trace_level`: any string
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use brandfolio::Config;
    ///
    /// let mut args = BTreeMap::new();
    /// args.insert("blog_page_size".to_string(), "12".to_string());
    /// args.insert("case_study_page_size".to_string(), "0".to_string());
    ///
    /// let config = Config::default().with_overrides(&args);
    /// assert_eq!(config.blog_page_size, 12);
    /// assert_eq!(config.case_study_page_size, 4);
    /// ```
    #[must_use]
    pub fn with_overrides(self, args: &BTreeMap<String, String>) -> Self {
        let positive = |key: &str, current: usize| {
            args.get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(current)
        };
        let count = |key: &str, current: usize| {
            args.get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(current)
        };

        Self {
            blog_page_size: positive("blog_page_size", self.blog_page_size),
            case_study_page_size: positive("case_study_page_size", self.case_study_page_size),
            match_strategy: args
                .get("match_strategy")
                .and_then(|s| MatchStrategy::parse(s))
                .unwrap_or(self.match_strategy),
            related_limit: count("related_limit", self.related_limit),
            static_path_limit: count("static_path_limit", self.static_path_limit),
            trace_level: args.get("trace_level").cloned().or(self.trace_level),
        }
    }

    /// Page size used for `kind`.
    #[must_use]
    pub const fn page_size(&self, kind: ContentKind) -> usize {
        match kind {
            ContentKind::Blog => self.blog_page_size,
            ContentKind::CaseStudies => self.case_study_page_size,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.blog_page_size == 0 {
            return Err(BrowserError::Config("blog_page_size must be positive".to_string()));
        }
        if self.case_study_page_size == 0 {
            return Err(BrowserError::Config("case_study_page_size must be positive".to_string()));
        }
        Ok(())
    }
}

/// One page view: configuration plus the flags shared across its browsers.
#[derive(Debug)]
pub struct Session {
    config: Config,
    ready: OnceFlag,
}

impl Session {
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Flag set once the first collection has been loaded.
    pub fn ready(&mut self) -> &mut OnceFlag {
        &mut self.ready
    }

    /// Loads `kind` from `provider` and builds a browser for it.
    ///
    /// # Errors
    ///
    /// Propagates provider errors.
    pub fn open(&mut self, provider: &dyn ContentProvider, kind: ContentKind) -> Result<ContentBrowser> {
        let _span = tracing::debug_span!("session_open", kind = ?kind).entered();

        let source = provider.load(kind)?;
        let browser = ContentBrowser::new(kind, source, self.config.page_size(kind))
            .with_strategy(self.config.match_strategy);

        self.ready.set_finished();
        Ok(browser)
    }
}

/// Starts a session with `config`.
///
/// Does not install a tracing subscriber; binaries call
/// [`observability::init_tracing`] themselves.
#[must_use]
pub fn initialize(config: &Config) -> Session {
    tracing::debug!(
        blog_page_size = config.blog_page_size,
        case_study_page_size = config.case_study_page_size,
        match_strategy = ?config.match_strategy,
        "initializing brandfolio session"
    );

    Session {
        config: config.clone(),
        ready: OnceFlag::new(),
    }
}
