//! Content item model shared by blog posts and case studies.
//!
//! Both content types reduce to the same shape for browsing purposes. The
//! case-study field names (`headline`, `description`, `industry`) are accepted
//! as serde aliases so a single [`Item`] deserializes from either collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catch-all category label that matches every item.
pub const ALL_CATEGORY: &str = "All";

/// Which collection a browser is showing.
///
/// Drives the default page size and the wording of display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// Blog articles.
    Blog,
    /// Client case studies.
    CaseStudies,
}

impl ContentKind {
    /// Parses a kind from user input. Accepts a few common spellings.
    ///
    /// ```
    /// use brandfolio::ContentKind;
    ///
    /// assert_eq!(ContentKind::parse("blog"), Some(ContentKind::Blog));
    /// assert_eq!(ContentKind::parse("case-studies"), Some(ContentKind::CaseStudies));
    /// assert_eq!(ContentKind::parse("podcasts"), None);
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "blog" | "posts" => Some(Self::Blog),
            "case-studies" | "case_studies" | "casestudies" | "studies" => Some(Self::CaseStudies),
            _ => None,
        }
    }

    /// Plural noun used in display labels.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Blog => "Articles",
            Self::CaseStudies => "Case Studies",
        }
    }
}

/// A single content record as authored in the CMS.
///
/// Read-only to the browser. `id` is the stable identity used for
/// deduplication; everything else is optional because CMS editors can leave
/// fields blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,

    #[serde(alias = "headline", default, deserialize_with = "lenient::string")]
    pub title: String,

    #[serde(alias = "description", default)]
    pub excerpt: Option<String>,

    #[serde(alias = "industry", default)]
    pub category: Option<String>,

    /// Marks the item for distinct rendering within the grid.
    #[serde(rename = "featured", default, deserialize_with = "lenient::flag")]
    pub featured_flag: bool,

    #[serde(default, deserialize_with = "lenient::tags")]
    pub tags: Vec<String>,

    /// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates.
    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<DateTime<Utc>>,

    /// Estimated reading time in minutes (blog posts only), rounded.
    #[serde(default, deserialize_with = "lenient::minutes")]
    pub reading_time: Option<u32>,
}

/// Field decoders that turn CMS nulls and loosely typed values into defaults
/// instead of failing the whole record.
mod lenient {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
    }

    pub fn tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let tags = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
        Ok(tags.unwrap_or_default().into_iter().flatten().collect())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let minutes = Option::<f64>::deserialize(deserializer)?;
        Ok(minutes
            .filter(|m| m.is_finite() && *m >= 0.0)
            .map(|m| m.round().min(f64::from(u32::MAX)) as u32))
    }

    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let raw = raw.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Ok(Some(timestamp.with_timezone(&Utc)));
        }
        Ok(NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|midnight| Utc.from_utc_datetime(&midnight)))
    }
}

impl Item {
    /// Creates an item with only identity and title set.
    ///
    /// ```
    /// use brandfolio::Item;
    ///
    /// let item = Item::new("posts/launch.md", "Launch checklist")
    ///     .with_category("Tech")
    ///     .with_excerpt("Ten things to verify");
    /// assert_eq!(item.category.as_deref(), Some("Tech"));
    /// assert!(!item.featured_flag);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: None,
            category: None,
            featured_flag: false,
            tags: Vec::new(),
            date: None,
            reading_time: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn featured(mut self) -> Self {
        self.featured_flag = true;
        self
    }

    /// Category label if present and non-empty.
    #[must_use]
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}
