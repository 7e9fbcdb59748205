//! Raw CMS export record shapes.
//!
//! The CMS wraps every list entry in an object keyed by the referenced document
//! (`{ "post": {...} }`), and any level may be `null` when an editor removes a
//! reference without deleting its slot. These types mirror that layout exactly;
//! [`into_source`](BlogConfigRecord::into_source) flattens them into a
//! [`ContentSource`].

use crate::domain::{ContentSource, Item};
use serde::{Deserialize, Serialize};

/// Top-level export document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    #[serde(default)]
    pub blog_config: Option<BlogConfigRecord>,

    #[serde(default)]
    pub case_study_config: Option<CaseStudyConfigRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogConfigRecord {
    #[serde(default)]
    pub featured_post: Option<Item>,

    #[serde(default)]
    pub post_list: Option<Vec<Option<PostEntry>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    #[serde(default)]
    pub post: Option<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyConfigRecord {
    #[serde(default)]
    pub featured_study: Option<Item>,

    #[serde(default)]
    pub study_list: Option<Vec<Option<StudyEntry>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyEntry {
    #[serde(default)]
    pub study: Option<Item>,
}

impl BlogConfigRecord {
    /// Drops null wrappers and null references, keeping list order.
    #[must_use]
    pub fn into_source(self) -> ContentSource {
        let list = self
            .post_list
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.post)
            .collect();

        ContentSource::new(self.featured_post, list)
    }
}

impl CaseStudyConfigRecord {
    /// Drops null wrappers and null references, keeping list order.
    #[must_use]
    pub fn into_source(self) -> ContentSource {
        let list = self
            .study_list
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.study)
            .collect();

        ContentSource::new(self.featured_study, list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_entries_are_dropped() {
        let json = r#"{
            "featuredPost": { "id": "posts/a.md", "title": "A" },
            "postList": [
                { "post": { "id": "posts/b.md", "title": "B" } },
                null,
                { "post": null },
                { "post": { "id": "posts/a.md", "title": "A" } }
            ]
        }"#;

        let record: BlogConfigRecord = serde_json::from_str(json).unwrap();
        let source = record.into_source();
        assert_eq!(source.featured.as_ref().map(|i| i.id.as_str()), Some("posts/a.md"));
        let ids: Vec<_> = source.list.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["posts/b.md", "posts/a.md"]);
    }

    #[test]
    fn loosely_typed_fields_do_not_reject_the_export() {
        let json = r#"{
            "caseStudyConfig": {
                "featuredStudy": { "id": "studies/a.md", "headline": null, "tags": null },
                "studyList": [
                    { "study": { "id": "studies/b.md", "headline": "B", "tags": [null, "PPC"] } }
                ]
            },
            "blogConfig": {
                "postList": [
                    { "post": { "id": "posts/c.md", "title": "C", "readingTime": 5.5, "date": "2024-03-04" } }
                ]
            }
        }"#;

        let export: ExportRecord = serde_json::from_str(json).unwrap();

        let studies = export.case_study_config.unwrap().into_source();
        let featured = studies.featured.unwrap();
        assert_eq!(featured.title, "");
        assert!(featured.tags.is_empty());
        assert_eq!(studies.list[0].tags, vec!["PPC"]);

        let posts = export.blog_config.unwrap().into_source();
        assert_eq!(posts.list[0].reading_time, Some(6));
        assert!(posts.list[0].date.is_some());
    }

    #[test]
    fn missing_list_is_empty() {
        let record: CaseStudyConfigRecord = serde_json::from_str(r#"{ "featuredStudy": null }"#).unwrap();
        assert!(record.into_source().is_empty());
    }
}
