//! End-to-end browsing over a CMS export file on disk.

use brandfolio::storage::{ContentProvider, JsonContentProvider};
use brandfolio::{handle_event, initialize, BrowserError, Config, ContentKind, Event, MatchStrategy};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

const EXPORT: &str = r#"{
  "blogConfig": {
    "featuredPost": {
      "id": "content/posts/amazon-launch.mdx",
      "title": "Launching a brand on Amazon",
      "excerpt": "Step-by-step playbook",
      "category": "Launch",
      "featured": true,
      "date": "2024-03-04T00:00:00.000Z",
      "readingTime": 7
    },
    "postList": [
      { "post": { "id": "content/posts/ppc-basics.md", "title": "PPC basics", "excerpt": "Sponsored products 101", "category": "Ads" } },
      null,
      { "post": { "id": "content/posts/listing-seo.md", "title": "Listing SEO", "excerpt": null, "category": "SEO" } },
      { "post": null },
      { "post": { "id": "content/posts/dsp.md", "title": "DSP retargeting", "category": "Ads" } },
      { "post": { "id": "content/posts/a-plus.md", "title": "A+ content that converts", "category": "Creative" } },
      { "post": { "id": "content/posts/reviews.md", "title": "Review velocity", "category": "Growth" } },
      { "post": { "id": "content/posts/bundles.md", "title": "Bundles and variations", "category": "Growth" } },
      { "post": { "id": "content/posts/storefront.md", "title": "Storefront design", "category": "Creative" } }
    ]
  },
  "caseStudyConfig": {
    "featuredStudy": {
      "id": "content/studies/kitchen.md",
      "headline": "Kitchenware relaunch",
      "description": "Doubled conversion in 90 days",
      "industry": "Home",
      "featured": true,
      "tags": ["PPC", "A+ Content"]
    },
    "studyList": [
      { "study": { "id": "content/studies/kitchen.md", "headline": "Kitchenware relaunch", "industry": "Home" } },
      { "study": { "id": "content/studies/serum.md", "headline": "Skincare serum scale-up", "industry": "Beauty", "tags": ["DSP"] } }
    ]
  }
}"#;

fn export_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn blog_export_round_trip_through_browser() {
    let file = export_file(EXPORT);
    let provider = JsonContentProvider::open(file.path().to_path_buf()).unwrap();

    let mut session = initialize(&Config::default());
    let mut browser = session.open(&provider, ContentKind::Blog).unwrap();

    let vm = browser.compute_viewmodel();
    assert_eq!(vm.categories, vec!["All", "Launch", "Ads", "SEO", "Creative", "Growth"]);
    assert_eq!(vm.total_count, 8);
    assert_eq!(vm.displayed.len(), 6);
    assert!(vm.has_more);
    assert_eq!(vm.displayed[0].id, "content/posts/amazon-launch.mdx");
    assert_eq!(vm.cards[0].date_label, "Mar 4");
    assert_eq!(vm.header.title, "Showing 8 Articles");
    assert_eq!(vm.load_more_label.as_deref(), Some("Load More Articles"));

    handle_event(&mut browser, &Event::LoadMore).unwrap();
    let vm = browser.compute_viewmodel();
    assert_eq!(vm.displayed.len(), 8);
    assert!(!vm.has_more);

    handle_event(&mut browser, &Event::SetCategory("Ads".into())).unwrap();
    assert_eq!(browser.visible_count(), 6);
    let ids: Vec<_> = browser.compute_viewmodel().displayed.into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["content/posts/ppc-basics.md", "content/posts/dsp.md"]);

    handle_event(&mut browser, &Event::SetQuery("SPONSORED".into())).unwrap();
    assert_eq!(browser.compute_viewmodel().total_count, 1);

    handle_event(&mut browser, &Event::SetQuery("xyz".into())).unwrap();
    let vm = browser.compute_viewmodel();
    assert!(vm.is_empty);
    assert_eq!(vm.total_count, 0);
    assert!(vm.empty_state.is_some());

    handle_event(&mut browser, &Event::Clear).unwrap();
    assert_eq!(browser.compute_viewmodel().total_count, 8);
}

#[test]
fn case_studies_dedupe_featured_and_search_tags() {
    let file = export_file(EXPORT);
    let provider = JsonContentProvider::open(file.path().to_path_buf()).unwrap();

    let source = provider.load(ContentKind::CaseStudies).unwrap();
    assert_eq!(source.list.len(), 2);

    let mut session = initialize(&Config::default());
    let mut browser = session.open(&provider, ContentKind::CaseStudies).unwrap();

    let vm = browser.compute_viewmodel();
    let ids: HashSet<_> = vm.displayed.iter().map(|i| i.id.clone()).collect();
    assert_eq!(ids.len(), vm.displayed.len());
    assert_eq!(vm.total_count, 2);
    // Featured study already listed, so list order wins.
    assert_eq!(vm.displayed[0].title, "Kitchenware relaunch");
    assert!(!vm.displayed[0].featured_flag);
    assert_eq!(vm.categories, vec!["All", "Home", "Beauty"]);

    browser.set_query("dsp");
    let vm = browser.compute_viewmodel();
    assert_eq!(vm.total_count, 1);
    assert_eq!(vm.displayed[0].id, "content/studies/serum.md");
}

#[test]
fn detail_page_helpers() {
    let provider = JsonContentProvider::from_json(EXPORT).unwrap();
    let mut session = initialize(&Config::default());
    let browser = session.open(&provider, ContentKind::Blog).unwrap();

    let post = browser.find_by_slug("ppc-basics").unwrap();
    let related: Vec<_> = browser.related_to(&post, 3).into_iter().map(|i| i.id).collect();
    assert_eq!(
        related,
        vec![
            "content/posts/dsp.md",
            "content/posts/amazon-launch.mdx",
            "content/posts/listing-seo.md",
        ]
    );

    assert_eq!(
        browser.static_paths(5),
        vec!["amazon-launch", "ppc-basics", "listing-seo", "dsp", "a-plus"]
    );
}

#[test]
fn missing_collection_is_empty_not_an_error() {
    let provider = JsonContentProvider::from_json(r#"{ "blogConfig": null }"#).unwrap();
    let mut session = initialize(&Config::default());
    let browser = session.open(&provider, ContentKind::CaseStudies).unwrap();

    let vm = browser.compute_viewmodel();
    assert_eq!(vm.categories, vec!["All"]);
    assert!(vm.is_empty);
    assert!(!vm.has_more);
}

#[test]
fn malformed_export_is_a_parse_error() {
    let file = export_file("{ not json");
    let err = JsonContentProvider::open(file.path().to_path_buf()).unwrap_err();
    assert!(matches!(err, BrowserError::Parse(_)));
}

#[test]
fn missing_export_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = JsonContentProvider::open(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BrowserError::Io(_)));
}

#[test]
fn config_file_drives_page_size_and_strategy() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("brandfolio.toml");
    std::fs::write(&config_path, "blog_page_size = 3\nmatch_strategy = \"fuzzy\"\n").unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(config.match_strategy, MatchStrategy::Fuzzy);

    let provider = JsonContentProvider::from_json(EXPORT).unwrap();
    let mut session = initialize(&config);
    let mut browser = session.open(&provider, ContentKind::Blog).unwrap();
    assert_eq!(browser.compute_viewmodel().displayed.len(), 3);

    browser.set_query("rev vel");
    let ids: Vec<_> = browser.filtered().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["content/posts/reviews.md"]);
}

#[test]
fn loose_cms_fields_still_load_the_collection() {
    let export = r#"{
      "caseStudyConfig": {
        "studyList": [
          { "study": { "id": "content/studies/a.md", "headline": null, "industry": "Home", "tags": null } },
          { "study": { "id": "content/studies/b.md", "headline": "B", "industry": "Home", "tags": [null, "PPC"] } }
        ]
      },
      "blogConfig": {
        "postList": [
          { "post": { "id": "content/posts/c.md", "title": "C", "readingTime": 5.5, "date": "2024-03-04" } }
        ]
      }
    }"#;
    let provider = JsonContentProvider::from_json(export).unwrap();
    let mut session = initialize(&Config::default());

    let mut studies = session.open(&provider, ContentKind::CaseStudies).unwrap();
    assert_eq!(studies.compute_viewmodel().total_count, 2);
    studies.set_query("ppc");
    let ids: Vec<_> = studies.filtered().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["content/studies/b.md"]);

    let posts = session.open(&provider, ContentKind::Blog).unwrap();
    let card = &posts.compute_viewmodel().cards[0];
    assert_eq!(card.date_label, "Mar 4");
    assert_eq!(card.reading_time_label.as_deref(), Some("6 min"));
}
