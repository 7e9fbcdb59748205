//! Command-line front end for the content browser.
//!
//! Loads a CMS export, replays a filter/pagination session described on the
//! command line, and prints the resulting view model as JSON.
//!
//! # Usage
//!
//! ```text
//! brandfolio <export.json> [key=value ...]
//! ```
//!
//! # Keys
//!
//! - `kind`: `blog` (default) or `case-studies`
//! - `category`: category pill to select
//! - `query`: search box text
//! - `load_more`: how many times "load more" is clicked
//! - `slug`: print the detail view (item + related items) instead of the grid
//! - `config`: path to a TOML config file
//! - Any [`Config`] field (`blog_page_size`, `match_strategy`, `trace_level`, ...)
//!
//! Logs go to stderr; stdout carries only JSON.

#![allow(clippy::multiple_crate_versions)]

use brandfolio::observability::init_tracing;
use brandfolio::storage::JsonContentProvider;
use brandfolio::ui::ItemCard;
use brandfolio::{
    handle_event, initialize, BrowserError, Config, ContentBrowser, ContentKind, Event, Item, Result,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: brandfolio <export.json> [kind=blog|case-studies] [category=..] [query=..] [load_more=N] [slug=..] [config=path.toml]";

/// Detail page payload printed for `slug=...`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailView {
    item: Item,
    card: ItemCard,
    related: Vec<ItemCard>,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("brandfolio: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Splits arguments into the export path and `key=value` options.
fn parse_args(args: &[String]) -> Result<(PathBuf, BTreeMap<String, String>)> {
    let mut path = None;
    let mut options = BTreeMap::new();

    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => {
                options.insert(key.trim().to_string(), value.to_string());
            }
            None if path.is_none() => path = Some(PathBuf::from(arg)),
            None => return Err(BrowserError::Config(format!("unexpected argument '{arg}'\n{USAGE}"))),
        }
    }

    let path = path.ok_or_else(|| BrowserError::Config(USAGE.to_string()))?;
    Ok((path, options))
}

fn run(args: &[String]) -> Result<String> {
    let (export_path, options) = parse_args(args)?;

    let base = match options.get("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let config = base.with_overrides(&options);
    init_tracing(&config);

    let kind = match options.get("kind") {
        Some(value) => ContentKind::parse(value)
            .ok_or_else(|| BrowserError::Config(format!("unknown content kind '{value}'")))?,
        None => ContentKind::Blog,
    };

    let provider = JsonContentProvider::open(export_path)?;
    let mut session = initialize(&config);
    session
        .ready()
        .subscribe(|| tracing::debug!("content ready"));
    let mut browser = session.open(&provider, kind)?;

    if let Some(slug) = options.get("slug") {
        let item = browser
            .find_by_slug(slug)
            .ok_or_else(|| BrowserError::Config(format!("no {} with slug '{slug}'", kind.noun().to_lowercase())))?;
        let related = browser
            .related_to(&item, session.config().related_limit)
            .iter()
            .map(ItemCard::from_item)
            .collect();
        let detail = DetailView {
            card: ItemCard::from_item(&item),
            item,
            related,
        };
        return to_json(&detail);
    }

    if let Some(category) = options.get("category") {
        handle_event(&mut browser, &Event::SetCategory(category.clone()))?;
    }
    if let Some(query) = options.get("query") {
        handle_event(&mut browser, &Event::SetQuery(query.clone()))?;
    }
    let load_more = match options.get("load_more") {
        Some(n) => n
            .trim()
            .parse::<usize>()
            .map_err(|e| BrowserError::Config(format!("invalid load_more '{n}': {e}")))?,
        None => 0,
    };
    replay_load_more(&mut browser, load_more)?;

    to_json(&browser.compute_viewmodel())
}

/// Clicks "load more" up to `clicks` times, stopping once every filtered item
/// is visible. Further clicks would not change the view model.
fn replay_load_more(browser: &mut ContentBrowser, clicks: usize) -> Result<()> {
    let hidden = browser.filtered().len().saturating_sub(browser.visible_count());
    let page_size = browser.pagination().page_size();
    let useful = hidden.saturating_add(page_size - 1) / page_size;

    for _ in 0..clicks.min(useful) {
        handle_event(browser, &Event::LoadMore)?;
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| BrowserError::Parse(format!("failed to serialize output: {e}")))
}
