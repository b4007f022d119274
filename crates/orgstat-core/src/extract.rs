// SPDX-License-Identifier: Apache-2.0

//! Extraction of repository records from an organization listing page.
//!
//! The page is matched structurally: a container with id `org-repositories`
//! holds a list whose items each describe one repository. Within an item:
//!
//! - the name comes from the link marked `itemprop="name codeRepository"`,
//! - links whose `href` ends in `issues` / `pulls` carry the open counts,
//! - a `span.no-wrap` wraps a `<relative-time datetime="...">` element.
//!
//! Values are bound to their own record as the item is read, so an item
//! lacking a count never shifts values onto its neighbours. A malformed item
//! is logged and skipped; a missing container or list fails the whole parse.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::OrgstatError;
use crate::record::RepositoryRecord;
use crate::time::{Clock, SystemClock, TimeFormatter, parse_timestamp};

/// Element id of the repository listing container.
pub const CONTAINER_ID: &str = "org-repositories";

static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| selector(&format!("#{CONTAINER_ID}")));
static LIST: LazyLock<Selector> = LazyLock::new(|| selector("ul"));
static NAME_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"a[itemprop*="name codeRepository"]"#));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
static NO_WRAP: LazyLock<Selector> = LazyLock::new(|| selector("span.no-wrap"));
static TIME_INDICATOR: LazyLock<Selector> =
    LazyLock::new(|| selector("relative-time[datetime]"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid CSS selector")
}

/// Turns a listing document into repository records.
pub trait Extractor {
    /// Parses `document`, returning one record per well-formed list item in
    /// document order.
    fn parse(&self, document: &str) -> crate::Result<Vec<RepositoryRecord>>;
}

/// Extractor for GitHub organization pages.
#[derive(Debug, Clone, Default)]
pub struct OrgPageExtractor<C = SystemClock> {
    formatter: TimeFormatter<C>,
}

impl<C: Clock> OrgPageExtractor<C> {
    /// Creates an extractor formatting update times with `formatter`.
    pub fn new(formatter: TimeFormatter<C>) -> Self {
        Self { formatter }
    }

    fn extract_item(&self, item: ElementRef<'_>) -> crate::Result<RepositoryRecord> {
        let name = item
            .select(&NAME_LINK)
            .next()
            .map(text_of)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| OrgstatError::structure("list item has no repository name link"))?;

        let mut record = RepositoryRecord::named(name);

        // The name link's href is the repository path, which may itself end
        // in `issues` or `pulls`.
        let count_links = item.select(&LINK).filter(|link| !is_name_link(*link));
        for link in count_links {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if href.ends_with("issues") && record.issue_count.is_none() {
                record.issue_count = Some(parse_count(&text_of(link))?);
            } else if href.ends_with("pulls") && record.pull_request_count.is_none() {
                record.pull_request_count = Some(parse_count(&text_of(link))?);
            }
        }

        // First no-wrap span carrying a timestamp wins.
        let datetime = item
            .select(&NO_WRAP)
            .find_map(|span| span.select(&TIME_INDICATOR).next())
            .and_then(|time| time.value().attr("datetime"));

        if let Some(datetime) = datetime {
            let instant = parse_timestamp(datetime)?;
            record.updated_at = Some(instant);
            record.last_updated = Some(self.formatter.since(instant));
        }

        Ok(record)
    }
}

impl<C: Clock> Extractor for OrgPageExtractor<C> {
    fn parse(&self, document: &str) -> crate::Result<Vec<RepositoryRecord>> {
        let html = Html::parse_document(document);

        let container = html.select(&CONTAINER).next().ok_or_else(|| {
            OrgstatError::structure(format!("no element with id `{CONTAINER_ID}`"))
        })?;
        let list = container.select(&LIST).next().ok_or_else(|| {
            OrgstatError::structure(format!("no list inside `#{CONTAINER_ID}`"))
        })?;

        let items = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "li");

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        for (index, item) in items.enumerate() {
            match self.extract_item(item) {
                Ok(record) if seen.insert(record.name.clone()) => records.push(record),
                Ok(record) => {
                    warn!(index, name = %record.name, "Skipping duplicate repository entry");
                }
                Err(err) => warn!(index, error = %err, "Skipping malformed repository entry"),
            }
        }

        debug!(count = records.len(), "Extracted repository records");
        Ok(records)
    }
}

fn is_name_link(link: ElementRef<'_>) -> bool {
    link.value()
        .attr("itemprop")
        .is_some_and(|prop| prop.contains("codeRepository"))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses a count, tolerating `1,234`-style digit grouping.
fn parse_count(text: &str) -> crate::Result<u64> {
    let digits: String = text
        .chars()
        .filter(|c| !matches!(c, ',' | '_') && !c.is_whitespace())
        .collect();
    digits
        .parse()
        .map_err(|_| OrgstatError::parse("count", text))
}
