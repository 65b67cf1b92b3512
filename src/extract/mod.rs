pub mod fields;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::dataset::JobListing;

/// Hard cap on accepted records per page, applied inside the discovery loop.
pub const MAX_LISTINGS: usize = 20;

/// Structural container selectors, most specific known layout first. The
/// first selector that matches anything is used for the whole page.
const CONTAINER_SELECTORS: &[&str] = &[
    ".item_recruit",
    ".list_item",
    r#"[class*="recruit"]"#,
    r#"[class*="item"]"#,
];

/// Class-attribute keywords for the degraded container scan.
const CONTAINER_KEYWORDS: &[&str] = &["item", "recruit", "job", "list"];

static CONTAINERS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    CONTAINER_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).unwrap())
        .collect()
});

static DIV_WITH_CLASS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div[class]").unwrap());

/// Discover the listing containers on a rendered page and extract one record
/// per container. Containers without a title are dropped; collection stops
/// once `MAX_LISTINGS` records have been accepted.
pub fn collect_listings(html: &str) -> Vec<JobListing> {
    let document = Html::parse_document(html);
    let containers = discover_containers(&document);

    let mut jobs = Vec::new();
    for container in containers {
        let job = fields::extract_listing(container);
        if job.title.is_empty() {
            debug!("container skipped: no recognizable title");
            continue;
        }
        jobs.push(job);
        if jobs.len() >= MAX_LISTINGS {
            break;
        }
    }
    jobs
}

fn discover_containers<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
    for (selector, raw) in CONTAINERS.iter().zip(CONTAINER_SELECTORS) {
        let found: Vec<_> = document.select(selector).collect();
        if !found.is_empty() {
            info!("{} containers found via {}", found.len(), raw);
            return found;
        }
    }
    fallback_scan(document)
}

/// Degraded path: no structural selector matched, so take every div whose
/// class attribute mentions a listing-ish keyword.
fn fallback_scan<'a>(document: &'a Html) -> Vec<ElementRef<'a>> {
    let found: Vec<_> = document
        .select(&DIV_WITH_CLASS)
        .filter(|el| {
            el.value().attr("class").is_some_and(|class| {
                let class = class.to_lowercase();
                CONTAINER_KEYWORDS.iter().any(|kw| class.contains(kw))
            })
        })
        .collect();
    info!("fallback scan found {} candidate containers", found.len());
    found
}

// ── Tests ──
