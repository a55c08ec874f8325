use std::str::FromStr;

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{ContributorRecord, LinkKind, SocialLinks};

use super::RosterSource;

/// A roster read back from an already rendered team page.
///
/// Each `.member` card contributes one record: the photo from its `img`,
/// `.member-name`, `.member-bio`, and one link per `a[href]` whose platform
/// can be told from the anchor's `data-kind`/`title` or from the URL.
#[derive(Debug, Clone)]
pub struct HtmlRoster {
    markup: String,
    base_url: Option<String>,
}

impl HtmlRoster {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            base_url: None,
        }
    }

    /// Resolve root-relative photo URLs against `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl RosterSource for HtmlRoster {
    #[instrument(skip_all, fields(base_url = ?self.base_url))]
    fn records(&self) -> Result<Vec<ContributorRecord>> {
        let document = Html::parse_document(&self.markup);
        let records = parse_members(&document, self.base_url.as_deref())?;
        debug!(count = records.len(), "parsed roster markup");
        Ok(records)
    }
}

fn parse_members(document: &Html, base_url: Option<&str>) -> Result<Vec<ContributorRecord>> {
    let member_selector = Selector::parse(".member")?;
    let photo_selector = Selector::parse("img[src]")?;
    let name_selector = Selector::parse(".member-name")?;
    let bio_selector = Selector::parse(".member-bio")?;
    let link_selector = Selector::parse("a[href]")?;

    let records = document
        .select(&member_selector)
        .map(|member| {
            let photo_url = member
                .select(&photo_selector)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(|src| normalize_url(src, base_url))
                .unwrap_or_default();

            let links = member
                .select(&link_selector)
                .filter_map(|a| {
                    let href = a.value().attr("href")?.trim();
                    if href.is_empty() {
                        return None;
                    }
                    let Some(kind) = link_kind(&a, href) else {
                        debug!(href, "skipping link of unknown platform");
                        return None;
                    };
                    Some((kind, href.to_string()))
                })
                .fold(SocialLinks::default(), |links, (kind, href)| {
                    // first link of a kind wins
                    if links.get(kind).is_empty() {
                        links.with(kind, href)
                    } else {
                        links
                    }
                });

            ContributorRecord {
                photo_url,
                name: select_text(&member, &name_selector),
                bio: select_text(&member, &bio_selector),
                links,
            }
        })
        .collect();

    Ok(records)
}

fn link_kind(anchor: &ElementRef, href: &str) -> Option<LinkKind> {
    let value = anchor.value();
    value
        .attr("data-kind")
        .into_iter()
        .chain(value.attr("title"))
        .find_map(|name| LinkKind::from_str(name.trim()).ok())
        .or_else(|| LinkKind::from_url(href))
}

/// Whitespace-collapsed text of the first element matching `selector`
/// inside `element`. Returns an empty string if nothing matches.
fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|el| el.text().flat_map(str::split_whitespace).join(" "))
        .unwrap_or_default()
}

/// Make a protocol-relative or root-relative URL absolute.
fn normalize_url(src: &str, base_url: Option<&str>) -> String {
    let src = src.trim();
    if src.starts_with("//") {
        format!("https:{src}")
    } else if let (true, Some(base)) = (src.starts_with('/'), base_url) {
        format!("{}{src}", base.trim_end_matches('/'))
    } else {
        src.to_string()
    }
}
