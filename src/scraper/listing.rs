use super::{exact_class_selector, single_container};
use crate::error::{Result, ScraperError};
use scraper::{Html, Selector};

pub const LISTING_CONTAINER_CLASS: &str = "entries clr";
pub const DEFAULT_TITLE: &str = "No title available";

/// One article anchor found on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLink {
    pub title: String,
    pub link: String,
}

pub struct ListingScraper<'a> {
    document: &'a Html,
}

impl<'a> ListingScraper<'a> {
    pub(crate) fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Every `a[href]` inside the single listing container, in document order.
    ///
    /// Fails with [`ScraperError::ContainerMismatch`] unless exactly one
    /// container is present.
    pub fn extract_links(&self) -> Result<Vec<ListingLink>> {
        let container_selector = exact_class_selector(LISTING_CONTAINER_CLASS)?;
        let container =
            single_container(self.document, &container_selector, LISTING_CONTAINER_CLASS)?;

        let anchor_selector =
            Selector::parse("a[href]").map_err(|e| ScraperError::SelectorError(e.to_string()))?;

        let links = container
            .select(&anchor_selector)
            .filter_map(|anchor| {
                let link = anchor.value().attr("href")?;
                let title = anchor.value().attr("title").unwrap_or(DEFAULT_TITLE);
                Some(ListingLink {
                    title: title.to_string(),
                    link: link.to_string(),
                })
            })
            .collect();

        Ok(links)
    }
}
