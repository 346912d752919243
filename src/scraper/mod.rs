mod article;
mod listing;

pub use article::{ArticleScraper, Table};
pub use listing::ListingScraper;

use crate::error::{Result, ScraperError};
use scraper::{ElementRef, Html, Selector};

pub struct Scraper {
    document: Html,
}

impl Scraper {
    pub fn new(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn listing(&self) -> ListingScraper {
        ListingScraper::new(&self.document)
    }

    pub fn article(&self) -> ArticleScraper {
        ArticleScraper::new(&self.document)
    }
}

/// Selector for elements whose `class` attribute is exactly `class_attr`.
///
/// The site marks its containers with a fixed class string such as
/// `entries clr`; other elements carry those classes in other combinations.
pub(crate) fn exact_class_selector(class_attr: &str) -> Result<Selector> {
    Selector::parse(&format!("[class=\"{}\"]", class_attr))
        .map_err(|e| ScraperError::SelectorError(e.to_string()).into())
}

/// Returns the only element matching `selector`, or a mismatch error with the
/// number of elements actually found.
pub(crate) fn single_container<'a>(
    document: &'a Html,
    selector: &Selector,
    class_attr: &str,
) -> Result<ElementRef<'a>> {
    let containers: Vec<_> = document.select(selector).collect();
    match containers.as_slice() {
        [container] => Ok(*container),
        _ => Err(ScraperError::ContainerMismatch {
            selector: class_attr.to_string(),
            found: containers.len(),
        }
        .into()),
    }
}
