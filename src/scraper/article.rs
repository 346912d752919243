use super::{exact_class_selector, single_container};
use crate::error::{Result, ScraperError};
use scraper::{Html, Selector};

pub const ARTICLE_CONTAINER_CLASS: &str = "entry-content clr";

/// Trimmed text of each `td` in one table row.
pub type RawTableRow = Vec<String>;

/// A results table reduced to the body rows' cell texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<RawTableRow>,
}

impl Table {
    pub fn new(rows: Vec<RawTableRow>) -> Self {
        Self { rows }
    }
}

pub struct ArticleScraper<'a> {
    document: &'a Html,
}

impl<'a> ArticleScraper<'a> {
    pub(crate) fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// All tables inside the single article content container.
    pub fn extract_tables(&self) -> Result<Vec<Table>> {
        let container_selector = exact_class_selector(ARTICLE_CONTAINER_CLASS)?;
        let container =
            single_container(self.document, &container_selector, ARTICLE_CONTAINER_CLASS)?;

        let table_selector = parse_selector("table")?;
        let body_selector = parse_selector("tbody")?;
        let row_selector = parse_selector("tr")?;
        let cell_selector = parse_selector("td")?;

        let tables = container
            .select(&table_selector)
            .map(|table| {
                let rows = table
                    .select(&body_selector)
                    .flat_map(|body| body.select(&row_selector))
                    .map(|row| {
                        row.select(&cell_selector)
                            .map(|cell| cell.text().collect::<String>().trim().to_string())
                            .collect::<RawTableRow>()
                    })
                    .collect();
                Table::new(rows)
            })
            .collect();

        Ok(tables)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScraperError::SelectorError(e.to_string()).into())
}
