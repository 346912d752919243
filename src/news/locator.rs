use crate::client::Fetch;
use crate::scraper::{Scraper, Table};
pub use crate::{log_error, log_info, log_warn};

/// Tables inside the article content container of `link`.
///
/// Fetch failures and missing or duplicated containers are logged and
/// produce no tables.
pub async fn locate_tables<F: Fetch>(fetcher: &F, link: &str) -> Vec<Table> {
    let html = match fetcher.fetch(link).await {
        Ok(html) => html,
        Err(e) => {
            log_error!(e => "[locator] Error fetching article {}", link);
            return Vec::new();
        }
    };

    let scraper = Scraper::new(&html);
    match scraper.article().extract_tables() {
        Ok(tables) => {
            log_info!("[locator] {} tables in {}", tables.len(), link);
            tables
        }
        Err(e) => {
            log_warn!("[locator] No or multiple containers found for {}: {}", link, e);
            Vec::new()
        }
    }
}

/// Tables of every linked article, concatenated in link order.
pub async fn collect_tables<'a, F, I>(fetcher: &F, links: I) -> Vec<Table>
where
    F: Fetch,
    I: IntoIterator<Item = &'a str>,
{
    let mut tables = Vec::new();
    for link in links {
        tables.extend(locate_tables(fetcher, link).await);
    }
    tables
}
