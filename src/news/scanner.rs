use super::{EntryIds, NewsEntry};
use crate::client::Fetch;
use crate::scraper::Scraper;
pub use crate::{log_error, log_info, log_warn};

/// Collects the news entries of listing pages `start_page..=end_page`.
///
/// Each page is fetched from `{listing_url}/{page}`. A page that cannot be
/// fetched, or whose listing container is missing or duplicated, contributes
/// no entries and the scan moves on to the next page.
pub async fn scan<F: Fetch>(
    fetcher: &F,
    listing_url: &str,
    start_page: u32,
    end_page: u32,
    ids: &mut EntryIds,
) -> Vec<NewsEntry> {
    let mut entries = Vec::new();

    for page_number in start_page..=end_page {
        let url = format!("{}/{}", listing_url.trim_end_matches('/'), page_number);

        let html = match fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                log_error!(e => "[scanner] Error fetching page {}", url);
                continue;
            }
        };

        let scraper = Scraper::new(&html);
        match scraper.listing().extract_links() {
            Ok(links) => {
                log_info!("[scanner] Page {}: {} entries", page_number, links.len());
                entries.extend(links.into_iter().map(|link| NewsEntry {
                    id: ids.next_id(),
                    title: link.title,
                    link: link.link,
                }));
            }
            Err(e) => {
                log_warn!("[scanner] Skipping page {}: {}", url, e);
            }
        }
    }

    log_info!(
        "[scanner] Collected {} entries from pages {}..={}",
        entries.len(),
        start_page,
        end_page
    );
    entries
}
