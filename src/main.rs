mod client;
mod config;
mod error;
mod logging;
mod news;
mod prompt;
mod scraper;
mod store;
mod winnings;

use crate::client::ClientBuilder;
use crate::config::Config;
use crate::error::Result;
use crate::logging::{init_logging, LoggerConfig};
use crate::news::EntryIds;
use std::io;
use std::path::Path;

/// First `limit` records, or all of them when `limit` is zero.
fn select_links<T>(records: &[T], limit: usize) -> &[T] {
    if limit == 0 {
        records
    } else {
        &records[..limit.min(records.len())]
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_file_or_default("config.toml")?;
    init_logging(LoggerConfig::from_log_config(&config.logging)?)?;

    log_info!("[main] Starting poker winnings scraper...");

    let client = ClientBuilder::from_config(&config)?.build()?;

    let page_count = prompt::read_page_count(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        config.max_page_count,
    )?;
    let start_page = config.start_page;
    let end_page = start_page + page_count - 1;

    // First phase: collect article links from the listing pages
    log_info!(
        "[main] Scanning listing pages {}..={}",
        start_page,
        end_page
    );
    let mut ids = EntryIds::new();
    let entries = news::scan(
        &client,
        &config.listing_url(),
        start_page,
        end_page,
        &mut ids,
    )
    .await;

    let results_dir = Path::new(&config.results_dir);
    let news_path = store::news_entries_path(results_dir, start_page, end_page);
    store::write_news_entries(&news_path, &entries)?;

    // Second phase: pull result tables out of every saved article
    let links = store::read_news_links(&news_path)?;
    let selected = select_links(&links, config.article_limit);
    log_info!(
        "[main] Reading tables from {} of {} articles",
        selected.len(),
        links.len()
    );

    let tables =
        news::collect_tables(&client, selected.iter().map(|record| record.link.as_str())).await;
    let raw_wins = winnings::extract(&tables);
    log_info!(
        "[main] Extracted {} paid finishes from {} tables",
        raw_wins.len(),
        tables.len()
    );
    store::write_raw_winnings(
        &store::raw_winnings_path(results_dir, selected.len()),
        &raw_wins,
    )?;

    // Third phase: normalize names and build the ledger
    let cleared = winnings::normalize_all(&raw_wins);
    let players_dir = Path::new(&config.players_dir);
    store::write_cleared_winners(&players_dir.join("cleared_winners"), &cleared)?;

    let rankings = winnings::rank(winnings::aggregate(&cleared));
    log_info!("[main] Ledger holds {} players", rankings.by_money.len());

    let sorted_dir = config.sorted_players_dir();
    store::write_ranking(
        &sorted_dir.join("winners_by_number_of_cashes"),
        &rankings.by_cashes,
    )?;
    store::write_ranking(&sorted_dir.join("winners_by_money"), &rankings.by_money)?;

    let query = prompt::read_query(&mut io::stdin().lock(), &mut io::stdout())?;
    let matches = winnings::find(&rankings.by_money, &query);
    prompt::print_matches(&mut io::stdout(), &matches)?;

    log_info!("[main] Done");
    Ok(())
}
