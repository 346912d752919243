//! CSV files written and read by a run. Every write replaces the whole file.

use crate::error::Result;
use crate::news::NewsEntry;
use crate::winnings::{PlayerWinNormalized, PlayerWinRaw, SummarizedPlayer};
pub use crate::log_info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const NEWS_HEADER: [&str; 2] = ["Title", "Link"];
const RAW_WINNINGS_HEADER: [&str; 2] = ["Full Name", "Winnings"];
const CLEARED_WINNERS_HEADER: [&str; 3] = ["Full Name", "Winnings", "First Name And Initial"];
const RANKING_HEADER: [&str; 4] = [
    "First Name And Initial",
    "Winnings",
    "Full Name",
    "Occurrences",
];

/// A persisted news entry; ids are not written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Link")]
    pub link: String,
}

#[derive(Serialize)]
struct RawWinningRecord {
    full_name: String,
    winnings: u64,
}

#[derive(Serialize)]
struct ClearedWinnerRecord<'a> {
    full_name: &'a str,
    winnings: u64,
    first_name_and_initial: &'a str,
}

#[derive(Serialize)]
struct RankedPlayerRecord<'a> {
    first_name_and_initial: &'a str,
    winnings: u64,
    full_name: &'a str,
    occurrences: usize,
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn news_entries_path(dir: &Path, start_page: u32, end_page: u32) -> PathBuf {
    dir.join(format!(
        "news_entries_start_{}_end_{}.csv",
        start_page, end_page
    ))
}

pub fn raw_winnings_path(dir: &Path, entry_count: usize) -> PathBuf {
    dir.join(format!("winnings_for_last_{}_news.csv", entry_count))
}

/// Writes `header` followed by one row per record. The header is written even
/// when there are no records.
fn write_csv<T, I>(path: &Path, header: &[&str], records: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(header)?;

    let mut rows = 0;
    for record in records {
        writer.serialize(record)?;
        rows += 1;
    }
    writer.flush()?;

    log_info!("[store] Wrote {} rows to {:?}", rows, path);
    Ok(())
}

pub fn write_news_entries(path: &Path, entries: &[NewsEntry]) -> Result<()> {
    write_csv(
        path,
        &NEWS_HEADER,
        entries.iter().map(|entry| NewsRecord {
            title: entry.title.clone(),
            link: entry.link.clone(),
        }),
    )
}

pub fn read_news_links(path: &Path) -> Result<Vec<NewsRecord>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: NewsRecord = result?;
        records.push(record);
    }

    log_info!("[store] Read {} news links from {:?}", records.len(), path);
    Ok(records)
}

pub fn write_raw_winnings(path: &Path, wins: &[PlayerWinRaw]) -> Result<()> {
    write_csv(
        path,
        &RAW_WINNINGS_HEADER,
        wins.iter().map(|win| RawWinningRecord {
            full_name: win.full_name(),
            winnings: win.winnings,
        }),
    )
}

pub fn write_cleared_winners(path: &Path, winners: &[PlayerWinNormalized]) -> Result<()> {
    write_csv(
        path,
        &CLEARED_WINNERS_HEADER,
        winners.iter().map(|winner| ClearedWinnerRecord {
            full_name: &winner.full_name,
            winnings: winner.winnings,
            first_name_and_initial: &winner.first_name_and_initial,
        }),
    )
}

pub fn write_ranking(path: &Path, players: &[SummarizedPlayer]) -> Result<()> {
    write_csv(
        path,
        &RANKING_HEADER,
        players.iter().map(|player| RankedPlayerRecord {
            first_name_and_initial: &player.first_name_and_initial,
            winnings: player.total_winnings,
            full_name: &player.full_name,
            occurrences: player.occurrences,
        }),
    )
}
