use super::normalize::display_name;
use super::PlayerWinNormalized;
use std::collections::{HashMap, HashSet};

/// Aggregated results for one player key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizedPlayer {
    pub first_name_and_initial: String,
    pub full_name: String,
    pub total_winnings: u64,
    pub occurrences: usize,
}

/// The same summarized players in two orders.
#[derive(Debug, Clone, Default)]
pub struct Rankings {
    pub by_cashes: Vec<SummarizedPlayer>,
    pub by_money: Vec<SummarizedPlayer>,
}

/// Drops records whose `(key, winnings)` pair was already seen. The first
/// occurrence is kept.
pub fn dedup(records: &[PlayerWinNormalized]) -> Vec<&PlayerWinNormalized> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|&record| seen.insert((record.first_name_and_initial.as_str(), record.winnings)))
        .collect()
}

/// Dedups and groups records by key, in order of first appearance.
pub fn aggregate(records: &[PlayerWinNormalized]) -> Vec<SummarizedPlayer> {
    let mut players: Vec<SummarizedPlayer> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in dedup(records) {
        let key = record.first_name_and_initial.as_str();
        match index.get(key) {
            Some(&position) => {
                let player = &mut players[position];
                player.total_winnings += record.winnings;
                player.occurrences += 1;
            }
            None => {
                index.insert(key, players.len());
                players.push(SummarizedPlayer {
                    first_name_and_initial: key.to_string(),
                    full_name: display_name(&record.full_name),
                    total_winnings: record.winnings,
                    occurrences: 1,
                });
            }
        }
    }

    players
}

/// Sorts descending by occurrences and by total winnings. Both sorts are
/// stable, so ties keep aggregation order.
pub fn rank(players: Vec<SummarizedPlayer>) -> Rankings {
    let mut by_cashes = players.clone();
    by_cashes.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));

    let mut by_money = players;
    by_money.sort_by(|a, b| b.total_winnings.cmp(&a.total_winnings));

    Rankings {
        by_cashes,
        by_money,
    }
}

/// Players whose key contains `query`, ignoring case, in ranking order.
pub fn find<'a>(ranking: &'a [SummarizedPlayer], query: &str) -> Vec<&'a SummarizedPlayer> {
    let query = query.to_lowercase();
    ranking
        .iter()
        .filter(|player| player.first_name_and_initial.to_lowercase().contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(full_name: &str, key: &str, winnings: u64) -> PlayerWinNormalized {
        PlayerWinNormalized {
            full_name: full_name.to_string(),
            first_name_and_initial: key.to_string(),
            winnings,
        }
    }

    fn summary(key: &str, total: u64, occurrences: usize) -> SummarizedPlayer {
        SummarizedPlayer {
            first_name_and_initial: key.to_string(),
            full_name: key.to_string(),
            total_winnings: total,
            occurrences,
        }
    }

    #[test]
    fn sums_per_key() {
        let records = vec![
            record("John Smith", "John S.", 100),
            record("John Smith", "John S.", 200),
            record("Jane Doe", "Jane D.", 50),
        ];
        let players = aggregate(&records);

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].first_name_and_initial, "John S.");
        assert_eq!(players[0].total_winnings, 300);
        assert_eq!(players[0].occurrences, 2);
        assert_eq!(players[1].first_name_and_initial, "Jane D.");
        assert_eq!(players[1].total_winnings, 50);
        assert_eq!(players[1].occurrences, 1);

        let rankings = rank(players);
        assert_eq!(rankings.by_money[0].first_name_and_initial, "John S.");
    }

    #[test]
    fn duplicate_pairs_count_once() {
        let records = vec![
            record("John Smith", "John S.", 100),
            record("john SMITHS", "John S.", 100),
            record("John Smith", "John S.", 250),
        ];
        assert_eq!(dedup(&records).len(), 2);

        let players = aggregate(&records);
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].total_winnings, 350);
        assert_eq!(players[0].occurrences, 2);
    }

    #[test]
    fn full_name_comes_from_first_record() {
        let records = vec![
            record("jOHN smith", "John S.", 10),
            record("John Schulz", "John S.", 20),
        ];
        let players = aggregate(&records);
        assert_eq!(players[0].full_name, "John Smith");
    }

    #[test]
    fn rankings_are_stable_on_ties() {
        let players = vec![
            summary("Anna A.", 100, 1),
            summary("Ben B.", 300, 2),
            summary("Cleo C.", 100, 2),
            summary("Dan D.", 50, 1),
        ];
        let rankings = rank(players);

        let cashes: Vec<_> = rankings
            .by_cashes
            .iter()
            .map(|p| p.first_name_and_initial.as_str())
            .collect();
        assert_eq!(cashes, vec!["Ben B.", "Cleo C.", "Anna A.", "Dan D."]);

        let money: Vec<_> = rankings
            .by_money
            .iter()
            .map(|p| p.first_name_and_initial.as_str())
            .collect();
        assert_eq!(money, vec!["Ben B.", "Anna A.", "Cleo C.", "Dan D."]);
    }

    #[test]
    fn lookup_is_case_insensitive_substring() {
        let ranking = vec![
            summary("John S.", 300, 2),
            summary("Mark T.", 200, 1),
            summary("JOHNNY K.", 100, 1),
        ];

        let keys: Vec<_> = find(&ranking, "john")
            .iter()
            .map(|p| p.first_name_and_initial.as_str())
            .collect();
        assert_eq!(keys, vec!["John S.", "JOHNNY K."]);

        assert_eq!(find(&ranking, "").len(), 3);
        assert!(find(&ranking, "zoe").is_empty());
    }
}
