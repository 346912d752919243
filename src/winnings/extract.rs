use super::PlayerWinRaw;
use crate::scraper::Table;
use regex::Regex;
use std::sync::OnceLock;

pub const CURRENCY_MARKER: char = '€';

/// Sponsor name that some tables put in a dotted cell, e.g. `Pokerstars.de`.
const SPURIOUS_SURNAME: &str = "Pokerstars";

/// What a single cell contributes to its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Contains a `.` and at least one letter. Last match in a row wins.
    Surname,
    /// Only letters, whitespace and `.`, longer than three characters.
    /// All matches in a row are joined.
    NameFragment,
    /// Contains the currency marker and a digit run. Last match in a row wins.
    Amount(u64),
    Unclassified,
}

type Rule = fn(&str) -> Option<CellRole>;

// Rules are independent; a cell can take several roles.
const RULES: [Rule; 3] = [surname_rule, name_fragment_rule, amount_rule];

fn surname_rule(text: &str) -> Option<CellRole> {
    (text.contains('.') && text.chars().any(char::is_alphabetic)).then_some(CellRole::Surname)
}

fn name_fragment_rule(text: &str) -> Option<CellRole> {
    let name_like = text
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '.');
    (name_like && text.chars().count() > 3).then_some(CellRole::NameFragment)
}

fn amount_rule(text: &str) -> Option<CellRole> {
    if !text.contains(CURRENCY_MARKER) {
        return None;
    }
    parse_amount(text).map(CellRole::Amount)
}

pub fn classify_cell(text: &str) -> Vec<CellRole> {
    let roles: Vec<CellRole> = RULES.iter().filter_map(|rule| rule(text)).collect();
    if roles.is_empty() {
        vec![CellRole::Unclassified]
    } else {
        roles
    }
}

/// First digit run (dots allowed between digits), with the dots removed.
///
/// `€1.234` is 1234 and `1.234.567` is 1234567. Returns `None` when there is
/// no digit run or the value does not fit.
pub fn parse_amount(text: &str) -> Option<u64> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?:€)?([0-9]+(?:\.[0-9]+)*)").unwrap());

    let digits = re.captures(text)?.get(1)?.as_str().replace('.', "");
    digits.parse().ok()
}

/// Reads one body row. Rows without a currency marker, or without a
/// parseable amount, produce nothing.
pub fn extract_row(cells: &[String]) -> Option<PlayerWinRaw> {
    if !cells.iter().any(|cell| cell.contains(CURRENCY_MARKER)) {
        return None;
    }

    let mut name_or_alias = String::new();
    let mut surname = String::new();
    let mut amount: Option<(u64, &str)> = None;

    for cell in cells {
        let text = cell.trim();
        for role in classify_cell(text) {
            match role {
                CellRole::Surname => surname = text.to_string(),
                CellRole::NameFragment => {
                    name_or_alias.push(' ');
                    name_or_alias.push_str(text);
                }
                CellRole::Amount(value) => amount = Some((value, text)),
                CellRole::Unclassified => {}
            }
        }
    }

    let (winnings, amount_text) = amount?;

    let name_missing = name_or_alias.chars().all(char::is_whitespace);
    if name_missing && (surname.is_empty() || surname.contains(SPURIOUS_SURNAME)) {
        // Name and amount share one cell, e.g. `John Smith €500`.
        let mut tokens = amount_text
            .split_whitespace()
            .filter(|token| !is_amount_token(token));
        name_or_alias = tokens.next().unwrap_or_default().to_string();
        surname = tokens.next().unwrap_or_default().to_string();
    }

    Some(PlayerWinRaw {
        name_or_alias,
        surname,
        winnings,
    })
}

fn is_amount_token(token: &str) -> bool {
    token.contains(CURRENCY_MARKER) || token.chars().any(|c| c.is_ascii_digit())
}

pub fn extract(tables: &[Table]) -> Vec<PlayerWinRaw> {
    tables
        .iter()
        .flat_map(|table| table.rows.iter())
        .filter_map(|row| extract_row(row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn parses_amounts_with_thousands_dots() {
        assert_eq!(parse_amount("€1.234"), Some(1234));
        assert_eq!(parse_amount("1.234.567"), Some(1234567));
        assert_eq!(parse_amount("Preisgeld: € 750,-"), Some(750));
        assert_eq!(parse_amount("no amount"), None);
        assert_eq!(parse_amount("€"), None);
        assert_eq!(parse_amount("€99999999999999999999999"), None);
    }

    #[test]
    fn classifies_cells_independently() {
        assert_eq!(
            classify_cell("Müller."),
            vec![CellRole::Surname, CellRole::NameFragment]
        );
        assert_eq!(classify_cell("John ALIAS"), vec![CellRole::NameFragment]);
        assert_eq!(classify_cell("€1.500"), vec![CellRole::Amount(1500)]);
        assert_eq!(classify_cell("Jan"), vec![CellRole::Unclassified]);
        assert_eq!(classify_cell("€ -"), vec![CellRole::Unclassified]);
        assert_eq!(classify_cell(""), vec![CellRole::Unclassified]);
    }

    #[test]
    fn row_with_surname_and_alias_cells() {
        let win = extract_row(&row(&["Müller.", "John ALIAS", "€1.500"])).unwrap();
        assert_eq!(win.surname, "Müller.");
        assert!(win.name_or_alias.contains("John ALIAS"));
        assert_eq!(win.winnings, 1500);
    }

    #[test]
    fn last_surname_and_amount_win() {
        let win = extract_row(&row(&["1", "Anna B.", "Carla D.", "€100", "€2.000"])).unwrap();
        assert_eq!(win.surname, "Carla D.");
        assert_eq!(win.name_or_alias, " Anna B. Carla D.");
        assert_eq!(win.winnings, 2000);
    }

    #[test]
    fn name_rederived_from_amount_cell() {
        let win = extract_row(&row(&["3", "John Smith €500"])).unwrap();
        assert_eq!(win.name_or_alias, "John");
        assert_eq!(win.surname, "Smith");
        assert_eq!(win.winnings, 500);
    }

    #[test]
    fn spurious_sponsor_surname_is_replaced() {
        let win = extract_row(&row(&["Pokerstars.de 2024", "Mia Roth €300"])).unwrap();
        assert_eq!(win.name_or_alias, "Mia");
        assert_eq!(win.surname, "Roth");
        assert_eq!(win.full_name(), "MiaRoth");
    }

    #[test]
    fn fallback_skips_amount_tokens() {
        let win = extract_row(&row(&["7", "Mario €450"])).unwrap();
        assert_eq!(win.name_or_alias, "Mario");
        assert_eq!(win.surname, "");

        let win = extract_row(&row(&["8", "€ 450"])).unwrap();
        assert_eq!(win.full_name(), "");
        assert_eq!(win.winnings, 450);
    }

    #[test]
    fn rows_without_amount_are_dropped() {
        assert_eq!(extract_row(&row(&["Platz", "Name", "Preisgeld"])), None);
        assert_eq!(extract_row(&row(&["Max Muster", "€ tba"])), None);
    }

    #[test]
    fn extracts_across_tables() {
        let tables = vec![
            Table::new(vec![
                row(&["Platz", "Spieler", "Gewinn"]),
                row(&["1", "Lena", "K.", "€1.200"]),
            ]),
            Table::new(vec![row(&["2", "Paul", "M.", "€800"])]),
        ];
        let wins = extract(&tables);

        assert_eq!(wins.len(), 2);
        assert_eq!(wins[0].full_name(), "LenaK.");
        assert_eq!(wins[0].winnings, 1200);
        assert_eq!(wins[1].full_name(), "PaulM.");
    }
}
