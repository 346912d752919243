//! Interactive questions asked on the terminal.

use crate::error::{AppError, Result};
use crate::winnings::SummarizedPlayer;
use std::io::{BufRead, Write};

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::Prompt("input closed".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Asks for a page count in `1..max` until a valid one is entered.
pub fn read_page_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    max: u32,
) -> Result<u32> {
    loop {
        write!(output, "Enter how many pages to scan? (1-{}) ", max - 1)?;
        output.flush()?;

        match read_line(input)?.parse::<i64>() {
            Ok(count) if count >= 1 && count < i64::from(max) => return Ok(count as u32),
            Ok(_) => writeln!(
                output,
                "Input must be between 1 and {}. Please try again.",
                max - 1
            )?,
            Err(_) => writeln!(output, "Invalid input. Please enter a valid page number.")?,
        }
    }
}

pub fn read_query<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Enter a player: ")?;
    output.flush()?;
    read_line(input)
}

pub fn print_matches<W: Write>(output: &mut W, matches: &[&SummarizedPlayer]) -> Result<()> {
    if matches.is_empty() {
        writeln!(output, "No matching players.")?;
        return Ok(());
    }

    let key_width = matches
        .iter()
        .map(|p| p.first_name_and_initial.chars().count())
        .chain(std::iter::once("Player".len()))
        .max()
        .unwrap_or_default();
    let name_width = matches
        .iter()
        .map(|p| p.full_name.chars().count())
        .chain(std::iter::once("Full Name".len()))
        .max()
        .unwrap_or_default();

    writeln!(
        output,
        "{:<key_width$}  {:<name_width$}  {:>10}  {:>6}",
        "Player", "Full Name", "Winnings", "Cashes"
    )?;
    for player in matches {
        writeln!(
            output,
            "{:<key_width$}  {:<name_width$}  {:>10}  {:>6}",
            player.first_name_and_initial,
            player.full_name,
            player.total_winnings,
            player.occurrences
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reprompts_until_count_is_valid() {
        let mut input = Cursor::new("abc\n50\n-3\n0\n 12 \n");
        let mut output = Vec::new();

        let count = read_page_count(&mut input, &mut output, 50).unwrap();

        assert_eq!(count, 12);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Invalid input").count(), 1);
        assert_eq!(shown.matches("Input must be between 1 and 49").count(), 3);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let err = read_page_count(&mut input, &mut Vec::new(), 50).unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
    }

    #[test]
    fn query_is_trimmed() {
        let mut input = Cursor::new("  john \n");
        let query = read_query(&mut input, &mut Vec::new()).unwrap();
        assert_eq!(query, "john");
    }

    #[test]
    fn prints_aligned_rows() {
        let player = SummarizedPlayer {
            first_name_and_initial: "John S.".to_string(),
            full_name: "John Smith".to_string(),
            total_winnings: 1500,
            occurrences: 3,
        };
        let mut output = Vec::new();
        print_matches(&mut output, &[&player]).unwrap();

        let shown = String::from_utf8(output).unwrap();
        let lines: Vec<_> = shown.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Player   Full Name "));
        assert!(lines[1].starts_with("John S.  John Smith"));
        assert!(lines[1].ends_with("1500       3"));
    }

    #[test]
    fn reports_no_matches() {
        let mut output = Vec::new();
        print_matches(&mut output, &[]).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "No matching players.\n");
    }
}
