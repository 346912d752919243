use super::{PlayerWinNormalized, PlayerWinRaw};

/// Keeps at most the first two whitespace-separated tokens.
pub fn truncate_to_two_tokens(text: &str) -> String {
    text.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

/// Splits names glued together by the name/surname merge, so
/// `JohnSmith` becomes `John Smith`.
///
/// A space goes before an uppercase letter that follows a lowercase letter,
/// once at least three letters have been seen. The result is trimmed.
pub fn split_camel_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    let mut previous: Option<char> = None;
    let mut letters = 0;

    for c in text.chars() {
        if c.is_alphabetic() {
            letters += 1;
            let after_lowercase = previous
                .map(|p| p.is_alphabetic() && !p.is_uppercase())
                .unwrap_or(false);
            if letters >= 3 && c.is_uppercase() && after_lowercase {
                result.push(' ');
            }
        }
        result.push(c);
        previous = Some(c);
    }

    result.trim().to_string()
}

/// First character uppercased, the rest lowercased: `sMITH` -> `Smith`.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Grouping key: capitalized first name plus the surname's initial, e.g.
/// `John S.`. Single-token names are returned unchanged.
pub fn first_name_and_initial(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    match (tokens.next(), tokens.next().and_then(|t| t.chars().next())) {
        (Some(first), Some(initial)) => format!("{} {}.", capitalize(first), initial),
        _ => full_name.to_string(),
    }
}

/// Display form: first and second token capitalized.
pub fn display_name(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => format!("{} {}", capitalize(first), capitalize(second)),
        _ => full_name.to_string(),
    }
}

/// Cleans the raw name and derives its key. Blank names yield `None`.
pub fn normalize(raw: &PlayerWinRaw) -> Option<PlayerWinNormalized> {
    let full_name = raw.full_name();
    if full_name.trim().is_empty() {
        return None;
    }

    let full_name = split_camel_case(&truncate_to_two_tokens(&full_name));
    let first_name_and_initial = first_name_and_initial(&full_name);

    Some(PlayerWinNormalized {
        full_name,
        first_name_and_initial,
        winnings: raw.winnings,
    })
}

pub fn normalize_all(raws: &[PlayerWinRaw]) -> Vec<PlayerWinNormalized> {
    raws.iter().filter_map(normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, surname: &str, winnings: u64) -> PlayerWinRaw {
        PlayerWinRaw {
            name_or_alias: name.to_string(),
            surname: surname.to_string(),
            winnings,
        }
    }

    #[test]
    fn truncates_after_second_token() {
        assert_eq!(truncate_to_two_tokens("  Max  Muster Mann "), "Max Muster");
        assert_eq!(truncate_to_two_tokens("Solo"), "Solo");
        assert_eq!(truncate_to_two_tokens(""), "");
    }

    #[test]
    fn splits_glued_names() {
        assert_eq!(split_camel_case("JohnSmith"), "John Smith");
        assert_eq!(split_camel_case("Lena K."), "Lena K.");
        assert_eq!(split_camel_case("LenaK."), "Lena K.");
        assert_eq!(split_camel_case("JOHN"), "JOHN");
        // Too early in the text to count as a boundary.
        assert_eq!(split_camel_case("aB"), "aB");
        assert_eq!(split_camel_case("ÖzilÜnal"), "Özil Ünal");
    }

    #[test]
    fn key_ignores_first_name_case() {
        assert_eq!(first_name_and_initial("john SMITH"), "John S.");
        assert_eq!(first_name_and_initial("John Smith"), "John S.");
        assert_eq!(first_name_and_initial("JOHN Smith"), "John S.");
        assert_eq!(first_name_and_initial("Madonna"), "Madonna");
    }

    #[test]
    fn display_name_capitalizes_both_tokens() {
        assert_eq!(display_name("john SMITH"), "John Smith");
        assert_eq!(display_name("Cher"), "Cher");
    }

    #[test]
    fn normalizes_raw_records() {
        let normalized = normalize(&raw(" Anna", "Berger.", 300)).unwrap();
        assert_eq!(normalized.full_name, "Anna Berger.");
        assert_eq!(normalized.first_name_and_initial, "Anna B.");
        assert_eq!(normalized.winnings, 300);

        let alias = normalize(&raw(" Shark Tom Maier", "", 80)).unwrap();
        assert_eq!(alias.full_name, "Shark Tom");
        assert_eq!(alias.first_name_and_initial, "Shark T.");
    }

    #[test]
    fn blank_names_are_dropped() {
        let raws = vec![raw("  ", "", 10), raw("Eva", "Z.", 20)];
        let normalized = normalize_all(&raws);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].full_name, "Eva Z.");
    }
}
