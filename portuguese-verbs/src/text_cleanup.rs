//! Text normalization helpers shared by the parser and the conjugator.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Remove diacritics so comparisons can ignore accents.
///
/// Decomposes to NFD and drops the combining marks; "média" becomes "media".
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Collapse whitespace runs and fix spacing around punctuation.
///
/// Runs of whitespace become a single space, spaces before closing
/// punctuation (`,.;:?!)`) and after `(` are removed, and the result is
/// trimmed.
pub fn tidy_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_whitespace() {
            if result.is_empty() || result.ends_with(' ') || result.ends_with('(') {
                continue;
            }
            result.push(' ');
        } else {
            if matches!(ch, ',' | '.' | ';' | ':' | '?' | '!' | ')') && result.ends_with(' ') {
                result.pop();
            }
            result.push(ch);
        }
    }
    if result.ends_with(' ') {
        result.pop();
    }
    result
}

/// Mirror the casing of `reference` onto `word`.
///
/// Title-cased reference capitalizes the result, an all-uppercase reference
/// uppercases it, anything else leaves it as produced (lowercase).
pub fn restore_case(reference: &str, word: &str) -> String {
    if is_title_case(reference) {
        return capitalize(word);
    }
    if is_all_uppercase(reference) {
        return word.to_uppercase();
    }
    word.to_string()
}

fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars().filter(|c| c.is_alphabetic());
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| c.is_lowercase()),
        _ => false,
    }
}

fn is_all_uppercase(word: &str) -> bool {
    let mut any = false;
    for ch in word.chars().filter(|c| c.is_alphabetic()) {
        if !ch.is_uppercase() {
            return false;
        }
        any = true;
    }
    any
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("média"), "media");
        assert_eq!(strip_accents("âêôãõç"), "aeoaoc");
        assert_eq!(strip_accents("Indicativo"), "Indicativo");
    }

    #[test]
    fn test_tidy_spaces_collapses_runs() {
        assert_eq!(tidy_spaces("eu   amo"), "eu amo");
        assert_eq!(tidy_spaces("  amar  "), "amar");
    }

    #[test]
    fn test_tidy_spaces_closing_punctuation() {
        assert_eq!(tidy_spaces("amo , vivo !"), "amo, vivo!");
        assert_eq!(tidy_spaces("falar ( em línguas )"), "falar (em línguas)");
    }

    #[test]
    fn test_restore_case() {
        assert_eq!(restore_case("amar", "amo"), "amo");
        assert_eq!(restore_case("Amar", "amo"), "Amo");
        assert_eq!(restore_case("AMAR", "amo"), "AMO");
    }

    #[test]
    fn test_restore_case_multiword() {
        assert_eq!(restore_case("Fazer", "ter feito"), "Ter feito");
        assert_eq!(restore_case("fazer", "ter feito"), "ter feito");
    }
}
