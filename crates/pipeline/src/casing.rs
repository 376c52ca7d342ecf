//! English title character casing.

use regex::Regex;
use std::sync::LazyLock;

/// Regex matching an English word: a letter followed by letters, digits,
/// or apostrophes.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9']*").unwrap());

/// Minor words kept lowercase unless they open or close the title.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "the", "to",
    "vs", "with",
];

/// Normalize the character casing of an English title.
///
/// Every word keeps its interior casing ("SQL", "JavaScript") and has its
/// first letter uppercased; small words fold to lowercase except in the
/// first or last position. Words are ASCII-letter runs, so punctuation,
/// digits, and Cyrillic text pass through untouched and a fully Bulgarian
/// title comes back unchanged. Applying the fix to its own output is a
/// no-op.
pub fn fix_title_casing(title: &str) -> String {
    let words: Vec<_> = WORD_REGEX.find_iter(title).collect();
    let mut result = String::with_capacity(title.len());
    let mut cursor = 0;
    for (i, m) in words.iter().enumerate() {
        result.push_str(&title[cursor..m.start()]);
        let word = m.as_str();
        let lower = word.to_ascii_lowercase();
        let edge = i == 0 || i == words.len() - 1;
        if !edge && SMALL_WORDS.contains(&lower.as_str()) {
            result.push_str(&lower);
        } else {
            // First char is ASCII by construction, so the byte split holds.
            let (first, rest) = word.split_at(1);
            result.push_str(&first.to_ascii_uppercase());
            result.push_str(rest);
        }
        cursor = m.end();
    }
    result.push_str(&title[cursor..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalizes_words() {
        assert_eq!(fix_title_casing("data types and variables"), "Data Types and Variables");
    }

    #[test]
    fn test_small_words_stay_lowercase_inside() {
        assert_eq!(
            fix_title_casing("working with the DOM in practice"),
            "Working with the DOM in Practice"
        );
    }

    #[test]
    fn test_first_and_last_words_always_capitalized() {
        assert_eq!(fix_title_casing("the art of war"), "The Art of War");
        assert_eq!(fix_title_casing("what to listen for"), "What to Listen For");
    }

    #[test]
    fn test_interior_casing_preserved() {
        assert_eq!(fix_title_casing("intro to SQL and JavaScript"), "Intro to SQL and JavaScript");
        assert_eq!(fix_title_casing("uses of HTML5"), "Uses of HTML5");
    }

    #[test]
    fn test_cyrillic_passes_through() {
        assert_eq!(fix_title_casing("Увод в програмирането"), "Увод в програмирането");
    }

    #[test]
    fn test_punctuation_and_digits_untouched() {
        assert_eq!(
            fix_title_casing("lists, tuples and sets: part 2"),
            "Lists, Tuples and Sets: Part 2"
        );
    }

    #[test]
    fn test_idempotent() {
        let once = fix_title_casing("working with the DOM in practice");
        assert_eq!(fix_title_casing(&once), once);
        let cyr = fix_title_casing("Бази от данни");
        assert_eq!(fix_title_casing(&cyr), cyr);
    }

    #[test]
    fn test_apostrophes_stay_inside_words() {
        assert_eq!(fix_title_casing("don't repeat yourself"), "Don't Repeat Yourself");
    }
}
