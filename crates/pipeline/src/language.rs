//! Deck language detection.

use std::fmt;

use deckfix_model::Presentation;

use crate::extract;

/// The two languages course decks come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Bulgarian,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "EN"),
            Language::Bulgarian => write!(f, "BG"),
        }
    }
}

/// Detect the deck language from its slide titles.
///
/// Counts Latin versus Cyrillic letters over the lowercased titles. Decks
/// are usually bilingual with English technical terms mixed into Bulgarian
/// text, so Bulgarian wins as soon as Cyrillic letters pass half the Latin
/// count, not at parity.
pub fn detect_language(prs: &Presentation) -> Language {
    let mut english = 0usize;
    let mut bulgarian = 0usize;
    for title in extract::slide_titles(prs).into_iter().flatten() {
        for ch in title.to_lowercase().chars() {
            if ch.is_ascii_lowercase() {
                english += 1;
            } else if ('а'..='я').contains(&ch) {
                bulgarian += 1;
            }
        }
    }
    let lang = if bulgarian > english / 2 {
        Language::Bulgarian
    } else {
        Language::English
    };
    log::info!("language detected: {lang}");
    lang
}
