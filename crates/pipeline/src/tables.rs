//! Built-in normalization tables.
//!
//! Every lookup the pipeline performs against course conventions lives in a
//! [`Tables`] value that stages receive by reference, so tests can swap in
//! alternates. [`Tables::builtin`] carries the production set, accumulated
//! from years of real decks: localized layout names, numbered template
//! variants, and the odd renames authors keep reintroducing.

use std::collections::{HashMap, HashSet};

use crate::language::Language;

/// Raw layout name to canonical layout name. Identity entries keep valid
/// names from falling through to the default.
const LAYOUT_MAP: &[(&str, &str)] = &[
    ("Presentation Title Slide", "Presentation Title Slide"),
    ("Presentation Title", "Presentation Title Slide"),
    ("1_Presentation Title Slide", "1_Presentation Title Slide"),
    ("Title Slide", "Title Slide"),
    ("Title slide", "Title Slide"),
    ("Section Title Slide", "Title Slide"),
    ("Section Slide", "Title Slide"),
    ("Заглавен слайд", "Title Slide"),
    ("1_Title Slide", "Title Slide"),
    ("2_Title Slide", "Title Slide"),
    ("Title Only", "Title Slide"),
    ("Section Header", "Title Slide"),
    ("Picture with Caption", "Title Slide"),
    ("Title and Content", "Title and Content"),
    ("1_Title and Content", "Title and Content"),
    ("2_Title and Content", "Title and Content"),
    ("3_Title and Content", "Title and Content"),
    ("4_Title and Content", "Title and Content"),
    ("Заглавие и съдържание", "Title and Content"),
    ("Title, Content", "Title and Content"),
    ("Title, 2 Content", "Title and Content"),
    ("Title and body", "Title and Content"),
    ("Content with Caption", "Title and Content"),
    ("Blank Slide", "Blank Slide"),
    ("1_Blank Slide", "Blank Slide"),
    ("Questions Slide", "Questions Slide"),
    ("Слайд с въпроси", "Questions Slide"),
];

/// Whole-title replacements applied after casing normalization.
const TITLE_OVERRIDES: &[(&str, &str)] = &[("Table of Content", "Table of Contents")];

/// Canonical layouts whose slides never carry a slide number.
const NO_NUMBER_LAYOUTS: &[&str] = &["Presentation Title Slide", "Title Slide", "Questions Slide"];

/// The lookup tables driving the normalization pipeline.
#[derive(Debug, Clone)]
pub struct Tables {
    /// Raw layout name to canonical layout name.
    pub layout_map: HashMap<String, String>,
    /// Canonical layout for raw names absent from the map.
    pub default_layout: String,
    /// Whole-title replacements applied after casing normalization.
    pub title_overrides: HashMap<String, String>,
    /// Title of the license slide in an English deck.
    pub license_title_english: String,
    /// Title of the license slide in a Bulgarian deck.
    pub license_title_bulgarian: String,
    /// 1-based index of the fixed license slide inside the style template.
    pub license_template_slide: usize,
    /// Canonical layouts whose slides never carry a slide number.
    pub no_number_layouts: HashSet<String>,
    /// Layout supplying the canonical slide-number shape.
    pub number_source_layout: String,
    /// Canonical layout of section divider slides.
    pub section_divider_layout: String,
    /// Layout whose placeholders get the code-box spacing repair.
    pub code_box_layout: String,
    /// Language tag stamped onto repaired code boxes.
    pub primary_language_tag: String,
}

impl Tables {
    /// The production tables.
    pub fn builtin() -> Self {
        Self {
            layout_map: LAYOUT_MAP
                .iter()
                .map(|&(raw, canonical)| (raw.to_string(), canonical.to_string()))
                .collect(),
            default_layout: "Title and Content".to_string(),
            title_overrides: TITLE_OVERRIDES
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            license_title_english: "License".to_string(),
            license_title_bulgarian: "Лиценз".to_string(),
            license_template_slide: 1,
            no_number_layouts: NO_NUMBER_LAYOUTS.iter().map(|&n| n.to_string()).collect(),
            number_source_layout: "Title and Content".to_string(),
            section_divider_layout: "Title Slide".to_string(),
            code_box_layout: "Source Code Example".to_string(),
            primary_language_tag: "en-US".to_string(),
        }
    }

    /// Map a raw layout name to its canonical layout name.
    pub fn canonical_layout(&self, raw: &str) -> &str {
        self.layout_map
            .get(raw)
            .map(String::as_str)
            .unwrap_or(&self.default_layout)
    }

    /// The license slide title for the given deck language.
    pub fn license_title(&self, lang: Language) -> &str {
        match lang {
            Language::English => &self.license_title_english,
            Language::Bulgarian => &self.license_title_bulgarian,
        }
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::builtin()
    }
}
