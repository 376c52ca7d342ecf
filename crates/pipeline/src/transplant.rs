//! Shell reset and slide transplant.
//!
//! The normalized deck starts life as a byte copy of the style template, so
//! the first stages empty that copy down to its masters and styling, carry
//! over the source's document properties, and move every slide and section
//! across in one go.

use deckfix_model::Presentation;

use crate::casing;
use crate::error::Result;

/// Strip the destination down to an empty shell.
///
/// Removes every section together with its slides, then any slides left
/// outside sections. Masters, layouts, and document styling survive.
pub fn reset_destination(dest: &mut Presentation) -> Result<()> {
    log::info!("removing all sections and slides from the template copy");
    while dest.section_count() > 0 {
        dest.remove_section(1, true)?;
    }
    while dest.slide_count() > 0 {
        dest.delete_slide_at(1)?;
    }
    Ok(())
}

/// Carry the source's document properties over to the destination.
///
/// Commas are replaced with semicolons so multi-valued fields survive
/// downstream comma-splitting tools. Blank source values leave the
/// destination's own value in place.
pub fn copy_document_properties(src: &Presentation, dest: &mut Presentation) {
    log::info!("copying document properties");
    let title = sanitized(&src.properties().title);
    let subject = sanitized(&src.properties().subject);
    let category = sanitized(&src.properties().category);
    let keywords = sanitized(&src.properties().keywords);

    let props = dest.properties_mut();
    if title.is_some() {
        props.title = title;
    }
    if subject.is_some() {
        props.subject = subject;
    }
    if category.is_some() {
        props.category = category;
    }
    if keywords.is_some() {
        props.keywords = keywords;
    }
}

fn sanitized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(|v| v.replace(',', ";"))
        .filter(|v| !v.trim().is_empty())
}

/// Copy every slide from the source, then replay its sections.
///
/// Slides are inserted in one bulk operation; sections are rebuilt by
/// walking the source's sections in order with a running slide index,
/// normalizing each name's casing on the way. A section whose start falls
/// past the copied range (an empty trailing section) is appended rather
/// than anchored. Returns the number of slides copied.
pub fn copy_slides_and_sections(src: &Presentation, dest: &mut Presentation) -> Result<usize> {
    log::info!("copying all slides and sections from the source");
    let copied = dest.insert_slides_from(src, 0, None)?;

    let mut next_slide = 1usize;
    for ordinal in 1..=src.section_count() {
        let name = casing::fix_title_casing(src.section_name(ordinal)?);
        if next_slide <= dest.slide_count() {
            dest.add_section_before_slide(next_slide, name)?;
        } else {
            dest.append_section(name);
        }
        next_slide += src.section_slide_count(ordinal)?;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdeck;

    #[test]
    fn test_reset_empties_slides_and_sections_but_keeps_layouts() {
        let mut prs = testdeck::template();
        testdeck::content_slide(&mut prs, "One");
        testdeck::content_slide(&mut prs, "Two");
        prs.add_section_before_slide(1, "Stuff").unwrap();
        let layouts_before = prs.layouts().len();

        reset_destination(&mut prs).unwrap();

        assert_eq!(prs.slide_count(), 0);
        assert_eq!(prs.section_count(), 0);
        assert_eq!(prs.layouts().len(), layouts_before);
    }

    #[test]
    fn test_properties_sanitized_and_blanks_skipped() {
        let mut src = testdeck::template();
        src.properties_mut().title = Some("C# Basics, Part 1".to_string());
        src.properties_mut().subject = Some("   ".to_string());
        src.properties_mut().keywords = Some("csharp,basics".to_string());

        let mut dest = testdeck::template();
        dest.properties_mut().subject = Some("Kept".to_string());

        copy_document_properties(&src, &mut dest);

        assert_eq!(dest.properties().title.as_deref(), Some("C# Basics; Part 1"));
        assert_eq!(dest.properties().subject.as_deref(), Some("Kept"));
        assert_eq!(dest.properties().category, None);
        assert_eq!(dest.properties().keywords.as_deref(), Some("csharp;basics"));
    }

    #[test]
    fn test_copied_sections_partition_the_deck() {
        let mut src = testdeck::template();
        for title in ["A", "B", "C", "D", "E"] {
            testdeck::content_slide(&mut src, title);
        }
        src.add_section_before_slide(1, "course introduction").unwrap();
        src.add_section_before_slide(3, "data types").unwrap();

        let mut dest = testdeck::template();
        let copied = copy_slides_and_sections(&src, &mut dest).unwrap();

        assert_eq!(copied, 5);
        assert_eq!(dest.slide_count(), 5);
        assert_eq!(dest.section_count(), 2);
        assert_eq!(dest.section_name(1).unwrap(), "Course Introduction");
        assert_eq!(dest.section_name(2).unwrap(), "Data Types");

        // Sections cover the whole deck with no gaps or overlaps.
        let total: usize = (1..=dest.section_count())
            .map(|n| dest.section_slide_count(n).unwrap())
            .sum();
        assert_eq!(total, dest.slide_count());
    }

    #[test]
    fn test_empty_trailing_section_is_appended() {
        let mut src = testdeck::template();
        testdeck::content_slide(&mut src, "Only");
        src.add_section_before_slide(1, "content").unwrap();
        src.append_section("closing notes");

        let mut dest = testdeck::template();
        copy_slides_and_sections(&src, &mut dest).unwrap();

        assert_eq!(dest.section_count(), 2);
        assert_eq!(dest.section_name(2).unwrap(), "Closing Notes");
        assert_eq!(dest.section_slide_count(2).unwrap(), 0);
    }
}
