//! Slide number repair.

use deckfix_model::{PlaceholderRole, Presentation, Shape, ShapeId, ShapeKind};

use crate::error::{Error, Result};
use crate::tables::Tables;

/// Rebuild slide numbering across the whole deck.
///
/// Clones the slide-number shape from the canonical content layout, strips
/// every legacy number shape from each slide (old-convention text boxes and
/// number placeholders alike, either of which would otherwise double up),
/// then pastes the clone onto every slide whose layout is not configured to
/// go numberless. Runs after layout normalization so the numberless lookup
/// sees canonical layout names.
pub fn fix_slide_numbers(dest: &mut Presentation, tables: &Tables) -> Result<()> {
    log::info!("fixing slide numbering");
    let template = find_slide_number_shape(dest, tables)?;

    for slide_id in dest.slide_ids() {
        let layout_name = dest.slide_layout_name(slide_id)?.to_string();
        let doomed: Vec<ShapeId> = dest
            .slide(slide_id)
            .map(|slide| {
                slide
                    .shapes()
                    .iter()
                    .filter(|shape| is_slide_number_shape(shape))
                    .map(|shape| shape.id())
                    .collect()
            })
            .unwrap_or_default();
        for shape_id in doomed {
            dest.delete_shape(slide_id, shape_id)?;
        }
        if !tables.no_number_layouts.contains(&layout_name) {
            dest.paste_shape(slide_id, &template)?;
        }
    }
    Ok(())
}

/// Resolve the canonical slide-number shape from the configured layout.
fn find_slide_number_shape(dest: &Presentation, tables: &Tables) -> Result<Shape> {
    let layout = dest
        .layout_by_name(&tables.number_source_layout)
        .ok_or_else(|| Error::MissingCanonicalLayout(tables.number_source_layout.clone()))?;
    layout
        .shapes()
        .iter()
        .find(|s| s.placeholder_role() == Some(PlaceholderRole::SlideNumber))
        .cloned()
        .ok_or_else(|| Error::MissingSlideNumberShape {
            layout: tables.number_source_layout.clone(),
        })
}

fn is_slide_number_shape(shape: &Shape) -> bool {
    let legacy_text_box =
        shape.kind() == ShapeKind::TextBox && shape.name().contains("Slide Number");
    let number_placeholder = shape.placeholder_role() == Some(PlaceholderRole::SlideNumber);
    legacy_text_box || number_placeholder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdeck;

    fn count_number_shapes(prs: &Presentation, slide: deckfix_model::SlideId) -> usize {
        prs.slide(slide)
            .unwrap()
            .shapes()
            .iter()
            .filter(|s| is_slide_number_shape(s))
            .count()
    }

    #[test]
    fn test_numbered_and_numberless_layouts() {
        let mut prs = testdeck::template();
        let content = testdeck::content_slide(&mut prs, "Data Types");
        let questions = testdeck::slide_with_title(&mut prs, "Questions Slide", "Questions?");

        fix_slide_numbers(&mut prs, &Tables::builtin()).unwrap();

        assert_eq!(count_number_shapes(&prs, content), 1);
        assert_eq!(count_number_shapes(&prs, questions), 0);
    }

    #[test]
    fn test_legacy_number_shapes_deduplicated() {
        let mut prs = testdeck::template();
        let slide = testdeck::content_slide(&mut prs, "Data Types");
        // Both legacy representations at once.
        prs.add_shape(slide, "Slide Number Box 3", ShapeKind::TextBox).unwrap();
        prs.add_shape(
            slide,
            "Old Number",
            ShapeKind::Placeholder {
                role: PlaceholderRole::SlideNumber,
            },
        )
        .unwrap();

        fix_slide_numbers(&mut prs, &Tables::builtin()).unwrap();

        assert_eq!(count_number_shapes(&prs, slide), 1);
        let pasted = prs
            .slide(slide)
            .unwrap()
            .shapes()
            .iter()
            .find(|s| is_slide_number_shape(s))
            .and_then(|s| s.text());
        assert_eq!(pasted, Some("‹#›"));
    }

    #[test]
    fn test_plain_text_boxes_survive() {
        let mut prs = testdeck::template();
        let slide = testdeck::content_slide(&mut prs, "Data Types");
        let note = prs.add_shape(slide, "Callout 1", ShapeKind::TextBox).unwrap();

        fix_slide_numbers(&mut prs, &Tables::builtin()).unwrap();

        assert!(prs.slide(slide).unwrap().shape(note).is_some());
    }

    #[test]
    fn test_missing_number_shape_is_fatal() {
        let mut prs = deckfix_model::Presentation::new("deck.json");
        prs.add_layout("Title and Content");

        let err = fix_slide_numbers(&mut prs, &Tables::builtin()).unwrap_err();
        assert!(matches!(err, Error::MissingSlideNumberShape { layout } if layout == "Title and Content"));
    }

    #[test]
    fn test_missing_source_layout_is_fatal() {
        let mut prs = deckfix_model::Presentation::new("deck.json");
        let err = fix_slide_numbers(&mut prs, &Tables::builtin()).unwrap_err();
        assert!(matches!(err, Error::MissingCanonicalLayout(name) if name == "Title and Content"));
    }
}
