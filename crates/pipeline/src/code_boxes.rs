//! Source code box repair.

use deckfix_model::{ParagraphFormat, Presentation, ShapeId};

use crate::tables::Tables;

/// Copy paragraph spacing from the source deck's code boxes onto their
/// transplanted counterparts and stamp the primary language tag.
///
/// Must run right after the transplant, while source and destination are
/// still position-aligned. Placeholders are paired positionally; a source
/// slide with fewer placeholders just leaves the unpaired remainder alone.
/// Negative spacing values, which some legacy decks carry, are clamped to
/// zero on the way over.
pub fn fix_code_boxes(src: &Presentation, dest: &mut Presentation, tables: &Tables) {
    log::info!("fixing source code boxes");
    for pos in 1..=dest.slide_count() {
        let (slide_id, pairs) = match dest.slide_at(pos) {
            Some(slide) => {
                let is_code_slide = dest
                    .layout(slide.layout())
                    .map(|l| l.name() == tables.code_box_layout)
                    .unwrap_or(false);
                if !is_code_slide {
                    continue;
                }
                let Some(src_slide) = src.slide_at(pos) else {
                    continue;
                };
                let src_placeholders: Vec<_> = src_slide.placeholders().collect();
                let pairs: Vec<(ShapeId, ParagraphFormat)> = slide
                    .placeholders()
                    .enumerate()
                    .filter(|(_, shape)| shape.has_text())
                    .filter_map(|(i, shape)| {
                        let format = src_placeholders.get(i)?.text_frame()?.format;
                        Some((shape.id(), format))
                    })
                    .collect();
                (slide.id(), pairs)
            }
            None => continue,
        };

        for (shape_id, format) in pairs {
            if let Some(frame) = dest
                .slide_mut(slide_id)
                .and_then(|s| s.shape_mut(shape_id))
                .and_then(|s| s.text_frame_mut())
            {
                frame.format.set_spacing(
                    format.space_before(),
                    format.space_after(),
                    format.space_within(),
                );
                frame.language_tag = Some(tables.primary_language_tag.clone());
            }
        }
        log::debug!("fixed the code box styling at slide #{pos}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdeck;
    use deckfix_model::{PlaceholderRole, ShapeKind};

    fn code_slide(prs: &mut deckfix_model::Presentation, text: &str) -> deckfix_model::SlideId {
        let slide = testdeck::slide_with_title(prs, "Source Code Example", "Example");
        let body = prs
            .add_shape(
                slide,
                "Content 2",
                ShapeKind::Placeholder {
                    role: PlaceholderRole::Body,
                },
            )
            .unwrap();
        prs.slide_mut(slide)
            .unwrap()
            .shape_mut(body)
            .unwrap()
            .set_text(text);
        slide
    }

    #[test]
    fn test_spacing_copied_and_tagged() {
        let mut src = testdeck::template();
        let src_slide = code_slide(&mut src, "let x = 1;");
        let body_id = src.slide(src_slide).unwrap().shapes()[1].id();
        src.slide_mut(src_slide)
            .unwrap()
            .shape_mut(body_id)
            .unwrap()
            .text_frame_mut()
            .unwrap()
            .format = ParagraphFormat::new(6.0, 3.0, 1.5);

        let mut dest = testdeck::template();
        code_slide(&mut dest, "let x = 1;");

        fix_code_boxes(&src, &mut dest, &Tables::builtin());

        let slide = dest.slide_at(1).unwrap();
        let frame = slide.shapes()[1].text_frame().unwrap();
        assert_eq!(frame.format.space_before(), 6.0);
        assert_eq!(frame.format.space_after(), 3.0);
        assert_eq!(frame.format.space_within(), 1.5);
        assert_eq!(frame.language_tag.as_deref(), Some("en-US"));
        // The title placeholder got the same treatment.
        assert_eq!(
            slide.shapes()[0].text_frame().unwrap().language_tag.as_deref(),
            Some("en-US")
        );
    }

    #[test]
    fn test_non_code_layouts_untouched() {
        let mut src = testdeck::template();
        testdeck::content_slide(&mut src, "Plain");
        let mut dest = testdeck::template();
        testdeck::content_slide(&mut dest, "Plain");

        fix_code_boxes(&src, &mut dest, &Tables::builtin());

        let frame = dest.slide_at(1).unwrap().shapes()[0].text_frame().unwrap();
        assert_eq!(frame.language_tag, None);
    }

    #[test]
    fn test_missing_source_counterpart_skipped() {
        let mut src = testdeck::template();
        testdeck::slide_with_title(&mut src, "Source Code Example", "Example");
        let mut dest = testdeck::template();
        code_slide(&mut dest, "let x = 1;");

        // Source slide has one placeholder, destination has two: only the
        // paired one changes, and nothing panics.
        fix_code_boxes(&src, &mut dest, &Tables::builtin());

        let slide = dest.slide_at(1).unwrap();
        assert!(slide.shapes()[0].text_frame().unwrap().language_tag.is_some());
        assert_eq!(slide.shapes()[1].text_frame().unwrap().language_tag, None);
    }
}
