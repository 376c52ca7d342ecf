//! Title extraction from slides.
//!
//! Real decks are messy about titles: some slides carry several title
//! placeholders (the last one is the visible one), some carry none and use
//! their first placeholder as a de-facto title, some have no usable text at
//! all. The pickers here encode those conventions once so the classifier,
//! the license lookup, and the title repairer all agree on what "the title
//! of slide N" means.

use deckfix_model::{PlaceholderRole, Presentation, Shape, ShapeId, Slide, SlideId};
use unicode_normalization::UnicodeNormalization;

/// A title or subtitle shape picked for rewriting, with its current text.
#[derive(Debug, Clone)]
pub struct TitleShapeRef {
    pub slide: SlideId,
    pub shape: ShapeId,
    pub text: String,
}

/// The title text of every slide, in slide order.
///
/// One entry per slide; `None` when the slide has no usable title shape.
/// Text is NFC-normalized so lookups against configured titles compare
/// composed with composed.
pub fn slide_titles(prs: &Presentation) -> Vec<Option<String>> {
    prs.slides()
        .iter()
        .map(|slide| {
            pick_title_shape(slide)
                .and_then(|shape| shape.text())
                .map(|text| text.nfc().collect())
        })
        .collect()
}

/// Title shapes (and optionally subtitle shapes) for the rewrite path.
///
/// Unlike [`slide_titles`] this skips slides without a usable title, and in
/// subtitle mode a single slide can contribute several entries, so the
/// result is deliberately not one-to-one with slides.
pub fn title_shape_refs(prs: &Presentation, include_subtitles: bool) -> Vec<TitleShapeRef> {
    let mut refs = Vec::new();
    for slide in prs.slides() {
        if let Some(shape) = pick_title_shape(slide) {
            if let Some(text) = shape.text() {
                refs.push(TitleShapeRef {
                    slide: slide.id(),
                    shape: shape.id(),
                    text: text.to_string(),
                });
            }
        }
        if include_subtitles {
            for shape in slide.placeholders() {
                if shape.placeholder_role() == Some(PlaceholderRole::Subtitle) {
                    if let Some(text) = shape.text() {
                        refs.push(TitleShapeRef {
                            slide: slide.id(),
                            shape: shape.id(),
                            text: text.to_string(),
                        });
                    }
                }
            }
        }
    }
    refs
}

/// Pick the title shape of a slide: the last title-role placeholder owning
/// a text frame wins; with no title placeholder at all, the first
/// placeholder stands in if it owns a text frame.
fn pick_title_shape(slide: &Slide) -> Option<&Shape> {
    let mut title = None;
    for shape in slide.placeholders() {
        if shape.placeholder_role() == Some(PlaceholderRole::Title) && shape.has_text_frame() {
            title = Some(shape);
        }
    }
    title.or_else(|| slide.placeholders().next().filter(|s| s.has_text_frame()))
}
