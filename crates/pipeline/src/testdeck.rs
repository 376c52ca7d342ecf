//! Fixture deck builders shared by the unit tests.

use deckfix_model::{PlaceholderRole, Presentation, ShapeKind, SlideId};

/// A style template with the canonical layouts, a slide-number shape on
/// "Title and Content", and a footer on the notes master.
pub(crate) fn template() -> Presentation {
    let mut prs = Presentation::new("template.json");
    for name in [
        "Presentation Title Slide",
        "Title Slide",
        "Title and Content",
        "Blank Slide",
        "Questions Slide",
        "Source Code Example",
    ] {
        prs.add_layout(name);
    }
    let content = prs.layout_by_name("Title and Content").unwrap().id();
    let number = prs
        .add_layout_shape(
            content,
            "Slide Number Placeholder 1",
            ShapeKind::Placeholder {
                role: PlaceholderRole::SlideNumber,
            },
        )
        .unwrap();
    prs.layout_shape_mut(content, number)
        .unwrap()
        .set_text("‹#›");
    let footer = prs.add_notes_master_shape(
        "Footer Placeholder 1",
        ShapeKind::Placeholder {
            role: PlaceholderRole::Footer,
        },
    );
    prs.notes_master_shape_mut(footer)
        .unwrap()
        .set_text("Training Materials");
    prs
}

/// Add a slide on the named layout (created on demand) with a filled title
/// placeholder.
pub(crate) fn slide_with_title(prs: &mut Presentation, layout: &str, title: &str) -> SlideId {
    let layout = match prs.layout_by_name(layout) {
        Some(l) => l.id(),
        None => prs.add_layout(layout),
    };
    let slide = prs.add_slide(layout).unwrap();
    let shape = prs
        .add_shape(
            slide,
            "Title 1",
            ShapeKind::Placeholder {
                role: PlaceholderRole::Title,
            },
        )
        .unwrap();
    prs.slide_mut(slide)
        .unwrap()
        .shape_mut(shape)
        .unwrap()
        .set_text(title);
    slide
}

/// Add a "Title and Content" slide with the given title.
pub(crate) fn content_slide(prs: &mut Presentation, title: &str) -> SlideId {
    slide_with_title(prs, "Title and Content", title)
}

/// Add a section divider slide with a title and a subtitle.
pub(crate) fn divider_slide(prs: &mut Presentation, title: &str, subtitle: &str) -> SlideId {
    let slide = slide_with_title(prs, "Title Slide", title);
    let shape = prs
        .add_shape(
            slide,
            "Subtitle 1",
            ShapeKind::Placeholder {
                role: PlaceholderRole::Subtitle,
            },
        )
        .unwrap();
    prs.slide_mut(slide)
        .unwrap()
        .shape_mut(shape)
        .unwrap()
        .set_text(subtitle);
    slide
}
