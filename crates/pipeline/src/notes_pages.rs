//! Notes page footer repair.

use deckfix_model::{PlaceholderRole, Presentation, ShapeId};

use crate::error::{Error, Result};

/// Stamp the canonical footer from the notes master onto every notes page.
///
/// Existing footer placeholders are removed first so pages never end up
/// with two. Slides without a notes page are skipped; a notes master
/// without a footer is a broken template and fails the run.
pub fn fix_notes_pages(dest: &mut Presentation) -> Result<()> {
    log::info!("fixing slide notes pages");
    let footer = dest
        .notes_master()
        .shapes()
        .iter()
        .find(|s| s.placeholder_role() == Some(PlaceholderRole::Footer))
        .cloned()
        .ok_or(Error::MissingNotesFooter)?;

    for slide_id in dest.slide_ids() {
        let doomed: Vec<ShapeId> = match dest.slide(slide_id).and_then(|s| s.notes_page()) {
            Some(page) => page
                .shapes()
                .iter()
                .filter(|s| s.placeholder_role() == Some(PlaceholderRole::Footer))
                .map(|s| s.id())
                .collect(),
            None => continue,
        };
        for shape_id in doomed {
            dest.notes_delete_shape(slide_id, shape_id)?;
        }
        dest.notes_paste_shape(slide_id, &footer)?;
    }
    Ok(())
}
