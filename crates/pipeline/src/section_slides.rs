//! Section divider slide repair.

use deckfix_model::{PlaceholderRole, Presentation, ShapeId};

use crate::error::Result;
use crate::tables::Tables;

/// Re-seat the texts of every section divider slide.
///
/// Divider slides arrive with their texts scattered across whatever
/// placeholders the source template provided. For each divider: capture the
/// text of every title, subtitle, or body placeholder carrying text, in
/// shape order, deleting the captured shapes; re-expose the divider
/// layout's placeholder slots so there is always something to refill; then
/// refill the remaining placeholders in order and delete the ones left
/// without a text, so no empty placeholder boxes survive. Shapes without a
/// placeholder role are left alone throughout.
pub fn fix_section_title_slides(dest: &mut Presentation, tables: &Tables) -> Result<usize> {
    log::info!("fixing broken section title slides");
    let mut fixed = 0;
    for slide_id in dest.slide_ids() {
        if dest.slide_layout_name(slide_id)? != tables.section_divider_layout {
            continue;
        }

        let shape_ids: Vec<ShapeId> = dest
            .slide(slide_id)
            .map(|s| s.shapes().iter().map(|sh| sh.id()).collect())
            .unwrap_or_default();
        let mut texts: Vec<String> = Vec::new();
        for shape_id in shape_ids {
            let mut captured = None;
            if let Some(shape) = dest.slide(slide_id).and_then(|s| s.shape(shape_id)) {
                let wanted_role = matches!(
                    shape.placeholder_role(),
                    Some(
                        PlaceholderRole::Title
                            | PlaceholderRole::Subtitle
                            | PlaceholderRole::Body
                    )
                );
                if wanted_role {
                    captured = shape.text().filter(|t| !t.is_empty()).map(String::from);
                }
            }
            if let Some(text) = captured {
                texts.push(text);
                dest.delete_shape(slide_id, shape_id)?;
            }
        }

        dest.materialize_layout_placeholders(slide_id)?;
        let placeholder_ids: Vec<ShapeId> = dest
            .slide(slide_id)
            .map(|s| s.placeholders().map(|p| p.id()).collect())
            .unwrap_or_default();
        for (i, shape_id) in placeholder_ids.into_iter().enumerate() {
            if let Some(text) = texts.get(i) {
                if let Some(shape) = dest.slide_mut(slide_id).and_then(|s| s.shape_mut(shape_id)) {
                    shape.set_text(text.clone());
                }
            } else {
                dest.delete_shape(slide_id, shape_id)?;
            }
        }

        log::debug!("fixed section divider slide: {:?}", texts.first());
        fixed += 1;
    }
    Ok(fixed)
}
