//! Slide layout normalization.

use std::collections::{HashMap, HashSet};

use deckfix_model::{LayoutId, Presentation};

use crate::error::{Error, Result};
use crate::tables::Tables;

/// Counts of what a layout normalization pass changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChanges {
    pub reassigned: usize,
    pub deleted: usize,
}

/// Reassign every slide from its raw layout to the canonical one, then
/// delete the layouts the pass orphaned.
///
/// The mapping is total: raw names missing from the table land on the
/// default layout. Deletion happens strictly after the reassignment loop,
/// when every slide that referenced an orphaned layout is guaranteed to
/// have moved off it. On an already-normalized deck the pass reassigns and
/// deletes nothing.
pub fn fix_slide_layouts(dest: &mut Presentation, tables: &Tables) -> Result<LayoutChanges> {
    log::info!("fixing invalid slide layouts");
    let layouts_by_name: HashMap<String, LayoutId> = dest
        .layouts()
        .iter()
        .map(|l| (l.name().to_string(), l.id()))
        .collect();

    let mut changes = LayoutChanges::default();
    let mut orphans: HashSet<String> = HashSet::new();
    for slide_id in dest.slide_ids() {
        let old_name = dest.slide_layout_name(slide_id)?.to_string();
        let new_name = tables.canonical_layout(&old_name);
        if new_name == old_name {
            continue;
        }
        let target = *layouts_by_name
            .get(new_name)
            .ok_or_else(|| Error::MissingCanonicalLayout(new_name.to_string()))?;
        log::debug!("replacing invalid slide layout \"{old_name}\" with \"{new_name}\"");
        dest.set_slide_layout(slide_id, target)?;
        orphans.insert(old_name);
        changes.reassigned += 1;
    }

    for name in &orphans {
        if let Some(&id) = layouts_by_name.get(name) {
            log::debug!("deleting unused layout \"{name}\"");
            dest.delete_layout(id)?;
            changes.deleted += 1;
        }
    }
    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdeck;

    #[test]
    fn test_raw_layouts_folded_to_canonical() {
        let mut prs = testdeck::template();
        testdeck::slide_with_title(&mut prs, "Заглавен слайд", "Бази от данни");
        testdeck::slide_with_title(&mut prs, "2_Title and Content", "Data Types");
        testdeck::content_slide(&mut prs, "Already Fine");

        let changes = fix_slide_layouts(&mut prs, &Tables::builtin()).unwrap();

        assert_eq!(changes, LayoutChanges { reassigned: 2, deleted: 2 });
        let names: Vec<_> = prs
            .slide_ids()
            .into_iter()
            .map(|id| prs.slide_layout_name(id).unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Title Slide", "Title and Content", "Title and Content"]);
        assert!(prs.layout_by_name("Заглавен слайд").is_none());
        assert!(prs.layout_by_name("2_Title and Content").is_none());
    }

    #[test]
    fn test_unmapped_layout_falls_back_to_default() {
        let mut prs = testdeck::template();
        testdeck::slide_with_title(&mut prs, "Somebody's Custom Layout", "Odd");

        let changes = fix_slide_layouts(&mut prs, &Tables::builtin()).unwrap();

        assert_eq!(changes.reassigned, 1);
        let slide = prs.slide_at(1).unwrap().id();
        assert_eq!(prs.slide_layout_name(slide).unwrap(), "Title and Content");
    }

    #[test]
    fn test_missing_canonical_layout_is_fatal() {
        let mut prs = deckfix_model::Presentation::new("deck.json");
        testdeck::slide_with_title(&mut prs, "Заглавен слайд", "Бази от данни");

        let err = fix_slide_layouts(&mut prs, &Tables::builtin()).unwrap_err();
        assert!(matches!(err, Error::MissingCanonicalLayout(name) if name == "Title Slide"));
    }

    #[test]
    fn test_second_run_changes_nothing() {
        let mut prs = testdeck::template();
        testdeck::slide_with_title(&mut prs, "Заглавен слайд", "Бази от данни");
        testdeck::slide_with_title(&mut prs, "Title, 2 Content", "Data");

        fix_slide_layouts(&mut prs, &Tables::builtin()).unwrap();
        let layout_count = prs.layouts().len();

        let second = fix_slide_layouts(&mut prs, &Tables::builtin()).unwrap();
        assert_eq!(second, LayoutChanges::default());
        assert_eq!(prs.layouts().len(), layout_count);
    }
}
