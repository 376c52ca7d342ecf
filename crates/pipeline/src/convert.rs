//! End-to-end deck normalization.

use std::path::Path;

use deckfix_model::Engine;

use crate::code_boxes;
use crate::error::Result;
use crate::language::{self, Language};
use crate::layouts;
use crate::license;
use crate::notes_pages;
use crate::numbering;
use crate::section_slides;
use crate::tables::Tables;
use crate::titles;
use crate::transplant;

/// What a normalization run did, for reporting.
#[derive(Debug, Clone)]
pub struct NormalizeReport {
    pub slides: usize,
    pub sections: usize,
    pub language: Language,
    pub layouts_reassigned: usize,
    pub layouts_deleted: usize,
    pub licenses_replaced: usize,
    pub titles_rewritten: usize,
}

/// Normalize `source` into a fresh copy of `template` written to `dest`.
///
/// The destination file is saved once, after every stage has succeeded, so
/// a failed run leaves no half-normalized artifact behind; the recovery
/// unit is a fresh run. In visible mode the editing session stays claimed
/// after returning so the result can be inspected.
pub fn normalize(source: &Path, dest: &Path, template: &Path, visible: bool) -> Result<NormalizeReport> {
    normalize_with(source, dest, template, visible, &Tables::builtin())
}

/// [`normalize`] with caller-supplied tables.
pub fn normalize_with(
    source: &Path,
    dest: &Path,
    template: &Path,
    visible: bool,
    tables: &Tables,
) -> Result<NormalizeReport> {
    let engine = Engine::acquire(visible);

    log::info!("opening source deck {}", source.display());
    let src = engine.open(source)?;

    log::info!("copying the style template to {}", dest.display());
    engine.copy_file(template, dest)?;
    let mut dst = engine.open(dest)?;

    transplant::reset_destination(&mut dst)?;
    transplant::copy_document_properties(&src, &mut dst);
    let slides = transplant::copy_slides_and_sections(&src, &mut dst)?;
    code_boxes::fix_code_boxes(&src, &mut dst, tables);
    drop(src);

    let lang = language::detect_language(&dst);
    let licenses_replaced = license::fix_license_slide(&mut dst, template, lang, tables)?;
    let layout_changes = layouts::fix_slide_layouts(&mut dst, tables)?;
    section_slides::fix_section_title_slides(&mut dst, tables)?;
    let titles_rewritten = titles::fix_slide_titles(&mut dst, tables);
    numbering::fix_slide_numbers(&mut dst, tables)?;
    notes_pages::fix_notes_pages(&mut dst)?;

    log::info!("saving {}", dest.display());
    dst.save()?;

    Ok(NormalizeReport {
        slides,
        sections: dst.section_count(),
        language: lang,
        layouts_reassigned: layout_changes.reassigned,
        layouts_deleted: layout_changes.deleted,
        licenses_replaced,
        titles_rewritten,
    })
}
