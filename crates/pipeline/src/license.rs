//! License slide replacement.

use std::path::Path;

use deckfix_model::Presentation;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::extract;
use crate::language::Language;
use crate::tables::Tables;

/// Replace every slide titled as the deck language's license slide with the
/// fixed license slide from the style template.
///
/// Titles are snapshotted once before any mutation. Each replacement
/// deletes the slide at its position and splices exactly one template slide
/// back in at the same position, so the snapshot's indices stay valid even
/// with several matches. A deck without a license slide is left alone.
/// Returns the number of slides replaced.
pub fn fix_license_slide(
    dest: &mut Presentation,
    template_path: &Path,
    lang: Language,
    tables: &Tables,
) -> Result<usize> {
    log::info!("fixing the license slide");
    let wanted: String = tables.license_title(lang).nfc().collect();
    let titles = extract::slide_titles(dest);
    let n = tables.license_template_slide;
    let mut replaced = 0;
    for (idx, title) in titles.iter().enumerate() {
        if title.as_deref() != Some(wanted.as_str()) {
            continue;
        }
        let pos = idx + 1;
        log::debug!("found the license slide #{pos}, replacing it from the template");
        dest.delete_slide_at(pos)?;
        dest.insert_slides_from_file(template_path, pos - 1, Some((n, n)))?;
        replaced += 1;
    }
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdeck;

    fn write_template(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("template.json");
        let mut template = testdeck::template();
        testdeck::content_slide(&mut template, "License");
        deckfix_model::store::save(&template, &path).unwrap();
        path
    }

    #[test]
    fn test_license_slide_replaced_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(&dir);

        let mut dest = testdeck::template();
        testdeck::content_slide(&mut dest, "Intro");
        let stale = testdeck::content_slide(&mut dest, "License");
        testdeck::content_slide(&mut dest, "Summary");

        let replaced =
            fix_license_slide(&mut dest, &template_path, Language::English, &Tables::builtin())
                .unwrap();

        assert_eq!(replaced, 1);
        assert_eq!(dest.slide_count(), 3);
        // Same position, different slide.
        assert!(dest.slide(stale).is_none());
        let titles = extract::slide_titles(&dest);
        assert_eq!(
            titles,
            vec![
                Some("Intro".to_string()),
                Some("License".to_string()),
                Some("Summary".to_string())
            ]
        );
    }

    #[test]
    fn test_lookup_is_locale_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(&dir);

        let mut dest = testdeck::template();
        testdeck::content_slide(&mut dest, "Лиценз");
        let before = dest.slide_ids();

        // English deck: the Bulgarian license title is not a match.
        let replaced =
            fix_license_slide(&mut dest, &template_path, Language::English, &Tables::builtin())
                .unwrap();
        assert_eq!(replaced, 0);
        assert_eq!(dest.slide_ids(), before);

        let replaced =
            fix_license_slide(&mut dest, &template_path, Language::Bulgarian, &Tables::builtin())
                .unwrap();
        assert_eq!(replaced, 1);
    }

    #[test]
    fn test_no_license_slide_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let template_path = write_template(&dir);

        let mut dest = testdeck::template();
        testdeck::content_slide(&mut dest, "Intro");

        let replaced =
            fix_license_slide(&mut dest, &template_path, Language::English, &Tables::builtin())
                .unwrap();
        assert_eq!(replaced, 0);
        assert_eq!(dest.slide_count(), 1);
    }
}
