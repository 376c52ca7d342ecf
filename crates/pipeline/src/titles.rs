//! Slide title repair.

use deckfix_model::Presentation;

use crate::casing;
use crate::extract;
use crate::tables::Tables;

/// Normalize the casing of every slide title and subtitle, then apply the
/// whole-title override table to the result. Shapes whose text already
/// matches are never written, so a second pass over a repaired deck
/// rewrites nothing. Returns the number of shapes rewritten.
pub fn fix_slide_titles(dest: &mut Presentation, tables: &Tables) -> usize {
    log::info!("fixing incorrect slide titles");
    let mut rewritten = 0;
    for shape_ref in extract::title_shape_refs(dest, true) {
        let mut new_title = casing::fix_title_casing(&shape_ref.text);
        if let Some(replacement) = tables.title_overrides.get(&new_title) {
            new_title = replacement.clone();
        }
        if new_title == shape_ref.text {
            continue;
        }
        log::debug!("replaced slide title [{}] -> [{}]", shape_ref.text, new_title);
        if let Some(shape) = dest
            .slide_mut(shape_ref.slide)
            .and_then(|s| s.shape_mut(shape_ref.shape))
        {
            shape.set_text(new_title);
            rewritten += 1;
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;
    use crate::testdeck;

    #[test]
    fn test_titles_and_subtitles_rewritten() {
        let mut prs = testdeck::template();
        testdeck::content_slide(&mut prs, "data types and variables");
        testdeck::divider_slide(&mut prs, "web development", "part one");

        let rewritten = fix_slide_titles(&mut prs, &Tables::builtin());

        assert_eq!(rewritten, 3);
        let titles = extract::slide_titles(&prs);
        assert_eq!(
            titles,
            vec![
                Some("Data Types and Variables".to_string()),
                Some("Web Development".to_string())
            ]
        );
        let refs = extract::title_shape_refs(&prs, true);
        assert_eq!(refs[2].text, "Part One");
    }

    #[test]
    fn test_override_applied_after_casing() {
        let mut prs = testdeck::template();
        testdeck::content_slide(&mut prs, "table of content");

        fix_slide_titles(&mut prs, &Tables::builtin());

        assert_eq!(
            extract::slide_titles(&prs),
            vec![Some("Table of Contents".to_string())]
        );
    }

    #[test]
    fn test_second_pass_writes_nothing() {
        let mut prs = testdeck::template();
        testdeck::content_slide(&mut prs, "working with the DOM");
        testdeck::content_slide(&mut prs, "Увод в програмирането");

        let first = fix_slide_titles(&mut prs, &Tables::builtin());
        assert_eq!(first, 1);

        let second = fix_slide_titles(&mut prs, &Tables::builtin());
        assert_eq!(second, 0);
    }
}
