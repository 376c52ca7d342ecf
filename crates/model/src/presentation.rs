//! The mutable presentation tree and its editing operations.
//!
//! Positions are 1-based and shift whenever a slide is inserted or deleted
//! before them; section boundaries are adjusted on every structural edit so
//! that sections always partition the slide sequence. Callers are expected to
//! hold [`SlideId`]/[`ShapeId`] handles and resolve positions per operation
//! rather than caching them across mutations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::store;
use crate::types::{
    CustomLayout, DocumentProperties, LayoutId, NotesMaster, NotesPage, PlaceholderRole, Section,
    Shape, ShapeId, ShapeKind, Slide, SlideId, SlideMaster,
};

/// An open presentation document.
///
/// Created empty via [`Presentation::new`] (template construction, tests) or
/// loaded from a deck package by the session engine. Mutated in place by the
/// normalization pipeline and written back with [`Presentation::save`].
#[derive(Debug, Clone)]
pub struct Presentation {
    pub(crate) path: PathBuf,
    pub(crate) properties: DocumentProperties,
    pub(crate) master: SlideMaster,
    pub(crate) notes_master: NotesMaster,
    pub(crate) slides: Vec<Slide>,
    pub(crate) sections: Vec<Section>,
    pub(crate) next_id: u64,
}

impl Presentation {
    /// Create an empty presentation associated with the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            properties: DocumentProperties::default(),
            master: SlideMaster::default(),
            notes_master: NotesMaster::default(),
            slides: Vec::new(),
            sections: Vec::new(),
            next_id: 0,
        }
    }

    /// The file path this presentation was opened from or will save to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the presentation back to its deck package file.
    pub fn save(&self) -> Result<()> {
        store::save(self, &self.path)
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut DocumentProperties {
        &mut self.properties
    }

    pub fn master(&self) -> &SlideMaster {
        &self.master
    }

    pub fn notes_master(&self) -> &NotesMaster {
        &self.notes_master
    }

    pub(crate) fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    // ---- slides ----------------------------------------------------------

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Ordered snapshot of slide handles. Stable across later edits, unlike
    /// positions.
    pub fn slide_ids(&self) -> Vec<SlideId> {
        self.slides.iter().map(|s| s.id).collect()
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    pub fn slide_mut(&mut self, id: SlideId) -> Option<&mut Slide> {
        self.slides.iter_mut().find(|s| s.id == id)
    }

    /// Slide at a 1-based position.
    pub fn slide_at(&self, pos: usize) -> Option<&Slide> {
        if pos == 0 {
            return None;
        }
        self.slides.get(pos - 1)
    }

    /// Mutable slide at a 1-based position.
    pub fn slide_at_mut(&mut self, pos: usize) -> Option<&mut Slide> {
        if pos == 0 {
            return None;
        }
        self.slides.get_mut(pos - 1)
    }

    /// Current 1-based position of a slide.
    pub fn slide_position(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id).map(|i| i + 1)
    }

    /// Append a slide using the given layout.
    pub fn add_slide(&mut self, layout: LayoutId) -> Result<SlideId> {
        if self.layout(layout).is_none() {
            return Err(Error::UnknownLayout(format!("{layout:?}")));
        }
        let id = SlideId(self.alloc_id());
        self.slides.push(Slide {
            id,
            layout,
            shapes: Vec::new(),
            notes: None,
        });
        Ok(id)
    }

    /// Delete the slide at a 1-based position, shifting later slides and
    /// section boundaries down by one.
    pub fn delete_slide_at(&mut self, pos: usize) -> Result<()> {
        if pos < 1 || pos > self.slides.len() {
            return Err(Error::InvalidPosition {
                what: "slide",
                pos,
                count: self.slides.len(),
            });
        }
        self.slides.remove(pos - 1);
        self.shift_sections_on_delete(pos);
        Ok(())
    }

    /// Delete a slide by handle.
    pub fn delete_slide(&mut self, id: SlideId) -> Result<()> {
        let pos = self.slide_position(id).ok_or(Error::NoSuchSlide)?;
        self.delete_slide_at(pos)
    }

    /// Insert slides cloned from another presentation after 0-based position
    /// `after` (0 inserts at the front). `range` selects a 1-based inclusive
    /// slide range in the source; `None` copies every slide. Returns the
    /// number of slides inserted.
    ///
    /// Incoming layouts are reconciled by name and content: an identical
    /// layout is reused, a colliding name with different content is imported
    /// under the first free `N_`-prefixed variant, and an unknown name is
    /// imported verbatim.
    pub fn insert_slides_from(
        &mut self,
        src: &Presentation,
        after: usize,
        range: Option<(usize, usize)>,
    ) -> Result<usize> {
        if after > self.slides.len() {
            return Err(Error::InvalidPosition {
                what: "slide",
                pos: after,
                count: self.slides.len(),
            });
        }
        let (from, to) = match range {
            Some((from, to)) => {
                if from < 1 || to > src.slide_count() || from > to {
                    return Err(Error::InvalidPosition {
                        what: "slide range",
                        pos: to.max(from),
                        count: src.slide_count(),
                    });
                }
                (from, to)
            }
            None => (1, src.slide_count()),
        };

        let mut inserted = 0;
        for pos in from..=to {
            // `slide_at` cannot fail here; the range was validated above.
            let Some(src_slide) = src.slide_at(pos) else {
                break;
            };
            let src_layout = src
                .layout(src_slide.layout)
                .ok_or_else(|| Error::UnknownLayout(format!("{:?}", src_slide.layout)))?;
            let layout = self.import_layout(src_layout);
            let slide = self.clone_slide(src_slide, layout);
            self.slides.insert(after + inserted, slide);
            inserted += 1;
        }
        self.shift_sections_on_insert(after, inserted);
        Ok(inserted)
    }

    /// Load a deck package and splice slides from it, as
    /// [`Presentation::insert_slides_from`].
    pub fn insert_slides_from_file(
        &mut self,
        path: &Path,
        after: usize,
        range: Option<(usize, usize)>,
    ) -> Result<usize> {
        let src = store::load(path)?;
        self.insert_slides_from(&src, after, range)
    }

    fn clone_slide(&mut self, src: &Slide, layout: LayoutId) -> Slide {
        let id = SlideId(self.alloc_id());
        let shapes = self.clone_shapes(&src.shapes);
        let notes = src.notes.as_ref().map(|page| NotesPage {
            shapes: self.clone_shapes(&page.shapes),
        });
        Slide {
            id,
            layout,
            shapes,
            notes,
        }
    }

    fn clone_shapes(&mut self, shapes: &[Shape]) -> Vec<Shape> {
        let mut cloned = Vec::with_capacity(shapes.len());
        for shape in shapes {
            let mut copy = shape.clone();
            copy.id = ShapeId(self.alloc_id());
            cloned.push(copy);
        }
        cloned
    }

    // ---- sections --------------------------------------------------------

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Name of the section at a 1-based ordinal.
    pub fn section_name(&self, ordinal: usize) -> Result<&str> {
        self.sections
            .get(ordinal.wrapping_sub(1))
            .map(|s| s.name.as_str())
            .ok_or(Error::InvalidPosition {
                what: "section",
                pos: ordinal,
                count: self.sections.len(),
            })
    }

    /// Number of slides in the section at a 1-based ordinal: the distance to
    /// the next boundary, or to the end of the deck for the last section.
    pub fn section_slide_count(&self, ordinal: usize) -> Result<usize> {
        let idx = ordinal.wrapping_sub(1);
        let section = self
            .sections
            .get(idx)
            .ok_or(Error::InvalidPosition {
                what: "section",
                pos: ordinal,
                count: self.sections.len(),
            })?;
        let next = self
            .sections
            .get(idx + 1)
            .map(|s| s.first_slide)
            .unwrap_or(self.slides.len() + 1);
        Ok(next.saturating_sub(section.first_slide))
    }

    /// Start a new section immediately before the slide at 1-based `pos`.
    pub fn add_section_before_slide(&mut self, pos: usize, name: impl Into<String>) -> Result<()> {
        if pos < 1 || pos > self.slides.len() {
            return Err(Error::InvalidPosition {
                what: "slide",
                pos,
                count: self.slides.len(),
            });
        }
        self.sections.push(Section {
            name: name.into(),
            first_slide: pos,
        });
        // Stable sort: a boundary added at an already-claimed position takes
        // over the range, leaving the older section empty.
        self.sections.sort_by_key(|s| s.first_slide);
        Ok(())
    }

    /// Append an empty section after all existing slides and sections.
    pub fn append_section(&mut self, name: impl Into<String>) {
        self.sections.push(Section {
            name: name.into(),
            first_slide: self.slides.len() + 1,
        });
        self.sections.sort_by_key(|s| s.first_slide);
    }

    /// Remove the section at a 1-based ordinal. With `delete_slides` the
    /// slides in its range are deleted as well; otherwise they merge into the
    /// neighboring section.
    pub fn remove_section(&mut self, ordinal: usize, delete_slides: bool) -> Result<()> {
        let slide_count = self.section_slide_count(ordinal)?;
        let first = self.sections[ordinal - 1].first_slide;
        self.sections.remove(ordinal - 1);
        if delete_slides {
            for _ in 0..slide_count {
                self.delete_slide_at(first)?;
            }
        }
        Ok(())
    }

    fn shift_sections_on_insert(&mut self, after: usize, n: usize) {
        for section in &mut self.sections {
            if section.first_slide > after {
                section.first_slide += n;
            }
        }
    }

    fn shift_sections_on_delete(&mut self, pos: usize) {
        for section in &mut self.sections {
            if section.first_slide > pos {
                section.first_slide -= 1;
            }
        }
    }

    // ---- layouts ---------------------------------------------------------

    pub fn layouts(&self) -> &[CustomLayout] {
        &self.master.layouts
    }

    pub fn layout(&self, id: LayoutId) -> Option<&CustomLayout> {
        self.master.layouts.iter().find(|l| l.id == id)
    }

    pub fn layout_by_name(&self, name: &str) -> Option<&CustomLayout> {
        self.master.layouts.iter().find(|l| l.name == name)
    }

    /// The name of the layout a slide references.
    pub fn slide_layout_name(&self, slide: SlideId) -> Result<&str> {
        let slide = self.slide(slide).ok_or(Error::NoSuchSlide)?;
        let layout = self
            .layout(slide.layout)
            .ok_or_else(|| Error::UnknownLayout(format!("{:?}", slide.layout)))?;
        Ok(&layout.name)
    }

    /// Point a slide at a different layout.
    ///
    /// Placeholder roles the new layout defines but the slide lacks are
    /// materialized on the slide as empty placeholders, mirroring how a
    /// layout change surfaces the layout's boxes in an editor. Shapes the
    /// slide already carries are never touched.
    pub fn set_slide_layout(&mut self, slide: SlideId, layout: LayoutId) -> Result<()> {
        if self.layout(layout).is_none() {
            return Err(Error::UnknownLayout(format!("{layout:?}")));
        }
        self.slide_mut(slide).ok_or(Error::NoSuchSlide)?.layout = layout;
        self.materialize_layout_placeholders(slide)
    }

    /// Append an empty placeholder to a slide for every placeholder role
    /// its layout defines that the slide currently lacks.
    ///
    /// The layout's boxes stay available as refill targets no matter what
    /// was deleted from the slide, the slot behavior placeholder editing
    /// is built on. Roles already present are left alone, so repeated
    /// calls add nothing.
    pub fn materialize_layout_placeholders(&mut self, slide: SlideId) -> Result<()> {
        let layout = self.slide(slide).ok_or(Error::NoSuchSlide)?.layout;
        let templates: Vec<Shape> = self
            .layout(layout)
            .ok_or_else(|| Error::UnknownLayout(format!("{layout:?}")))?
            .shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Placeholder { .. }))
            .cloned()
            .collect();
        let mut seen: HashSet<PlaceholderRole> = self
            .slide(slide)
            .ok_or(Error::NoSuchSlide)?
            .shapes
            .iter()
            .filter_map(|s| s.placeholder_role())
            .collect();
        let mut fresh = Vec::new();
        for mut shape in templates {
            let ShapeKind::Placeholder { role } = shape.kind else {
                continue;
            };
            if !seen.insert(role) {
                continue;
            }
            shape.id = ShapeId(self.alloc_id());
            shape.text_frame = None;
            fresh.push(shape);
        }
        self.slide_mut(slide).ok_or(Error::NoSuchSlide)?.shapes.extend(fresh);
        Ok(())
    }

    /// Delete a layout. Fails while any slide still references it.
    pub fn delete_layout(&mut self, id: LayoutId) -> Result<()> {
        let idx = self
            .master
            .layouts
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| Error::UnknownLayout(format!("{id:?}")))?;
        if self.slides.iter().any(|s| s.layout == id) {
            return Err(Error::LayoutInUse(self.master.layouts[idx].name.clone()));
        }
        self.master.layouts.remove(idx);
        Ok(())
    }

    /// Add an empty layout to the slide master.
    pub fn add_layout(&mut self, name: impl Into<String>) -> LayoutId {
        let id = LayoutId(self.alloc_id());
        self.master.layouts.push(CustomLayout {
            id,
            name: name.into(),
            shapes: Vec::new(),
        });
        id
    }

    /// Add a shape to a layout's template shapes.
    pub fn add_layout_shape(
        &mut self,
        layout: LayoutId,
        name: impl Into<String>,
        kind: ShapeKind,
    ) -> Result<ShapeId> {
        let id = ShapeId(self.alloc_id());
        let layout = self
            .master
            .layouts
            .iter_mut()
            .find(|l| l.id == layout)
            .ok_or_else(|| Error::UnknownLayout(format!("{layout:?}")))?;
        layout.shapes.push(Shape {
            id,
            name: name.into(),
            kind,
            text_frame: None,
        });
        Ok(id)
    }

    pub fn layout_shape_mut(&mut self, layout: LayoutId, shape: ShapeId) -> Option<&mut Shape> {
        self.master
            .layouts
            .iter_mut()
            .find(|l| l.id == layout)?
            .shapes
            .iter_mut()
            .find(|s| s.id == shape)
    }

    /// Import a layout from another presentation, reconciling name collisions
    /// by content.
    fn import_layout(&mut self, incoming: &CustomLayout) -> LayoutId {
        match self.layout_by_name(&incoming.name) {
            Some(existing) if existing.shapes_eq(incoming) => existing.id,
            Some(_) => {
                // Same name, different content: place the incoming layout
                // under the first free numbered variant, reusing a variant
                // that already carries identical content.
                let mut n = 1;
                loop {
                    let candidate = format!("{}_{}", n, incoming.name);
                    match self.layout_by_name(&candidate) {
                        Some(l) if l.shapes_eq(incoming) => return l.id,
                        Some(_) => n += 1,
                        None => return self.clone_layout(incoming, candidate),
                    }
                }
            }
            None => self.clone_layout(incoming, incoming.name.clone()),
        }
    }

    fn clone_layout(&mut self, incoming: &CustomLayout, name: String) -> LayoutId {
        let id = LayoutId(self.alloc_id());
        let shapes = self.clone_shapes(&incoming.shapes);
        self.master.layouts.push(CustomLayout { id, name, shapes });
        id
    }

    // ---- shapes ----------------------------------------------------------

    /// Add a shape to a slide. The shape starts without a text frame.
    pub fn add_shape(
        &mut self,
        slide: SlideId,
        name: impl Into<String>,
        kind: ShapeKind,
    ) -> Result<ShapeId> {
        let id = ShapeId(self.alloc_id());
        let slide = self.slide_mut(slide).ok_or(Error::NoSuchSlide)?;
        slide.shapes.push(Shape {
            id,
            name: name.into(),
            kind,
            text_frame: None,
        });
        Ok(id)
    }

    /// Clone a shape template onto a slide under a fresh id.
    pub fn paste_shape(&mut self, slide: SlideId, template: &Shape) -> Result<ShapeId> {
        let id = ShapeId(self.alloc_id());
        let slide = self.slide_mut(slide).ok_or(Error::NoSuchSlide)?;
        let mut copy = template.clone();
        copy.id = id;
        slide.shapes.push(copy);
        Ok(id)
    }

    /// Delete a shape from a slide.
    pub fn delete_shape(&mut self, slide: SlideId, shape: ShapeId) -> Result<()> {
        let slide = self.slide_mut(slide).ok_or(Error::NoSuchSlide)?;
        let idx = slide
            .shapes
            .iter()
            .position(|s| s.id == shape)
            .ok_or(Error::NoSuchShape)?;
        slide.shapes.remove(idx);
        Ok(())
    }

    // ---- notes pages -----------------------------------------------------

    /// Create an empty notes page for a slide if it has none.
    pub fn ensure_notes_page(&mut self, slide: SlideId) -> Result<()> {
        let slide = self.slide_mut(slide).ok_or(Error::NoSuchSlide)?;
        if slide.notes.is_none() {
            slide.notes = Some(NotesPage::default());
        }
        Ok(())
    }

    /// Add a shape to a slide's notes page, creating the page if absent.
    pub fn add_notes_shape(
        &mut self,
        slide: SlideId,
        name: impl Into<String>,
        kind: ShapeKind,
    ) -> Result<ShapeId> {
        let id = ShapeId(self.alloc_id());
        let slide = self.slide_mut(slide).ok_or(Error::NoSuchSlide)?;
        let page = slide.notes.get_or_insert_with(NotesPage::default);
        page.shapes.push(Shape {
            id,
            name: name.into(),
            kind,
            text_frame: None,
        });
        Ok(id)
    }

    pub fn notes_shape_mut(&mut self, slide: SlideId, shape: ShapeId) -> Option<&mut Shape> {
        self.slide_mut(slide)?
            .notes
            .as_mut()?
            .shapes
            .iter_mut()
            .find(|s| s.id == shape)
    }

    /// Clone a shape template onto a slide's existing notes page.
    pub fn notes_paste_shape(&mut self, slide: SlideId, template: &Shape) -> Result<ShapeId> {
        let id = ShapeId(self.alloc_id());
        let slide = self.slide_mut(slide).ok_or(Error::NoSuchSlide)?;
        let page = slide.notes.as_mut().ok_or(Error::NoNotesPage)?;
        let mut copy = template.clone();
        copy.id = id;
        page.shapes.push(copy);
        Ok(id)
    }

    /// Add a shape to the notes master.
    pub fn add_notes_master_shape(
        &mut self,
        name: impl Into<String>,
        kind: ShapeKind,
    ) -> ShapeId {
        let id = ShapeId(self.alloc_id());
        self.notes_master.shapes.push(Shape {
            id,
            name: name.into(),
            kind,
            text_frame: None,
        });
        id
    }

    pub fn notes_master_shape_mut(&mut self, shape: ShapeId) -> Option<&mut Shape> {
        self.notes_master.shapes.iter_mut().find(|s| s.id == shape)
    }

    /// Delete a shape from a slide's notes page.
    pub fn notes_delete_shape(&mut self, slide: SlideId, shape: ShapeId) -> Result<()> {
        let slide = self.slide_mut(slide).ok_or(Error::NoSuchSlide)?;
        let page = slide.notes.as_mut().ok_or(Error::NoNotesPage)?;
        let idx = page
            .shapes
            .iter()
            .position(|s| s.id == shape)
            .ok_or(Error::NoSuchShape)?;
        page.shapes.remove(idx);
        Ok(())
    }
}
