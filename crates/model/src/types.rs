//! Domain types for the mutable presentation tree.
//!
//! Slides, shapes, and layouts are addressed by opaque generated ids that stay
//! stable across structural edits; 1-based positions are resolved from ids at
//! the moment of an operation and never cached across a mutation.

/// Stable handle for a slide within one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(pub(crate) u64);

/// Stable handle for a shape within one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u64);

/// Stable handle for a custom layout within one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(pub(crate) u64);

/// The role a placeholder shape plays on its slide or layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderRole {
    Title,
    Subtitle,
    Body,
    SlideNumber,
    Footer,
    /// A placeholder with a role the pipeline does not distinguish.
    Other,
}

/// What kind of shape this is.
///
/// The placeholder role lives inside the `Placeholder` variant, so asking a
/// text box or freeform shape for its role is impossible by construction;
/// callers go through [`Shape::placeholder_role`] and treat `None` as a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Placeholder { role: PlaceholderRole },
    TextBox,
    Other,
}

/// Paragraph spacing attached to a text frame. All values are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParagraphFormat {
    space_before: f32,
    space_after: f32,
    space_within: f32,
}

impl ParagraphFormat {
    /// Create a paragraph format, clamping each value to zero or above.
    pub fn new(space_before: f32, space_after: f32, space_within: f32) -> Self {
        Self {
            space_before: space_before.max(0.0),
            space_after: space_after.max(0.0),
            space_within: space_within.max(0.0),
        }
    }

    pub fn space_before(&self) -> f32 {
        self.space_before
    }

    pub fn space_after(&self) -> f32 {
        self.space_after
    }

    pub fn space_within(&self) -> f32 {
        self.space_within
    }

    /// Overwrite all three spacing values, clamped to zero or above.
    pub fn set_spacing(&mut self, before: f32, after: f32, within: f32) {
        self.space_before = before.max(0.0);
        self.space_after = after.max(0.0);
        self.space_within = within.max(0.0);
    }
}

/// Text content and formatting owned by a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFrame {
    pub text: String,
    pub format: ParagraphFormat,
    /// BCP 47 style language tag, e.g. "en-US". None when unset.
    pub language_tag: Option<String>,
}

impl TextFrame {
    /// Create a text frame with default formatting and no language tag.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ParagraphFormat::default(),
            language_tag: None,
        }
    }
}

/// A shape on a slide, a layout, or a notes page.
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) id: ShapeId,
    pub(crate) name: String,
    pub(crate) kind: ShapeKind,
    pub(crate) text_frame: Option<TextFrame>,
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The placeholder role, or `None` when this shape is not a placeholder.
    ///
    /// This is the fallible accessor callers use to silently skip shapes of
    /// the wrong kind instead of propagating a type-mismatch error.
    pub fn placeholder_role(&self) -> Option<PlaceholderRole> {
        match self.kind {
            ShapeKind::Placeholder { role } => Some(role),
            _ => None,
        }
    }

    /// Whether the shape owns a text frame (possibly with empty text).
    pub fn has_text_frame(&self) -> bool {
        self.text_frame.is_some()
    }

    /// Whether the shape owns a text frame with non-empty text.
    pub fn has_text(&self) -> bool {
        self.text_frame
            .as_ref()
            .map(|f| !f.text.is_empty())
            .unwrap_or(false)
    }

    /// The shape's text, if it owns a text frame.
    pub fn text(&self) -> Option<&str> {
        self.text_frame.as_ref().map(|f| f.text.as_str())
    }

    /// Replace the shape's text, creating a default text frame when absent.
    pub fn set_text(&mut self, text: impl Into<String>) {
        match &mut self.text_frame {
            Some(frame) => frame.text = text.into(),
            None => self.text_frame = Some(TextFrame::new(text)),
        }
    }

    pub fn text_frame(&self) -> Option<&TextFrame> {
        self.text_frame.as_ref()
    }

    pub fn text_frame_mut(&mut self) -> Option<&mut TextFrame> {
        self.text_frame.as_mut()
    }

    /// Structural equality ignoring ids.
    pub fn content_eq(&self, other: &Shape) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.text_frame == other.text_frame
    }
}

/// A notes page attached to a slide: an ordered list of shapes.
#[derive(Debug, Clone, Default)]
pub struct NotesPage {
    pub(crate) shapes: Vec<Shape>,
}

impl NotesPage {
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}

/// A slide layout owned by the slide master.
#[derive(Debug, Clone)]
pub struct CustomLayout {
    pub(crate) id: LayoutId,
    pub(crate) name: String,
    pub(crate) shapes: Vec<Shape>,
}

impl CustomLayout {
    pub fn id(&self) -> LayoutId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Structural equality of the template shapes, ignoring ids and the
    /// layout's own name.
    ///
    /// Used to decide whether an incoming layout with a colliding name is the
    /// same layout or a re-themed variant that must be imported separately.
    pub fn shapes_eq(&self, other: &CustomLayout) -> bool {
        self.shapes.len() == other.shapes.len()
            && self
                .shapes
                .iter()
                .zip(other.shapes.iter())
                .all(|(a, b)| a.content_eq(b))
    }
}

/// The slide master: an ordered collection of custom layouts.
#[derive(Debug, Clone, Default)]
pub struct SlideMaster {
    pub(crate) layouts: Vec<CustomLayout>,
}

impl SlideMaster {
    pub fn layouts(&self) -> &[CustomLayout] {
        &self.layouts
    }
}

/// The notes master: the shapes stamped onto notes pages.
#[derive(Debug, Clone, Default)]
pub struct NotesMaster {
    pub(crate) shapes: Vec<Shape>,
}

impl NotesMaster {
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

/// A section boundary: the named range of slides starting at `first_slide`.
///
/// Sections are kept sorted by their boundary; a section runs to the next
/// boundary (or the end of the deck), so together they partition the slide
/// sequence with no gaps or overlaps.
#[derive(Debug, Clone)]
pub struct Section {
    pub(crate) name: String,
    pub(crate) first_slide: usize,
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based position of the first slide in this section.
    pub fn first_slide(&self) -> usize {
        self.first_slide
    }
}

/// Built-in document properties. Free text; commas in copied values are
/// sanitized upstream to avoid delimiter collisions.
#[derive(Debug, Clone, Default)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub category: Option<String>,
    pub keywords: Option<String>,
}

/// A single slide: an ordered list of shapes, a layout reference, and an
/// optional notes page.
#[derive(Debug, Clone)]
pub struct Slide {
    pub(crate) id: SlideId,
    pub(crate) layout: LayoutId,
    pub(crate) shapes: Vec<Shape>,
    pub(crate) notes: Option<NotesPage>,
}

impl Slide {
    pub fn id(&self) -> SlideId {
        self.id
    }

    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// The slide's placeholder shapes, in shape order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Placeholder { .. }))
    }

    pub fn has_notes_page(&self) -> bool {
        self.notes.is_some()
    }

    pub fn notes_page(&self) -> Option<&NotesPage> {
        self.notes.as_ref()
    }
}
