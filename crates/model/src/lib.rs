//! Mutable presentation document model: slides, shapes, layouts, sections,
//! and the deck package storage plus session handling behind them.

pub mod error;
pub mod presentation;
pub mod session;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use presentation::Presentation;
pub use session::Engine;
pub use types::{
    CustomLayout, DocumentProperties, LayoutId, NotesMaster, NotesPage, ParagraphFormat,
    PlaceholderRole, Section, Shape, ShapeId, ShapeKind, Slide, SlideId, SlideMaster, TextFrame,
};
