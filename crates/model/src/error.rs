//! Error types for the presentation document model.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating or persisting a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a deck package file.
    #[error("Failed to access deck package: {0}")]
    Io(#[from] std::io::Error),

    /// The deck package file is not valid JSON.
    #[error("Malformed deck package: {0}")]
    Json(#[from] serde_json::Error),

    /// A slide in the package references a layout the master does not define.
    #[error("Deck package references unknown layout \"{0}\"")]
    UnknownLayout(String),

    /// A layout cannot be deleted while slides still reference it.
    #[error("Layout \"{0}\" is still referenced by at least one slide")]
    LayoutInUse(String),

    /// A 1-based position fell outside the valid range for the collection.
    #[error("{what} position {pos} out of range (count: {count})")]
    InvalidPosition {
        what: &'static str,
        pos: usize,
        count: usize,
    },

    /// A slide handle no longer resolves to a slide in this presentation.
    #[error("No slide with the given id")]
    NoSuchSlide,

    /// A shape handle no longer resolves to a shape on the given slide.
    #[error("No shape with the given id on this slide")]
    NoSuchShape,

    /// The slide has no notes page to operate on.
    #[error("Slide has no notes page")]
    NoNotesPage,
}
