//! Error types for the normalization pipeline.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a normalization run.
///
/// Everything here means a broken precondition (usually a style template
/// missing a piece the pipeline is configured to rely on). Conditions that
/// are expected in real decks, like a missing license slide or a slide
/// without a notes page, are handled in place and never surface as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// A document model operation failed.
    #[error("Document error: {0}")]
    Model(#[from] deckfix_model::Error),

    /// A slide maps onto a canonical layout the template does not provide.
    #[error("Canonical layout \"{0}\" is missing from the slide master")]
    MissingCanonicalLayout(String),

    /// The layout that supplies the slide-number shape has none.
    #[error("Layout \"{layout}\" has no slide-number placeholder")]
    MissingSlideNumberShape { layout: String },

    /// The notes master has no footer placeholder to stamp onto notes pages.
    #[error("Notes master has no footer placeholder")]
    MissingNotesFooter,
}
