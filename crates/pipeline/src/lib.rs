//! Deck normalization pipeline: transplants a messy source deck into a
//! clean style-template copy, then repairs layouts, section dividers,
//! titles, the license slide, slide numbering, and notes footers.

pub mod casing;
pub mod code_boxes;
pub mod convert;
pub mod error;
pub mod extract;
pub mod language;
pub mod layouts;
pub mod license;
pub mod notes_pages;
pub mod numbering;
pub mod section_slides;
pub mod tables;
pub mod titles;
pub mod transplant;

#[cfg(test)]
pub(crate) mod testdeck;

pub use convert::{normalize, normalize_with, NormalizeReport};
pub use error::{Error, Result};
pub use language::Language;
pub use tables::Tables;
