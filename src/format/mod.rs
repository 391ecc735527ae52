//! Annotation exchange conversion routines.
//!
//! Two independent, symmetrical operations convert between the in-memory
//! annotation hierarchy and the viewer's dictionary JSON:
//!
//! - [`export_annotations`] walks the current selection and writes one
//!   dictionary entry per simple sub-polygon.
//! - [`import_annotations`] parses a document, classifies each entry by its
//!   point count, and inserts the reconstructed point, line, and polygon
//!   annotations back into the hierarchy.
//!
//! Both run synchronously against one designated file and share no state.

mod document;
mod error;
mod export;
mod import;

#[cfg(test)]
mod tests;

pub use document::{
    DictionaryEntry, ExchangeDocument, PathStyle, Segment, segment_anchor, segment_from_point,
};
pub use error::ExchangeError;
pub use export::{DEFAULT_FILL_RGB, DEFAULT_LABEL, ExportResult, FILL_ALPHA, export_annotations};
pub use import::{ImportResult, LINE_COLLAPSE_THRESHOLD, classify_points, import_annotations};
