//! Converts pathology-image region annotations between an in-memory
//! annotation hierarchy and the dictionary JSON consumed by a web-based
//! annotation viewer.
//!
//! The crate has no runtime of its own. A host application owns the
//! [`model::AnnotationHierarchy`], the [`model::ClassificationRegistry`],
//! and the image's [`model::PixelCalibration`], and invokes one of the two
//! conversion routines:
//!
//! ```rust,ignore
//! use annotation_exchange::{export_annotations, import_annotations};
//!
//! export_annotations(&hierarchy, &target_file, "slide1")?;
//! import_annotations(&source_file, &mut hierarchy, &registry, &calibration)?;
//! ```
//!
//! Both routines run synchronously against one designated file and share no
//! state. Failures are reported as [`ExchangeError`] values; nothing panics
//! past the caller.

pub mod color;
pub mod format;
pub mod geometry;
pub mod model;

pub use format::{ExchangeError, export_annotations, import_annotations};
