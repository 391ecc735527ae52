//! Importer from the exchange document into the annotation hierarchy.

use std::path::Path;

use crate::color;
use crate::format::document::{DictionaryEntry, ExchangeDocument, segment_anchor};
use crate::format::error::ExchangeError;
use crate::geometry::{Area, Line, Point2, Shape};
use crate::model::{Annotation, AnnotationHierarchy, ClassificationRegistry, PixelCalibration};

/// Physical length below which a two-point entry is treated as an
/// accidental micro-drag and collapsed to a point at its midpoint.
pub const LINE_COLLAPSE_THRESHOLD: f64 = 5.0;

/// Result of a successful import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    /// Annotations inserted into the hierarchy.
    pub annotations_imported: usize,
}

/// Import every dictionary entry of the document at `path` into the
/// hierarchy.
///
/// Entries are inserted as root-level annotations without selecting them;
/// one bulk change notification fires after the last entry. A malformed
/// entry aborts the import with an error, leaving the entries inserted
/// before it in place and firing no notification.
pub fn import_annotations(
    path: &Path,
    hierarchy: &mut AnnotationHierarchy,
    registry: &ClassificationRegistry,
    calibration: &PixelCalibration,
) -> Result<ImportResult, ExchangeError> {
    log::info!("Importing annotations from {:?}", path);

    let json = std::fs::read_to_string(path)?;
    let document: ExchangeDocument = serde_json::from_str(&json)?;

    let mut annotations_imported = 0;
    for entry in &document.dictionaries {
        let annotation = reconstruct_entry(entry, registry, calibration)?;
        hierarchy.add_annotation(annotation, false);
        annotations_imported += 1;
    }

    hierarchy.notify_changed();

    log::info!(
        "Imported {} annotations from slide {}",
        annotations_imported,
        document.source_slide
    );

    Ok(ImportResult {
        annotations_imported,
    })
}

/// Rebuild one annotation from its dictionary entry.
fn reconstruct_entry(
    entry: &DictionaryEntry,
    registry: &ClassificationRegistry,
    calibration: &PixelCalibration,
) -> Result<Annotation, ExchangeError> {
    let rgb = color::pack_unit_channels(&entry.path.fill_color).ok_or_else(|| {
        ExchangeError::malformed_entry(&entry.uid, "fillColor needs at least three channels")
    })?;

    let points: Vec<Point2> = entry.path.segments.iter().map(segment_anchor).collect();
    log::debug!("Entry {} carries {} points", entry.uid, points.len());

    let shape = classify_points(&points, calibration)
        .ok_or_else(|| ExchangeError::malformed_entry(&entry.uid, "entry has no coordinates"))?;

    let mut annotation = Annotation::new(shape)
        .with_name(&entry.uid)
        .with_color_rgb(rgb);

    if registry.exists(&entry.label) {
        annotation.classification = registry.get(&entry.label).cloned();
    }

    Ok(annotation)
}

/// Classify reconstructed coordinates strictly by point count.
///
/// One point is a point marker. Two points are a line, unless the physical
/// length scaled by the pixel calibration falls under
/// [`LINE_COLLAPSE_THRESHOLD`], in which case the line collapses to a point
/// at its midpoint. Three or more points are a polygon through all points
/// in order, implicitly closed. Returns `None` for an empty slice.
pub fn classify_points(points: &[Point2], calibration: &PixelCalibration) -> Option<Shape> {
    match points {
        [] => None,
        [point] => Some(Shape::Point(*point)),
        [start, end] => {
            let line = Line::new(*start, *end);
            let length = line.scaled_length(
                calibration.pixel_width_microns,
                calibration.pixel_height_microns,
            );
            if length < LINE_COLLAPSE_THRESHOLD {
                Some(Shape::Point(line.midpoint()))
            } else {
                Some(Shape::Line(line))
            }
        }
        _ => Some(Shape::Polygon(Area::from_ring(points.to_vec()))),
    }
}
