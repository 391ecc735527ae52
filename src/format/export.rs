//! Exporter from the annotation hierarchy to the exchange document.

use std::path::Path;

use uuid::Uuid;

use crate::color;
use crate::format::document::{DictionaryEntry, ExchangeDocument, PathStyle, segment_from_point};
use crate::format::error::ExchangeError;
use crate::geometry::{Polygon, split_area_to_polygons};
use crate::model::{Annotation, AnnotationHierarchy};

/// Label written for annotations without a classification.
pub const DEFAULT_LABEL: &str = "Tumor";

/// Fill color written for annotations without an assigned color.
pub const DEFAULT_FILL_RGB: u32 = 0xFF0000;

/// Alpha channel written for every fill color.
pub const FILL_ALPHA: f64 = 0.5;

/// Result of a successful export.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportResult {
    /// Selected annotations that carried a closed region.
    pub annotations_exported: usize,
    /// Dictionary entries written, one per simple sub-polygon.
    pub entries_written: usize,
}

/// Export the hierarchy's current selection to `path`.
///
/// The written `sourceSlide` is always `{name_hint}.svs`; the hint is used
/// verbatim, with no extension stripping.
///
/// Selected annotations without a closed region (points, lines) produce no
/// entries. Each simple sub-polygon of a multi-part region becomes one
/// independent entry; containment between sub-polygons is not recorded.
/// Any I/O failure aborts the export and may leave a partial file behind.
pub fn export_annotations(
    hierarchy: &AnnotationHierarchy,
    path: &Path,
    name_hint: &str,
) -> Result<ExportResult, ExchangeError> {
    log::info!("Exporting selected annotations to {:?}", path);

    let mut dictionaries = Vec::new();
    let mut annotations_exported = 0;

    for annotation in hierarchy.selected_annotations() {
        let Some(area) = annotation.shape.area() else {
            log::debug!("Annotation {} has no closed region, skipping", annotation.id);
            continue;
        };

        let polygons = split_area_to_polygons(area);
        log::debug!(
            "Annotation {} decomposed into {} polygons",
            annotation.id,
            polygons.len()
        );
        for polygon in polygons {
            dictionaries.push(polygon_entry(annotation, polygon));
        }
        annotations_exported += 1;
    }

    let document = ExchangeDocument {
        source_slide: format!("{}.svs", name_hint),
        dictionaries,
    };

    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(path, json)?;

    let entries_written = document.dictionaries.len();
    log::info!(
        "Exported {} annotations as {} dictionary entries",
        annotations_exported,
        entries_written
    );

    Ok(ExportResult {
        annotations_exported,
        entries_written,
    })
}

/// Build the dictionary entry for one simple sub-polygon.
fn polygon_entry(annotation: &Annotation, polygon: &Polygon) -> DictionaryEntry {
    let uid = Uuid::new_v4().to_string();
    let name = annotation.name.clone().unwrap_or_else(|| uid.clone());
    let label = annotation
        .classification_name()
        .unwrap_or(DEFAULT_LABEL)
        .to_string();

    let rgb = annotation.color_rgb.unwrap_or(DEFAULT_FILL_RGB);
    let [r, g, b] = color::unit_channels(rgb);

    DictionaryEntry {
        uid,
        name,
        label,
        path: PathStyle {
            apply_matrix: true,
            segments: polygon
                .points()
                .iter()
                .copied()
                .map(segment_from_point)
                .collect(),
            closed: true,
            fill_color: vec![r, g, b, FILL_ALPHA],
            stroke_color: [0.0, 0.0, 0.0],
            stroke_scaling: false,
        },
        zoom: 1.0,
        context: Vec::new(),
        dictionary: "imported".to_string(),
    }
}
