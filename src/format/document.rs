//! Serde model of the annotation service exchange document.
//!
//! The document mirrors what the paper.js based viewer reads and writes:
//! one `sourceSlide` name plus a flat `dictionaries` array, each entry
//! carrying one painted path. Segments follow the paper.js segment layout
//! of an anchor point plus two handle points; only the anchor carries real
//! coordinate data, the handles stay zeroed.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2;

/// One paper.js style segment: anchor point plus two zeroed handle points.
pub type Segment = [[f64; 2]; 3];

/// Build a segment around an anchor point.
pub fn segment_from_point(point: Point2) -> Segment {
    [[point.x, point.y], [0.0, 0.0], [0.0, 0.0]]
}

/// The anchor point of a segment.
pub fn segment_anchor(segment: &Segment) -> Point2 {
    Point2::new(segment[0][0], segment[0][1])
}

/// Top-level exchange document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeDocument {
    /// Slide file name the annotations belong to.
    #[serde(rename = "sourceSlide")]
    pub source_slide: String,
    /// Flat list of exported shapes.
    pub dictionaries: Vec<DictionaryEntry>,
}

/// One exported shape with its styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Unique identifier within one export.
    pub uid: String,
    /// Display name.
    pub name: String,
    /// Classification name.
    pub label: String,
    /// Paint information for the viewer.
    pub path: PathStyle,
    /// Zoom level the shape was drawn at. Written as 1.0, ignored on import.
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    /// Viewer-side containment bookkeeping. Always written empty.
    #[serde(default)]
    pub context: Vec<serde_json::Value>,
    /// Dictionary the entry belongs to on the viewer side.
    #[serde(default = "default_dictionary")]
    pub dictionary: String,
}

fn default_zoom() -> f64 {
    1.0
}

fn default_dictionary() -> String {
    "imported".to_string()
}

/// Paint information of one path, matching the viewer's serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub apply_matrix: bool,
    /// Boundary points. At least one per exported entry.
    pub segments: Vec<Segment>,
    /// Whether the path closes back onto its first point.
    pub closed: bool,
    /// Fill channels in 0-1: red, green, blue and usually an alpha.
    pub fill_color: Vec<f64>,
    /// Stroke channels in 0-1.
    pub stroke_color: [f64; 3],
    pub stroke_scaling: bool,
}
