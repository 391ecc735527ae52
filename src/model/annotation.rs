//! Annotation objects owned by the hierarchy.

use crate::geometry::Shape;
use crate::model::classification::Classification;

/// Identifier assigned by the hierarchy on insertion.
pub type AnnotationId = u32;

/// A user- or service-drawn region, line, or point of interest on a slide.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Identifier within the owning hierarchy. Zero until inserted.
    pub id: AnnotationId,
    /// The shape geometry.
    pub shape: Shape,
    /// Optional display name.
    pub name: Option<String>,
    /// Optional classification.
    pub classification: Option<Classification>,
    /// Optional packed `0xRRGGBB` display color.
    pub color_rgb: Option<u32>,
}

impl Annotation {
    /// Create an unnamed, unclassified annotation with the given shape.
    pub fn new(shape: Shape) -> Self {
        Self {
            id: 0,
            shape,
            name: None,
            classification: None,
            color_rgb: None,
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the classification.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    /// Set the packed RGB display color.
    pub fn with_color_rgb(mut self, rgb: u32) -> Self {
        self.color_rgb = Some(rgb);
        self
    }

    /// Name of the assigned classification, if any.
    pub fn classification_name(&self) -> Option<&str> {
        self.classification.as_ref().map(|c| c.name.as_str())
    }
}
