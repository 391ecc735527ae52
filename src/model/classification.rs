//! Classification categories and the running registry.

use std::collections::HashMap;

use crate::color;

/// A named, colored category assigned to annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Display name, e.g. "Tumor" or "Stroma".
    pub name: String,
    /// RGB display color.
    pub color: [u8; 3],
}

impl Classification {
    /// Create a new classification with the given name and color.
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// The display color as a packed `0xRRGGBB` integer.
    pub fn packed_rgb(&self) -> u32 {
        color::pack_rgb(self.color[0], self.color[1], self.color[2])
    }
}

/// Registry of the classifications known to the running session.
///
/// Import assigns a classification only when its label is already
/// registered here; unmatched labels leave annotations unclassified.
#[derive(Debug, Default)]
pub struct ClassificationRegistry {
    classes: HashMap<String, Classification>,
}

impl ClassificationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a classification under its name, replacing any previous one.
    pub fn register(&mut self, classification: Classification) {
        self.classes
            .insert(classification.name.clone(), classification);
    }

    /// Whether a classification with this name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Look up a classification by name.
    pub fn get(&self, name: &str) -> Option<&Classification> {
        self.classes.get(name)
    }
}
