//! Persisted stroke records and the stroke save document

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A committed stroke: the pointer path and the settings it was drawn with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeRecord {
    /// Canvas-space pointer positions in the order they were sampled
    pub points: Vec<Vec2>,
    pub color: [f32; 4],
    /// Brush radius in pixels
    pub width: f32,
    pub layer_index: usize,
    /// Global creation order across all layers
    pub order: u64,
}

/// Strokes of a single layer inside a [`StrokeDocument`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStrokes {
    pub layer_index: usize,
    pub strokes: Vec<StrokeRecord>,
}

/// Save document for every recorded stroke, grouped by layer
///
/// Only layers that hold at least one stroke appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeDocument {
    pub layers: Vec<LayerStrokes>,
}

impl StrokeDocument {
    /// Build from `(layer_index, strokes)` pairs, dropping layers without strokes
    pub fn from_layers<'a, I>(layers: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a [StrokeRecord])>,
    {
        Self {
            layers: layers
                .into_iter()
                .filter(|(_, strokes)| !strokes.is_empty())
                .map(|(layer_index, strokes)| LayerStrokes {
                    layer_index,
                    strokes: strokes.to_vec(),
                })
                .collect(),
        }
    }

    /// Total number of strokes across all layers
    pub fn stroke_count(&self) -> usize {
        self.layers.iter().map(|l| l.strokes.len()).sum()
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
