//! Events emitted over a stroke's lifecycle

use super::record::StrokeRecord;

/// Stroke lifecycle events
///
/// Listeners registered on the sketchbook receive a clone of each event.
/// Session trackers use them to learn which layers were drawn on and how
/// many strokes were made.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeEvent {
    /// A new stroke has started recording.
    Started { order: u64, layer_index: usize },
    /// A stroke was finished and stored on its layer.
    Committed(StrokeRecord),
    /// The active layer changed.
    LayerSelected { index: usize },
}
