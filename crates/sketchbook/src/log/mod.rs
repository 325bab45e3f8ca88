//! Stroke recording and the stroke save document.
//!
//! This module provides:
//! - [`StrokeEvent`] - Lifecycle events for external session trackers
//! - [`StrokeRecorder`] - Helper for building one stroke at a time
//! - [`StrokeDocument`] - The JSON save format
//!
//! ## Save format
//!
//! ```text
//! { "layers": [ { "layerIndex": 0,
//!                 "strokes": [ { "points": [[x, y], ...], "color": [r, g, b, a],
//!                                "width": 10.0, "layerIndex": 0, "order": 0 } ] } ] }
//! ```
//!
//! `order` counts strokes across all layers, so replaying every layer's
//! strokes sorted by `order` reproduces the drawing sequence.

mod events;
mod record;
mod recorder;

pub use events::StrokeEvent;
pub use record::{LayerStrokes, StrokeDocument, StrokeRecord};
pub use recorder::{RecorderError, StrokeConfig, StrokeRecorder};
