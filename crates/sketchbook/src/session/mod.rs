//! Sketchbook session
//!
//! This module ties together:
//! - Pointer input (down / move / up samples from the host)
//! - The brush engine (tool policy and rasterization)
//! - The layer stack (active layer routing, flattening, export)
//! - Stroke recording (committed to layers, announced to listeners)
//!
//! The session is synchronous and owns everything it mutates; the host
//! serializes exports against drawing by calling them between strokes.

mod stroke;

use sketchbook_config::{SketchbookConfig, ToolKind};
use tracing::debug;

use crate::brush::BrushEngine;
use crate::layers::{LayerError, LayerStack};
use crate::log::{StrokeDocument, StrokeEvent, StrokeRecorder};
use crate::surface::CpuSurface;
use crate::tool::ToolProfile;

type Listener = Box<dyn Fn(StrokeEvent) + Send + Sync>;

/// A layered drawing session driven by pointer samples
///
/// 1. `pointer_down` begins a stroke on the active layer and draws a dot
/// 2. `pointer_move` connects each sample to the previous one
/// 3. `pointer_up` draws the final segment and commits the stroke record
pub struct Sketchbook {
    pub(crate) layers: LayerStack,
    pub(crate) brush: BrushEngine,
    pub(crate) recorder: StrokeRecorder,
    /// Layer the in-progress stroke draws on (None if not drawing)
    pub(crate) stroke_layer: Option<usize>,
    /// Creation order handed to the next stroke
    pub(crate) next_order: u64,
    event_listeners: Vec<Listener>,
}

impl std::fmt::Debug for Sketchbook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketchbook")
            .field("layers", &self.layers.len())
            .field("active", &self.layers.active_index())
            .field("tool", &self.brush.profile().kind())
            .field("stroke_layer", &self.stroke_layer)
            .field("next_order", &self.next_order)
            .field("listener_count", &self.event_listeners.len())
            .finish()
    }
}

impl Sketchbook {
    /// Create a session from configuration
    pub fn new(config: &SketchbookConfig) -> Self {
        Self::with_parts(
            LayerStack::from_config(&config.canvas),
            BrushEngine::new(ToolProfile::from_defaults(&config.brush)),
        )
    }

    /// Create a session from an existing stack and engine
    pub fn with_parts(layers: LayerStack, mut brush: BrushEngine) -> Self {
        if let Some(index) = layers.active_index() {
            brush.profile_mut().set_active_layer(index);
        }
        Self {
            layers,
            brush,
            recorder: StrokeRecorder::new(),
            stroke_layer: None,
            next_order: 0,
            event_listeners: Vec::new(),
        }
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn brush(&self) -> &BrushEngine {
        &self.brush
    }

    pub fn profile(&self) -> &ToolProfile {
        self.brush.profile()
    }

    pub fn set_tool(&mut self, kind: ToolKind) {
        debug!("Sketchbook: tool -> {}", kind.name());
        self.brush.profile_mut().set_kind(kind);
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.brush.profile_mut().set_radius(radius);
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.brush.profile_mut().set_color(color);
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.brush.profile_mut().set_opacity(opacity);
    }

    pub fn set_mirror(&mut self, enabled: bool) {
        self.brush.profile_mut().set_mirror(enabled);
    }

    /// Append a layer; it becomes the active one
    pub fn add_layer(&mut self) -> usize {
        let index = self.layers.add_layer();
        self.brush.profile_mut().set_active_layer(index);
        self.emit_event(StrokeEvent::LayerSelected { index });
        index
    }

    /// Route new strokes to layer `index`
    ///
    /// A stroke already in progress keeps drawing on its own layer.
    pub fn set_active_layer(&mut self, index: usize) -> Result<(), LayerError> {
        self.layers.set_active(index)?;
        self.brush.profile_mut().set_active_layer(index);
        self.emit_event(StrokeEvent::LayerSelected { index });
        Ok(())
    }

    pub fn set_layer_visible(&mut self, index: usize, visible: bool) -> Result<(), LayerError> {
        self.layers.set_visible(index, visible)
    }

    /// Composite of all visible layers
    pub fn flatten(&self) -> CpuSurface {
        self.layers.flatten()
    }

    /// Every committed stroke, grouped by layer
    pub fn stroke_document(&self) -> StrokeDocument {
        self.layers.stroke_document()
    }

    /// Register a listener for stroke and layer events
    pub fn add_event_listener<F>(&mut self, listener: F)
    where
        F: Fn(StrokeEvent) + Send + Sync + 'static,
    {
        self.event_listeners.push(Box::new(listener));
    }

    pub(crate) fn emit_event(&self, event: StrokeEvent) {
        for listener in &self.event_listeners {
            listener(event.clone());
        }
    }
}
