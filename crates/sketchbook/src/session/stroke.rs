//! Pointer-driven stroke handling for the sketchbook session

use tracing::{debug, warn};

use crate::log::{StrokeConfig, StrokeEvent};
use crate::types::{PixelRect, PointerSample};

use super::Sketchbook;

impl Sketchbook {
    /// Begin a stroke on the active layer and draw its first dot
    ///
    /// Does nothing when no layer is active. A stroke still in progress is
    /// committed first.
    pub fn pointer_down(&mut self, sample: PointerSample) -> Option<PixelRect> {
        if self.is_stroking() {
            debug!("pointer_down: previous stroke never released, committing it");
            self.commit_stroke(sample.time);
        }

        let Some(layer_index) = self.layers.active_index() else {
            debug!("pointer_down: no active layer, ignoring");
            return None;
        };

        let profile = self.brush.profile();
        let config = StrokeConfig {
            layer_index,
            order: self.next_order,
            color: profile.color(),
            width: profile.radius(),
        };
        match self.recorder.start(config, sample.position) {
            Ok(event) => self.emit_event(event),
            Err(e) => {
                warn!("pointer_down: could not start recording: {}", e);
                return None;
            }
        }
        self.next_order += 1;
        self.stroke_layer = Some(layer_index);
        self.brush.begin_stroke(sample.time);

        self.draw_sample(sample)
    }

    /// Continue the stroke with a drag sample
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<PixelRect> {
        if !self.is_stroking() {
            return None;
        }
        if let Err(e) = self.recorder.add_point(sample.position) {
            warn!("pointer_move: {}", e);
        }
        self.draw_sample(sample)
    }

    /// Draw the final segment and commit the stroke to its layer
    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<PixelRect> {
        if !self.is_stroking() {
            return None;
        }
        if let Err(e) = self.recorder.add_point(sample.position) {
            warn!("pointer_up: {}", e);
        }
        let affected = self.draw_sample(sample);
        self.commit_stroke(sample.time);
        affected
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.stroke_layer.is_some()
    }

    fn draw_sample(&mut self, sample: PointerSample) -> Option<PixelRect> {
        let index = self.stroke_layer?;
        let surface = self.layers.layer_mut(index)?.surface_mut();
        self.brush.draw(surface, sample)
    }

    fn commit_stroke(&mut self, time: f32) {
        self.brush.end_stroke(time);
        self.stroke_layer = None;

        let record = match self.recorder.finish() {
            Ok(record) => record,
            Err(e) => {
                warn!("commit_stroke: {}", e);
                return;
            }
        };
        debug!(
            "Committed stroke {} on layer {} ({} points)",
            record.order,
            record.layer_index,
            record.points.len()
        );
        if let Err(e) = self.layers.commit_stroke(record.clone()) {
            warn!("commit_stroke: {}", e);
            return;
        }
        self.emit_event(StrokeEvent::Committed(record));
    }
}
