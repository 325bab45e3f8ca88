//! Stroke recorder for building a stroke record point by point.

use glam::Vec2;

use super::events::StrokeEvent;
use super::record::StrokeRecord;

/// Error type for stroke recording operations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecorderError {
    #[error("Stroke not started - call start() first")]
    NotStarted,
    #[error("Stroke already started - call finish() first")]
    AlreadyStarted,
}

/// Configuration for starting a new stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeConfig {
    pub layer_index: usize,
    pub order: u64,
    pub color: [f32; 4],
    pub width: f32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            layer_index: 0,
            order: 0,
            color: [0.0, 0.0, 0.0, 1.0],
            width: sketchbook_config::DEFAULT_BRUSH_RADIUS,
        }
    }
}

/// Helper for building one stroke record at a time.
///
/// # Example
///
/// ```ignore
/// let mut recorder = StrokeRecorder::new();
/// recorder.start(config, Vec2::new(10.0, 10.0))?;
/// recorder.add_point(Vec2::new(12.0, 11.0))?;
/// let record = recorder.finish()?;
/// layers.commit_stroke(record);
/// ```
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    /// Current stroke configuration (None if not recording)
    config: Option<StrokeConfig>,
    points: Vec<Vec2>,
}

impl StrokeRecorder {
    /// Create a new stroke recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if currently recording a stroke.
    pub fn is_recording(&self) -> bool {
        self.config.is_some()
    }

    /// Start recording a new stroke at `start`.
    ///
    /// Returns a `Started` event that should be emitted to listeners.
    pub fn start(&mut self, config: StrokeConfig, start: Vec2) -> Result<StrokeEvent, RecorderError> {
        if self.config.is_some() {
            return Err(RecorderError::AlreadyStarted);
        }

        self.points.clear();
        self.points.push(start);

        let event = StrokeEvent::Started {
            order: config.order,
            layer_index: config.layer_index,
        };
        self.config = Some(config);

        Ok(event)
    }

    /// Append a point to the current stroke.
    pub fn add_point(&mut self, point: Vec2) -> Result<(), RecorderError> {
        if self.config.is_none() {
            return Err(RecorderError::NotStarted);
        }
        self.points.push(point);
        Ok(())
    }

    /// Get the number of points in the current stroke.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Finish the current stroke and return its record.
    pub fn finish(&mut self) -> Result<StrokeRecord, RecorderError> {
        let config = self.config.take().ok_or(RecorderError::NotStarted)?;

        Ok(StrokeRecord {
            points: std::mem::take(&mut self.points),
            color: config.color,
            width: config.width,
            layer_index: config.layer_index,
            order: config.order,
        })
    }
}
