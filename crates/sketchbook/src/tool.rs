//! Tool profile: the brush settings the tool panel edits, and the
//! rasterization policy each tool maps to

use glam::Vec2;
use sketchbook_config::BrushDefaults;

use crate::constants::{
    AIRBRUSH_BUILDUP_RATE, AIRBRUSH_SAMPLES_PER_RADIUS, PENCIL_MAX_FADE, PENCIL_SPEED_FADE,
};
use crate::raster::Stamp;
use crate::types::ToolKind;
use crate::validation::{clamp01, clamp_color, clamp_radius, stamp_radius};

/// Last sample seen in the current stroke, used to derive pointer speed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kinematics {
    pub last_pos: Option<Vec2>,
    pub last_time: f32,
}

impl Kinematics {
    /// Instantaneous speed in pixels/second; zero without a previous sample
    /// or when no time has elapsed
    pub fn speed_to(&self, position: Vec2, time: f32) -> f32 {
        let Some(last) = self.last_pos else {
            return 0.0;
        };
        let dt = time - self.last_time;
        if dt > 0.0 {
            position.distance(last) / dt
        } else {
            0.0
        }
    }
}

/// How one draw call rasterizes for the active tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokePolicy {
    /// Stamp along the segment from the previous sample (a single dot for
    /// the first sample of a stroke)
    Line(Stamp),
    /// Scatter single-pixel samples around the current position only
    Spray {
        radius: f32,
        color: [f32; 4],
        count: usize,
    },
}

/// Brush settings and per-stroke kinematic state
#[derive(Debug, Clone, PartialEq)]
pub struct ToolProfile {
    kind: ToolKind,
    radius: f32,
    color: [f32; 4],
    opacity: f32,
    mirror: bool,
    active_layer: usize,
    kinematics: Kinematics,
}

impl Default for ToolProfile {
    fn default() -> Self {
        Self::from_defaults(&BrushDefaults::default())
    }
}

impl ToolProfile {
    /// Create a profile for `kind` with the default brush settings
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Build from configured brush defaults, clamping out-of-range values
    pub fn from_defaults(defaults: &BrushDefaults) -> Self {
        Self {
            kind: defaults.tool,
            radius: clamp_radius(defaults.radius),
            color: clamp_color(defaults.color),
            opacity: clamp01(defaults.opacity),
            mirror: defaults.symmetry,
            active_layer: 0,
            kinematics: Kinematics::default(),
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ToolKind) {
        self.kind = kind;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the radius in pixels; values below 1 are clamped to 1
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = clamp_radius(radius);
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = clamp_color(color);
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the opacity, clamped into 0..1
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = clamp01(opacity);
    }

    pub fn mirror(&self) -> bool {
        self.mirror
    }

    pub fn set_mirror(&mut self, enabled: bool) {
        self.mirror = enabled;
    }

    /// Layer index the tool panel has selected
    pub fn active_layer(&self) -> usize {
        self.active_layer
    }

    pub fn set_active_layer(&mut self, index: usize) {
        self.active_layer = index;
    }

    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// Forget the previous sample so the next one starts a fresh stroke
    pub fn begin_stroke(&mut self, time: f32) {
        self.kinematics = Kinematics {
            last_pos: None,
            last_time: time,
        };
    }

    /// Remember the sample just drawn
    pub(crate) fn advance(&mut self, position: Vec2, time: f32) {
        self.kinematics = Kinematics {
            last_pos: Some(position),
            last_time: time,
        };
    }

    /// Rasterization policy for one draw call
    ///
    /// `speed` is the pointer speed in pixels/second, `frame_delta` the
    /// host frame time in seconds.
    pub fn policy(&self, speed: f32, frame_delta: f32) -> StrokePolicy {
        let radius = stamp_radius(self.radius);
        match self.kind {
            ToolKind::Pencil => {
                let fade = clamp01(speed / PENCIL_SPEED_FADE);
                let mut color = self.color;
                color[3] = self.opacity * (1.0 - fade * PENCIL_MAX_FADE);
                StrokePolicy::Line(Stamp::soft(radius, color))
            }
            ToolKind::Ink => {
                let mut color = self.color;
                color[3] = self.opacity;
                StrokePolicy::Line(Stamp::hard(radius, color))
            }
            ToolKind::Airbrush => {
                let mut color = self.color;
                color[3] = clamp01(self.opacity * frame_delta.max(0.0) * AIRBRUSH_BUILDUP_RATE);
                StrokePolicy::Spray {
                    radius: self.radius,
                    color,
                    count: (self.radius * AIRBRUSH_SAMPLES_PER_RADIUS).ceil() as usize,
                }
            }
            ToolKind::Eraser => StrokePolicy::Line(Stamp::eraser(radius)),
        }
    }
}
