//! Shared configuration for the sketchbook
//!
//! This crate provides the single source of truth for canvas dimensions,
//! the Mess Hall paper roll, and the brush settings a fresh session starts
//! with. Every struct deserializes from partial JSON; missing fields take
//! their defaults.

use serde::{Deserialize, Serialize};

/// Default sketchbook layer width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1024;

/// Default sketchbook layer height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1024;

/// Number of layers a sketchbook starts with
pub const DEFAULT_LAYER_COUNT: usize = 3;

/// Default Mess Hall paper width in pixels
pub const DEFAULT_PAPER_WIDTH: u32 = 2048;

/// Height of one Mess Hall sheet in pixels
pub const DEFAULT_SHEET_HEIGHT: u32 = 2048;

/// Default brush radius in pixels
pub const DEFAULT_BRUSH_RADIUS: f32 = 10.0;

/// Default Mess Hall pen radius in pixels
pub const DEFAULT_PEN_RADIUS: f32 = 5.0;

/// Error loading a configuration document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Drawing tool selected in the tool panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    #[default]
    Pencil,
    Ink,
    Airbrush,
    Eraser,
}

impl ToolKind {
    /// All tools in tool-panel order
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Pencil,
        ToolKind::Ink,
        ToolKind::Airbrush,
        ToolKind::Eraser,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Ink => "Ink",
            ToolKind::Airbrush => "Airbrush",
            ToolKind::Eraser => "Eraser",
        }
    }
}

/// Brush settings applied when a session starts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushDefaults {
    pub tool: ToolKind,
    /// Radius in pixels
    pub radius: f32,
    /// RGBA, each channel 0..1
    pub color: [f32; 4],
    pub opacity: f32,
    /// Mirror strokes across the vertical centerline
    pub symmetry: bool,
}

impl Default for BrushDefaults {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            radius: DEFAULT_BRUSH_RADIUS,
            color: [0.0, 0.0, 0.0, 1.0],
            opacity: 1.0,
            symmetry: false,
        }
    }
}

/// Layered sketchbook canvas
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Layers created up front; more may be appended later
    pub layer_count: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            layer_count: DEFAULT_LAYER_COUNT,
        }
    }
}

impl CanvasConfig {
    /// Create a canvas config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Pixels per layer
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Mess Hall paper roll
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperConfig {
    pub width: u32,
    pub sheet_height: u32,
    pub pen_radius: f32,
    pub pen_color: [f32; 4],
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAPER_WIDTH,
            sheet_height: DEFAULT_SHEET_HEIGHT,
            pen_radius: DEFAULT_PEN_RADIUS,
            pen_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl PaperConfig {
    /// Total height of a roll holding `sheets` sheets
    pub fn height_for_sheets(&self, sheets: u32) -> u32 {
        self.sheet_height.saturating_mul(sheets)
    }
}

/// Complete sketchbook configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchbookConfig {
    pub canvas: CanvasConfig,
    pub paper: PaperConfig,
    pub brush: BrushDefaults,
}

impl SketchbookConfig {
    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
