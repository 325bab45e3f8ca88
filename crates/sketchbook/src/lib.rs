//! Sketchbook raster engine - brush strokes on layered CPU surfaces
//!
//! This crate provides the drawing core of the sketchbook:
//! - [`surface`] - f32 RGBA CPU surface with "over" blending and bottom-anchored growth
//! - [`raster`] - Circle stamps, Bresenham lines and airbrush scatter
//! - [`tool`] - Tool profile and the rasterization policy of each tool
//! - [`brush`] - Brush engine turning pointer samples into pixels
//! - [`symmetry`] - Mirror across the canvas's vertical centerline
//! - [`layers`] - Append-only layer stack with visibility and flattening
//! - [`log`] - Stroke records, lifecycle events and the save document
//! - [`export`] - PNG/JPEG encoding and file export
//! - [`scroll`] - Growable paper roll
//! - [`session`] - Pointer-driven sketchbook session
//! - [`validation`] - Clamping and pixel rounding helpers

pub mod brush;
pub mod constants;
pub mod export;
pub mod layers;
pub mod log;
pub mod raster;
pub mod scroll;
pub mod session;
pub mod surface;
pub mod symmetry;
pub mod tool;
pub mod types;
pub mod validation;

pub use brush::*;
pub use constants::*;
pub use export::*;
pub use layers::*;
pub use log::*;
pub use raster::{random_in_unit_disk, soft_falloff, LineWalk, Stamp};
pub use scroll::*;
pub use session::*;
pub use surface::*;
pub use symmetry::*;
pub use tool::*;
pub use types::*;
pub use validation::*;

pub use sketchbook_config::{BrushDefaults, CanvasConfig, PaperConfig, SketchbookConfig};
