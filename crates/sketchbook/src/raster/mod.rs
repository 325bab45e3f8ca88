//! Rasterization primitives for CPU surfaces
//!
//! Circles are stamped on integer pixel centers; lines are walked with
//! Bresenham and stamped at every lattice point. Everything clips silently
//! against the surface edges.

mod line;
mod spray;
mod stamp;

use crate::types::{BlendMode, EdgeKind};

pub use line::LineWalk;
pub use spray::random_in_unit_disk;
pub use stamp::soft_falloff;

/// A circular stencil and how it writes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    /// Radius in whole pixels (at least 1)
    pub radius: i32,
    /// RGBA color; alpha is the stamp's base alpha
    pub color: [f32; 4],
    pub edge: EdgeKind,
    pub mode: BlendMode,
}

impl Stamp {
    pub fn hard(radius: i32, color: [f32; 4]) -> Self {
        Self {
            radius,
            color,
            edge: EdgeKind::Hard,
            mode: BlendMode::Normal,
        }
    }

    pub fn soft(radius: i32, color: [f32; 4]) -> Self {
        Self {
            edge: EdgeKind::Soft,
            ..Self::hard(radius, color)
        }
    }

    pub fn eraser(radius: i32) -> Self {
        Self {
            radius,
            color: crate::constants::TRANSPARENT,
            edge: EdgeKind::Hard,
            mode: BlendMode::Erase,
        }
    }
}
