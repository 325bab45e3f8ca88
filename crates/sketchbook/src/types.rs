use glam::Vec2;
use serde::{Deserialize, Serialize};

pub use sketchbook_config::ToolKind;

/// How a stamp writes into a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum BlendMode {
    /// `lerp(dst, src, src.a)` per channel
    #[default]
    Normal = 0,
    /// Force the destination fully transparent
    Erase = 1,
}

/// Stamp edge profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum EdgeKind {
    /// Same alpha across the whole stamp
    #[default]
    Hard = 0,
    /// Alpha fades linearly from the center to zero at the radius
    Soft = 1,
}

/// One pointer sample delivered by the input adapter
///
/// `position` is already in canvas pixel space. `time` is the host clock in
/// seconds and `frame_delta` the duration of the frame that produced the
/// sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub time: f32,
    pub frame_delta: f32,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, time: f32, frame_delta: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            time,
            frame_delta,
        }
    }

    /// The same sample at a different position
    pub fn at(&self, position: Vec2) -> Self {
        Self { position, ..*self }
    }
}

/// Axis-aligned pixel rectangle: (x, y, width, height)
pub type PixelRect = (u32, u32, u32, u32);

/// Union of two optional pixel rectangles
pub fn union_rect(a: Option<PixelRect>, b: Option<PixelRect>) -> Option<PixelRect> {
    match (a, b) {
        (None, r) | (r, None) => r,
        (Some((ax, ay, aw, ah)), Some((bx, by, bw, bh))) => {
            let x = ax.min(bx);
            let y = ay.min(by);
            let right = (ax + aw).max(bx + bw);
            let bottom = (ay + ah).max(by + bh);
            Some((x, y, right - x, bottom - y))
        }
    }
}
