//! Mirror symmetry across the canvas's vertical centerline

use glam::Vec2;

/// Mirror a canvas-space point across the vertical centerline of a canvas
/// `width` pixels wide: `(width - x, y)`
#[inline]
pub fn mirror(point: Vec2, width: u32) -> Vec2 {
    Vec2::new(width as f32 - point.x, point.y)
}

/// Mirror a point across the vertical center of a rectangle starting at
/// `min_x`, for hosts working in widget-local coordinates
#[inline]
pub fn mirror_in_rect(point: Vec2, min_x: f32, width: f32) -> Vec2 {
    let center_x = min_x + width * 0.5;
    Vec2::new(2.0 * center_x - point.x, point.y)
}
