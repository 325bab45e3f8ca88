use crate::constants::MIN_BRUSH_RADIUS;

/// Clamp a value into 0..1 (NaN becomes 0)
#[inline]
pub fn clamp01(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Clamp a brush radius to the minimum valid value (NaN becomes the minimum)
#[inline]
pub fn clamp_radius(radius: f32) -> f32 {
    if radius.is_nan() {
        return MIN_BRUSH_RADIUS;
    }
    radius.max(MIN_BRUSH_RADIUS)
}

/// Clamp every channel of a color into 0..1
pub fn clamp_color(color: [f32; 4]) -> [f32; 4] {
    color.map(clamp01)
}

/// Round a canvas coordinate to the nearest pixel, ties to even
#[inline]
pub fn to_pixel(coord: f32) -> i32 {
    coord.round_ties_even() as i32
}

/// Integer stencil radius for a brush radius
#[inline]
pub fn stamp_radius(radius: f32) -> i32 {
    to_pixel(clamp_radius(radius)).max(1)
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(7.0), 1.0);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }

    #[test]
    fn test_clamp_radius() {
        assert_eq!(clamp_radius(0.0), MIN_BRUSH_RADIUS);
        assert_eq!(clamp_radius(-3.0), MIN_BRUSH_RADIUS);
        assert_eq!(clamp_radius(12.5), 12.5);
        assert_eq!(clamp_radius(f32::NAN), MIN_BRUSH_RADIUS);
    }

    #[test]
    fn test_to_pixel_ties_to_even() {
        assert_eq!(to_pixel(2.5), 2);
        assert_eq!(to_pixel(3.5), 4);
        assert_eq!(to_pixel(-0.4), 0);
        assert_eq!(to_pixel(9.6), 10);
    }

    #[test]
    fn test_stamp_radius() {
        assert_eq!(stamp_radius(0.2), 1);
        assert_eq!(stamp_radius(4.4), 4);
        assert_eq!(stamp_radius(10.0), 10);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.8, 0.0, 0.0), 0.8);
        assert_eq!(lerp(0.8, 0.0, 1.0), 0.0);
    }
}
