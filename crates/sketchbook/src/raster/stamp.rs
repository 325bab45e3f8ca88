//! Circular stamp application

use tracing::debug;

use super::{LineWalk, Stamp};
use crate::surface::CpuSurface;
use crate::types::{union_rect, BlendMode, EdgeKind, PixelRect};

impl CpuSurface {
    /// Apply a filled circle centered on an integer pixel
    ///
    /// A pixel at offset (dx, dy) belongs to the stamp iff
    /// `dx² + dy² <= radius²`. Pixels outside the surface are skipped.
    /// Returns the bounding box of the affected region, or None if the stamp
    /// lies completely outside the surface.
    pub fn stamp_circle(&mut self, cx: i32, cy: i32, stamp: &Stamp) -> Option<PixelRect> {
        let radius = stamp.radius.max(1);
        let width = self.width() as i64;
        let height = self.height() as i64;

        // Clamp the stencil's bounding box to the surface
        let x_min = (cx as i64 - radius as i64).max(0);
        let y_min = (cy as i64 - radius as i64).max(0);
        let x_max = (cx as i64 + radius as i64).min(width - 1);
        let y_max = (cy as i64 + radius as i64).min(height - 1);

        if x_min > x_max || y_min > y_max {
            return None;
        }

        let radius_sq = radius as i64 * radius as i64;
        let surface_width = self.width() as usize;
        let pixels = self.pixels_mut();

        for py in y_min..=y_max {
            let dy = py - cy as i64;
            let row = py as usize * surface_width;
            for px in x_min..=x_max {
                let dx = px - cx as i64;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq > radius_sq {
                    continue;
                }

                let pixel = &mut pixels[row + px as usize];
                match stamp.mode {
                    BlendMode::Erase => *pixel = crate::constants::TRANSPARENT,
                    BlendMode::Normal => {
                        let mut color = stamp.color;
                        if stamp.edge == EdgeKind::Soft {
                            let fade = (dist_sq as f32).sqrt() / radius as f32;
                            color[3] = soft_falloff(color[3], fade);
                        }
                        *pixel = crate::surface::blend_over(*pixel, color);
                    }
                }
            }
        }

        Some((
            x_min as u32,
            y_min as u32,
            (x_max - x_min + 1) as u32,
            (y_max - y_min + 1) as u32,
        ))
    }

    /// Stamp a circle at every lattice point of the line from `from` to `to`
    ///
    /// The segment is first clipped to the surface grown by the stamp
    /// radius, since stamps beyond that margin cannot touch a pixel.
    /// Returns the union of the affected regions.
    pub fn stamp_line(&mut self, from: (i32, i32), to: (i32, i32), stamp: &Stamp) -> Option<PixelRect> {
        let margin = stamp.radius.max(1) as i64 + 1;
        let lo = (-margin, -margin);
        let hi = (
            self.width() as i64 - 1 + margin,
            self.height() as i64 - 1 + margin,
        );
        let Some((start, end)) = clip_segment(from, to, lo, hi) else {
            debug!(
                "CpuSurface::stamp_line: {:?} -> {:?} misses the surface",
                from, to
            );
            return None;
        };

        let mut affected = None;
        let mut count = 0usize;
        for (x, y) in LineWalk::new(start, end) {
            affected = union_rect(affected, self.stamp_circle(x, y, stamp));
            count += 1;
        }

        debug!(
            "CpuSurface::stamp_line: {:?} -> {:?}, {} stamps, radius={}, edge={:?}, mode={:?}",
            from, to, count, stamp.radius, stamp.edge, stamp.mode
        );

        affected
    }
}

/// Clip the segment `from`-`to` to the inclusive box `lo`..=`hi`
/// (Liang-Barsky). Endpoints already inside the box are returned unchanged.
fn clip_segment(
    from: (i32, i32),
    to: (i32, i32),
    lo: (i64, i64),
    hi: (i64, i64),
) -> Option<((i32, i32), (i32, i32))> {
    let inside = |p: (i32, i32)| {
        (lo.0..=hi.0).contains(&(p.0 as i64)) && (lo.1..=hi.1).contains(&(p.1 as i64))
    };
    if inside(from) && inside(to) {
        return Some((from, to));
    }

    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let dx = to.0 as f64 - x0;
    let dy = to.1 as f64 - y0;
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    let edges = [
        (-dx, x0 - lo.0 as f64),
        (dx, hi.0 as f64 - x0),
        (-dy, y0 - lo.1 as f64),
        (dy, hi.1 as f64 - y0),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| {
        let x = (x0 + t * dx).round().clamp(lo.0 as f64, hi.0 as f64);
        let y = (y0 + t * dy).round().clamp(lo.1 as f64, hi.1 as f64);
        (x as i32, y as i32)
    };
    let start = if t0 == 0.0 { from } else { at(t0) };
    let end = if t1 == 1.0 { to } else { at(t1) };
    Some((start, end))
}

/// Alpha of a soft stamp at normalized distance `fade` (0 at center, 1 at edge)
///
/// Fades linearly from `base_alpha` to 0: `lerp(base_alpha, 0, fade)`.
#[inline]
pub fn soft_falloff(base_alpha: f32, fade: f32) -> f32 {
    crate::validation::lerp(base_alpha, 0.0, fade.clamp(0.0, 1.0))
}
