//! Brush engine: turns pointer samples into pixels
//!
//! Each draw call derives the pointer speed from the previous sample, asks
//! the [`ToolProfile`] for the active tool's [`StrokePolicy`], and rasterizes
//! it onto the target surface. With symmetry enabled the same tool logic runs
//! a second time on the mirrored coordinates, as an independent stroke.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::surface::CpuSurface;
use crate::symmetry::mirror;
use crate::tool::{Kinematics, StrokePolicy, ToolProfile};
use crate::types::{union_rect, PixelRect, PointerSample};
use crate::validation::to_pixel;

/// Brush engine that rasterizes pointer samples
pub struct BrushEngine {
    /// Current tool settings and stroke kinematics
    profile: ToolProfile,
    /// Source of airbrush scatter
    rng: StdRng,
}

impl BrushEngine {
    /// Create a new brush engine with the given profile
    pub fn new(profile: ToolProfile) -> Self {
        Self {
            profile,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a brush engine whose airbrush scatter is reproducible
    pub fn with_seed(profile: ToolProfile, seed: u64) -> Self {
        Self {
            profile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a brush engine with the default profile
    pub fn with_default_profile() -> Self {
        Self::new(ToolProfile::default())
    }

    /// Get the current profile
    pub fn profile(&self) -> &ToolProfile {
        &self.profile
    }

    /// Mutable access for tool panel setters
    pub fn profile_mut(&mut self) -> &mut ToolProfile {
        &mut self.profile
    }

    /// Replace the profile, keeping the current stroke's kinematics
    pub fn set_profile(&mut self, profile: ToolProfile) {
        let kinematics = *self.profile.kinematics();
        self.profile = profile;
        if let Some(last) = kinematics.last_pos {
            self.profile.advance(last, kinematics.last_time);
        }
    }

    /// Start a new stroke
    pub fn begin_stroke(&mut self, time: f32) {
        self.profile.begin_stroke(time);
    }

    /// Draw one pointer sample onto `surface`
    ///
    /// The first sample after [`begin_stroke`](Self::begin_stroke) produces
    /// a single stamp; later samples connect to the previous one. Returns
    /// the bounding box of the touched region.
    pub fn draw(&mut self, surface: &mut CpuSurface, sample: PointerSample) -> Option<PixelRect> {
        let kinematics = *self.profile.kinematics();
        let from = kinematics.last_pos;
        let to = sample.position;

        let speed = kinematics.speed_to(to, sample.time);
        let policy = self.profile.policy(speed, sample.frame_delta);
        let mut affected = self.rasterize(surface, policy, from, to);

        if self.profile.mirror() {
            let width = surface.width();
            let mirrored = Kinematics {
                last_pos: from.map(|p| mirror(p, width)),
                last_time: kinematics.last_time,
            };
            let to = mirror(to, width);
            let speed = mirrored.speed_to(to, sample.time);
            let policy = self.profile.policy(speed, sample.frame_delta);
            affected = union_rect(affected, self.rasterize(surface, policy, mirrored.last_pos, to));
        }

        debug!(
            "BrushEngine::draw: {:?} at ({:.1}, {:.1}), speed={:.1}, mirror={}, affected={:?}",
            self.profile.kind(),
            sample.position.x,
            sample.position.y,
            speed,
            self.profile.mirror(),
            affected
        );

        self.profile.advance(sample.position, sample.time);
        affected
    }

    /// End the current stroke
    pub fn end_stroke(&mut self, time: f32) {
        self.profile.begin_stroke(time);
    }

    fn rasterize(
        &mut self,
        surface: &mut CpuSurface,
        policy: StrokePolicy,
        from: Option<Vec2>,
        to: Vec2,
    ) -> Option<PixelRect> {
        let end = (to_pixel(to.x), to_pixel(to.y));
        match policy {
            StrokePolicy::Line(stamp) => match from {
                Some(from) => surface.stamp_line((to_pixel(from.x), to_pixel(from.y)), end, &stamp),
                None => surface.stamp_circle(end.0, end.1, &stamp),
            },
            StrokePolicy::Spray {
                radius,
                color,
                count,
            } => {
                let landed = surface.spray(to, radius, color, count, &mut self.rng);
                if landed == 0 {
                    return None;
                }
                spray_bounds(surface, to, radius)
            }
        }
    }
}

/// Bounding box of every pixel a spray around `center` can reach
fn spray_bounds(surface: &CpuSurface, center: Vec2, radius: f32) -> Option<PixelRect> {
    let x_min = to_pixel(center.x - radius).max(0);
    let y_min = to_pixel(center.y - radius).max(0);
    let x_max = to_pixel(center.x + radius).min(surface.width() as i32 - 1);
    let y_max = to_pixel(center.y + radius).min(surface.height() as i32 - 1);
    if x_min > x_max || y_min > y_max {
        return None;
    }
    Some((
        x_min as u32,
        y_min as u32,
        (x_max - x_min + 1) as u32,
        (y_max - y_min + 1) as u32,
    ))
}
