//! Stochastic point scatter for the airbrush

use glam::Vec2;
use rand::Rng;

use crate::surface::CpuSurface;
use crate::validation::to_pixel;

impl CpuSurface {
    /// Blend `count` single-pixel samples placed uniformly inside the disk
    /// of `radius` around `center`
    ///
    /// Samples falling outside the surface are dropped. Returns how many
    /// samples landed on the surface.
    pub fn spray<R: Rng + ?Sized>(
        &mut self,
        center: Vec2,
        radius: f32,
        color: [f32; 4],
        count: usize,
        rng: &mut R,
    ) -> usize {
        let mut landed = 0;
        for _ in 0..count {
            let p = center + random_in_unit_disk(rng) * radius;
            let (x, y) = (to_pixel(p.x), to_pixel(p.y));
            if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
                continue;
            }
            self.blend_pixel(x as u32, y as u32, color);
            landed += 1;
        }
        landed
    }
}

/// Uniform point inside the unit disk (rejection sampling)
pub fn random_in_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    loop {
        let p = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if p.length_squared() <= 1.0 {
            return p;
        }
    }
}
