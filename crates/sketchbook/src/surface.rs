//! CPU surface for painting - f32 RGBA storage

use tracing::info;

use crate::constants::TRANSPARENT;

/// A floating point RGBA CPU surface
///
/// Stores pixels as `[f32; 4]` in row-major order, each channel in 0..1.
/// The buffer always holds exactly `width * height` pixels. Width is fixed
/// for the surface's lifetime; height may only grow (see [`CpuSurface::grow_height`]).
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSurface {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; pixel_count],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major buffer index, or None when out of bounds
    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Blend a color onto an existing pixel
    /// Formula: out = lerp(dst, src, src.a), per channel including alpha
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = blend_over(self.pixels[i], color);
        }
    }

    /// Force a pixel fully transparent
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn erase_pixel(&mut self, x: u32, y: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = TRANSPARENT;
        }
    }

    /// Grow the surface to `new_height` rows
    ///
    /// Existing content is shifted down by the height delta so it stays
    /// anchored to the bottom edge; the new rows at the top are transparent.
    /// Returns false (and changes nothing) if `new_height` is not larger
    /// than the current height.
    pub fn grow_height(&mut self, new_height: u32) -> bool {
        if new_height <= self.height {
            return false;
        }

        let added_rows = (new_height - self.height) as usize;
        let mut pixels = Vec::with_capacity(self.width as usize * new_height as usize);
        pixels.resize(added_rows * self.width as usize, TRANSPARENT);
        pixels.append(&mut self.pixels);

        info!(
            "CpuSurface::grow_height: {}x{} -> {}x{}",
            self.width, self.height, self.width, new_height
        );

        self.pixels = pixels;
        self.height = new_height;
        true
    }

    /// True when every pixel has zero alpha
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| p[3] <= 0.0)
    }

    /// Get raw pixel data for GPU upload
    /// Returns the pixel data as a byte slice suitable for an Rgba32Float texture
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// One row of pixels, or None if `y` is out of bounds
    pub fn row(&self, y: u32) -> Option<&[[f32; 4]]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Get direct access to pixel data (for advanced operations)
    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Get mutable access to pixel data (for advanced operations)
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[f32; 4]] {
        &mut self.pixels
    }
}

/// "Over" blend used by brushes and layer flattening
#[inline]
pub fn blend_over(dst: [f32; 4], src: [f32; 4]) -> [f32; 4] {
    let t = src[3];
    [
        dst[0] + (src[0] - dst[0]) * t,
        dst[1] + (src[1] - dst[1]) * t,
        dst[2] + (src[2] - dst[2]) * t,
        dst[3] + (src[3] - dst[3]) * t,
    ]
}
