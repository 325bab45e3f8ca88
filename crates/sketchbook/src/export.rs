//! Image export for surfaces and layer stacks

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::info;

use crate::layers::LayerStack;
use crate::surface::CpuSurface;
use crate::validation::clamp01;

/// Base file name for merged exports
pub const MERGED_EXPORT_BASE: &str = "messhall_sketch_";

/// Highest index [`next_available_path`] will hand out
const MAX_EXPORT_INDEX: u32 = 999;

/// Error type for export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No free export name left for '{0}'")]
    NamesExhausted(String),
}

/// Output image format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless, keeps alpha
    #[default]
    Png,
    /// Lossy, alpha dropped
    Jpeg,
}

impl ExportFormat {
    /// File extension including the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => ".png",
            ExportFormat::Jpeg => ".jpg",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl CpuSurface {
    /// Quantize to 8-bit RGBA
    pub fn to_rgba8(&self) -> RgbaImage {
        let mut bytes = Vec::with_capacity(self.pixel_count() * 4);
        for px in self.pixels() {
            bytes.extend(px.iter().map(|&c| (clamp01(c) * 255.0).round() as u8));
        }
        // Buffer length is always width * height * 4
        RgbaImage::from_raw(self.width(), self.height(), bytes)
            .unwrap_or_else(|| RgbaImage::new(self.width(), self.height()))
    }

    /// Encode the surface to image bytes
    ///
    /// Pure function of pixel state: equal surfaces encode to equal bytes.
    pub fn encode(&self, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        let rgba = self.to_rgba8();
        let mut bytes = Vec::new();
        match format {
            ExportFormat::Png => {
                rgba.write_to(&mut Cursor::new(&mut bytes), format.image_format())?;
            }
            ExportFormat::Jpeg => {
                let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
                rgb.write_to(&mut Cursor::new(&mut bytes), format.image_format())?;
            }
        }
        Ok(bytes)
    }
}

/// First unused `{base}{NNN}{ext}` path in `dir`, counting from 001
pub fn next_available_path(dir: &Path, base: &str, ext: &str) -> Result<PathBuf, ExportError> {
    (1..=MAX_EXPORT_INDEX)
        .map(|i| dir.join(format!("{base}{i:03}{ext}")))
        .find(|path| !path.exists())
        .ok_or_else(|| ExportError::NamesExhausted(base.to_string()))
}

/// Flatten the stack and write it under the next free merged export name
pub fn export_merged(
    stack: &LayerStack,
    dir: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir)?;
    let path = next_available_path(dir, MERGED_EXPORT_BASE, format.extension())?;
    let bytes = stack.flatten().encode(format)?;
    std::fs::write(&path, bytes)?;
    info!("Exported merged sketch to {}", path.display());
    Ok(path)
}

impl LayerStack {
    /// Write each non-empty layer as `layer{index + 1}.png` in `dir`
    ///
    /// Blank layers are skipped. Returns the written paths in layer order.
    pub fn export_each(&self, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for (index, layer) in self.layers().iter().enumerate() {
            if layer.surface().is_blank() {
                continue;
            }
            let path = dir.join(format!("layer{}.png", index + 1));
            std::fs::write(&path, layer.surface().encode(ExportFormat::Png)?)?;
            written.push(path);
        }
        info!(
            "Exported {} of {} layers to {}",
            written.len(),
            self.len(),
            dir.display()
        );
        Ok(written)
    }

    /// Write the stroke save document as pretty JSON to `path`
    pub fn save_strokes(&self, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.stroke_document().to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::{StrokeDocument, StrokeRecord};
    use glam::Vec2;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_to_rgba8() {
        let mut surface = CpuSurface::new(2, 1);
        surface.set_pixel(0, 0, [1.0, 0.5, 0.0, 1.0]);
        let img = surface.to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [255, 128, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_png_is_lossless() {
        let mut surface = CpuSurface::new(5, 4);
        surface.set_pixel(1, 2, RED);
        surface.set_pixel(4, 3, [0.0, 0.0, 1.0, 0.2]);

        let bytes = surface.encode(ExportFormat::Png).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded, surface.to_rgba8());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mut surface = CpuSurface::new(8, 8);
        surface.clear([0.2, 0.4, 0.6, 0.8]);
        assert_eq!(
            surface.encode(ExportFormat::Png).unwrap(),
            surface.clone().encode(ExportFormat::Png).unwrap()
        );
    }

    #[test]
    fn test_jpeg_encodes() {
        let mut surface = CpuSurface::new(16, 16);
        surface.clear(RED);
        let bytes = surface.encode(ExportFormat::Jpeg).unwrap();
        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }

    #[test]
    fn test_next_available_path() {
        let dir = tempfile::tempdir().unwrap();
        let first = next_available_path(dir.path(), "sketch_", ".png").unwrap();
        assert_eq!(first, dir.path().join("sketch_001.png"));

        std::fs::write(&first, b"taken").unwrap();
        let second = next_available_path(dir.path(), "sketch_", ".png").unwrap();
        assert_eq!(second, dir.path().join("sketch_002.png"));

        // Other extensions do not collide
        let jpg = next_available_path(dir.path(), "sketch_", ".jpg").unwrap();
        assert_eq!(jpg, dir.path().join("sketch_001.jpg"));
    }

    #[test]
    fn test_export_merged_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut stack = LayerStack::new(8, 8);
        stack.add_layer();
        stack.active_surface_mut().unwrap().set_pixel(3, 3, RED);

        let first = export_merged(&stack, dir.path(), ExportFormat::Png).unwrap();
        let second = export_merged(&stack, dir.path(), ExportFormat::Png).unwrap();
        assert_eq!(first.file_name().unwrap(), "messhall_sketch_001.png");
        assert_eq!(second.file_name().unwrap(), "messhall_sketch_002.png");

        let decoded = image::open(&first).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(3, 3).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_export_each_skips_blank_layers() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("layers");
        let mut stack = LayerStack::new(4, 4);
        stack.add_layer();
        stack.add_layer();
        stack.add_layer();
        stack.active_surface_mut().unwrap().set_pixel(0, 0, RED);
        stack.set_active(0).unwrap();
        stack.active_surface_mut().unwrap().set_pixel(1, 1, RED);

        let written = stack.export_each(&out).unwrap();
        assert_eq!(written, vec![out.join("layer1.png"), out.join("layer3.png")]);
        assert!(!out.join("layer2.png").exists());
    }

    #[test]
    fn test_save_strokes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session").join("strokes.json");
        let mut stack = LayerStack::new(4, 4);
        stack.add_layer();
        stack
            .commit_stroke(StrokeRecord {
                points: vec![Vec2::new(1.0, 1.0), Vec2::new(2.0, 3.0)],
                color: RED,
                width: 5.0,
                layer_index: 0,
                order: 0,
            })
            .unwrap();

        stack.save_strokes(&path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        let doc = StrokeDocument::from_json(&json).unwrap();
        assert_eq!(doc, stack.stroke_document());
    }
}
