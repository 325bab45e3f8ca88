//! Scrolling paper roll: one surface that grows a sheet at a time
//!
//! New sheets are added at the top. Existing ink moves down by the sheet
//! height so the roll reads as continuous paper.

use sketchbook_config::{PaperConfig, ToolKind};
use tracing::debug;

use crate::brush::BrushEngine;
use crate::surface::CpuSurface;
use crate::tool::ToolProfile;
use crate::types::{PixelRect, PointerSample};

/// Grow `surface` to `new_total_height`, keeping content anchored to the
/// bottom. Returns false (and leaves the surface alone) unless the request
/// is taller than the current height.
pub fn extend(surface: &mut CpuSurface, new_total_height: u32) -> bool {
    surface.grow_height(new_total_height)
}

/// A growable sheet of paper drawn on with a hard pen
pub struct ScrollingCanvas {
    surface: CpuSurface,
    sheet_height: u32,
    pen: BrushEngine,
    drawing: bool,
}

impl ScrollingCanvas {
    /// One blank sheet of `width`x`sheet_height`, with the configured pen
    pub fn from_config(config: &PaperConfig) -> Self {
        let mut profile = ToolProfile::new(ToolKind::Ink);
        profile.set_radius(config.pen_radius);
        profile.set_color(config.pen_color);
        Self::new(config.width, config.sheet_height, BrushEngine::new(profile))
    }

    pub fn new(width: u32, sheet_height: u32, pen: BrushEngine) -> Self {
        Self {
            surface: CpuSurface::new(width, sheet_height),
            sheet_height,
            pen,
            drawing: false,
        }
    }

    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    pub fn pen(&self) -> &BrushEngine {
        &self.pen
    }

    pub fn pen_mut(&mut self) -> &mut BrushEngine {
        &mut self.pen
    }

    pub fn sheet_height(&self) -> u32 {
        self.sheet_height
    }

    /// Number of whole sheets the roll spans
    pub fn sheet_count(&self) -> u32 {
        if self.sheet_height == 0 {
            0
        } else {
            self.surface.height() / self.sheet_height
        }
    }

    /// Add one blank sheet above the existing paper
    ///
    /// Ends any stroke in progress, since its coordinates no longer match
    /// the shifted content.
    pub fn add_sheet(&mut self) -> bool {
        let target = self.surface.height().saturating_add(self.sheet_height);
        if !extend(&mut self.surface, target) {
            return false;
        }
        if self.drawing {
            let time = self.pen.profile().kinematics().last_time;
            self.pen.end_stroke(time);
            self.drawing = false;
        }
        debug!("ScrollingCanvas: now {} sheets", self.sheet_count());
        true
    }

    pub fn pointer_down(&mut self, sample: PointerSample) -> Option<PixelRect> {
        self.pen.begin_stroke(sample.time);
        self.drawing = true;
        self.pen.draw(&mut self.surface, sample)
    }

    /// Continue the stroke; ignored when no stroke is in progress
    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<PixelRect> {
        if !self.drawing {
            return None;
        }
        self.pen.draw(&mut self.surface, sample)
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<PixelRect> {
        if !self.drawing {
            return None;
        }
        let affected = self.pen.draw(&mut self.surface, sample);
        self.pen.end_stroke(sample.time);
        self.drawing = false;
        affected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: u32, sheet_height: u32) -> ScrollingCanvas {
        let mut profile = ToolProfile::new(ToolKind::Ink);
        profile.set_radius(1.0);
        ScrollingCanvas::new(width, sheet_height, BrushEngine::with_seed(profile, 3))
    }

    #[test]
    fn test_from_config() {
        let paper = ScrollingCanvas::from_config(&PaperConfig::default());
        assert_eq!(paper.surface().width(), 2048);
        assert_eq!(paper.surface().height(), 2048);
        assert_eq!(paper.sheet_count(), 1);
        assert_eq!(paper.pen().profile().kind(), ToolKind::Ink);
        assert_eq!(paper.pen().profile().radius(), 5.0);
    }

    #[test]
    fn test_extend_anchors_bottom() {
        let mut surface = CpuSurface::new(512, 512);
        let marker = [0.25, 0.5, 0.75, 1.0];
        surface.set_pixel(256, 256, marker);

        assert!(extend(&mut surface, 1024));
        assert_eq!(surface.height(), 1024);
        assert_eq!(surface.get_pixel(256, 768), Some(marker));
        assert_eq!(surface.get_pixel(256, 256).unwrap()[3], 0.0);
    }

    #[test]
    fn test_extend_rejects_shrink() {
        let mut surface = CpuSurface::new(16, 16);
        surface.clear([1.0, 1.0, 1.0, 1.0]);
        let before = surface.clone();

        assert!(!extend(&mut surface, 16));
        assert!(!extend(&mut surface, 8));
        assert_eq!(surface, before);
    }

    #[test]
    fn test_add_sheet() {
        let mut paper = canvas(32, 20);
        paper.pointer_down(PointerSample::new(5.0, 5.0, 0.0, 0.016));
        paper.pointer_up(PointerSample::new(5.0, 5.0, 0.1, 0.016));

        assert!(paper.add_sheet());
        assert_eq!(paper.sheet_count(), 2);
        assert_eq!(paper.surface().height(), 40);
        assert_eq!(paper.surface().get_pixel(5, 25).unwrap()[3], 1.0);
    }

    #[test]
    fn test_pen_draws_line() {
        let mut paper = canvas(64, 64);
        paper.pointer_down(PointerSample::new(10.0, 30.0, 0.0, 0.016));
        paper.pointer_move(PointerSample::new(30.0, 30.0, 0.05, 0.016));
        paper.pointer_up(PointerSample::new(50.0, 30.0, 0.1, 0.016));

        for x in 10..=50 {
            assert_eq!(paper.surface().get_pixel(x, 30).unwrap()[3], 1.0);
        }
    }

    #[test]
    fn test_add_sheet_ends_stroke() {
        let mut paper = canvas(64, 32);
        paper.pointer_down(PointerSample::new(10.0, 10.0, 0.0, 0.016));
        paper.add_sheet();

        // The interrupted stroke does not resume
        assert_eq!(
            paper.pointer_move(PointerSample::new(50.0, 10.0, 0.1, 0.016)),
            None
        );
        assert_eq!(paper.surface().get_pixel(30, 42).unwrap()[3], 0.0);
    }
}
