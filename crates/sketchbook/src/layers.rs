//! Layer stack: ordered surfaces, visibility, and flattening
//!
//! Layers are append-only. Index order is z-order, bottom to top, and an
//! index stays valid for the life of the stack.

use sketchbook_config::CanvasConfig;
use tracing::{info, warn};

use crate::log::{StrokeDocument, StrokeRecord};
use crate::surface::{blend_over, CpuSurface};

/// Error type for layer stack operations.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayerError {
    #[error("Layer {index} does not exist (stack has {len} layers)")]
    InvalidIndex { index: usize, len: usize },
}

/// One paintable surface with its visibility and recorded strokes
#[derive(Debug, Clone)]
pub struct Layer {
    surface: CpuSurface,
    visible: bool,
    strokes: Vec<StrokeRecord>,
}

impl Layer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            surface: CpuSurface::new(width, height),
            visible: true,
            strokes: Vec::new(),
        }
    }

    pub fn surface(&self) -> &CpuSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut CpuSurface {
        &mut self.surface
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Strokes committed to this layer, in creation order
    pub fn strokes(&self) -> &[StrokeRecord] {
        &self.strokes
    }
}

/// Ordered stack of layers plus the layer new strokes are routed to
#[derive(Debug, Clone)]
pub struct LayerStack {
    width: u32,
    height: u32,
    layers: Vec<Layer>,
    active: Option<usize>,
}

impl LayerStack {
    /// Create an empty stack whose layers will be `width`x`height`
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: Vec::new(),
            active: None,
        }
    }

    /// Create a stack with the configured number of layers; the first one
    /// is active
    pub fn from_config(config: &CanvasConfig) -> Self {
        let mut stack = Self::new(config.width, config.height);
        for _ in 0..config.layer_count {
            stack.add_layer();
        }
        if !stack.layers.is_empty() {
            stack.active = Some(0);
        }
        stack
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Append a transparent layer and make it active; returns its index
    pub fn add_layer(&mut self) -> usize {
        let index = self.layers.len();
        self.layers.push(Layer::new(self.width, self.height));
        self.active = Some(index);
        info!(
            "LayerStack: added layer {} ({}x{})",
            index, self.width, self.height
        );
        index
    }

    /// Route new strokes to layer `index`
    pub fn set_active(&mut self, index: usize) -> Result<(), LayerError> {
        self.check_index(index)?;
        self.active = Some(index);
        Ok(())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_surface(&self) -> Option<&CpuSurface> {
        self.active
            .and_then(|i| self.layers.get(i))
            .map(Layer::surface)
    }

    pub fn active_surface_mut(&mut self) -> Option<&mut CpuSurface> {
        self.active
            .and_then(|i| self.layers.get_mut(i))
            .map(Layer::surface_mut)
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Show or hide a layer; pixel content is untouched
    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<(), LayerError> {
        self.check_index(index)?;
        self.layers[index].visible = visible;
        Ok(())
    }

    /// Store a committed stroke on the layer it names
    pub fn commit_stroke(&mut self, record: StrokeRecord) -> Result<(), LayerError> {
        let index = record.layer_index;
        self.check_index(index)?;
        self.layers[index].strokes.push(record);
        Ok(())
    }

    /// Save document for every layer's strokes
    pub fn stroke_document(&self) -> StrokeDocument {
        StrokeDocument::from_layers(
            self.layers
                .iter()
                .enumerate()
                .map(|(i, layer)| (i, layer.strokes())),
        )
    }

    /// Composite visible layers bottom to top onto a transparent surface
    ///
    /// The result is as large as the largest layer. Layers grow by adding
    /// rows at the top, so a shorter layer is aligned to the bottom edge;
    /// outside its extent it is transparent.
    pub fn flatten(&self) -> CpuSurface {
        let width = self
            .layers
            .iter()
            .map(|l| l.surface.width())
            .max()
            .unwrap_or(self.width);
        let height = self
            .layers
            .iter()
            .map(|l| l.surface.height())
            .max()
            .unwrap_or(self.height);

        let mut result = CpuSurface::new(width, height);
        for layer in self.layers.iter().filter(|l| l.visible) {
            let src = &layer.surface;
            let src_width = src.width() as usize;
            let row_offset = height - src.height();
            for y in 0..src.height() {
                let Some(src_row) = src.row(y) else {
                    continue;
                };
                let start = (y + row_offset) as usize * width as usize;
                let dst_row = &mut result.pixels_mut()[start..start + src_width];
                for (dst, &px) in dst_row.iter_mut().zip(src_row) {
                    *dst = blend_over(*dst, px);
                }
            }
        }
        result
    }

    fn check_index(&self, index: usize) -> Result<(), LayerError> {
        if index < self.layers.len() {
            Ok(())
        } else {
            warn!(
                "LayerStack: layer {} requested but only {} exist",
                index,
                self.layers.len()
            );
            Err(LayerError::InvalidIndex {
                index,
                len: self.layers.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    const HALF_RED: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn stroke(layer_index: usize, order: u64) -> StrokeRecord {
        StrokeRecord {
            points: vec![Vec2::new(0.0, 0.0)],
            color: BLUE,
            width: 2.0,
            layer_index,
            order,
        }
    }

    #[test]
    fn test_from_config() {
        let stack = LayerStack::from_config(&CanvasConfig::default());
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.active_index(), Some(0));
        assert_eq!(stack.width(), 1024);
        assert!(stack.layers().iter().all(|l| l.surface().is_blank()));
        assert!(stack.layers().iter().all(Layer::is_visible));
    }

    #[test]
    fn test_empty_stack_has_no_active_surface() {
        let mut stack = LayerStack::new(8, 8);
        assert!(stack.is_empty());
        assert!(stack.active_surface().is_none());
        assert!(stack.active_surface_mut().is_none());
        assert_eq!(stack.flatten().width(), 8);
    }

    #[test]
    fn test_add_layer_becomes_active() {
        let mut stack = LayerStack::new(4, 4);
        assert_eq!(stack.add_layer(), 0);
        assert_eq!(stack.add_layer(), 1);
        assert_eq!(stack.active_index(), Some(1));
    }

    #[test]
    fn test_set_active() {
        let mut stack = LayerStack::new(4, 4);
        stack.add_layer();
        stack.add_layer();

        stack.set_active(0).unwrap();
        assert_eq!(stack.active_index(), Some(0));

        assert_eq!(
            stack.set_active(5),
            Err(LayerError::InvalidIndex { index: 5, len: 2 })
        );
        // Unchanged after a rejected request
        assert_eq!(stack.active_index(), Some(0));
    }

    #[test]
    fn test_active_surface_routes_writes() {
        let mut stack = LayerStack::new(4, 4);
        stack.add_layer();
        stack.add_layer();
        stack.set_active(0).unwrap();
        stack.active_surface_mut().unwrap().set_pixel(1, 1, BLUE);

        assert_eq!(stack.layer(0).unwrap().surface().get_pixel(1, 1), Some(BLUE));
        assert!(stack.layer(1).unwrap().surface().is_blank());
    }

    #[test]
    fn test_flatten_single_opaque_layer_is_identity() {
        let mut stack = LayerStack::new(6, 5);
        stack.add_layer();
        let surface = stack.active_surface_mut().unwrap();
        for y in 0..5 {
            for x in 0..6 {
                surface.set_pixel(x, y, [x as f32 / 6.0, y as f32 / 5.0, 0.5, 1.0]);
            }
        }

        let flat = stack.flatten();
        assert_eq!(&flat, stack.layer(0).unwrap().surface());
    }

    #[test]
    fn test_flatten_blends_over() {
        let mut stack = LayerStack::new(3, 3);
        stack.add_layer();
        stack.active_surface_mut().unwrap().clear(BLUE);
        stack.add_layer();
        stack.active_surface_mut().unwrap().clear(HALF_RED);

        let flat = stack.flatten();
        let expected = blend_over(BLUE, HALF_RED);
        assert_eq!(expected, [0.5, 0.0, 0.5, 0.75]);
        assert!(flat.pixels().iter().all(|&p| p == expected));
    }

    #[test]
    fn test_invisible_layer_contributes_nothing() {
        let mut stack = LayerStack::new(4, 4);
        stack.add_layer();
        stack.active_surface_mut().unwrap().clear(BLUE);
        let before = stack.flatten();

        stack.add_layer();
        stack.active_surface_mut().unwrap().clear(HALF_RED);
        stack.set_visible(1, false).unwrap();

        assert_eq!(stack.flatten(), before);
        // Hidden, not cleared
        assert_eq!(
            stack.layer(1).unwrap().surface().get_pixel(0, 0),
            Some(HALF_RED)
        );
    }

    #[test]
    fn test_flatten_size_mismatch() {
        let mut stack = LayerStack::new(4, 2);
        stack.add_layer();
        stack.active_surface_mut().unwrap().clear(BLUE);
        stack.add_layer();
        stack.active_surface_mut().unwrap().grow_height(5);

        let flat = stack.flatten();
        assert_eq!((flat.width(), flat.height()), (4, 5));
        // The short layer sits on the bottom two rows
        assert_eq!(flat.get_pixel(0, 3), Some(BLUE));
        assert_eq!(flat.get_pixel(3, 4), Some(BLUE));
        assert_eq!(flat.get_pixel(0, 2).unwrap()[3], 0.0);
        assert_eq!(flat.get_pixel(0, 0).unwrap()[3], 0.0);
    }

    #[test]
    fn test_flatten_keeps_grown_content_under_short_layers() {
        let mut stack = LayerStack::new(4, 2);
        stack.add_layer();
        stack.active_surface_mut().unwrap().set_pixel(0, 1, RED);
        stack.add_layer();
        stack.active_surface_mut().unwrap().set_pixel(0, 1, BLUE);

        stack.set_active(0).unwrap();
        stack.active_surface_mut().unwrap().grow_height(4);

        let flat = stack.flatten();
        // Red moved down to row 3; blue stays over it
        assert_eq!(flat.get_pixel(0, 3), Some(BLUE));
        assert_eq!(flat.get_pixel(0, 1).unwrap()[3], 0.0);
    }

    #[test]
    fn test_set_visible_invalid() {
        let mut stack = LayerStack::new(4, 4);
        assert!(stack.set_visible(0, false).is_err());
    }

    #[test]
    fn test_commit_stroke_and_document() {
        let mut stack = LayerStack::new(4, 4);
        stack.add_layer();
        stack.add_layer();
        stack.add_layer();

        stack.commit_stroke(stroke(2, 0)).unwrap();
        stack.commit_stroke(stroke(0, 1)).unwrap();
        assert!(stack.commit_stroke(stroke(9, 2)).is_err());

        assert_eq!(stack.layer(2).unwrap().strokes().len(), 1);
        let doc = stack.stroke_document();
        let indices: Vec<_> = doc.layers.iter().map(|l| l.layer_index).collect();
        assert_eq!(indices, vec![0, 2]);
    }
}
