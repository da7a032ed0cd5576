//! Renderer
//!
//! Draws a session's state onto a `RasterSurface` in a fixed pass order:
//!
//! 1. clear
//! 2. background image (if any)
//! 3. grid outlines over the scan window
//! 4. painted cells, last layer first so earlier layers end up on top
//!
//! Passes 3 and 4 only run while the grid is visible. Rendering reads state
//! only, so calling it twice with the same inputs yields the same pixels.

mod background;

pub use background::BackgroundImage;

use glam::Vec2;
use hexarea_config::GridStyle;
use tracing::debug;

use crate::geometry::{
    GridConfig, ScanWindow, cell_center, cell_center_of, hexagon_near_viewport, hexagon_vertices,
};
use crate::layers::Layer;
use crate::surface::RasterSurface;

/// Everything a frame depends on
#[derive(Clone, Copy)]
pub struct RenderScene<'a> {
    pub grid: &'a GridConfig,
    /// Layers in z-order (first is topmost)
    pub layers: &'a [Layer],
    pub background: Option<&'a BackgroundImage>,
    pub grid_visible: bool,
}

/// Counters from one render call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub background_drawn: bool,
    pub grid_cells: usize,
    pub painted_cells: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: GridStyle,
}

impl Renderer {
    pub fn new(style: GridStyle) -> Self {
        Self { style }
    }

    fn stroke_color(&self) -> [f32; 4] {
        let [r, g, b] = self.style.stroke_color;
        [r, g, b, 1.0]
    }

    /// Render `scene` onto the whole of `surface`
    pub fn render(&self, scene: &RenderScene<'_>, surface: &mut RasterSurface) -> RenderStats {
        let mut stats = RenderStats::default();

        surface.clear([0.0; 4]);

        if let Some(background) = scene.background {
            background.composite(surface);
            stats.background_drawn = true;
        }

        if scene.grid_visible {
            stats.grid_cells = self.draw_grid(scene.grid, surface);
            stats.painted_cells = self.draw_cells(scene.grid, scene.layers, surface);
        }

        debug!(
            "Renderer::render: {}x{}, grid_cells={}, painted_cells={}",
            surface.width(),
            surface.height(),
            stats.grid_cells,
            stats.painted_cells
        );
        stats
    }

    fn draw_grid(&self, grid: &GridConfig, surface: &mut RasterSurface) -> usize {
        let width = surface.width() as f32;
        let height = surface.height() as f32;
        let window = ScanWindow::for_viewport(grid, width, height);
        let color = self.stroke_color();

        let mut drawn = 0;
        for cell in window.cells() {
            let center = cell_center(grid, cell.row, cell.col);
            if !hexagon_near_viewport(&center, width, height) {
                continue;
            }
            let outline = hexagon_vertices(center.position(), center.size);
            surface.stroke_polyline_closed(
                &outline,
                color,
                self.style.stroke_width,
                self.style.grid_alpha,
            );
            drawn += 1;
        }
        drawn
    }

    fn draw_cells(
        &self,
        grid: &GridConfig,
        layers: &[Layer],
        surface: &mut RasterSurface,
    ) -> usize {
        let stroke = self.stroke_color();

        let mut drawn = 0;
        for layer in layers.iter().rev().filter(|layer| layer.visible) {
            let fill = layer.color.to_rgba();
            for cell in layer.cells() {
                let center = cell_center_of(grid, *cell);
                let outline: [Vec2; 6] = hexagon_vertices(center.position(), center.size);
                surface.fill_convex_polygon(&outline, fill, layer.opacity);
                surface.stroke_polyline_closed(
                    &outline,
                    stroke,
                    self.style.stroke_width,
                    self.style.cell_outline_alpha,
                );
                drawn += 1;
            }
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::layers::LayerStore;
    use crate::types::{CellKey, HexColor};

    fn scene<'a>(
        grid: &'a GridConfig,
        layers: &'a [Layer],
        background: Option<&'a BackgroundImage>,
        grid_visible: bool,
    ) -> RenderScene<'a> {
        RenderScene {
            grid,
            layers,
            background,
            grid_visible,
        }
    }

    #[test]
    fn test_grid_only() {
        let grid = GridConfig::default();
        let store = LayerStore::with_seed(0);
        let mut surface = RasterSurface::new(200, 150);

        let frame = scene(&grid, store.layers(), None, true);
        let stats = Renderer::default().render(&frame, &mut surface);
        assert!(stats.grid_cells > 0);
        assert_eq!(stats.painted_cells, 0);
        assert!(!stats.background_drawn);

        // Cell centers stay unpainted; outlines leave some coverage
        let center = cell_center(&grid, 2, 2);
        let pixel = surface.get_pixel(center.x as u32, center.y as u32);
        assert_eq!(pixel, Some([0.0; 4]));
        assert!(surface.pixels().iter().any(|p| p[3] > 0.0));
    }

    #[test]
    fn test_custom_style_outline_alpha() {
        let grid = GridConfig::default();
        let store = LayerStore::with_seed(0);
        let mut surface = RasterSurface::new(200, 150);

        let renderer = Renderer::new(GridStyle {
            stroke_color: [1.0, 0.0, 0.0],
            grid_alpha: 0.0,
            ..GridStyle::default()
        });
        let frame = scene(&grid, store.layers(), None, true);
        let stats = renderer.render(&frame, &mut surface);
        assert!(stats.grid_cells > 0);
        assert!(surface.pixels().iter().all(|p| p[3] == 0.0));
    }

    #[test]
    fn test_painted_cell_uses_layer_color_and_opacity() {
        let grid = GridConfig::default();
        let mut store = LayerStore::with_seed(0);
        store.paint(1, [CellKey::new(2, 2)]);
        let mut surface = RasterSurface::new(200, 150);

        let frame = scene(&grid, store.layers(), None, true);
        let stats = Renderer::default().render(&frame, &mut surface);
        assert_eq!(stats.painted_cells, 1);

        let center = cell_center(&grid, 2, 2);
        let pixel = surface.get_pixel(center.x as u32, center.y as u32).unwrap();
        // #FF5252 at 0.3 over transparent, premultiplied
        assert!((pixel[3] - 0.3).abs() < 1e-4);
        assert!((pixel[0] - 0.3).abs() < 1e-4);
        assert!((pixel[1] - 0.3 * 82.0 / 255.0).abs() < 1e-4);
    }

    #[test]
    fn test_hidden_layer_not_drawn() {
        let grid = GridConfig::default();
        let mut store = LayerStore::with_seed(0);
        store.paint(1, [CellKey::new(2, 2)]);
        store.set_visible(1, false);
        let mut surface = RasterSurface::new(200, 150);

        let frame = scene(&grid, store.layers(), None, true);
        let stats = Renderer::default().render(&frame, &mut surface);
        assert_eq!(stats.painted_cells, 0);
    }

    #[test]
    fn test_grid_hidden_shows_background_only() {
        let grid = GridConfig::default();
        let mut store = LayerStore::with_seed(0);
        store.paint(1, [CellKey::new(1, 1)]);
        let blue = RgbaImage::from_pixel(50, 50, Rgba([0, 0, 255, 255]));
        let background = BackgroundImage::new(blue);
        let mut surface = RasterSurface::new(100, 100);

        let frame = scene(&grid, store.layers(), Some(&background), false);
        let stats = Renderer::default().render(&frame, &mut surface);
        assert!(stats.background_drawn);
        assert_eq!(stats.grid_cells, 0);
        assert_eq!(stats.painted_cells, 0);
        assert_eq!(surface.get_pixel(10, 10), Some([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(surface.get_pixel(60, 60), Some([0.0; 4]));
    }

    #[test]
    fn test_render_is_idempotent() {
        let grid = GridConfig::default().with_offset(12.0, -30.0);
        let mut store = LayerStore::with_seed(0);
        store.create_layer(None, Some(HexColor::from_rgb24(0x4CAF50)));
        store.paint(1, [CellKey::new(3, 3), CellKey::new(3, 4)]);
        store.paint(2, [CellKey::new(4, 3)]);
        let renderer = Renderer::default();

        let mut first = RasterSurface::new(160, 120);
        let mut second = RasterSurface::new(160, 120);
        let frame = scene(&grid, store.layers(), None, true);
        renderer.render(&frame, &mut first);
        renderer.render(&frame, &mut second);
        renderer.render(&frame, &mut second);
        assert_eq!(first.pixels(), second.pixels());
    }
}
