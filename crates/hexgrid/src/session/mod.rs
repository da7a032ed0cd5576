//! Session context
//!
//! `GridSession` owns all mutable state of one painting session: grid
//! geometry, viewport, layers, brush, background and grid visibility.
//! Every mutation marks the session dirty; the owner calls
//! `take_needs_render` to find out whether a new frame is due and
//! `render` to produce it.

mod dispatch;
mod layer_ops;
mod stroke;

use hexarea_config::{ViewportConfig, clamp_grid_offset, clamp_hex_size};
use hexarea_ipc::{GridSettings, LayerInfo};
use tracing::{debug, info, warn};

use crate::area::{CalculationResult, compute_areas};
use crate::brush::BrushEngine;
use crate::geometry::GridConfig;
use crate::layers::{Layer, LayerStore};
use crate::render::{BackgroundImage, RenderScene, RenderStats, Renderer};
use crate::surface::RasterSurface;
use crate::types::ToolMode;

pub struct GridSession {
    grid: GridConfig,
    viewport: ViewportConfig,
    layers: LayerStore,
    brush: BrushEngine,
    background: Option<BackgroundImage>,
    grid_visible: bool,
    renderer: Renderer,
    needs_render: bool,
}

impl Default for GridSession {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl GridSession {
    /// Fresh session: one empty layer, hex size 20, brush radius 1,
    /// no offset, grid visible, drawing mode, no background.
    pub fn new(viewport: ViewportConfig) -> Self {
        Self::with_layers(viewport, LayerStore::new())
    }

    /// Like `new`, with a deterministic color sequence for new layers
    pub fn with_seed(viewport: ViewportConfig, seed: u64) -> Self {
        Self::with_layers(viewport, LayerStore::with_seed(seed))
    }

    fn with_layers(viewport: ViewportConfig, layers: LayerStore) -> Self {
        info!(
            "GridSession::new: viewport {}x{}",
            viewport.width, viewport.height
        );
        Self {
            grid: GridConfig::default(),
            viewport,
            layers,
            brush: BrushEngine::default(),
            background: None,
            grid_visible: true,
            renderer: Renderer::default(),
            needs_render: true,
        }
    }

    #[inline]
    fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    /// Whether state changed since the last `take_needs_render`
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    /// Return and clear the render-needed flag
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }

    // --- Accessors ---

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn viewport(&self) -> ViewportConfig {
        self.viewport
    }

    pub fn layer_store(&self) -> &LayerStore {
        &self.layers
    }

    pub fn layers(&self) -> &[Layer] {
        self.layers.layers()
    }

    pub fn brush(&self) -> &BrushEngine {
        &self.brush
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn is_erasing(&self) -> bool {
        self.brush.mode() == ToolMode::Erase
    }

    // --- Grid and tool settings ---

    /// Set the hexagon radius, clamped to the supported range
    pub fn set_hex_size(&mut self, size: f32) {
        let size = clamp_hex_size(size);
        if let Err(e) = self.grid.set_hex_size(size) {
            warn!("GridSession::set_hex_size: {}", e);
            return;
        }
        debug!("GridSession::set_hex_size: {}", size);
        self.brush.restamp();
        self.mark_dirty();
    }

    pub fn set_brush_radius(&mut self, radius: u32) {
        self.brush.set_radius(radius);
        debug!("GridSession::set_brush_radius: {}", self.brush.radius());
        self.mark_dirty();
    }

    /// Translate the grid; each axis is clamped to the maximum offset
    pub fn set_offset(&mut self, x: f32, y: f32) {
        self.grid.set_offset(clamp_grid_offset(x), clamp_grid_offset(y));
        self.brush.restamp();
        self.mark_dirty();
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        if self.grid_visible == visible {
            return;
        }
        self.grid_visible = visible;
        if !visible {
            self.brush.end_stroke();
        }
        debug!("GridSession::set_grid_visible: {}", visible);
        self.mark_dirty();
    }

    pub fn toggle_grid(&mut self) {
        self.set_grid_visible(!self.grid_visible);
    }

    pub fn set_eraser(&mut self, enabled: bool) {
        let mode = if enabled { ToolMode::Erase } else { ToolMode::Draw };
        self.brush.set_mode(mode);
        debug!("GridSession::set_eraser: {:?}", mode);
        self.mark_dirty();
    }

    pub fn toggle_eraser(&mut self) {
        self.set_eraser(!self.is_erasing());
    }

    /// Change the viewport size. The next `render` re-provisions the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.viewport.width == width && self.viewport.height == height {
            return;
        }
        info!("GridSession::resize: {}x{}", width, height);
        self.viewport = ViewportConfig::new(width, height);
        self.mark_dirty();
    }

    // --- Background ---

    /// Replace (or with `None`, clear) the background image
    pub fn set_background(&mut self, background: Option<BackgroundImage>) {
        match &background {
            Some(bg) => info!(
                "GridSession::set_background: {}x{}",
                bg.image().width(),
                bg.image().height()
            ),
            None => info!("GridSession::set_background: cleared"),
        }
        self.background = background;
        self.mark_dirty();
    }

    pub fn clear_background(&mut self) {
        self.set_background(None);
    }

    /// Adjust the background in place. Returns false when there is none.
    fn update_background(&mut self, update: impl FnOnce(&mut BackgroundImage)) -> bool {
        let Some(background) = self.background.as_mut() else {
            debug!("GridSession: no background image to adjust");
            return false;
        };
        update(background);
        self.mark_dirty();
        true
    }

    pub fn set_background_position(&mut self, x: f32, y: f32) -> bool {
        self.update_background(|bg| bg.set_position(x, y))
    }

    pub fn set_background_opacity(&mut self, opacity: f32) -> bool {
        self.update_background(|bg| bg.set_opacity(opacity))
    }

    pub fn set_background_scale(&mut self, scale: f32) -> bool {
        self.update_background(|bg| bg.set_scale(scale))
    }

    // --- Snapshots ---

    pub fn settings(&self) -> GridSettings {
        GridSettings {
            hex_size: self.grid.hex_size(),
            brush_radius: self.brush.radius(),
            offset_x: self.grid.offset_x(),
            offset_y: self.grid.offset_y(),
            grid_visible: self.grid_visible,
            eraser: self.is_erasing(),
            viewport_width: self.viewport.width,
            viewport_height: self.viewport.height,
        }
    }

    pub fn layer_infos(&self) -> Vec<LayerInfo> {
        self.layers
            .layers()
            .iter()
            .map(|layer| LayerInfo {
                id: layer.id,
                name: layer.name.clone(),
                color: layer.color.to_string(),
                visible: layer.visible,
                opacity: layer.opacity,
                cell_count: layer.cell_count(),
            })
            .collect()
    }

    /// Snapshot of per-layer areas
    pub fn compute_areas(&self) -> CalculationResult {
        compute_areas(self.layers.layers())
    }

    // --- Rendering ---

    /// Render the current state, resizing `surface` to the viewport first
    pub fn render(&self, surface: &mut RasterSurface) -> RenderStats {
        if surface.resize(self.viewport.width, self.viewport.height) {
            info!(
                "GridSession::render: surface re-provisioned at {}x{}",
                self.viewport.width, self.viewport.height
            );
        }
        let scene = RenderScene {
            grid: &self.grid,
            layers: self.layers.layers(),
            background: self.background.as_ref(),
            grid_visible: self.grid_visible,
        };
        self.renderer.render(&scene, surface)
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    fn session() -> GridSession {
        GridSession::with_seed(ViewportConfig::default(), 11)
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        let settings = session.settings();
        assert_eq!(settings.hex_size, 20.0);
        assert_eq!(settings.brush_radius, 1);
        assert_eq!((settings.offset_x, settings.offset_y), (0.0, 0.0));
        assert!(settings.grid_visible);
        assert!(!settings.eraser);
        assert_eq!(settings.viewport_width, 800);
        assert_eq!(settings.viewport_height, 600);
        assert_eq!(settings, GridSettings::default());

        let layers = session.layer_infos();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].color, "#FF5252");
        assert!(session.background().is_none());
        assert_eq!(session.layer_store().active_layer_id(), Some(1));
    }

    #[test]
    fn test_setters_clamp() {
        let mut session = session();
        session.set_hex_size(2.0);
        assert_eq!(session.grid().hex_size(), 10.0);
        session.set_hex_size(55.0);
        assert_eq!(session.grid().hex_size(), 40.0);

        session.set_brush_radius(0);
        assert_eq!(session.brush().radius(), 1);
        session.set_brush_radius(12);
        assert_eq!(session.brush().radius(), 5);

        session.set_offset(-300.0, 120.0);
        assert_eq!(session.grid().offset_x(), -200.0);
        assert_eq!(session.grid().offset_y(), 120.0);
    }

    #[test]
    fn test_toggles() {
        let mut session = session();
        session.toggle_grid();
        assert!(!session.grid_visible());
        session.toggle_grid();
        assert!(session.grid_visible());

        session.toggle_eraser();
        assert!(session.is_erasing());
        session.set_eraser(false);
        assert!(!session.is_erasing());
    }

    #[test]
    fn test_needs_render_flag() {
        let mut session = session();
        assert!(session.take_needs_render());
        assert!(!session.take_needs_render());

        session.set_offset(5.0, 5.0);
        assert!(session.needs_render());
        assert!(session.take_needs_render());

        // Setting the same visibility again changes nothing
        session.set_grid_visible(true);
        assert!(!session.needs_render());
    }

    #[test]
    fn test_background_controls() {
        let mut session = session();
        assert!(!session.set_background_opacity(0.5));

        session.set_background(Some(BackgroundImage::new(RgbaImage::from_pixel(
            4,
            4,
            Rgba([255, 255, 255, 255]),
        ))));
        assert!(session.set_background_position(600.0, -10.0));
        assert!(session.set_background_opacity(-1.0));
        assert!(session.set_background_scale(5.0));

        let bg = session.background().unwrap();
        assert_eq!((bg.x(), bg.y()), (500.0, -10.0));
        assert_eq!(bg.opacity(), 0.0);
        assert_eq!(bg.scale(), 2.0);

        session.clear_background();
        assert!(session.background().is_none());
    }

    #[test]
    fn test_render_resizes_surface() {
        let mut session = session();
        session.resize(120, 90);
        let mut surface = RasterSurface::new(10, 10);

        let stats = session.render(&mut surface);
        assert_eq!((surface.width(), surface.height()), (120, 90));
        assert!(stats.grid_cells > 0);
    }
}
