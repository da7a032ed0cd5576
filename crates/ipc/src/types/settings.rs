//! Grid and tool settings snapshot.

use hexarea_config::{DEFAULT_BRUSH_RADIUS, DEFAULT_HEX_SIZE};
use serde::{Deserialize, Serialize};

/// Current grid and tool settings as seen by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    pub hex_size: f32,
    pub brush_radius: u32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub grid_visible: bool,
    /// True when pointer strokes erase instead of paint
    pub eraser: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        let viewport = hexarea_config::ViewportConfig::default();
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            offset_x: 0.0,
            offset_y: 0.0,
            grid_visible: true,
            eraser: false,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        }
    }
}
