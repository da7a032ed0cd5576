//! Grid and tool configuration commands.

use serde::{Deserialize, Serialize};

/// Commands changing grid geometry, brush radius and tool mode.
///
/// Values outside the configured bounds are clamped by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GridCommand {
    /// Set hexagon radius in pixels
    SetHexSize { size: f32 },
    /// Set brush radius in cells
    SetBrushRadius { radius: u32 },
    /// Translate the whole grid (pixels per axis)
    SetOffset { x: f32, y: f32 },
    SetGridVisible { visible: bool },
    ToggleGrid,
    /// Switch between drawing (false) and erasing (true)
    SetEraser { enabled: bool },
    ToggleEraser,
}
