//! Main IPC message enums for communication between the grid core and UI.

use serde::{Deserialize, Serialize};

use crate::commands::{BackgroundCommand, GridCommand, LayerCommand};
use crate::input::PointerEvent;
use crate::types::{AreaReport, GridSettings, LayerInfo};

/// Messages from the UI to the grid core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToCore {
    /// Grid geometry, brush radius and tool mode
    Grid(GridCommand),

    /// Layer management
    Layer(LayerCommand),

    /// Background image placement
    Background(BackgroundCommand),

    /// Pointer input over the viewport
    Pointer(PointerEvent),

    /// Viewport was resized; the raster surface must be re-provisioned
    Resize { width: u32, height: u32 },

    /// Recompute area proportions
    ComputeAreas,

    /// Ask for a full state snapshot
    RequestState,
}

/// Messages from the grid core to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CoreToUi {
    /// Full state snapshot
    State {
        settings: GridSettings,
        layers: Vec<LayerInfo>,
        active_layer_id: Option<u32>,
        has_background: bool,
    },

    /// Layer list, metadata or active selection changed
    LayersChanged {
        layers: Vec<LayerInfo>,
        active_layer_id: Option<u32>,
    },

    /// Grid or tool settings changed
    SettingsChanged(GridSettings),

    /// Result of an area calculation
    AreasComputed(AreaReport),

    /// Error notification
    Error { code: String, message: String },
}
