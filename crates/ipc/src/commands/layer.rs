//! Layer management commands.

use serde::{Deserialize, Serialize};

/// Commands for creating, editing and selecting layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayerCommand {
    /// Create a layer; the core picks a default name and an unused color
    /// when these are omitted. The new layer becomes active.
    Create {
        #[serde(default)]
        name: Option<String>,
        /// Hex color string such as `#4CAF50`
        #[serde(default)]
        color: Option<String>,
    },
    /// Delete a layer (ignored for the last remaining layer)
    Delete { id: u32 },
    /// Rename a layer (ignored when the trimmed name is empty)
    Rename { id: u32, name: String },
    SetVisible { id: u32, visible: bool },
    ToggleVisible { id: u32 },
    /// Set layer fill opacity (0.0-1.0)
    SetOpacity { id: u32, opacity: f32 },
    /// Select the layer that drawing targets
    SetActive { id: u32 },
}
