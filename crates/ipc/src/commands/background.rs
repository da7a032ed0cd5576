//! Background image commands.
//!
//! Decoding the image itself happens in the collaborator; these commands
//! only adjust how an already loaded background is composited.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BackgroundCommand {
    /// Move the image's top-left corner (pixels)
    SetPosition { x: f32, y: f32 },
    /// Uniform alpha (0.0-1.0)
    SetOpacity { opacity: f32 },
    /// Scale factor applied to the image dimensions
    SetScale { scale: f32 },
    /// Drop the background image
    Remove,
}
