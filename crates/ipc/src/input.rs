//! Pointer input events.

use serde::{Deserialize, Serialize};

/// Pointer events in viewport-relative pixel coordinates.
///
/// A drawing stroke spans from `Down` to the next `Up` or `Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Leave,
}
