//! Pointer handling: strokes from pointer-down to pointer-up/leave

use hexarea_ipc::PointerEvent;
use tracing::debug;

use super::GridSession;
use crate::brush::BrushStamp;
use crate::geometry::nearest_cell;
use crate::types::ToolMode;

impl GridSession {
    /// Start a stroke and stamp at (x, y). Ignored while the grid is hidden.
    /// Returns the number of cells changed.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> usize {
        if !self.grid_visible {
            debug!("GridSession::pointer_down: grid hidden, ignored");
            return 0;
        }
        self.brush.begin_stroke();
        self.stamp_at(x, y)
    }

    /// Continue the current stroke. Ignored outside a stroke or while the
    /// grid is hidden. Returns the number of cells changed.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> usize {
        if !self.brush.is_stroking() || !self.grid_visible {
            return 0;
        }
        self.stamp_at(x, y)
    }

    /// End the stroke. Already painted cells stay painted.
    pub fn pointer_up(&mut self) {
        if self.brush.end_stroke() {
            debug!("GridSession::pointer_up: stroke ended");
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.brush.end_stroke() {
            debug!("GridSession::pointer_leave: stroke ended");
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> usize {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up => {
                self.pointer_up();
                0
            }
            PointerEvent::Leave => {
                self.pointer_leave();
                0
            }
        }
    }

    fn stamp_at(&mut self, x: f32, y: f32) -> usize {
        let Some(center) = nearest_cell(
            &self.grid,
            x,
            y,
            self.viewport.width_f32(),
            self.viewport.height_f32(),
        ) else {
            debug!("GridSession: no cell within tolerance of ({:.1}, {:.1})", x, y);
            return 0;
        };

        let Some(stamp) = self.brush.stroke_to(center) else {
            return 0;
        };

        let changed = self.apply_stamp(stamp);
        if changed > 0 {
            self.mark_dirty();
        }
        changed
    }

    fn apply_stamp(&mut self, stamp: BrushStamp) -> usize {
        match stamp.mode {
            ToolMode::Draw => {
                let Some(id) = self.layers.active_layer_id() else {
                    debug!("GridSession: no active layer, paint skipped");
                    return 0;
                };
                self.layers.paint(id, stamp.cells)
            }
            ToolMode::Erase => self.layers.erase(stamp.cells, true),
        }
    }
}
