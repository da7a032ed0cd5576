//! Layer management on the session
//!
//! Thin wrappers over `LayerStore` that clamp input, keep the brush from
//! skipping a stamp after the paint target changed, and mark the session
//! dirty when something actually changed.

use hexarea_config::clamp_unit;

use super::GridSession;
use crate::types::{HexColor, LayerId};

impl GridSession {
    /// Create a layer and make it active. Returns the new layer's id.
    pub fn create_layer(&mut self, name: Option<&str>, color: Option<HexColor>) -> LayerId {
        let id = self.layers.create_layer(name, color).id;
        self.brush.restamp();
        self.mark_dirty();
        id
    }

    pub fn delete_layer(&mut self, id: LayerId) -> bool {
        self.changed(|session| session.layers.delete_layer(id))
    }

    pub fn rename_layer(&mut self, id: LayerId, name: &str) -> bool {
        self.changed(|session| session.layers.rename_layer(id, name))
    }

    pub fn set_layer_visible(&mut self, id: LayerId, visible: bool) -> bool {
        self.changed(|session| session.layers.set_visible(id, visible))
    }

    pub fn toggle_layer_visibility(&mut self, id: LayerId) -> bool {
        self.changed(|session| session.layers.toggle_visible(id))
    }

    /// Set a layer's fill opacity, clamped to [0, 1]
    pub fn set_layer_opacity(&mut self, id: LayerId, opacity: f32) -> bool {
        let opacity = clamp_unit(opacity);
        self.changed(|session| session.layers.set_opacity(id, opacity))
    }

    pub fn set_active_layer(&mut self, id: LayerId) -> bool {
        self.changed(|session| session.layers.set_active(id))
    }

    fn changed(&mut self, op: impl FnOnce(&mut Self) -> bool) -> bool {
        let changed = op(self);
        if changed {
            self.brush.restamp();
            self.mark_dirty();
        }
        changed
    }
}
