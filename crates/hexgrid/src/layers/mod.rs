//! Layer store
//!
//! Layers are kept in insertion order, which is also their z-order: the
//! first layer sits on top. Each layer owns a sparse set of painted cells,
//! and a cell is owned by at most one layer at a time (see `painting`).
//!
//! The store always holds at least one layer. Every operation that targets
//! a layer by id is a silent no-op when the id is unknown, and reports
//! whether anything changed.

mod painting;
pub mod palette;

use std::collections::BTreeSet;

use hexarea_config::DEFAULT_LAYER_OPACITY;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::types::{CellKey, HexColor, LayerId};
use palette::{PALETTE, pick_color};

/// A named, colored set of painted cells
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub color: HexColor,
    pub visible: bool,
    /// Fill opacity in [0, 1]
    pub opacity: f32,
    cells: BTreeSet<CellKey>,
}

impl Layer {
    pub fn new(id: LayerId, name: impl Into<String>, color: HexColor) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            visible: true,
            opacity: DEFAULT_LAYER_OPACITY,
            cells: BTreeSet::new(),
        }
    }

    /// Painted cells in row-major order
    pub fn cells(&self) -> &BTreeSet<CellKey> {
        &self.cells
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, cell: CellKey) -> bool {
        self.cells.contains(&cell)
    }
}

/// Ordered collection of layers plus the active selection
pub struct LayerStore {
    layers: Vec<Layer>,
    active: Option<LayerId>,
    rng: StdRng,
}

impl Default for LayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStore {
    /// Store with the single initial layer, colors drawn from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Store with a deterministic color sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            layers: vec![Layer::new(1, "Layer 1", PALETTE[0])],
            active: Some(1),
            rng,
        }
    }

    /// Layers in z-order (first is topmost)
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id == id)
    }

    pub fn active_layer_id(&self) -> Option<LayerId> {
        self.active
    }

    pub fn active_layer(&self) -> Option<&Layer> {
        self.active.and_then(|id| self.get(id))
    }

    /// Layer currently owning `cell`, if any
    pub fn owner_of(&self, cell: CellKey) -> Option<LayerId> {
        self.layers
            .iter()
            .find(|layer| layer.contains(cell))
            .map(|layer| layer.id)
    }

    /// Next id: one past the largest id in use
    fn next_id(&self) -> LayerId {
        self.layers.iter().map(|layer| layer.id).max().unwrap_or(0) + 1
    }

    /// Append a new empty layer and make it active.
    ///
    /// A missing or blank name becomes `"Layer {id}"`; a missing color is
    /// picked from the palette entries not used by any existing layer.
    pub fn create_layer(&mut self, name: Option<&str>, color: Option<HexColor>) -> &Layer {
        let id = self.next_id();
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Layer {id}"));
        let color = color.unwrap_or_else(|| {
            let used: Vec<HexColor> = self.layers.iter().map(|layer| layer.color).collect();
            pick_color(&used, &mut self.rng)
        });

        info!("LayerStore::create_layer: id={}, name={:?}, color={}", id, name, color);
        self.layers.push(Layer::new(id, name, color));
        self.active = Some(id);

        let index = self.layers.len() - 1;
        &self.layers[index]
    }

    /// Remove a layer. The last remaining layer cannot be deleted.
    /// Deleting the active layer selects the first remaining one.
    pub fn delete_layer(&mut self, id: LayerId) -> bool {
        if self.layers.len() <= 1 {
            debug!("LayerStore::delete_layer: id={} skipped, last layer", id);
            return false;
        }
        let Some(index) = self.layers.iter().position(|layer| layer.id == id) else {
            debug!("LayerStore::delete_layer: unknown id={}", id);
            return false;
        };

        let removed = self.layers.remove(index);
        info!(
            "LayerStore::delete_layer: id={}, dropped {} cells",
            id,
            removed.cell_count()
        );

        if self.active == Some(id) {
            self.active = self.layers.first().map(|layer| layer.id);
        }
        true
    }

    /// Rename a layer to the trimmed `name`; blank names are ignored
    pub fn rename_layer(&mut self, id: LayerId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("LayerStore::rename_layer: id={} skipped, empty name", id);
            return false;
        }
        match self.get_mut(id) {
            Some(layer) => {
                layer.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_visible(&mut self, id: LayerId, visible: bool) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn toggle_visible(&mut self, id: LayerId) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.visible = !layer.visible;
                true
            }
            None => false,
        }
    }

    /// Store the opacity as given; range clamping is the caller's concern
    pub fn set_opacity(&mut self, id: LayerId, opacity: f32) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.opacity = opacity;
                true
            }
            None => false,
        }
    }

    pub fn set_active(&mut self, id: LayerId) -> bool {
        if self.get(id).is_none() {
            debug!("LayerStore::set_active: unknown id={}", id);
            return false;
        }
        self.active = Some(id);
        true
    }
}
