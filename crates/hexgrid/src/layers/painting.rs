//! Paint and erase, preserving single ownership of each cell

use tracing::debug;

use super::LayerStore;
use crate::types::{CellKey, LayerId};

impl LayerStore {
    /// Move `cells` into layer `id`, taking them away from any other layer.
    ///
    /// Returns the number of cells newly added to the layer. Unknown ids
    /// leave every layer untouched.
    pub fn paint<I>(&mut self, id: LayerId, cells: I) -> usize
    where
        I: IntoIterator<Item = CellKey>,
    {
        let Some(target) = self.layers.iter().position(|layer| layer.id == id) else {
            debug!("LayerStore::paint: unknown layer id={}", id);
            return 0;
        };

        let mut added = 0;
        for cell in cells {
            for (index, layer) in self.layers.iter_mut().enumerate() {
                if index != target {
                    layer.cells.remove(&cell);
                }
            }
            if self.layers[target].cells.insert(cell) {
                added += 1;
            }
        }
        added
    }

    /// Remove `cells` from every layer, or only from visible layers when
    /// `only_visible` is set. Returns the number of cells removed.
    pub fn erase<I>(&mut self, cells: I, only_visible: bool) -> usize
    where
        I: IntoIterator<Item = CellKey>,
    {
        let mut removed = 0;
        for cell in cells {
            for layer in self
                .layers
                .iter_mut()
                .filter(|layer| layer.visible || !only_visible)
            {
                if layer.cells.remove(&cell) {
                    removed += 1;
                }
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(row: i32, col: i32) -> CellKey {
        CellKey::new(row, col)
    }

    #[test]
    fn test_paint_adds_cells() {
        let mut store = LayerStore::with_seed(0);
        assert_eq!(store.paint(1, [key(0, 0), key(0, 1)]), 2);
        assert_eq!(store.get(1).unwrap().cell_count(), 2);

        // Repainting is idempotent
        assert_eq!(store.paint(1, [key(0, 0)]), 0);
        assert_eq!(store.get(1).unwrap().cell_count(), 2);
    }

    #[test]
    fn test_paint_steals_from_other_layers() {
        let mut store = LayerStore::with_seed(0);
        store.create_layer(None, None);
        store.paint(1, [key(2, 2), key(2, 3)]);
        store.paint(2, [key(2, 3)]);

        assert_eq!(store.owner_of(key(2, 2)), Some(1));
        assert_eq!(store.owner_of(key(2, 3)), Some(2));
        assert!(!store.get(1).unwrap().contains(key(2, 3)));
    }

    #[test]
    fn test_paint_unknown_layer_is_noop() {
        let mut store = LayerStore::with_seed(0);
        store.paint(1, [key(1, 1)]);
        assert_eq!(store.paint(42, [key(1, 1)]), 0);
        assert_eq!(store.owner_of(key(1, 1)), Some(1));
    }

    #[test]
    fn test_erase_respects_visibility_filter() {
        let mut store = LayerStore::with_seed(0);
        store.create_layer(None, None);
        store.paint(1, [key(0, 0)]);
        store.paint(2, [key(0, 1)]);
        store.set_visible(2, false);

        assert_eq!(store.erase([key(0, 0), key(0, 1)], true), 1);
        assert_eq!(store.owner_of(key(0, 0)), None);
        assert_eq!(store.owner_of(key(0, 1)), Some(2));

        assert_eq!(store.erase([key(0, 1)], false), 1);
        assert_eq!(store.owner_of(key(0, 1)), None);
    }

    #[test]
    fn test_erase_unpainted_cells() {
        let mut store = LayerStore::with_seed(0);
        assert_eq!(store.erase([key(9, 9)], true), 0);
    }
}
