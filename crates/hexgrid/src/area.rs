//! Area calculator
//!
//! Painted area is measured in cells: every layer's share is its cell count
//! over the total number of painted cells across all layers, visible or not.

use tracing::debug;

use crate::layers::Layer;
use crate::types::{HexColor, LayerId};

/// Share of one layer in a calculation snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct LayerArea {
    pub id: LayerId,
    pub name: String,
    pub color: HexColor,
    pub count: usize,
    /// Percentage of all painted cells, always two decimals (e.g. `"33.33"`)
    pub percentage: String,
}

/// Snapshot of per-layer areas; not updated by later painting
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CalculationResult {
    pub total_cells: usize,
    pub layers: Vec<LayerArea>,
}

impl CalculationResult {
    pub fn layer(&self, id: LayerId) -> Option<&LayerArea> {
        self.layers.iter().find(|area| area.id == id)
    }
}

/// Format `count / total` as a percentage with two decimals, rounding
/// halves away from zero. A zero total yields `"0.00"`.
pub fn format_percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    let percent = count as f64 / total as f64 * 100.0;
    let rounded = (percent * 100.0).round() / 100.0;
    format!("{rounded:.2}")
}

/// Count cells per layer and derive each layer's percentage of the total
pub fn compute_areas(layers: &[Layer]) -> CalculationResult {
    let total_cells: usize = layers.iter().map(Layer::cell_count).sum();

    let layers: Vec<LayerArea> = layers
        .iter()
        .map(|layer| LayerArea {
            id: layer.id,
            name: layer.name.clone(),
            color: layer.color,
            count: layer.cell_count(),
            percentage: format_percentage(layer.cell_count(), total_cells),
        })
        .collect();

    debug!(
        "compute_areas: total_cells={}, layers={}",
        total_cells,
        layers.len()
    );
    CalculationResult {
        total_cells,
        layers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::LayerStore;
    use crate::types::CellKey;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(3, 4), "75.00");
        assert_eq!(format_percentage(1, 3), "33.33");
        assert_eq!(format_percentage(2, 3), "66.67");
        assert_eq!(format_percentage(1, 8), "12.50");
        assert_eq!(format_percentage(4, 4), "100.00");
        assert_eq!(format_percentage(0, 4), "0.00");
        assert_eq!(format_percentage(0, 0), "0.00");
    }

    #[test]
    fn test_compute_areas_three_to_one() {
        let mut store = LayerStore::with_seed(0);
        store.create_layer(Some("B"), None);
        store.paint(1, (0..3).map(|c| CellKey::new(0, c)));
        store.paint(2, [CellKey::new(1, 0)]);

        let result = compute_areas(store.layers());
        assert_eq!(result.total_cells, 4);
        assert_eq!(result.layer(1).unwrap().percentage, "75.00");
        assert_eq!(result.layer(2).unwrap().percentage, "25.00");
        assert_eq!(result.layer(2).unwrap().name, "B");
        assert_eq!(result.layer(1).unwrap().count, 3);
    }

    #[test]
    fn test_compute_areas_empty() {
        let mut store = LayerStore::with_seed(0);
        store.create_layer(None, None);

        let result = compute_areas(store.layers());
        assert_eq!(result.total_cells, 0);
        assert_eq!(result.layers.len(), 2);
        assert!(result.layers.iter().all(|area| area.percentage == "0.00"));
    }

    #[test]
    fn test_hidden_layers_still_count() {
        let mut store = LayerStore::with_seed(0);
        store.create_layer(None, None);
        store.paint(1, [CellKey::new(0, 0)]);
        store.paint(2, [CellKey::new(0, 1)]);
        store.set_visible(2, false);

        let result = compute_areas(store.layers());
        assert_eq!(result.total_cells, 2);
        assert_eq!(result.layer(2).unwrap().percentage, "50.00");
    }
}
