//! Layer and area summary types.

use serde::{Deserialize, Serialize};

/// Snapshot of one layer for a layer panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerInfo {
    pub id: u32,
    pub name: String,
    /// Hex color string (`#RRGGBB`)
    pub color: String,
    pub visible: bool,
    pub opacity: f32,
    pub cell_count: usize,
}

/// Area calculation result for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaReport {
    pub total_cells: usize,
    pub layers: Vec<LayerAreaInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerAreaInfo {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub count: usize,
    /// Percentage of all painted cells, formatted with two decimals
    pub percentage: String,
}
