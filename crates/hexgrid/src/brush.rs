//! Brush engine
//!
//! Resolves a center cell and brush radius to the disk of cells a single
//! paint or erase action touches. The disk is measured in index space
//! (`sqrt(dr^2 + dc^2) < radius`), not in true hex distance, so on the
//! staggered grid it is slightly anisotropic.

use std::collections::BTreeSet;

use hexarea_config::{DEFAULT_BRUSH_RADIUS, clamp_brush_radius};
use tracing::debug;

use crate::types::{CellKey, ToolMode};

/// Cells covered by a brush of `radius` centered on `center`.
/// A radius of 0 is treated as 1. Cells past the `i32` edge of the grid
/// are left out.
pub fn brush_cells(center: CellKey, radius: u32) -> BTreeSet<CellKey> {
    let radius = radius.max(1);
    let reach = i64::from(radius) - 1;
    let limit = f64::from(radius);

    let span = |mid: i32| {
        let mid = i64::from(mid);
        (mid - reach).max(i64::from(i32::MIN))..=(mid + reach).min(i64::from(i32::MAX))
    };
    let (rows, cols) = (span(center.row), span(center.col));

    let mut cells = BTreeSet::new();
    for row in rows {
        let dr = (row - i64::from(center.row)) as f64;
        for col in cols.clone() {
            let dc = (col - i64::from(center.col)) as f64;
            if (dr * dr + dc * dc).sqrt() >= limit {
                continue;
            }
            if let (Ok(row), Ok(col)) = (i32::try_from(row), i32::try_from(col)) {
                cells.insert(CellKey::new(row, col));
            }
        }
    }
    cells
}

/// One resolved brush application
#[derive(Debug, Clone, PartialEq)]
pub struct BrushStamp {
    pub center: CellKey,
    pub mode: ToolMode,
    pub cells: BTreeSet<CellKey>,
}

/// Tracks brush settings and the stroke in progress
///
/// A stroke runs from `begin_stroke` to `end_stroke`. Within a stroke,
/// consecutive events resolving to the same center cell produce a single
/// stamp.
pub struct BrushEngine {
    radius: u32,
    mode: ToolMode,
    stroking: bool,
    last_center: Option<CellKey>,
}

impl Default for BrushEngine {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_RADIUS, ToolMode::Draw)
    }
}

impl BrushEngine {
    pub fn new(radius: u32, mode: ToolMode) -> Self {
        Self {
            radius: clamp_brush_radius(radius),
            mode,
            stroking: false,
            last_center: None,
        }
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Set the radius, clamped to the supported range
    pub fn set_radius(&mut self, radius: u32) {
        self.radius = clamp_brush_radius(radius);
        self.last_center = None;
    }

    #[inline]
    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
        self.last_center = None;
    }

    #[inline]
    pub fn is_stroking(&self) -> bool {
        self.stroking
    }

    /// Start a new stroke
    pub fn begin_stroke(&mut self) {
        self.stroking = true;
        self.last_center = None;
    }

    /// Stamp at `center` if a stroke is active and the center moved.
    pub fn stroke_to(&mut self, center: CellKey) -> Option<BrushStamp> {
        if !self.stroking {
            return None;
        }
        if self.last_center == Some(center) {
            return None;
        }
        self.last_center = Some(center);

        let cells = brush_cells(center, self.radius);
        debug!(
            "BrushEngine::stroke_to: center={}, radius={}, mode={:?}, cells={}",
            center,
            self.radius,
            self.mode,
            cells.len()
        );
        Some(BrushStamp {
            center,
            mode: self.mode,
            cells,
        })
    }

    /// Forget the last stamped center so the next event stamps again
    pub fn restamp(&mut self) {
        self.last_center = None;
    }

    /// End the current stroke. Returns false if no stroke was active.
    pub fn end_stroke(&mut self) -> bool {
        let was_stroking = self.stroking;
        self.stroking = false;
        self.last_center = None;
        was_stroking
    }
}
