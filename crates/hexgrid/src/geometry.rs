//! Grid geometry: cell index <-> pixel space
//!
//! The grid is a staggered offset-row layout, not a true hexagonal tiling:
//! columns are `size * 1.75` apart, rows `sqrt(3) * size * 0.9` apart, and
//! odd rows are shifted right by half a column. Pixel-to-cell lookup scans a
//! bounded window of candidate cells (viewport plus the maximum grid offset
//! on every side) and picks the closest center within tolerance.

use glam::Vec2;
use hexarea_config::{DEFAULT_HEX_SIZE, MAX_GRID_OFFSET};

use crate::constants::{
    HEXAGON_START_ANGLE, HEXAGON_VERTICES, HIT_TOLERANCE_FACTOR, HORIZONTAL_PITCH_FACTOR, SQRT_3,
    VERTICAL_PITCH_FACTOR,
};
use crate::types::CellKey;
use crate::validation::{ValidationError, validate_hex_size};

/// Hex size and pixel translation of the whole grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    hex_size: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl GridConfig {
    /// Create a grid config with no offset. The hex size must be finite and
    /// at least `HEX_SIZE_MIN`.
    pub fn new(hex_size: f32) -> Result<Self, ValidationError> {
        Ok(Self {
            hex_size: validate_hex_size(hex_size)?,
            offset_x: 0.0,
            offset_y: 0.0,
        })
    }

    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.set_offset(offset_x, offset_y);
        self
    }

    #[inline]
    pub fn hex_size(&self) -> f32 {
        self.hex_size
    }

    #[inline]
    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    #[inline]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    /// Change the hex size; rejected (and left unchanged) below `HEX_SIZE_MIN`
    pub fn set_hex_size(&mut self, hex_size: f32) -> Result<(), ValidationError> {
        self.hex_size = validate_hex_size(hex_size)?;
        Ok(())
    }

    pub fn set_offset(&mut self, offset_x: f32, offset_y: f32) {
        self.offset_x = if offset_x.is_finite() { offset_x } else { 0.0 };
        self.offset_y = if offset_y.is_finite() { offset_y } else { 0.0 };
    }

    /// Distance between neighbouring column centers
    #[inline]
    pub fn horizontal_pitch(&self) -> f32 {
        self.hex_size * HORIZONTAL_PITCH_FACTOR
    }

    /// Distance between neighbouring row centers
    #[inline]
    pub fn vertical_pitch(&self) -> f32 {
        SQRT_3 * self.hex_size * VERTICAL_PITCH_FACTOR
    }

    /// Maximum pointer distance from a center that still selects the cell
    #[inline]
    pub fn hit_tolerance(&self) -> f32 {
        self.hex_size * HIT_TOLERANCE_FACTOR
    }
}

/// Pixel center and radius of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCenter {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl CellCenter {
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Pixel center of cell (row, col), including the grid offset
pub fn cell_center(config: &GridConfig, row: i32, col: i32) -> CellCenter {
    let pitch_x = config.horizontal_pitch();
    let stagger = if row % 2 == 0 { 0.0 } else { pitch_x / 2.0 };

    CellCenter {
        x: col as f32 * pitch_x + stagger + config.offset_x,
        y: row as f32 * config.vertical_pitch() + config.offset_y,
        size: config.hex_size,
    }
}

#[inline]
pub fn cell_center_of(config: &GridConfig, cell: CellKey) -> CellCenter {
    cell_center(config, cell.row, cell.col)
}

/// Rectangular range of candidate cells scanned for hit-testing and
/// grid drawing. Rows and columns are half-open ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanWindow {
    pub start_row: i32,
    pub end_row: i32,
    pub start_col: i32,
    pub end_col: i32,
}

impl ScanWindow {
    /// Window covering a `width x height` viewport plus `MAX_GRID_OFFSET`
    /// of margin, so cells pulled into view by any allowed offset are
    /// included.
    pub fn for_viewport(config: &GridConfig, width: f32, height: f32) -> Self {
        let pitch_x = config.horizontal_pitch();
        let pitch_y = config.vertical_pitch();

        let margin_rows = (MAX_GRID_OFFSET / pitch_y).ceil() as i32;
        let margin_cols = (MAX_GRID_OFFSET / pitch_x).ceil() as i32;

        let view_rows = (height.max(0.0) / pitch_y).ceil() as i32;
        let view_cols = (width.max(0.0) / pitch_x).ceil() as i32;

        Self {
            start_row: margin_rows.saturating_neg(),
            end_row: view_rows.saturating_add(margin_rows),
            start_col: margin_cols.saturating_neg(),
            end_col: view_cols.saturating_add(margin_cols),
        }
    }

    pub fn row_count(&self) -> usize {
        (i64::from(self.end_row) - i64::from(self.start_row)).max(0) as usize
    }

    pub fn col_count(&self) -> usize {
        (i64::from(self.end_col) - i64::from(self.start_col)).max(0) as usize
    }

    pub fn len(&self) -> usize {
        self.row_count().saturating_mul(self.col_count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, cell: CellKey) -> bool {
        (self.start_row..self.end_row).contains(&cell.row)
            && (self.start_col..self.end_col).contains(&cell.col)
    }

    /// Candidate cells in scan order (row-major, ascending)
    pub fn cells(self) -> impl Iterator<Item = CellKey> {
        let cols = self.start_col..self.end_col;
        (self.start_row..self.end_row).flat_map(move |row| {
            cols.clone().map(move |col| CellKey::new(row, col))
        })
    }
}

/// Find the cell whose center is closest to `(px, py)`.
///
/// Returns `None` when no candidate center lies within
/// `1.2 * hex_size` (the pointer is in a gap between hexagons). On a
/// distance tie the first candidate in scan order wins.
pub fn nearest_cell(
    config: &GridConfig,
    px: f32,
    py: f32,
    viewport_width: f32,
    viewport_height: f32,
) -> Option<CellKey> {
    if !px.is_finite() || !py.is_finite() {
        return None;
    }

    let pointer = Vec2::new(px, py);
    let tolerance = config.hit_tolerance();
    let window = ScanWindow::for_viewport(config, viewport_width, viewport_height);

    let mut best: Option<(CellKey, f32)> = None;
    for cell in window.cells() {
        let dist = cell_center_of(config, cell).position().distance(pointer);
        if dist > tolerance {
            continue;
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((cell, dist));
        }
    }

    best.map(|(cell, _)| cell)
}

/// Outline of a regular hexagon of radius `size`, first vertex straight up,
/// then clockwise on screen in 60 degree steps.
pub fn hexagon_vertices(center: Vec2, size: f32) -> [Vec2; HEXAGON_VERTICES] {
    let step = std::f32::consts::TAU / HEXAGON_VERTICES as f32;
    std::array::from_fn(|i| {
        let angle = HEXAGON_START_ANGLE + step * i as f32;
        center + Vec2::new(angle.cos(), angle.sin()) * size
    })
}

/// Whether a hexagon centered at `center` may touch the viewport, allowing
/// `MAX_GRID_OFFSET` of slack on every side.
pub fn hexagon_near_viewport(center: &CellCenter, width: f32, height: f32) -> bool {
    center.x + center.size > -MAX_GRID_OFFSET
        && center.x - center.size < width + MAX_GRID_OFFSET
        && center.y + center.size > -MAX_GRID_OFFSET
        && center.y - center.size < height + MAX_GRID_OFFSET
}

#[cfg(test)]
mod tests {
    use hexarea_config::HEX_SIZE_MIN;

    use super::*;

    const EPS: f32 = 1e-3;

    fn grid(size: f32) -> GridConfig {
        GridConfig::new(size).unwrap()
    }

    #[test]
    fn test_cell_center_even_row() {
        let config = grid(20.0);
        let c = cell_center(&config, 0, 2);
        assert!((c.x - 70.0).abs() < EPS);
        assert!(c.y.abs() < EPS);
        assert_eq!(c.size, 20.0);
    }

    #[test]
    fn test_cell_center_odd_rows_are_staggered() {
        let config = grid(20.0);
        let c = cell_center(&config, 1, 0);
        assert!((c.x - 17.5).abs() < EPS);
        assert!((c.y - SQRT_3 * 18.0).abs() < EPS);

        // Negative odd rows shift the same way
        let c = cell_center(&config, -1, 0);
        assert!((c.x - 17.5).abs() < EPS);
        assert!((c.y + SQRT_3 * 18.0).abs() < EPS);
    }

    #[test]
    fn test_cell_center_applies_offset() {
        let config = grid(10.0).with_offset(-15.0, 40.0);
        let c = cell_center(&config, 2, 1);
        assert!((c.x - (17.5 - 15.0)).abs() < EPS);
        assert!((c.y - (2.0 * SQRT_3 * 9.0 + 40.0)).abs() < EPS);
    }

    #[test]
    fn test_invalid_hex_size_rejected() {
        assert!(GridConfig::new(0.0).is_err());
        assert!(GridConfig::new(1e-8).is_err());
        assert!(GridConfig::new(0.01).is_err());
        let mut config = grid(20.0);
        assert!(config.set_hex_size(-1.0).is_err());
        assert_eq!(config.hex_size(), 20.0);
    }

    #[test]
    fn test_scan_window_saturates_on_huge_viewport() {
        let window = ScanWindow::for_viewport(&grid(HEX_SIZE_MIN), f32::MAX, f32::MAX);
        assert_eq!(window.end_row, i32::MAX);
        assert_eq!(window.end_col, i32::MAX);
        assert!(window.contains(CellKey::new(0, 0)));
        assert!(!window.contains(CellKey::new(window.start_row - 1, 0)));
        assert!(window.len() > 0);
    }

    #[test]
    fn test_scan_window_covers_margin() {
        let config = grid(20.0);
        let window = ScanWindow::for_viewport(&config, 800.0, 600.0);
        // ceil(200 / 35) = 6, ceil(200 / 31.18) = 7
        assert_eq!(window.start_col, -6);
        assert_eq!(window.start_row, -7);
        assert_eq!(window.col_count(), 23 + 12);
        assert_eq!(window.row_count(), 20 + 14);
        assert_eq!(window.cells().count(), window.len());
    }

    #[test]
    fn test_scan_window_order_is_row_major() {
        let window = ScanWindow {
            start_row: 0,
            end_row: 2,
            start_col: -1,
            end_col: 1,
        };
        let cells: Vec<_> = window.cells().collect();
        assert_eq!(
            cells,
            vec![
                CellKey::new(0, -1),
                CellKey::new(0, 0),
                CellKey::new(1, -1),
                CellKey::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_nearest_cell_round_trip() {
        let config = grid(20.0).with_offset(13.0, -7.0);
        for (row, col) in [(0, 0), (3, 4), (5, 7), (-2, -3), (10, 15)] {
            let c = cell_center(&config, row, col);
            assert_eq!(
                nearest_cell(&config, c.x, c.y, 800.0, 600.0),
                Some(CellKey::new(row, col)),
                "cell ({row}, {col})"
            );
        }
    }

    #[test]
    fn test_nearest_cell_picks_closest() {
        let config = grid(20.0);
        // Slightly right of (0, 0), still closer to it than to (0, 1) at x=35
        assert_eq!(
            nearest_cell(&config, 15.0, 0.0, 800.0, 600.0),
            Some(CellKey::new(0, 0))
        );
        assert_eq!(
            nearest_cell(&config, 20.0, 0.0, 800.0, 600.0),
            Some(CellKey::new(0, 1))
        );
    }

    #[test]
    fn test_nearest_cell_outside_tolerance() {
        let config = grid(10.0);
        // Far outside the scan window: nothing within tolerance
        assert_eq!(nearest_cell(&config, -5000.0, -5000.0, 800.0, 600.0), None);
        assert_eq!(nearest_cell(&config, f32::NAN, 0.0, 800.0, 600.0), None);
    }

    #[test]
    fn test_hexagon_vertices_point_up() {
        let vertices = hexagon_vertices(Vec2::new(100.0, 100.0), 10.0);
        assert!((vertices[0].x - 100.0).abs() < EPS);
        assert!((vertices[0].y - 90.0).abs() < EPS);
        // Opposite vertex points straight down
        assert!((vertices[3].x - 100.0).abs() < EPS);
        assert!((vertices[3].y - 110.0).abs() < EPS);
        for v in vertices {
            assert!((v.distance(Vec2::new(100.0, 100.0)) - 10.0).abs() < EPS);
        }
    }

    #[test]
    fn test_hexagon_near_viewport() {
        let inside = CellCenter { x: 10.0, y: 10.0, size: 20.0 };
        let margin = CellCenter { x: -190.0, y: 10.0, size: 20.0 };
        let outside = CellCenter { x: -400.0, y: 10.0, size: 20.0 };
        assert!(hexagon_near_viewport(&inside, 800.0, 600.0));
        assert!(hexagon_near_viewport(&margin, 800.0, 600.0));
        assert!(!hexagon_near_viewport(&outside, 800.0, 600.0));
    }
}
