//! Shared configuration for hexarea
//!
//! This crate provides the single source of truth for viewport dimensions,
//! grid and brush limits, background image bounds and the grid stroke style
//! shared between the core and any UI collaborator.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 800;

/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;

/// Environment variable overriding the viewport size (`WIDTHxHEIGHT`)
pub const VIEWPORT_ENV_VAR: &str = "HEXAREA_VIEWPORT";

/// Smallest hexagon radius accepted by the hex size setter
pub const HEX_SIZE_MIN: f32 = 10.0;

/// Largest hexagon radius accepted by the hex size setter
pub const HEX_SIZE_MAX: f32 = 40.0;

/// Hexagon radius of a fresh session
pub const DEFAULT_HEX_SIZE: f32 = 20.0;

pub const BRUSH_RADIUS_MIN: u32 = 1;
pub const BRUSH_RADIUS_MAX: u32 = 5;
pub const DEFAULT_BRUSH_RADIUS: u32 = 1;

/// Maximum grid offset per axis, in pixels.
///
/// Also the margin added around the viewport when scanning candidate cells,
/// so cells moved into view by an offset stay reachable.
pub const MAX_GRID_OFFSET: f32 = 200.0;

/// Maximum background displacement per axis, in pixels
pub const MAX_BACKGROUND_OFFSET: f32 = 500.0;

pub const BACKGROUND_SCALE_MIN: f32 = 0.1;
pub const BACKGROUND_SCALE_MAX: f32 = 2.0;

/// Opacity given to newly created layers
pub const DEFAULT_LAYER_OPACITY: f32 = 0.3;

/// Viewport configuration (the raster surface the grid is drawn onto)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl ViewportConfig {
    /// Create a new viewport config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse from environment variable HEXAREA_VIEWPORT
    pub fn from_env() -> Self {
        match std::env::var(VIEWPORT_ENV_VAR) {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                debug!("{VIEWPORT_ENV_VAR}={value:?} is not WIDTHxHEIGHT, using defaults");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parse a `WIDTHxHEIGHT` string such as `1024x768`
    pub fn parse(value: &str) -> Option<Self> {
        let (w, h) = value.trim().split_once(['x', 'X'])?;
        let width = w.trim().parse().ok()?;
        let height = h.trim().parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Get width as f32 for calculations
    pub fn width_f32(&self) -> f32 {
        self.width as f32
    }

    /// Get height as f32 for calculations
    pub fn height_f32(&self) -> f32 {
        self.height as f32
    }
}

/// Stroke style used for hexagon outlines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    /// Outline color as straight RGB (0.0-1.0)
    pub stroke_color: [f32; 3],
    /// Outline width in pixels
    pub stroke_width: f32,
    /// Alpha of the bare grid outlines
    pub grid_alpha: f32,
    /// Alpha of the outline drawn around painted cells
    pub cell_outline_alpha: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            // #888888
            stroke_color: [136.0 / 255.0, 136.0 / 255.0, 136.0 / 255.0],
            stroke_width: 0.3,
            grid_alpha: 0.8,
            cell_outline_alpha: 1.0,
        }
    }
}

/// Clamp a requested hexagon radius into the supported range
pub fn clamp_hex_size(size: f32) -> f32 {
    if size.is_nan() {
        return DEFAULT_HEX_SIZE;
    }
    size.clamp(HEX_SIZE_MIN, HEX_SIZE_MAX)
}

pub fn clamp_brush_radius(radius: u32) -> u32 {
    radius.clamp(BRUSH_RADIUS_MIN, BRUSH_RADIUS_MAX)
}

/// Clamp one axis of the grid offset to +/-MAX_GRID_OFFSET
pub fn clamp_grid_offset(offset: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(-MAX_GRID_OFFSET, MAX_GRID_OFFSET)
}

/// Clamp an opacity-like value into [0, 1]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

pub fn clamp_background_position(offset: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(-MAX_BACKGROUND_OFFSET, MAX_BACKGROUND_OFFSET)
}

pub fn clamp_background_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return 1.0;
    }
    scale.clamp(BACKGROUND_SCALE_MIN, BACKGROUND_SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let config = ViewportConfig::default();
        assert_eq!(config.width, DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(config.height, DEFAULT_VIEWPORT_HEIGHT);
        assert_eq!(config.width_f32(), 800.0);
    }

    #[test]
    fn test_parse_viewport() {
        let large = ViewportConfig::new(1024, 768);
        assert_eq!(ViewportConfig::parse("1024x768"), Some(large));
        let padded = ViewportConfig::new(640, 480);
        assert_eq!(ViewportConfig::parse(" 640 X 480 "), Some(padded));
        assert_eq!(ViewportConfig::parse("0x480"), None);
        assert_eq!(ViewportConfig::parse("wide"), None);
        assert_eq!(ViewportConfig::parse("640x"), None);
    }

    #[test]
    fn test_clamps() {
        assert_eq!(clamp_hex_size(5.0), HEX_SIZE_MIN);
        assert_eq!(clamp_hex_size(100.0), HEX_SIZE_MAX);
        assert_eq!(clamp_hex_size(25.0), 25.0);
        assert_eq!(clamp_hex_size(f32::NAN), DEFAULT_HEX_SIZE);

        assert_eq!(clamp_brush_radius(0), 1);
        assert_eq!(clamp_brush_radius(9), 5);

        assert_eq!(clamp_grid_offset(-250.0), -200.0);
        assert_eq!(clamp_grid_offset(150.0), 150.0);

        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(-0.1), 0.0);

        assert_eq!(clamp_background_position(600.0), 500.0);
        assert_eq!(clamp_background_scale(0.0), 0.1);
        assert_eq!(clamp_background_scale(3.0), 2.0);
    }

    #[test]
    fn test_grid_style_default() {
        let style = GridStyle::default();
        assert!((style.stroke_color[0] - 0.533).abs() < 0.01);
        assert_eq!(style.stroke_width, 0.3);
        assert_eq!(style.grid_alpha, 0.8);
    }
}
