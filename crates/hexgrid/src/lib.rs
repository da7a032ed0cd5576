//! hexgrid - hexagon grid painting and area calculation
//!
//! This crate provides the core of hexarea:
//! - [`geometry`] - Cell index to pixel transforms and hit-testing
//! - [`surface`] - CPU RGBA surface the renderer draws into
//! - [`raster`] - Convex fill and closed outline rasterization
//! - [`render`] - Background, grid and painted-cell passes
//! - [`layers`] - Layer store with single ownership of painted cells
//! - [`brush`] - Brush disk resolution and stroke tracking
//! - [`area`] - Per-layer cell counts and percentages
//! - [`session`] - Session context tying it all together, plus message dispatch

pub mod area;
pub mod brush;
pub mod constants;
pub mod geometry;
pub mod layers;
pub mod raster;
pub mod render;
pub mod session;
pub mod surface;
pub mod types;
pub mod validation;

pub use area::*;
pub use brush::*;
pub use constants::*;
pub use geometry::*;
pub use layers::*;
pub use raster::*;
pub use render::*;
pub use session::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
