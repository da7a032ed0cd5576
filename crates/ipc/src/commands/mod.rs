//! Command types for IPC messages.

mod background;
mod grid;
mod layer;

pub use background::*;
pub use grid::*;
pub use layer::*;
