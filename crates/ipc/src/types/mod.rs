//! Type definitions for IPC messages.

mod layers;
mod settings;

pub use layers::*;
pub use settings::*;
