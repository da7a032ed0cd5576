use hexarea_config::HEX_SIZE_MIN;
use thiserror::Error;

use crate::types::{CellKey, HexColor};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Invalid hex color: {0:?} (expected #RRGGBB or #RGB)")]
    InvalidColor(String),
    #[error("Invalid cell key: {0:?} (expected \"row,col\")")]
    InvalidCellKey(String),
    #[error("Invalid hex size: {0} (must be finite and at least {min})", min = HEX_SIZE_MIN)]
    InvalidHexSize(f32),
}

/// Parse a `#RRGGBB` or `#RGB` color string (case-insensitive)
pub fn parse_hex_color(input: &str) -> Result<HexColor, ValidationError> {
    let invalid = || ValidationError::InvalidColor(input.to_string());

    let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        6 => {
            let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            Ok(HexColor::from_rgb24(value))
        }
        3 => {
            // #abc is shorthand for #aabbcc
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
            Ok(HexColor::from_rgb24(value))
        }
        _ => Err(invalid()),
    }
}

/// Parse the canonical `"row,col"` form of a cell key
pub fn parse_cell_key(input: &str) -> Result<CellKey, ValidationError> {
    let invalid = || ValidationError::InvalidCellKey(input.to_string());

    let (row, col) = input.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
    let col = col.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok(CellKey::new(row, col))
}

/// Check that a hex size can drive the geometry. Sizes below
/// `HEX_SIZE_MIN` are rejected: the candidate scan grows with the inverse
/// square of the size.
pub fn validate_hex_size(size: f32) -> Result<f32, ValidationError> {
    if size.is_finite() && size >= HEX_SIZE_MIN {
        Ok(size)
    } else {
        Err(ValidationError::InvalidHexSize(size))
    }
}
