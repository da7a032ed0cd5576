//! Colors handed out to new layers

use rand::Rng;

use crate::types::HexColor;

/// Fixed palette, in the order new sessions prefer them
pub const PALETTE: [HexColor; 8] = [
    HexColor::from_rgb24(0xFF5252),
    HexColor::from_rgb24(0x4CAF50),
    HexColor::from_rgb24(0x2196F3),
    HexColor::from_rgb24(0xFFC107),
    HexColor::from_rgb24(0x9C27B0),
    HexColor::from_rgb24(0x00BCD4),
    HexColor::from_rgb24(0xFF9800),
    HexColor::from_rgb24(0x607D8B),
];

/// Pick a random palette color not in `used`.
/// Once the palette is exhausted, any 24-bit color may be returned.
pub fn pick_color<R: Rng + ?Sized>(used: &[HexColor], rng: &mut R) -> HexColor {
    let available: Vec<HexColor> = PALETTE
        .iter()
        .copied()
        .filter(|color| !used.contains(color))
        .collect();

    if available.is_empty() {
        return HexColor::from_rgb24(rng.random_range(0..=0xFF_FFFF));
    }
    available[rng.random_range(0..available.len())]
}
