/// sqrt(3), used for the vertical row pitch.
pub const SQRT_3: f32 = 1.732_050_8;

/// Horizontal distance between cell centers, as a multiple of hex size.
/// Slightly tighter than a true hex tiling to reduce gaps.
pub const HORIZONTAL_PITCH_FACTOR: f32 = 1.75;

/// Vertical row pitch is `sqrt(3) * size * VERTICAL_PITCH_FACTOR`.
pub const VERTICAL_PITCH_FACTOR: f32 = 0.9;

/// A pointer farther than `HIT_TOLERANCE_FACTOR * size` from every cell
/// center selects nothing.
pub const HIT_TOLERANCE_FACTOR: f32 = 1.2;

/// Number of vertices of a hexagon outline.
pub const HEXAGON_VERTICES: usize = 6;

/// Angle of the first hexagon vertex (pointing straight up in screen space).
pub const HEXAGON_START_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;
