//! Polygon rasterization onto a RasterSurface

use glam::Vec2;
use tracing::trace;

use crate::surface::RasterSurface;

/// Pixel-space bounding box (x, y, width, height)
pub type PixelRect = (u32, u32, u32, u32);

impl RasterSurface {
    /// Clamp a floating point bounding box to the surface.
    /// Returns (x_min, y_min, x_max, y_max), exclusive max, or None if empty.
    fn clamp_bounds(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        if !min.is_finite() || !max.is_finite() {
            return None;
        }
        let x_min = (min.x.floor().max(0.0) as u32).min(self.width());
        let y_min = (min.y.floor().max(0.0) as u32).min(self.height());
        let x_max = (max.x.ceil().max(0.0) as u32).min(self.width());
        let y_max = (max.y.ceil().max(0.0) as u32).min(self.height());

        if x_min >= x_max || y_min >= y_max {
            return None;
        }
        Some((x_min, y_min, x_max, y_max))
    }

    /// Fill a convex polygon with a straight-alpha color.
    ///
    /// A pixel is covered when its center lies inside the polygon (or on an
    /// edge). Vertex winding may be either direction.
    /// Returns the bounding box of the touched region, or None if the polygon
    /// is degenerate or entirely off-surface.
    pub fn fill_convex_polygon(
        &mut self,
        vertices: &[Vec2],
        color: [f32; 4],
        opacity: f32,
    ) -> Option<PixelRect> {
        if vertices.len() < 3 || opacity <= 0.0 {
            return None;
        }

        let (min, max) = polygon_bounds(vertices);
        let (x_min, y_min, x_max, y_max) = self.clamp_bounds(min, max)?;

        for py in y_min..y_max {
            for px in x_min..x_max {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                if contains_point(vertices, p) {
                    self.blend_pixel(px, py, color, opacity);
                }
            }
        }

        trace!(
            "fill_convex_polygon: bounds=({}, {})..({}, {})",
            x_min, y_min, x_max, y_max
        );
        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }

    /// Stroke the closed outline through `vertices` (last vertex joins the first).
    ///
    /// Coverage falls off linearly over one pixel outside `width / 2`; strokes
    /// thinner than a pixel are faded in proportion to their width.
    pub fn stroke_polyline_closed(
        &mut self,
        vertices: &[Vec2],
        color: [f32; 4],
        width: f32,
        opacity: f32,
    ) -> Option<PixelRect> {
        if vertices.len() < 2 || width <= 0.0 || opacity <= 0.0 {
            return None;
        }

        let half_width = width / 2.0;
        let reach = half_width + 0.5;
        let thin_fade = width.min(1.0);

        let (min, max) = polygon_bounds(vertices);
        let (x_min, y_min, x_max, y_max) =
            self.clamp_bounds(min - Vec2::splat(reach), max + Vec2::splat(reach))?;

        for py in y_min..y_max {
            for px in x_min..x_max {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let dist = edges(vertices)
                    .map(|(a, b)| distance_to_segment(p, a, b))
                    .fold(f32::INFINITY, f32::min);

                let coverage = (reach - dist).clamp(0.0, 1.0) * thin_fade;
                if coverage > 0.0 {
                    self.blend_pixel(px, py, color, opacity * coverage);
                }
            }
        }

        Some((x_min, y_min, x_max - x_min, y_max - y_min))
    }
}

fn polygon_bounds(vertices: &[Vec2]) -> (Vec2, Vec2) {
    vertices.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), v| (min.min(*v), max.max(*v)),
    )
}

/// Consecutive edges of a closed polygon
fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| (*a, *b))
}

/// Point-in-convex-polygon: all edge cross products share a sign
fn contains_point(vertices: &[Vec2], p: Vec2) -> bool {
    let mut has_pos = false;
    let mut has_neg = false;
    for (a, b) in edges(vertices) {
        let cross = (b - a).perp_dot(p - a);
        has_pos |= cross > 0.0;
        has_neg |= cross < 0.0;
        if has_pos && has_neg {
            return false;
        }
    }
    true
}

/// Shortest distance from `p` to the segment `a`-`b`
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
