//! Background image slot

use hexarea_config::{clamp_background_position, clamp_background_scale, clamp_unit};
use image::{DynamicImage, RgbaImage};
use tracing::trace;

use crate::surface::RasterSurface;

/// A decoded background image plus its placement on the viewport
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    image: RgbaImage,
    x: f32,
    y: f32,
    opacity: f32,
    scale: f32,
}

impl BackgroundImage {
    /// Place an image at the origin, fully opaque, unscaled
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image,
            x: 0.0,
            y: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self::new(image.into_rgba8())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = clamp_background_position(x);
        self.y = clamp_background_position(y);
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = clamp_unit(opacity);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = clamp_background_scale(scale);
    }

    /// Size of the image on screen after scaling
    pub fn scaled_size(&self) -> (f32, f32) {
        (
            self.image.width() as f32 * self.scale,
            self.image.height() as f32 * self.scale,
        )
    }

    /// Draw onto `surface` at (x, y), scaled with nearest-neighbour sampling
    /// and blended with a uniform `opacity`.
    pub fn composite(&self, surface: &mut RasterSurface) {
        if self.opacity <= 0.0 || self.image.width() == 0 || self.image.height() == 0 {
            return;
        }

        let (scaled_w, scaled_h) = self.scaled_size();
        let x_min = (self.x.floor().max(0.0) as u32).min(surface.width());
        let y_min = (self.y.floor().max(0.0) as u32).min(surface.height());
        let x_max = ((self.x + scaled_w).ceil().max(0.0) as u32).min(surface.width());
        let y_max = ((self.y + scaled_h).ceil().max(0.0) as u32).min(surface.height());

        trace!(
            "BackgroundImage::composite: dest=({}, {})..({}, {}), scale={:.2}",
            x_min, y_min, x_max, y_max, self.scale
        );

        let src_w = self.image.width();
        let src_h = self.image.height();
        for py in y_min..y_max {
            let v = (py as f32 + 0.5 - self.y) / self.scale;
            if v < 0.0 || v >= src_h as f32 {
                continue;
            }
            let sy = (v as u32).min(src_h - 1);
            for px in x_min..x_max {
                let u = (px as f32 + 0.5 - self.x) / self.scale;
                if u < 0.0 || u >= src_w as f32 {
                    continue;
                }
                let sx = (u as u32).min(src_w - 1);
                let [r, g, b, a] = self.image.get_pixel(sx, sy).0;
                let color = [
                    r as f32 / 255.0,
                    g as f32 / 255.0,
                    b as f32 / 255.0,
                    a as f32 / 255.0,
                ];
                surface.blend_pixel(px, py, color, self.opacity);
            }
        }
    }
}
