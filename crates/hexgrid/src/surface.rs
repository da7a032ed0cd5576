//! CPU raster surface the renderer draws into

use glam::Vec4;
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Viewport-sized RGBA raster.
/// Pixels are premultiplied [f32; 4], row-major
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl RasterSurface {
    /// Transparent surface of `width x height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; len],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Re-provision the surface at a new size. Contents are discarded.
    /// Returns false if the size was already current.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        debug!(
            "RasterSurface::resize: {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        *self = Self::new(width, height);
        true
    }

    /// Fill every pixel with one premultiplied color
    pub fn clear(&mut self, color: [f32; 4]) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite one pixel; out-of-bounds writes are dropped
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: [f32; 4]) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Source-over a straight-alpha `color` whose alpha is scaled by `opacity`
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [f32; 4], opacity: f32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let alpha = (color[3] * opacity).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let src = Vec4::new(color[0], color[1], color[2], 1.0) * alpha;
        let dst = Vec4::from_array(self.pixels[i]);
        self.pixels[i] = (src + dst * (1.0 - alpha)).to_array();
    }

    /// Raw f32 bytes, e.g. for a texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Convert to an 8-bit straight-alpha image (for encoding or display)
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, a] = self.pixels[(y as usize) * (self.width as usize) + (x as usize)];
            if a <= 0.0 {
                return Rgba([0, 0, 0, 0]);
            }
            let to_u8 = |v: f32| ((v / a).clamp(0.0, 1.0) * 255.0).round() as u8;
            let alpha = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
            Rgba([to_u8(r), to_u8(g), to_u8(b), alpha])
        })
    }
}
