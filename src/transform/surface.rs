use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::png::PngEncoder;
use image::{imageops, ColorType, ImageEncoder, RgbaImage};

use crate::Result;

/// A reusable off-screen drawing surface for the pixelation transform.
///
/// One surface lives on each layer instance and is resized to the current
/// tile's dimensions on every transform invocation; its contents are fully
/// overwritten each time, so nothing persists between invocations.
///
/// The smoothing flag mirrors a 2D canvas context's `imageSmoothingEnabled`:
/// with smoothing off, scaled blits use nearest-neighbor sampling, which is
/// what produces the hard block edges of the pixelated effect.
#[derive(Debug)]
pub struct ScratchSurface {
    pixels: RgbaImage,
    smoothing: bool,
}

impl ScratchSurface {
    pub fn new() -> Self {
        Self { pixels: RgbaImage::new(0, 0), smoothing: true }
    }

    /// Resize the surface, discarding its previous contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
    }

    pub fn set_smoothing(&mut self, smoothing: bool) {
        self.smoothing = smoothing;
    }

    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Draw `src` scaled into the surface region `(0, 0, dest_w, dest_h)`.
    pub fn draw_image(&mut self, src: &RgbaImage, dest_w: u32, dest_h: u32) {
        if src.width() == 0 || src.height() == 0 || dest_w == 0 || dest_h == 0 {
            return;
        }
        let scaled = imageops::resize(src, dest_w, dest_h, self.filter());
        imageops::replace(&mut self.pixels, &scaled, 0, 0);
    }

    /// Draw the surface's own region `(0, 0, src_w, src_h)` scaled over
    /// `(0, 0, dest_w, dest_h)`.
    pub fn draw_self(&mut self, src_w: u32, src_h: u32, dest_w: u32, dest_h: u32) {
        if src_w == 0 || src_h == 0 || dest_w == 0 || dest_h == 0 {
            return;
        }
        let src_w = src_w.min(self.pixels.width());
        let src_h = src_h.min(self.pixels.height());
        let region = imageops::crop_imm(&self.pixels, 0, 0, src_w, src_h).to_image();
        let scaled = imageops::resize(&region, dest_w, dest_h, self.filter());
        imageops::replace(&mut self.pixels, &scaled, 0, 0);
    }

    /// Encode the surface's current content as a PNG data URL.
    pub fn to_data_url(&self) -> Result<String> {
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer).write_image(
            self.pixels.as_raw(),
            self.pixels.width(),
            self.pixels.height(),
            ColorType::Rgba8,
        )?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(buffer)))
    }

    fn filter(&self) -> imageops::FilterType {
        if self.smoothing {
            imageops::FilterType::Triangle
        } else {
            imageops::FilterType::Nearest
        }
    }
}

impl Default for ScratchSurface {
    fn default() -> Self {
        Self::new()
    }
}
