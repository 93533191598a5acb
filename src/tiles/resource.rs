use crate::core::geo::TileCoord;
use image::RgbaImage;

/// A loaded tile image resource.
///
/// Mirrors the handle a tiling host hands around for a tile: the address it
/// was loaded from (`src`), the cross-origin policy it was requested with,
/// and the decoded pixel content it displays. The pixelation transform
/// rewrites `src` and the pixels together, which is what makes the resource
/// show the transformed content.
#[derive(Debug, Clone)]
pub struct ImageTile {
    coord: TileCoord,
    src: String,
    cross_origin: bool,
    image: RgbaImage,
}

impl ImageTile {
    pub fn new(coord: TileCoord, src: String, image: RgbaImage, cross_origin: bool) -> Self {
        Self { coord, src, cross_origin, image }
    }

    pub fn coord(&self) -> TileCoord {
        self.coord
    }

    /// The resource's current address: the URL it was fetched from, or the
    /// encoded payload substituted by the transform.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn cross_origin(&self) -> bool {
        self.cross_origin
    }

    /// Natural width of the decoded content.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Natural height of the decoded content.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Replace the address and displayed content in one step.
    pub(crate) fn apply_payload(&mut self, src: String, image: RgbaImage) {
        self.src = src;
        self.image = image;
    }
}
