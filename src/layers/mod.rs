pub mod base;
pub mod pixelated;

pub use base::{TileDone, TileProvider};
pub use pixelated::PixelatedTileLayer;
