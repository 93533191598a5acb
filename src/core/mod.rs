pub mod geo;

pub use geo::TileCoord;
