pub mod acquirer;
pub mod resource;
pub mod source;

// Re-exports for convenience
pub use acquirer::{HttpTileAcquirer, TileAcquirer, TileFetchRequest, TileFetchResult};
pub use resource::ImageTile;
pub use source::{OpenStreetMapSource, TileSource};
