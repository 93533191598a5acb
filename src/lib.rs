//! # pixeltile
//!
//! A pixelated tile layer for Leaflet-style Rust map engines.
//!
//! The layer intercepts tile images as they finish loading, runs a blur-free
//! downscale/upscale pass over a reusable scratch surface to produce a blocky
//! "pixelated" look, and memoizes the encoded result per source URL so that
//! re-requesting a tile substitutes the cached payload instead of fetching
//! and transforming again.
//!
//! ```no_run
//! use pixeltile::prelude::*;
//!
//! let mut layer = PixelatedTileLayer::new(
//!     Box::new(OpenStreetMapSource::new()),
//!     PixelatedLayerOptions { pixelation_factor: 8, ..Default::default() },
//! );
//! layer.on_add();
//! layer
//!     .create_tile(TileCoord { x: 163, y: 395, z: 10 }, Box::new(|result| {
//!         match result {
//!             Ok(tile) => println!("tile ready: {}x{}", tile.width(), tile.height()),
//!             Err(e) => eprintln!("tile failed: {}", e),
//!         }
//!     }))
//!     .unwrap();
//! // Pump completions from the host event loop:
//! layer.poll_completions();
//! ```

pub mod core;
pub mod layers;
pub mod prelude;
pub mod tiles;
pub mod transform;

// Re-export public API
pub use crate::core::geo::TileCoord;
pub use layers::{
    base::TileProvider,
    pixelated::{PixelatedLayerOptions, PixelatedTileCache, PixelatedTileLayer},
};
pub use tiles::{
    acquirer::{HttpTileAcquirer, TileAcquirer, TileFetchRequest, TileFetchResult},
    resource::ImageTile,
    source::{OpenStreetMapSource, TileSource},
};
pub use transform::surface::ScratchSurface;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying image resource failed to load.
    #[error("tile not found")]
    TileNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
