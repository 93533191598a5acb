//! The pixelated tile layer.
//!
//! Loads map tiles through a [`TileAcquirer`](crate::tiles::TileAcquirer),
//! pixelates each freshly loaded image with a blur-free downscale/upscale
//! pass, and memoizes the encoded result per source URL so repeat requests
//! substitute the cached payload instead of fetching and transforming again.

pub mod cache;
pub mod layer;
pub mod options;
pub mod trait_impl;

pub use cache::PixelatedTileCache;
pub use layer::PixelatedTileLayer;
pub use options::PixelatedLayerOptions;
