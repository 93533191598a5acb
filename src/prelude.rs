//! Prelude module for common pixeltile types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use pixeltile::prelude::*;`

pub use crate::core::geo::TileCoord;

pub use crate::layers::{
    base::{TileDone, TileProvider},
    pixelated::{PixelatedLayerOptions, PixelatedTileCache, PixelatedTileLayer},
};

pub use crate::tiles::{
    acquirer::{HttpTileAcquirer, TileAcquirer, TileFetchRequest, TileFetchResult},
    resource::ImageTile,
    source::{OpenStreetMapSource, TileSource},
};

pub use crate::transform::surface::ScratchSurface;

pub use crate::{Error, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
