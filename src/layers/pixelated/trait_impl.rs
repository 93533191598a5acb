//! TileProvider implementation for PixelatedTileLayer

use super::PixelatedTileLayer;
use crate::{
    core::geo::TileCoord,
    layers::base::{TileDone, TileProvider},
    Result,
};

impl TileProvider for PixelatedTileLayer {
    fn create_tile(&mut self, coord: TileCoord, done: TileDone) -> Result<()> {
        PixelatedTileLayer::create_tile(self, coord, done)
    }

    fn poll_completions(&mut self) -> usize {
        PixelatedTileLayer::poll_completions(self)
    }

    fn on_add(&mut self) {
        PixelatedTileLayer::on_add(self)
    }

    fn on_remove(&mut self) {
        PixelatedTileLayer::on_remove(self)
    }
}
