use crate::core::geo::TileCoord;
use crate::tiles::resource::ImageTile;
use crate::Result;

/// Completion callback for one tile request.
///
/// Invoked at most once: with the ready (possibly transformed) resource on
/// success, or with [`crate::Error::TileNotFound`] on load failure. Detaching
/// the layer cancels outstanding callbacks without invoking them.
pub type TileDone = Box<dyn FnOnce(Result<ImageTile>)>;

/// The extension point a tiling host drives.
///
/// A provider is registered with the host framework and handles the tile
/// half of the rendering loop: the host asks for tiles as the viewport
/// changes, pumps completions from its event loop, and signals attachment
/// lifecycle transitions around both.
pub trait TileProvider {
    /// Request the tile at `coord`. `done` fires from a later
    /// [`poll_completions`](TileProvider::poll_completions) call once the
    /// load (and any transform) has finished.
    fn create_tile(&mut self, coord: TileCoord, done: TileDone) -> Result<()>;

    /// Drive pending loads to completion, invoking their callbacks.
    /// Returns the number of tiles that completed.
    fn poll_completions(&mut self) -> usize;

    /// The host attached this provider. Guaranteed to be called before the
    /// first `create_tile` of the attachment.
    fn on_add(&mut self);

    /// The host detached this provider.
    fn on_remove(&mut self);
}
