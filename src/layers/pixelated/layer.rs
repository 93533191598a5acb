//! Core PixelatedTileLayer implementation

use std::sync::Arc;

use super::{PixelatedLayerOptions, PixelatedTileCache};
use crate::{
    core::geo::TileCoord,
    layers::base::TileDone,
    prelude::HashMap,
    tiles::{
        acquirer::{HttpTileAcquirer, TileAcquirer, TileFetchRequest},
        resource::ImageTile,
        source::TileSource,
    },
    transform::surface::ScratchSurface,
    Error, Result,
};

/// One in-flight tile load awaiting its completion callback.
struct PendingTile {
    coord: TileCoord,
    /// Attachment generation this request was issued under. A completion
    /// arriving after a detach/re-attach must not touch the fresh cache.
    generation: u64,
    done: TileDone,
}

/// A tile layer that pixelates every tile it serves.
///
/// Freshly loaded tiles are run through a blur-free downscale/upscale pass
/// on a reusable scratch surface; the encoded result is cached per source
/// URL and substituted as the request target on later requests, so each
/// tile is transformed at most once per attachment.
pub struct PixelatedTileLayer {
    options: PixelatedLayerOptions,
    source: Box<dyn TileSource>,
    acquirer: Box<dyn TileAcquirer>,
    cache: PixelatedTileCache,
    scratch: Option<ScratchSurface>,
    pending: HashMap<u64, PendingTile>,
    next_request_id: u64,
    generation: u64,
    attached: bool,
    transform_count: u64,
}

impl PixelatedTileLayer {
    /// Create a new pixelated tile layer over the given tile source, loading
    /// tiles through the default HTTP acquirer.
    pub fn new(source: Box<dyn TileSource>, options: PixelatedLayerOptions) -> Self {
        Self {
            options,
            source,
            acquirer: Box::new(HttpTileAcquirer::new()),
            cache: PixelatedTileCache::new(),
            scratch: None,
            pending: HashMap::default(),
            next_request_id: 0,
            generation: 0,
            attached: false,
            transform_count: 0,
        }
    }

    /// Replace the acquirer, e.g. with an in-process fake for tests.
    pub fn with_acquirer(mut self, acquirer: Box<dyn TileAcquirer>) -> Self {
        self.acquirer = acquirer;
        self
    }

    /// Decide which address to actually request for `coord`: the cached
    /// pixelated payload if one exists, the canonical source URL otherwise.
    ///
    /// Pure lookup; never mutates the cache.
    pub fn resolve_tile_url(&self, coord: TileCoord) -> String {
        let url = self.source.url(coord);
        match self.cache.get(&url) {
            Some(payload) => payload.to_string(),
            None => url,
        }
    }

    /// Request the tile at `coord`. The callback fires from a later
    /// [`poll_completions`](Self::poll_completions) call, exactly once,
    /// unless the layer is detached first.
    pub fn create_tile(&mut self, coord: TileCoord, done: TileDone) -> Result<()> {
        if !self.attached {
            return Err(Error::Layer("layer is not attached".to_string()));
        }
        if !coord.is_valid()
            || coord.z < self.options.min_zoom
            || coord.z > self.options.max_zoom
        {
            return Err(Error::InvalidCoordinates(coord.to_string()));
        }

        let url = self.resolve_tile_url(coord);
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending
            .insert(id, PendingTile { coord, generation: self.generation, done });
        self.acquirer.fetch(TileFetchRequest { id, coord, url });
        Ok(())
    }

    /// Drain completed loads and dispatch their callbacks.
    ///
    /// For each successful load, the canonical URL is recomputed and
    /// compared against the loaded resource's address: a match means the
    /// content is the original, untransformed tile and must be pixelated; a
    /// mismatch means a cached pre-pixelated payload was served and the
    /// transform is skipped. Completion is signalled only after the
    /// transform has finished. Returns the number of callbacks invoked.
    pub fn poll_completions(&mut self) -> usize {
        let results = self.acquirer.try_recv_results();
        let mut completed = 0;

        for result in results {
            let Some(pending) = self.pending.remove(&result.id) else {
                log::debug!("dropping completion for unknown request {}", result.id);
                continue;
            };
            if pending.generation != self.generation || !self.attached {
                log::debug!("dropping stale completion for tile {}", pending.coord);
                continue;
            }

            match result.image {
                Err(e) => {
                    log::warn!("tile {} not found: {}", pending.coord, e);
                    (pending.done)(Err(Error::TileNotFound));
                }
                Ok(image) => {
                    let mut tile = ImageTile::new(
                        result.coord,
                        result.url,
                        image,
                        self.options.cross_origin,
                    );
                    if tile.src() == self.source.url(result.coord) {
                        self.pixelate(&mut tile);
                    }
                    (pending.done)(Ok(tile));
                }
            }
            completed += 1;
        }

        completed
    }

    /// Pixelate a loaded tile in place and memoize the result.
    ///
    /// The cache entry is keyed by the tile's address as it was before the
    /// transform ran; the address is then rewritten to the encoded payload.
    /// Zero-dimension tiles and a zero factor are a no-op passthrough.
    fn pixelate(&mut self, tile: &mut ImageTile) {
        let (width, height) = tile.dimensions();
        let factor = self.options.pixelation_factor;
        if width == 0 || height == 0 || factor == 0 {
            log::debug!(
                "skipping pixelation of degenerate tile {} ({}x{}, factor {})",
                tile.coord(),
                width,
                height,
                factor
            );
            return;
        }

        let scratch = self.scratch.get_or_insert_with(ScratchSurface::new);
        scratch.resize(width, height);
        scratch.set_smoothing(false);

        // Lossy downsample, then stretch the downsampled region back over
        // the full surface. Integer division truncates the intermediate
        // dimensions, clamped to 1x1.
        let down_w = (width / factor).max(1);
        let down_h = (height / factor).max(1);
        scratch.draw_image(tile.image(), down_w, down_h);
        scratch.draw_self(down_w, down_h, width, height);

        let payload: Arc<str> = match scratch.to_data_url() {
            Ok(url) => Arc::from(url),
            Err(e) => {
                log::warn!("failed to encode pixelated tile {}: {}", tile.coord(), e);
                return;
            }
        };
        let pixels = scratch.pixels().clone();

        self.cache.insert(tile.src().to_string(), payload.clone());
        tile.apply_payload(payload.to_string(), pixels);
        self.transform_count += 1;
    }

    /// Attachment hook. Runs the base attachment behavior, then
    /// reinitializes the cache and scratch surface for the new attachment.
    pub fn on_add(&mut self) {
        self.base_attach();
        self.cache.clear();
        self.scratch = None;
    }

    fn base_attach(&mut self) {
        self.attached = true;
        self.generation += 1;
        log::debug!("pixelated layer attached (generation {})", self.generation);
    }

    /// Detachment hook. Cancels outstanding completions without invoking
    /// their callbacks.
    pub fn on_remove(&mut self) {
        self.attached = false;
        let dropped = self.pending.len();
        self.pending.clear();
        if dropped > 0 {
            log::debug!("detached with {} pending tile loads cancelled", dropped);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn options(&self) -> &PixelatedLayerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PixelatedLayerOptions) {
        self.options = options;
    }

    pub fn source(&self) -> &dyn TileSource {
        self.source.as_ref()
    }

    pub fn cache(&self) -> &PixelatedTileCache {
        &self.cache
    }

    /// Number of tile loads issued but not yet completed.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of downscale/upscale passes run since the layer was created.
    pub fn transform_count(&self) -> u64 {
        self.transform_count
    }
}
