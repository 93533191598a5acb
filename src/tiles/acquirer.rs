use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use image::RgbaImage;
use once_cell::sync::Lazy;
use reqwest::blocking::Client;

use crate::core::geo::TileCoord;
use crate::{Error, Result};

/// Shared blocking HTTP client with a custom User-Agent so that public tile
/// servers (e.g. OpenStreetMap) don't reject the request. Building the client
/// once avoids the cost of TLS and connection pool setup for every tile.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("pixeltile/0.1 (+https://github.com/example/pixeltile)")
        .build()
        .expect("failed to build reqwest blocking client")
});

/// One tile load issued by the layer.
#[derive(Debug, Clone)]
pub struct TileFetchRequest {
    pub id: u64,
    pub coord: TileCoord,
    /// The address to load: a canonical tile URL, or an already-encoded
    /// payload substituted from the layer's cache.
    pub url: String,
}

/// Outcome of a tile load, reported back to the layer's completion pump.
#[derive(Debug)]
pub struct TileFetchResult {
    pub id: u64,
    pub coord: TileCoord,
    pub url: String,
    pub image: Result<RgbaImage>,
}

/// The acquirer seam: something that can turn an address into a decoded
/// image resource, asynchronously, and hand results back through a
/// non-blocking drain.
///
/// The layer never blocks on a load; it issues `fetch` and later drains
/// `try_recv_results` from the host's event loop.
pub trait TileAcquirer {
    /// Start loading the requested address. Must not block the caller.
    fn fetch(&self, request: TileFetchRequest);

    /// Drain any completed loads (non-blocking).
    fn try_recv_results(&self) -> Vec<TileFetchResult>;
}

/// Default acquirer: fetches tiles on detached background threads and sends
/// the decoded images back over a channel.
///
/// Addresses beginning with `data:` are decoded inline rather than fetched,
/// which is how cached pre-pixelated payloads get "loaded".
pub struct HttpTileAcquirer {
    result_tx: Sender<TileFetchResult>,
    result_rx: Receiver<TileFetchResult>,
}

impl HttpTileAcquirer {
    pub fn new() -> Self {
        let (result_tx, result_rx) = unbounded();
        Self { result_tx, result_rx }
    }
}

impl Default for HttpTileAcquirer {
    fn default() -> Self {
        Self::new()
    }
}

impl TileAcquirer for HttpTileAcquirer {
    fn fetch(&self, request: TileFetchRequest) {
        let tx = self.result_tx.clone();

        thread::spawn(move || {
            log::debug!("fetch tile {} from {}", request.coord, request.url);
            let image = load_address(&request.url);
            match &image {
                Ok(img) => log::info!(
                    "loaded tile {} ({}x{})",
                    request.coord,
                    img.width(),
                    img.height()
                ),
                Err(e) => log::warn!("tile {} failed to load: {}", request.coord, e),
            }
            let _ = tx.send(TileFetchResult {
                id: request.id,
                coord: request.coord,
                url: request.url,
                image,
            });
        });
    }

    fn try_recv_results(&self) -> Vec<TileFetchResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.result_rx.try_recv() {
            results.push(result);
        }
        results
    }
}

fn load_address(url: &str) -> Result<RgbaImage> {
    if url.starts_with("data:") {
        return decode_data_url(url);
    }

    let resp = HTTP_CLIENT.get(url).send()?;
    if !resp.status().is_success() {
        return Err(Error::TileNotFound);
    }
    let bytes = resp.bytes()?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}

/// Decode a base64 `data:` URL into pixels.
///
/// Only the base64 form is accepted; that is the only form this crate
/// produces as cached payloads.
pub fn decode_data_url(url: &str) -> Result<RgbaImage> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    let mut parts = url.splitn(2, ',');
    let header = parts.next().unwrap_or_default();
    let payload = parts
        .next()
        .ok_or_else(|| Error::ParseError("malformed data URL: missing payload".to_string()))?;

    if !header.ends_with(";base64") {
        return Err(Error::ParseError("malformed data URL: not base64".to_string()));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| Error::ParseError(format!("invalid base64 data URL: {}", e)))?;
    Ok(image::load_from_memory(&bytes)?.to_rgba8())
}
