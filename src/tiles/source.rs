use crate::core::geo::TileCoord;

/// Trait representing anything that can produce the canonical tile URL for a
/// given coordinate.
///
/// The pixelated layer recomputes this URL when a load completes and compares
/// it against the loaded resource's address, so implementations must be
/// deterministic: the same `coord` must always yield the same URL.
pub trait TileSource: Send + Sync {
    /// Build the canonical URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Simple implementation that hits the default OpenStreetMap tile servers.
pub struct OpenStreetMapSource {
    subdomains: Vec<&'static str>,
}

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self { subdomains: vec!["a", "b", "c"] }
    }

    /// Override the subdomain rotation set.
    pub fn with_subdomains(mut self, subdomains: Vec<&'static str>) -> Self {
        self.subdomains = subdomains;
        self
    }
}

impl Default for OpenStreetMapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        if self.subdomains.is_empty() {
            return format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                coord.z, coord.x, coord.y
            );
        }

        // Coordinate-derived rotation keeps the URL deterministic per tile.
        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }
}
