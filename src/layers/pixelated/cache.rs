use crate::prelude::HashMap;
use std::sync::Arc;

/// In-memory cache of pixelated tile payloads, keyed by source tile URL.
///
/// Entries are never evicted or expired: a tile transformed once stays
/// cached for the rest of the attachment, and the whole map is dropped by
/// the lifecycle hook on re-attachment. At most one entry exists per URL.
#[derive(Debug, Default)]
pub struct PixelatedTileCache {
    entries: HashMap<String, Arc<str>>,
}

impl PixelatedTileCache {
    pub fn new() -> Self {
        Self { entries: HashMap::default() }
    }

    /// Get the cached payload for a source URL.
    pub fn get(&self, url: &str) -> Option<Arc<str>> {
        self.entries.get(url).cloned()
    }

    /// Insert a payload keyed by its source URL, replacing any previous
    /// entry for the same URL.
    pub fn insert(&mut self, url: String, payload: Arc<str>) {
        self.entries.insert(url, payload);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the current number of cached payloads.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_basic_operations() {
        let mut cache = PixelatedTileCache::new();
        let url = "https://tiles.test/1/2/3.png";

        assert!(cache.is_empty());
        assert!(cache.get(url).is_none());

        cache.insert(url.to_string(), Arc::from("data:image/png;base64,AAAA"));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(url));
        assert_eq!(&*cache.get(url).unwrap(), "data:image/png;base64,AAAA");

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains(url));
    }

    #[test]
    fn test_cache_single_entry_per_url() {
        let mut cache = PixelatedTileCache::new();
        let url = "https://tiles.test/1/2/3.png";

        cache.insert(url.to_string(), Arc::from("data:image/png;base64,AAAA"));
        cache.insert(url.to_string(), Arc::from("data:image/png;base64,BBBB"));

        assert_eq!(cache.len(), 1);
        assert_eq!(&*cache.get(url).unwrap(), "data:image/png;base64,BBBB");
    }
}
