use crate::Result;

/// Configuration for [`PixelatedTileLayer`](super::PixelatedTileLayer).
///
/// `pixelation_factor` drives the transform; the remaining fields are the
/// usual tiling-layer options inherited from the host framework.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PixelatedLayerOptions {
    /// Downscale ratio of the pixelation pass. A higher number results in a
    /// coarser, blockier image.
    pub pixelation_factor: u32,
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub attribution: Option<String>,
    pub subdomains: Vec<String>,
    /// Request tiles with an anonymous cross-origin policy.
    pub cross_origin: bool,
}

impl Default for PixelatedLayerOptions {
    fn default() -> Self {
        Self {
            pixelation_factor: 8,
            tile_size: 256,
            min_zoom: 0,
            max_zoom: 18,
            attribution: None,
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            cross_origin: true,
        }
    }
}

impl PixelatedLayerOptions {
    /// Build options from a JSON value, falling back to defaults for absent
    /// fields.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixelation_factor() {
        assert_eq!(PixelatedLayerOptions::default().pixelation_factor, 8);
    }

    #[test]
    fn test_from_value_partial() {
        let options =
            PixelatedLayerOptions::from_value(serde_json::json!({ "pixelation_factor": 16 }))
                .unwrap();
        assert_eq!(options.pixelation_factor, 16);
        assert_eq!(options.tile_size, 256);
        assert!(options.cross_origin);
    }

    #[test]
    fn test_value_roundtrip() {
        let options = PixelatedLayerOptions {
            pixelation_factor: 4,
            attribution: Some("© OpenStreetMap contributors".to_string()),
            ..Default::default()
        };
        let restored =
            PixelatedLayerOptions::from_value(options.to_value().unwrap()).unwrap();
        assert_eq!(restored.pixelation_factor, 4);
        assert_eq!(restored.attribution, options.attribution);
    }
}
