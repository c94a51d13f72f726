//! Host-side configuration: which DOM elements to bind, plus optional RNG seed
//! and log level. Animation tuning stays in [`crate::constants`].

#[cfg(feature = "serde_json")]
use crate::error::GardenError;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GardenConfig {
    /// Id of the `<canvas>` to paint into; it is sized to the window.
    pub canvas_id: String,
    /// Id of the element whose click starts the garden.
    pub trigger_id: String,
    /// Fixed seed for reproducible runs; entropy is used when absent.
    pub seed: Option<u64>,
    /// `log` level name such as `"debug"`; unknown names are ignored.
    pub log_level: Option<String>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            canvas_id: "mainCanvas".to_string(),
            trigger_id: "openButton".to_string(),
            seed: None,
            log_level: None,
        }
    }
}

impl GardenConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GardenError> {
        serde_json::from_str(json).map_err(|e| GardenError::Config(e.to_string()))
    }

    pub fn level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.as_deref().and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_ids() {
        let cfg = GardenConfig::default();
        assert_eq!(cfg.canvas_id, "mainCanvas");
        assert_eq!(cfg.trigger_id, "openButton");
        assert!(cfg.seed.is_none());
        assert!(cfg.level_filter().is_none());
    }

    #[test]
    fn test_level_filter_parsing() {
        let mut cfg = GardenConfig::default();
        cfg.log_level = Some("debug".into());
        assert_eq!(cfg.level_filter(), Some(log::LevelFilter::Debug));
        cfg.log_level = Some("TRACE".into());
        assert_eq!(cfg.level_filter(), Some(log::LevelFilter::Trace));
        cfg.log_level = Some("loud".into());
        assert_eq!(cfg.level_filter(), None);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json_partial() {
        let cfg = GardenConfig::from_json(r#"{"seed": 42, "canvas_id": "garden"}"#).unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.canvas_id, "garden");
        assert_eq!(cfg.trigger_id, "openButton");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn test_from_json_rejects_garbage() {
        let err = GardenConfig::from_json("{seed:").unwrap_err();
        assert!(matches!(err, GardenError::Config(_)));
    }
}
