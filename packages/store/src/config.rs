//! # Application configuration — `khidma.toml`
//!
//! Desktop builds read this file from the platform data directory at startup;
//! web builds use [`MarketConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! key_prefix = ""               # prepended to users/currentUser/reviews
//!
//! [carousel]
//! autoplay_interval_ms = 3000   # 0 to disable autoplay
//! ```
//!
//! All structs derive `Default` so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `khidma.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

/// Storage configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Prefix for every storage key. Empty keeps the plain key names.
    #[serde(default)]
    pub key_prefix: String,
}

/// Service details image carousel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Autoplay interval in milliseconds. 0 disables autoplay.
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u32,
}

fn default_autoplay_interval() -> u32 {
    3000
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval(),
        }
    }
}

impl MarketConfig {
    /// Builder method to set the carousel autoplay interval.
    pub fn with_autoplay_interval(mut self, ms: u32) -> Self {
        self.carousel.autoplay_interval_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "khidma.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = MarketConfig::from_toml("").unwrap();
        assert_eq!(config, MarketConfig::default());
        assert_eq!(config.storage.key_prefix, "");
        assert_eq!(config.carousel.autoplay_interval_ms, 3000);
    }

    #[test]
    fn test_partial_sections() {
        let config = MarketConfig::from_toml("[carousel]\nautoplay_interval_ms = 0\n").unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 0);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = MarketConfig::default().with_autoplay_interval(5000);
        config.storage.key_prefix = "demo:".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(MarketConfig::from_toml(&text).unwrap(), config);
    }
}
