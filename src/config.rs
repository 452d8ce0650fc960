use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::Dimensions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub start_location: String,
    #[serde(default = "default_true")]
    pub image_preview: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub screen_width: Option<u32>,
    #[serde(default)]
    pub screen_height: Option<u32>,
    #[serde(default = "default_thumbnail_scale")]
    pub thumbnail_scale: f64,
    #[serde(default = "default_preload_delay_ms")]
    pub preload_delay_ms: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_image_cache_entries")]
    pub image_cache_entries: usize,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_thumbnail_scale() -> f64 {
    0.15
}

fn default_preload_delay_ms() -> u64 {
    3000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_image_cache_entries() -> usize {
    32
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            start_location: String::new(),
            image_preview: true,
            image_protocol: default_image_protocol(),
            screen_width: None,
            screen_height: None,
            thumbnail_scale: default_thumbnail_scale(),
            preload_delay_ms: default_preload_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text).context("Invalid config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    fn validate(&self) -> Result<()> {
        if !(self.thumbnail_scale > 0.0 && self.thumbnail_scale <= 1.0) {
            anyhow::bail!(
                "thumbnail_scale must be in (0, 1], got {}",
                self.thumbnail_scale
            );
        }
        if self.image_cache_entries == 0 {
            anyhow::bail!("image_cache_entries must be at least 1");
        }
        Ok(())
    }

    pub fn preload_delay(&self) -> Duration {
        Duration::from_millis(self.preload_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Screen size from the config, if both sides are set
    pub fn screen_override(&self) -> Option<Dimensions> {
        match (self.screen_width, self.screen_height) {
            (Some(width), Some(height)) => Some(Dimensions::new(width, height)),
            _ => None,
        }
    }
}

/// Determine the config file path with fallback logic
///
/// Order: explicit `--config` path (must exist), then
/// `<config_dir>/albumtui/config.yaml`, then `./config.yaml`. `None` means
/// built-in defaults are used.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let path = PathBuf::from(path);
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(Some(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("albumtui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.thumbnail_scale, 0.15);
        assert_eq!(config.preload_delay(), Duration::from_secs(3));
        assert!(config.image_preview);
        assert!(config.screen_override().is_none());
    }

    #[test]
    fn test_yaml_overrides() {
        let yaml = "base_url: http://photos.lan/gallery\n\
                    start_location: 2020/trip/\n\
                    screen_width: 1920\n\
                    screen_height: 1080\n\
                    preload_delay_ms: 500\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.base_url, "http://photos.lan/gallery");
        assert_eq!(config.start_location, "2020/trip/");
        assert_eq!(config.screen_override(), Some(Dimensions::new(1920, 1080)));
        assert_eq!(config.preload_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_half_screen_override_is_ignored() {
        let config = Config::from_yaml("screen_width: 800").unwrap();
        assert!(config.screen_override().is_none());
    }

    #[test]
    fn test_invalid_thumbnail_scale_rejected() {
        assert!(Config::from_yaml("thumbnail_scale: 0").is_err());
        assert!(Config::from_yaml("thumbnail_scale: 1.5").is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        assert!(find_config_path(Some("/definitely/not/here.yaml")).is_err());
    }
}
