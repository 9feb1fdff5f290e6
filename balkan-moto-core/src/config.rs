//! Site-wide tunables: map defaults, form timings, home page sizing.
use crate::geo::LatLng;
use crate::map_sync::{FitOptions, SyncOptions};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_SITE_DATA: &str = include_str!("../data/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub initial_center: LatLng,
    pub initial_zoom: u8,
    /// Zoom level used when flying to a selected location.
    pub select_zoom: u8,
    pub fit_padding_px: u32,
    pub fit_max_zoom: u8,
    pub fly_duration_s: f64,
    /// How long to wait for the map library script before giving up.
    pub library_wait_ms: u32,
    pub library_poll_ms: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".to_string(),
            attribution: "&copy; <a href=\"https://carto.com/\">CARTO</a>".to_string(),
            initial_center: LatLng {
                lat: 44.7866,
                lng: 20.4489,
            },
            initial_zoom: 6,
            select_zoom: 14,
            fit_padding_px: 50,
            fit_max_zoom: 12,
            fly_duration_s: 1.0,
            library_wait_ms: 8000,
            library_poll_ms: 100,
        }
    }
}

impl MapConfig {
    #[must_use]
    pub const fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            fit: FitOptions {
                padding_px: self.fit_padding_px,
                max_zoom: self.fit_max_zoom,
            },
            select_zoom: self.select_zoom,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormTimings {
    /// Simulated network latency before a form shows as sent.
    pub submit_delay_ms: u32,
    /// How long the confirmation stays up before the form resets.
    pub display_ms: u32,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            display_ms: 4000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub forms: FormTimings,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_featured_count() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            forms: FormTimings::default(),
            featured_count: default_featured_count(),
            log_level: default_log_level(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration bundled with the site, falling back to compiled-in defaults.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SITE_DATA).unwrap_or_else(|err| {
            log::warn!("bundled site config rejected, using defaults: {err}");
            Self::default_config()
        })
    }

    /// Bundled configuration, parsed on first use and shared afterwards.
    #[must_use]
    pub fn bundled() -> &'static Self {
        static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::load_from_static)
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Parsed `log_level`; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let map = &self.map;
        if map.library_poll_ms == 0 || map.library_poll_ms > map.library_wait_ms {
            return Err(ConfigError::Invalid(format!(
                "library_poll_ms {} must be in 1..={}",
                map.library_poll_ms, map.library_wait_ms
            )));
        }
        if map.fit_max_zoom > map.select_zoom {
            return Err(ConfigError::Invalid(format!(
                "fit_max_zoom {} exceeds select_zoom {}",
                map.fit_max_zoom, map.select_zoom
            )));
        }
        if !map.fly_duration_s.is_finite() || map.fly_duration_s < 0.0 {
            return Err(ConfigError::Invalid("fly_duration_s must be >= 0".into()));
        }
        if self.featured_count == 0 {
            return Err(ConfigError::Invalid("featured_count must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(SiteConfig::load_from_static(), SiteConfig::default_config());
    }

    #[test]
    fn bundled_config_is_parsed_once() {
        let first = SiteConfig::bundled();
        assert!(std::ptr::eq(first, SiteConfig::bundled()));
        assert_eq!(first, &SiteConfig::load_from_static());
    }

    #[test]
    fn missing_sections_take_defaults() {
        let config = SiteConfig::from_json(r#"{"featured_count": 4}"#).unwrap();
        assert_eq!(config.featured_count, 4);
        assert_eq!(config.forms, FormTimings::default());
        assert_eq!(config.map.select_zoom, 14);
    }

    #[test]
    fn rejects_zero_poll_interval() {
        let json = r#"{"map": {"tile_url": "", "attribution": "",
            "initial_center": {"lat": 0.0, "lng": 0.0}, "initial_zoom": 6,
            "select_zoom": 14, "fit_padding_px": 50, "fit_max_zoom": 12,
            "fly_duration_s": 1.0, "library_wait_ms": 8000, "library_poll_ms": 0}}"#;
        assert!(matches!(
            SiteConfig::from_json(json),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn log_level_parses_with_fallback() {
        let mut config = SiteConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".into();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".into();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn sync_options_follow_map_config() {
        let options = MapConfig::default().sync_options();
        assert_eq!(options.select_zoom, 14);
        assert_eq!(options.fit.padding_px, 50);
        assert_eq!(options.fit.max_zoom, 12);
    }
}
