// GUI configuration module
pub mod theme; // Colour palettes for the dark and light themes

use anyhow::Context;
use serde::Deserialize;
use shared::models::{ConversionMode, CurrencyCode};
use theme::Theme;

// Mirrors assets/config/default.json
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub window: WindowSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub theme: Theme,
    pub default_mode: ConversionMode,
    pub currency: CurrencyCode,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
}

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

impl AppConfig {
    /// Loads the configuration embedded in the binary.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        Self::from_json(DEFAULT_CONFIG).context("embedded default.json is invalid")
    }

    pub fn from_json(raw: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(raw)?;
        if config.window.width < config.window.min_width || config.window.height < config.window.min_height {
            anyhow::bail!(
                "window size {}x{} is below the minimum {}x{}",
                config.window.width,
                config.window.height,
                config.window.min_width,
                config.window.min_height
            );
        }
        Ok(config)
    }
}
