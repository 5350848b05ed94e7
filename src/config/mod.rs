pub mod loader;

pub use loader::{load, load_from};
use color_eyre::eyre::bail;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

/// Where the weather data comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Passed as the `timezone` parameter of the forecast request.
    pub timezone: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            timezone: "EST".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Ticks per second, drives the spinner animation.
    pub tick_rate: f64,
    /// Frames per second.
    pub frame_rate: f64,
}

impl UiConfig {
    /// Both rates become timer periods, so they must be finite and positive.
    pub fn validate(&self) -> color_eyre::Result<()> {
        for (key, rate) in [("tick_rate", self.tick_rate), ("frame_rate", self.frame_rate)] {
            if !rate.is_finite() || rate <= 0.0 {
                bail!("Invalid [ui] {key} = {rate}: must be a positive number");
            }
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate: 8.0,
            frame_rate: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}
