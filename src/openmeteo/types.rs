use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Layout of the `time` field in the `current_weather` block.
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DISPLAY_TIME_FORMAT: &str = "%b %-d, %Y %H:%M";

/// A single match returned by the geocoding search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeResult {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, deserialize_with = "truncated_integer")]
    pub elevation: i64,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub population: i64,
    #[serde(default)]
    pub country: String,
}

/// Envelope of the geocoding search response.
///
/// Open-Meteo omits `results` entirely when nothing matched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeResults {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(rename = "generationtime_ms", default)]
    pub generation_time_ms: f64,
}

impl GeocodeResults {
    pub fn first(&self) -> Option<&GeocodeResult> {
        self.results.first()
    }
}

/// The `current_weather` block of a forecast response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeatherReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Knots.
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
    /// Degrees.
    #[serde(rename = "winddirection")]
    pub wind_direction: f32,
    #[serde(rename = "weathercode")]
    pub weather_code: f32,
    pub is_day: i32,
    /// Local time of the observation, `YYYY-MM-DDTHH:MM`.
    #[serde(rename = "time")]
    pub observed_at_local: String,
}

impl CurrentWeatherReading {
    pub fn formatted_time(&self) -> String {
        format_local_time(&self.observed_at_local)
    }
}

/// Forecast response carrying the current weather for one coordinate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "generationtime_ms")]
    pub generation_time_ms: f64,
    pub utc_offset_seconds: i32,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub elevation: f32,
    #[serde(rename = "current_weather")]
    pub reading: CurrentWeatherReading,
}

/// Render an observation time like `Jun 2, 2023 20:00`.
///
/// Anything that does not parse as `YYYY-MM-DDTHH:MM` becomes `Time error`.
pub fn format_local_time(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, LOCAL_TIME_FORMAT).map_or_else(
        |_| "Time error".to_string(),
        |time| time.format(DISPLAY_TIME_FORMAT).to_string(),
    )
}

#[allow(clippy::cast_possible_truncation)]
fn truncated_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(value.trunc() as i64)
}
