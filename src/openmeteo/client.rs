use std::fmt;
use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::openmeteo::error::{Endpoint, OpenMeteoError};
use crate::openmeteo::transport::HttpTransport;
use crate::openmeteo::types::{GeocodeResults, WeatherReport};

const HTTP_OK: u16 = 200;

/// Client for the Open-Meteo geocoding and forecast APIs.
///
/// Holds no mutable state, clones share the underlying transport.
#[derive(Clone)]
pub struct OpenMeteoClient {
    transport: Arc<dyn HttpTransport>,
    geocoding_url: String,
    forecast_url: String,
    timezone: String,
}

impl OpenMeteoClient {
    pub fn new(transport: Arc<dyn HttpTransport>, api: &ApiConfig) -> Self {
        Self {
            transport,
            geocoding_url: api.geocoding_url.clone(),
            forecast_url: api.forecast_url.clone(),
            timezone: api.timezone.clone(),
        }
    }

    /// Resolve a city name to its best geocoding match.
    ///
    /// A successful response without any result is reported as
    /// [`OpenMeteoError::NotFound`], so callers can rely on
    /// [`GeocodeResults::first`] being present.
    pub async fn geocode(&self, city_name: &str) -> Result<GeocodeResults, OpenMeteoError> {
        let endpoint = Endpoint::Geocoding;
        let url = Url::parse_with_params(
            &self.geocoding_url,
            &[("name", city_name), ("count", "1")],
        )
        .map_err(|e| OpenMeteoError::RequestConstruction {
            endpoint,
            message: e.to_string(),
        })?;

        let results: GeocodeResults = self.get_json(endpoint, &url).await?;

        if results.results.is_empty() {
            debug!(city = city_name, "No geocoding match");
            return Err(OpenMeteoError::NotFound {
                query: city_name.to_string(),
            });
        }

        Ok(results)
    }

    /// Fetch the current weather for a coordinate.
    pub async fn fetch_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, OpenMeteoError> {
        let endpoint = Endpoint::Forecast;
        let latitude = format!("{latitude:.4}");
        let longitude = format!("{longitude:.4}");
        let url = Url::parse_with_params(
            &self.forecast_url,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("current_weather", "true"),
                ("timezone", self.timezone.as_str()),
            ],
        )
        .map_err(|e| OpenMeteoError::RequestConstruction {
            endpoint,
            message: e.to_string(),
        })?;

        self.get_json(endpoint, &url).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &Url,
    ) -> Result<T, OpenMeteoError> {
        let response = self
            .transport
            .get(url)
            .await
            .map_err(|source| OpenMeteoError::Transport { endpoint, source })?;

        if response.status != HTTP_OK {
            warn!(%url, status = response.status, "Unexpected status from OpenMeteo");
            return Err(OpenMeteoError::UnexpectedStatus {
                endpoint,
                code: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            warn!(%url, error = %e, "Failed to decode OpenMeteo response");
            OpenMeteoError::Decode {
                endpoint,
                message: e.to_string(),
            }
        })
    }
}

impl fmt::Debug for OpenMeteoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenMeteoClient")
            .field("geocoding_url", &self.geocoding_url)
            .field("forecast_url", &self.forecast_url)
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}
