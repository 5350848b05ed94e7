use async_trait::async_trait;
use color_eyre::Result;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::commands::Command;
use crate::openmeteo::{OpenMeteoClient, OpenMeteoError};
use crate::weather::{FetchOutcome, Msg};

/// Resolve a city and fetch its current weather.
///
/// Stops at the first failing call. Always produces exactly one outcome.
pub async fn fetch_weather(client: &OpenMeteoClient, city: &str) -> FetchOutcome {
    let geocoding = match client.geocode(city).await {
        Ok(geocoding) => geocoding,
        Err(error) => return FetchOutcome::Failure(error),
    };

    // geocode() never returns an empty result set
    let Some(place) = geocoding.first() else {
        return FetchOutcome::Failure(OpenMeteoError::NotFound {
            query: city.to_string(),
        });
    };
    debug!(
        id = place.id,
        name = %place.name,
        country = %place.country,
        country_code = %place.country_code,
        timezone = %place.timezone,
        population = place.population,
        elevation = place.elevation,
        latitude = place.latitude,
        longitude = place.longitude,
        generation_time_ms = geocoding.generation_time_ms,
        "Resolved city"
    );

    match client
        .fetch_current_weather(place.latitude, place.longitude)
        .await
    {
        Ok(report) => {
            debug!(
                latitude = report.latitude,
                longitude = report.longitude,
                elevation = report.elevation,
                timezone = %report.timezone,
                timezone_abbreviation = %report.timezone_abbreviation,
                utc_offset_seconds = report.utc_offset_seconds,
                weather_code = report.reading.weather_code,
                is_day = report.reading.is_day,
                generation_time_ms = report.generation_time_ms,
                "Fetched current weather"
            );
            FetchOutcome::Success {
                report,
                city: place.name.clone(),
                country: place.country.clone(),
            }
        }
        Err(error) => FetchOutcome::Failure(error),
    }
}

/// Fetch the weather for a city and report the outcome to the weather screen.
pub struct FetchWeatherCmd {
    client: OpenMeteoClient,
    city: String,
    tx: UnboundedSender<Msg>,
}

impl FetchWeatherCmd {
    pub const fn new(client: OpenMeteoClient, city: String, tx: UnboundedSender<Msg>) -> Self {
        Self { client, city, tx }
    }
}

#[async_trait]
impl Command for FetchWeatherCmd {
    fn name(&self) -> String {
        format!("Fetching weather for {}", self.city)
    }

    async fn execute(self: Box<Self>) -> Result<()> {
        let outcome = fetch_weather(&self.client, &self.city).await;
        // Receiver is gone once the app has exited
        let _ = self.tx.send(Msg::Fetched(outcome));
        Ok(())
    }
}
