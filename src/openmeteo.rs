//! Open-Meteo weather service.
//!
//! Resolving a city and reading its weather takes two dependent calls
//! against two different hosts: the geocoding search, then the forecast
//! for the returned coordinates. The API has no combined endpoint, so the
//! client exposes both and leaves sequencing to the caller.

mod client;
mod error;
#[cfg(test)]
pub mod fixtures;
mod transport;
mod types;

pub use client::OpenMeteoClient;
pub use error::{Endpoint, OpenMeteoError};
#[cfg(test)]
pub use transport::stub;
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use types::{CurrentWeatherReading, GeocodeResult, GeocodeResults, WeatherReport, format_local_time};
