use thiserror::Error;

use crate::openmeteo::transport::TransportError;

/// The Open-Meteo endpoint a request was made against.
///
/// Only used to pick the wording of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Geocoding,
    Forecast,
}

impl Endpoint {
    const fn request_label(self) -> &'static str {
        match self {
            Self::Geocoding => "city geocode",
            Self::Forecast => "weather",
        }
    }

    const fn fetch_label(self) -> &'static str {
        match self {
            Self::Geocoding => "geocoding",
            Self::Forecast => "weather",
        }
    }

    const fn decode_label(self) -> &'static str {
        match self {
            Self::Geocoding => "Geocoding",
            Self::Forecast => "Weather",
        }
    }
}

/// Everything that can go wrong while talking to Open-Meteo.
///
/// None of these are retried. They travel unchanged up to the screen
/// and are shown to the user through their `Display` implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpenMeteoError {
    #[error("Could not create a fetch {} request: {message}", .endpoint.request_label())]
    RequestConstruction { endpoint: Endpoint, message: String },

    #[error("Error fetching {} data from OpenMeteo: {source}", .endpoint.fetch_label())]
    Transport {
        endpoint: Endpoint,
        source: TransportError,
    },

    #[error("Unexpected status code received from OpenMeteo Status={code}")]
    UnexpectedStatus { endpoint: Endpoint, code: u16 },

    #[error("Error while decoding {} JSON response: {message}", .endpoint.decode_label())]
    Decode { endpoint: Endpoint, message: String },

    #[error("Couldn't find a match for {query}, please try again")]
    NotFound { query: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_endpoint_prefix() {
        let geocode = OpenMeteoError::Transport {
            endpoint: Endpoint::Geocoding,
            source: TransportError::new("connection refused"),
        };
        let forecast = OpenMeteoError::Transport {
            endpoint: Endpoint::Forecast,
            source: TransportError::new("connection refused"),
        };

        assert_eq!(
            geocode.to_string(),
            "Error fetching geocoding data from OpenMeteo: connection refused"
        );
        assert_eq!(
            forecast.to_string(),
            "Error fetching weather data from OpenMeteo: connection refused"
        );
    }

    #[test]
    fn test_status_and_not_found_messages() {
        let status = OpenMeteoError::UnexpectedStatus {
            endpoint: Endpoint::Forecast,
            code: 503,
        };
        assert_eq!(
            status.to_string(),
            "Unexpected status code received from OpenMeteo Status=503"
        );

        let not_found = OpenMeteoError::NotFound {
            query: "Atlantis".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "Couldn't find a match for Atlantis, please try again"
        );
    }

    #[test]
    fn test_construction_and_decode_messages() {
        let construction = OpenMeteoError::RequestConstruction {
            endpoint: Endpoint::Geocoding,
            message: "relative URL without a base".to_string(),
        };
        assert_eq!(
            construction.to_string(),
            "Could not create a fetch city geocode request: relative URL without a base"
        );

        let decode = OpenMeteoError::Decode {
            endpoint: Endpoint::Forecast,
            message: "EOF while parsing a value at line 1 column 0".to_string(),
        };
        assert_eq!(
            decode.to_string(),
            "Error while decoding Weather JSON response: EOF while parsing a value at line 1 column 0"
        );
    }
}
