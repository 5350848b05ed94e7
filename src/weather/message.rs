//! Messages flowing into the weather screen and effects flowing out of it.
//!
//! # Terminology
//! - **Msg**: everything the screen reacts to, terminal input and async results alike
//! - **Effect**: what the screen asks the App to do after an update

use crossterm::event::KeyEvent;

use crate::openmeteo::{OpenMeteoError, WeatherReport};

/// Input to [`WeatherModel::update`](crate::weather::WeatherModel::update).
#[derive(Debug, Clone)]
pub enum Msg {
    /// Key pressed
    Key(KeyEvent),
    /// Text pasted into the terminal
    Paste(String),
    /// Periodic tick for animations
    Tick,
    /// Quit requested from outside the keyboard (e.g. SIGTERM)
    Quit,
    /// A weather fetch finished
    Fetched(FetchOutcome),
}

/// Consolidated result of one fetch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success {
        report: WeatherReport,
        city: String,
        country: String,
    },
    Failure(OpenMeteoError),
}

/// Follow-up work requested by an update.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Start fetching the weather for this (trimmed) city name.
    Fetch(String),
}
