//! The weather lookup screen.
//!
//! Elm-style: [`WeatherModel::update`] consumes a [`Msg`] and returns an
//! [`Effect`] for the App to carry out, [`WeatherModel::view`] renders the
//! current state as text.

mod message;
mod model;

pub use message::{Effect, FetchOutcome, Msg};
pub use model::{Phase, WeatherModel};
