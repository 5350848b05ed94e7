//! Async commands pattern for side effects.
//!
//! Commands represent async operations that run outside the main event loop.
//! The weather screen requests them through an [`Effect`](crate::weather::Effect),
//! and the App spawns them. Results travel back as messages on the App's channel.

mod fetch_weather;

use async_trait::async_trait;
use color_eyre::Result;
pub use fetch_weather::{FetchWeatherCmd, fetch_weather};

/// Async command that performs side effects.
///
/// Commands are spawned by the App and are never cancelled.
/// They send results back via a channel.
#[async_trait]
pub trait Command: Send + 'static {
    /// Human-readable name for logging.
    /// Include context like the city being fetched.
    fn name(&self) -> String;

    /// Execute the command.
    async fn execute(self: Box<Self>) -> Result<()>;
}
