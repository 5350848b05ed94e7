use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;
use crate::openmeteo::{OpenMeteoClient, ReqwestTransport};

mod app;
mod cli;
pub mod commands;
mod config;
pub mod openmeteo;
mod theme;
pub mod tui;
mod ui;
mod weather;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _guard = initialize_logging()?;
    info!("Starting lazyweather");

    let args = cli::Args::parse();

    let config = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    let theme = theme::theme_from_name(&config.theme.name);

    let transport = Arc::new(ReqwestTransport::new()?);
    let client = OpenMeteoClient::new(transport, &config.api);

    let mut app = App::new(client, theme, &config.ui);
    app.apply_cli_args(&args);
    app.run().await?;

    Ok(())
}

fn initialize_logging() -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("lazyweather").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "lazyweather.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}
