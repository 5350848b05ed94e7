use color_eyre::Result;
use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::cli::Args;
use crate::commands::{Command, FetchWeatherCmd};
use crate::config::UiConfig;
use crate::openmeteo::OpenMeteoClient;
use crate::theme::Theme;
use crate::tui::{Event, Tui};
use crate::weather::{Effect, Msg, Phase, WeatherModel};

/// Owns the weather screen and drives it from terminal events and
/// command results.
///
/// Every message, whether it came from the keyboard or a finished fetch,
/// goes through one channel and is applied to the model in order.
pub struct App {
    model: WeatherModel,
    client: OpenMeteoClient,
    theme: Theme,
    frame_rate: f64,
    tick_rate: f64,
    should_quit: bool,
    msg_tx: UnboundedSender<Msg>,
    msg_rx: UnboundedReceiver<Msg>,
}

impl App {
    pub fn new(client: OpenMeteoClient, theme: Theme, ui: &UiConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            model: WeatherModel::new(),
            client,
            theme,
            frame_rate: ui.frame_rate,
            tick_rate: ui.tick_rate,
            should_quit: false,
            msg_tx,
            msg_rx,
        }
    }

    pub fn apply_cli_args(&mut self, args: &Args) {
        if let Some(city) = &args.city {
            debug!(city, "Pre-filling city from command line");
            self.model = WeatherModel::new().with_input(city.clone());
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(self.frame_rate, self.tick_rate)?;
        tui.enter()?;

        loop {
            self.handle_events(&mut tui).await?;
            self.handle_messages();
            if self.should_quit {
                break;
            }
        }

        info!("Quitting");
        tui.exit()?;
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            self.should_quit = true;
            return Ok(());
        };

        let msg = match event {
            Event::Quit => Msg::Quit,
            Event::Tick => Msg::Tick,
            Event::Key(key) => Msg::Key(key),
            Event::Paste(text) => Msg::Paste(text),
            Event::Init | Event::Render | Event::Resize(..) => {
                self.render(tui)?;
                return Ok(());
            }
            Event::Error(error) => {
                warn!(%error, "Terminal event error");
                return Ok(());
            }
        };

        self.msg_tx.send(msg)?;
        Ok(())
    }

    fn handle_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if !matches!(msg, Msg::Tick) {
                debug!(?msg, "Handling message");
            }
            self.dispatch(msg);
        }
    }

    /// Apply one message to the model and carry out the resulting effect.
    fn dispatch(&mut self, msg: Msg) {
        match self.model.update(msg) {
            Effect::None => {}
            Effect::Quit => self.should_quit = true,
            Effect::Fetch(city) => self.spawn(Box::new(FetchWeatherCmd::new(
                self.client.clone(),
                city,
                self.msg_tx.clone(),
            ))),
        }
    }

    fn spawn(&self, command: Box<dyn Command>) {
        let name = command.name();
        debug!(command = %name, "Spawning command");
        tokio::spawn(async move {
            if let Err(e) = command.execute().await {
                error!(command = %name, error = %e, "Command failed");
            }
        });
    }

    fn render(&self, tui: &mut Tui) -> Result<()> {
        tui.draw(|frame| self.draw(frame))?;
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.model.view();

        let body = match self.model.phase() {
            Phase::Loading => Style::default().fg(self.theme.muted()),
            Phase::Settled if self.model.last_error().is_some() => {
                Style::default().fg(self.theme.error())
            }
            Phase::Typing | Phase::Settled => Style::default().fg(self.theme.text()),
        };
        let headline = if self.model.phase() == Phase::Loading || self.model.last_error().is_some()
        {
            body
        } else {
            Style::default()
                .fg(self.theme.accent())
                .add_modifier(Modifier::BOLD)
        };

        let lines: Vec<Line> = view
            .lines()
            .enumerate()
            .map(|(index, line)| {
                let style = if index == 0 { headline } else { body };
                Line::styled(line.to_string(), style)
            })
            .collect();

        let paragraph =
            Paragraph::new(Text::from(lines)).style(Style::default().bg(self.theme.base()));
        frame.render_widget(paragraph, area);

        if let Some((column, row)) = self.model.cursor_position() {
            let x = area
                .x
                .saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
            let y = area.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
            frame.set_cursor_position((x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::config::ApiConfig;
    use crate::openmeteo::fixtures::{
        FORECAST_URL, GEOCODING_TORONTO, GEOCODING_URL, WEATHER_TORONTO,
    };
    use crate::openmeteo::stub::StubTransport;

    fn app_with(transport: StubTransport) -> App {
        let client = OpenMeteoClient::new(Arc::new(transport), &ApiConfig::default());
        App::new(client, Theme::default(), &UiConfig::default())
    }

    fn key(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn test_lookup_end_to_end() {
        let mut app = app_with(
            StubTransport::new()
                .respond(GEOCODING_URL, 200, GEOCODING_TORONTO)
                .respond(FORECAST_URL, 200, WEATHER_TORONTO),
        );
        for c in "Toronto".chars() {
            app.dispatch(key(KeyCode::Char(c)));
        }

        app.dispatch(key(KeyCode::Enter));
        assert_eq!(app.model.phase(), Phase::Loading);

        let msg = app.msg_rx.recv().await.unwrap();
        app.dispatch(msg);

        assert_eq!(
            app.model.view(),
            "Weather Information for Toronto, Canada @ Jun 2, 2023 21:00\nCurrent Temp 25.4c\nWind 354.0º @ 10.5kts\n(Ctrl+C to quit | esc to clear input)"
        );
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_lookup_failure_end_to_end() {
        let mut app = app_with(StubTransport::new().respond(GEOCODING_URL, 500, ""));
        app.apply_cli_args(&Args {
            city: Some("Toronto".to_string()),
            config: None,
        });

        app.dispatch(key(KeyCode::Enter));
        let msg = app.msg_rx.recv().await.unwrap();
        app.dispatch(msg);

        assert_eq!(
            app.model.view(),
            "Unexpected status code received from OpenMeteo Status=500\n"
        );
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = app_with(StubTransport::new());

        app.dispatch(Msg::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));

        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_handle_messages_drains_queue() {
        let mut app = app_with(StubTransport::new());
        for c in "Rome".chars() {
            app.msg_tx.send(key(KeyCode::Char(c))).unwrap();
        }
        app.msg_tx.send(Msg::Quit).unwrap();

        app.handle_messages();

        assert_eq!(app.model.input(), "Rome");
        assert!(app.should_quit);
    }

    #[test]
    fn test_cli_city_prefills_without_submitting() {
        let mut app = app_with(StubTransport::new());

        app.apply_cli_args(&Args {
            city: Some("Kyoto".to_string()),
            config: None,
        });

        assert_eq!(app.model.input(), "Kyoto");
        assert_eq!(app.model.phase(), Phase::Typing);
        assert!(app.msg_rx.try_recv().is_err());
    }
}
