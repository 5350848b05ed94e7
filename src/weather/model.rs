use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::openmeteo::{OpenMeteoError, WeatherReport};
use crate::ui::{Component, EventResult, Spinner, TextInput, TextInputEvent};
use crate::weather::message::{Effect, FetchOutcome, Msg};

const HELP_FOOTER: &str = "(Ctrl+C to quit | esc to clear input)";

/// Interaction phase of the weather screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to enter a city.
    Typing,
    /// A fetch is in flight.
    Loading,
    /// Showing the last result or error.
    Settled,
}

/// State of the weather screen.
///
/// [`update`](Self::update) is the only place the state changes; the App
/// calls it sequentially for every message and carries out the returned
/// [`Effect`]. [`view`](Self::view) is a pure function of the state.
#[derive(Debug)]
pub struct WeatherModel {
    phase: Phase,
    input: TextInput,
    spinner: Spinner,
    last_city: String,
    last_country: String,
    last_report: Option<WeatherReport>,
    last_error: Option<OpenMeteoError>,
}

impl WeatherModel {
    pub fn new() -> Self {
        Self {
            phase: Phase::Typing,
            input: TextInput::new(),
            spinner: Spinner::new(),
            last_city: String::new(),
            last_country: String::new(),
            last_report: None,
            last_error: None,
        }
    }

    /// Pre-fill the input buffer without submitting it.
    pub fn with_input(mut self, value: impl Into<String>) -> Self {
        self.input = TextInput::new().with_value(value);
        self
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        self.input.value()
    }

    pub const fn last_error(&self) -> Option<&OpenMeteoError> {
        self.last_error.as_ref()
    }

    /// Cursor location as `(column, row)` within [`view`](Self::view), while typing.
    pub fn cursor_position(&self) -> Option<(usize, usize)> {
        (self.phase == Phase::Typing).then(|| (self.input.cursor_column(), 1))
    }

    pub fn update(&mut self, msg: Msg) -> Effect {
        match msg {
            Msg::Quit => Effect::Quit,
            Msg::Key(key) => self.handle_key(key),
            Msg::Paste(text) => {
                if self.phase == Phase::Typing {
                    self.input.insert_str(&text);
                }
                Effect::None
            }
            Msg::Tick => {
                if self.phase == Phase::Loading {
                    self.spinner.handle_tick();
                }
                Effect::None
            }
            Msg::Fetched(outcome) => self.settle(outcome),
        }
    }

    pub fn view(&self) -> String {
        match self.phase {
            Phase::Typing => format!("Enter City Name: \n{}\n{HELP_FOOTER}", self.input.view()),
            Phase::Loading => format!(
                "Fetching weather for {} please wait... {}",
                self.input.value(),
                self.spinner.view()
            ),
            Phase::Settled => self.settled_view(),
        }
    }

    fn settled_view(&self) -> String {
        if let Some(error) = &self.last_error {
            return format!("{error}\n");
        }
        let Some(report) = &self.last_report else {
            return String::new();
        };

        let reading = &report.reading;
        format!(
            "Weather Information for {}, {} @ {}\nCurrent Temp {:.1}c\nWind {:.1}º @ {:.1}kts\n{HELP_FOOTER}",
            self.last_city,
            self.last_country,
            reading.formatted_time(),
            reading.temperature,
            reading.wind_direction,
            reading.wind_speed,
        )
    }

    fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if is_cancel(&key) {
            return Effect::Quit;
        }

        match self.phase {
            Phase::Typing => self.handle_typing_key(key),
            // Only cancel gets through while a fetch is running
            Phase::Loading => Effect::None,
            Phase::Settled => {
                if is_clear(&key) {
                    self.clear_input();
                }
                Effect::None
            }
        }
    }

    fn handle_typing_key(&mut self, key: KeyEvent) -> Effect {
        if is_clear(&key) {
            self.clear_input();
            return Effect::None;
        }

        match self.input.handle_key(key) {
            EventResult::Event(TextInputEvent::Submitted(value)) => self.submit(&value),
            EventResult::Consumed | EventResult::Ignored => Effect::None,
        }
    }

    fn submit(&mut self, value: &str) -> Effect {
        let city = value.trim();
        if city.is_empty() {
            return Effect::None;
        }

        info!(city, "Fetching weather");
        self.phase = Phase::Loading;
        self.spinner.reset();
        Effect::Fetch(city.to_string())
    }

    /// Back to typing with an empty input. The last report stays in memory
    /// but is not shown while typing.
    fn clear_input(&mut self) {
        self.phase = Phase::Typing;
        self.last_error = None;
        self.input.reset();
    }

    fn settle(&mut self, outcome: FetchOutcome) -> Effect {
        if self.phase != Phase::Loading {
            debug!(phase = ?self.phase, "Ignoring fetch outcome outside of loading");
            return Effect::None;
        }

        self.phase = Phase::Settled;
        match outcome {
            FetchOutcome::Success {
                report,
                city,
                country,
            } => {
                info!(%city, %country, "Weather fetched");
                self.last_report = Some(report);
                self.last_city = city;
                self.last_country = country;
                self.last_error = None;
            }
            FetchOutcome::Failure(error) => {
                warn!(%error, "Weather fetch failed");
                self.last_error = Some(error);
            }
        }
        Effect::None
    }
}

impl Default for WeatherModel {
    fn default() -> Self {
        Self::new()
    }
}

fn is_cancel(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_clear(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
}
