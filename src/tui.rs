//! Terminal UI wrapper.
//!
//! [`Tui`] owns the ratatui terminal, switches it into raw mode on the
//! alternate screen and turns crossterm input plus two timers into a
//! stream of [`Event`]s.

use std::io::Stdout;
use std::time::Duration;

use color_eyre::eyre::{bail, eyre};
use crossterm::cursor;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, EventStream, KeyEvent,
    KeyEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use futures::{FutureExt, StreamExt};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(500);

pub type Backend = CrosstermBackend<Stdout>;

/// Events from the terminal/environment.
#[derive(Clone, Debug)]
pub enum Event {
    /// Terminal initialized
    Init,
    /// Quit requested by the environment (SIGTERM)
    Quit,
    /// Error occurred in the event loop
    Error(String),
    /// Periodic tick (for animations)
    Tick,
    /// Render frame requested
    Render,
    /// Text pasted into the terminal
    Paste(String),
    /// Key pressed
    Key(KeyEvent),
    /// Terminal resized
    Resize(u16, u16),
}

pub struct Tui {
    terminal: Terminal<Backend>,
    task: Option<JoinHandle<()>>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_period: Duration,
    tick_period: Duration,
}

impl Tui {
    /// Create a new TUI rendering `frame_rate` frames and `tick_rate` ticks per second.
    pub fn new(frame_rate: f64, tick_rate: f64) -> color_eyre::Result<Self> {
        let frame_period = period("frame_rate", frame_rate)?;
        let tick_period = period("tick_rate", tick_rate)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal: Terminal::new(Backend::new(std::io::stdout()))?,
            task: None,
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_period,
            tick_period,
        })
    }

    /// Enter raw mode and the alternate screen, then start reading events.
    pub fn enter(&mut self) -> color_eyre::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::Hide
        )?;

        self.cancellation_token = CancellationToken::new();
        self.task = Some(tokio::spawn(Self::event_loop(
            self.event_tx.clone(),
            self.cancellation_token.clone(),
            self.tick_period,
            self.frame_period,
        )));
        Ok(())
    }

    /// Stop reading events and restore the terminal.
    pub fn exit(&mut self) -> color_eyre::Result<()> {
        self.stop()?;
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            crossterm::execute!(
                std::io::stdout(),
                DisableBracketedPaste,
                LeaveAlternateScreen,
                cursor::Show
            )?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> color_eyre::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    fn stop(&mut self) -> color_eyre::Result<()> {
        self.cancellation_token.cancel();
        let Some(task) = self.task.take() else {
            return Ok(());
        };

        let deadline = std::time::Instant::now() + SHUTDOWN_TIMEOUT;
        while !task.is_finished() {
            if std::time::Instant::now() >= deadline {
                task.abort();
                return Err(eyre!("Event loop did not stop in time, aborted it"));
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        Ok(())
    }

    async fn event_loop(
        event_tx: UnboundedSender<Event>,
        cancellation_token: CancellationToken,
        tick_period: Duration,
        frame_period: Duration,
    ) {
        let mut event_stream = EventStream::new();
        let mut tick_interval = interval(tick_period);
        let mut frame_interval = interval(frame_period);

        #[cfg(unix)]
        {
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(mut sigterm) => {
                        sigterm.recv().await;
                        let _ = event_tx.send(Event::Quit);
                    }
                    Err(e) => warn!(error = %e, "Failed to create SIGTERM handler"),
                }
            });
        }

        if event_tx.send(Event::Init).is_err() {
            return;
        }

        loop {
            let event = tokio::select! {
                () = cancellation_token.cancelled() => break,
                _ = tick_interval.tick() => Event::Tick,
                _ = frame_interval.tick() => Event::Render,
                crossterm_event = event_stream.next().fuse() => match crossterm_event {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => Event::Key(key),
                    Some(Ok(CrosstermEvent::Resize(width, height))) => Event::Resize(width, height),
                    Some(Ok(CrosstermEvent::Paste(paste))) => Event::Paste(paste),
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => Event::Error(e.to_string()),
                    None => break,
                },
            };
            if event_tx.send(event).is_err() {
                break;
            }
        }
        cancellation_token.cancel();
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Timer period for a per-second rate.
fn period(key: &str, rate: f64) -> color_eyre::Result<Duration> {
    if !rate.is_finite() || rate <= 0.0 {
        bail!("Invalid {key} {rate}: must be a positive number");
    }
    Duration::try_from_secs_f64(rate.recip()).map_err(|e| eyre!("Invalid {key} {rate}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        assert_eq!(period("tick_rate", 8.0).unwrap(), Duration::from_millis(125));
        assert_eq!(period("frame_rate", 0.5).unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_period_rejects_unusable_rates() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let error = period("tick_rate", rate).unwrap_err();
            assert!(error.to_string().contains("tick_rate"));
        }
    }

    #[test]
    fn test_new_rejects_zero_rate_before_touching_terminal() {
        let Err(error) = Tui::new(30.0, 0.0) else {
            panic!("expected a zero tick rate to be rejected");
        };
        assert!(error.to_string().contains("tick_rate"));
    }
}
