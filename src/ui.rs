pub mod components;
pub mod widgets;

use crossterm::event::KeyEvent;

pub use components::{TextInput, TextInputEvent};
pub use widgets::Spinner;

/// Result of handling an input event.
///
/// This enum represents the three possible outcomes of handling an input event:
/// - `Ignored` - The handler didn't recognize or handle this input
/// - `Consumed` - The input was handled but produced no message, the input will not be propagated further
/// - `Event(E)` - The input was handled and produced a message, the input will not be propagated further
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> From<E> for EventResult<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Interactive UI building block.
///
/// Components handle input events and describe themselves as plain text.
/// They know nothing about weather or the network; the owning screen
/// interprets their outputs.
///
/// # Examples
///
/// - `TextInput` - Single-line text input
/// - `Spinner` - Loading indicator animated by ticks
pub trait Component {
    /// The output type produced by this component.
    ///
    /// # Examples
    /// - `TextInput` produces `TextInputEvent` when the user submits
    type Output;

    /// Handle a key event.
    ///
    /// Returns:
    /// - `Ignored` - key was not handled, parent should process it
    /// - `Consumed` - key was handled but produced no output
    /// - `Event(output)` - key was handled and produced an output
    fn handle_key(&mut self, key: KeyEvent) -> EventResult<Self::Output> {
        _ = key;
        EventResult::Ignored
    }

    /// Called on each tick for animations and time-based updates.
    fn handle_tick(&mut self) {}

    /// Current textual representation of the component.
    fn view(&self) -> String;
}
