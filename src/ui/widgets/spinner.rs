use throbber_widgets_tui::{BRAILLE_SIX, Set, ThrobberState};

use crate::ui::Component;

/// Loading indicator. Every tick advances it by one frame.
#[derive(Debug, Clone, Default)]
pub struct Spinner {
    throbber_state: ThrobberState,
}

impl Spinner {
    const SET: Set = BRAILLE_SIX;

    pub fn new() -> Self {
        Self::default()
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        self.throbber_state = ThrobberState::default();
    }

    fn frame_index(&self) -> usize {
        let len = Self::SET.symbols.len();
        let index = usize::from(self.throbber_state.index().unsigned_abs());
        index % len
    }
}

impl Component for Spinner {
    type Output = ();

    fn handle_tick(&mut self) {
        self.throbber_state.calc_next();
    }

    fn view(&self) -> String {
        Self::SET.symbols[self.frame_index()].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_frame() {
        let mut spinner = Spinner::new();
        let first = spinner.view();

        spinner.handle_tick();

        assert_ne!(spinner.view(), first);
    }

    #[test]
    fn test_frames_cycle() {
        let mut spinner = Spinner::new();
        let first = spinner.view();

        for _ in 0..BRAILLE_SIX.symbols.len() {
            spinner.handle_tick();
        }

        assert_eq!(spinner.view(), first);
    }

    #[test]
    fn test_reset() {
        let mut spinner = Spinner::new();
        let first = spinner.view();
        spinner.handle_tick();

        spinner.reset();

        assert_eq!(spinner.view(), first);
    }

    #[test]
    fn test_many_ticks_stay_in_range() {
        let mut spinner = Spinner::new();
        for _ in 0..1_000 {
            spinner.handle_tick();
            assert!(!spinner.view().is_empty());
        }
    }
}
