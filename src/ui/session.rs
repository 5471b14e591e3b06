//! A calculator session driven by key names.

use crate::calculator::{Calculator, copy_to_clipboard};
use crate::frame::Frame;
use crate::input::{Action, Keymap};
use tracing::{debug, warn};

/// Result of feeding a batch of keys.
#[derive(Debug, Default)]
pub struct Feed {
    /// One frame per key that reached the calculator.
    pub frames: Vec<Frame>,
    /// A quit key was pressed; keys after it were not processed.
    pub quit: bool,
}

/// Owns the calculator and the key bindings used to drive it.
pub struct Session {
    calculator: Calculator,
    keymap: Keymap,
}

impl Session {
    pub fn new(calculator: Calculator, keymap: Keymap) -> Self {
        Self { calculator, keymap }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn frame(&self) -> Frame {
        self.calculator.frame()
    }

    /// Process keys in order until they run out or a quit key is hit.
    pub fn feed<S: AsRef<str>>(&mut self, keys: &[S]) -> Feed {
        let mut feed = Feed::default();

        for key in keys {
            let key = key.as_ref();
            match self.keymap.resolve(key) {
                Some(Action::Input(input)) => feed.frames.push(self.calculator.apply(input)),
                Some(Action::Copy) => self.copy_display(),
                Some(Action::Quit) => {
                    feed.quit = true;
                    break;
                }
                None => debug!(key, "ignoring unbound key"),
            }
        }

        feed
    }

    fn copy_display(&self) {
        let frame = self.calculator.frame();
        match copy_to_clipboard(frame.text_for_clipboard()) {
            Ok(()) => debug!(text = %frame.display, "copied display to clipboard"),
            Err(err) => warn!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_keys;

    fn session() -> Session {
        Session::new(Calculator::new(), Keymap::default())
    }

    #[test]
    fn test_frame_per_input_key() {
        let mut session = session();
        let feed = session.feed(&parse_keys("5+3<Enter>"));
        let displays: Vec<&str> = feed.frames.iter().map(|f| f.display.as_str()).collect();
        assert_eq!(displays, vec!["5", "5 + ", "5 + 3", "8"]);
        assert!(!feed.quit);
    }

    #[test]
    fn test_unbound_keys_skipped() {
        let mut session = session();
        let feed = session.feed(&parse_keys("4<F5>k2"));
        assert_eq!(feed.frames.len(), 2);
        assert_eq!(session.frame().display, "42");
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut session = session();
        let feed = session.feed(&parse_keys("1q2"));
        assert!(feed.quit);
        assert_eq!(session.frame().display, "1");
    }

    #[test]
    fn test_keys_after_copy_still_processed() {
        // Copying fails without a clipboard; either way the keys that follow
        // must still reach the calculator.
        let mut session = session();
        let feed = session.feed(&parse_keys("5y+3="));
        assert!(!feed.quit);
        assert_eq!(feed.frames.len(), 4);
        assert_eq!(session.frame().display, "8");
    }

    #[test]
    fn test_keyboard_aliases_and_escape() {
        let mut session = session();
        session.feed(&parse_keys("6*7="));
        assert_eq!(session.frame().display, "42");
        session.feed(&parse_keys("<Escape>"));
        assert_eq!(session.frame().display, "0");
    }

    #[test]
    fn test_state_persists_across_feeds() {
        let mut session = session();
        session.feed(&["9", "/"]);
        session.feed(&["3", "Enter"]);
        assert_eq!(session.calculator().display(), "3");
    }
}
