//! Keypad front end: turns key presses into session operations and pushes
//! what should be seen to a [`Screen`].

use log::debug;

use crate::session::Session;
use crate::value::Operator;

/// A keypad button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    History,
}

impl Key {
    /// Maps a character to a key: `0`-`9`, `+ - * /`, `=`, `c` for clear and
    /// `h` for history (case insensitive). Anything else is not a key
    pub fn from_char(c: char) -> Option<Key> {
        if c.is_ascii_digit() {
            return Some(Key::Digit(c));
        }
        if let Some(op) = Operator::from_char(c) {
            return Some(Key::Operator(op));
        }
        match c {
            '=' => Some(Key::Equals),
            'c' | 'C' => Some(Key::Clear),
            'h' | 'H' => Some(Key::History),
            _ => None,
        }
    }
}

/// Rendering target of the keypad
pub trait Screen {
    /// Shows the input buffer, verbatim
    fn show(&mut self, display: &str);
    /// Shows a notification, e.g. the history list
    fn alert(&mut self, message: &str);
}

pub struct Keypad<S: Screen> {
    session: Session,
    screen: S,
}

impl<S: Screen> Keypad<S> {
    pub fn new(screen: S) -> Self {
        Keypad {
            session: Session::new(),
            screen,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(c) => self.session.append_char(c),
            Key::Operator(op) => self.session.append_char(op.as_char()),
            Key::Equals => {
                self.session.evaluate();
            }
            Key::Clear => self.session.clear(),
            Key::History => {
                let text = self.session.view_history().to_string();
                self.screen.alert(&text);
                return;
            }
        }
        debug!("updating view: '{}'", self.session.buffer());
        self.screen.show(self.session.buffer());
    }

    /// Presses the key for every character of `s`; characters that are not
    /// keys are skipped
    pub fn type_str(&mut self, s: &str) {
        for key in s.chars().filter_map(Key::from_char) {
            self.press(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        shown: Vec<String>,
        alerts: Vec<String>,
    }

    impl Screen for Recorder {
        fn show(&mut self, display: &str) {
            self.shown.push(display.to_string());
        }
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
    }

    #[test]
    fn test_keys() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
        assert_eq!(Key::from_char('*'), Some(Key::Operator(Operator::Mul)));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
        assert_eq!(Key::from_char('h'), Some(Key::History));
        assert_eq!(Key::from_char(' '), None);
        assert_eq!(Key::from_char('.'), None);
    }

    #[test]
    fn test_display_after_every_key() {
        let mut pad = Keypad::new(Recorder::default());
        pad.type_str("12+3=");
        assert_eq!(pad.screen().shown, vec!["1", "12", "12+", "12+3", "15"]);
        pad.press(Key::Clear);
        assert_eq!(pad.screen().shown.last().map(String::as_str), Some(""));
        assert!(pad.screen().alerts.is_empty());
    }

    #[test]
    fn test_history_alerts() {
        let mut pad = Keypad::new(Recorder::default());
        pad.press(Key::History);
        pad.type_str("2*4=h");
        assert_eq!(pad.screen().alerts, vec!["History is empty.", "History:\n2*4 = 8"]);
        // history does not redraw the display
        assert_eq!(pad.screen().shown.len(), 4);
    }

    #[test]
    fn test_equals_on_empty() {
        let mut pad = Keypad::new(Recorder::default());
        pad.press(Key::Equals);
        assert_eq!(pad.screen().shown, vec![""]);
        assert_eq!(pad.session().buffer(), "");
    }
}
