use std::fmt;

use log::{debug, info};

use crate::parse::eval;
use crate::value::*;

/// Text the input buffer is replaced with after a failed evaluation
pub const ERROR_MARKER: &str = "ERROR";

/// What the input buffer currently holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferState {
    Empty,
    Accumulating,
    Result,
    Error,
}

/// Past evaluations, ready to be shown to the user
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HistoryView<'a> {
    Empty,
    Entries(&'a [String]),
}

impl fmt::Display for HistoryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HistoryView::Empty => write!(f, "History is empty."),
            HistoryView::Entries(entries) => write!(f, "History:\n{}", entries.join("\n")),
        }
    }
}

/// One calculator instance: the text typed so far and the log of
/// successful evaluations
#[derive(Debug)]
pub struct Session {
    buffer: String,
    history: Vec<String>,
    state: BufferState,
}

impl Default for Session {
    fn default() -> Session {
        Session {
            buffer: String::new(),
            history: Vec::new(),
            state: BufferState::Empty,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    /// Current contents of the input buffer, as it should be displayed
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Appends a character to the input buffer. A previous result or error
    /// marker is extended, not replaced
    pub fn append_char(&mut self, c: char) {
        self.buffer.push(c);
        self.state = BufferState::Accumulating;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = BufferState::Empty;
    }

    /// Evaluates the input buffer.
    ///
    /// Returns `None` and changes nothing if the buffer is empty. On success
    /// the expression and its result are added to history and the buffer is
    /// replaced with the result. On failure the buffer is replaced with
    /// [`ERROR_MARKER`] and history stays intact. Division by zero is not a
    /// failure: the infinity or NaN is shown and recorded like any result
    pub fn evaluate(&mut self) -> Option<CalcResult> {
        if self.buffer.is_empty() {
            debug!("nothing to evaluate");
            return None;
        }

        let res = eval(&self.buffer);
        match res {
            Ok(v) => {
                let shown = format_f64(v);
                let entry = format!("{} = {}", self.buffer, shown);
                info!("{}", entry);
                self.history.push(entry);
                self.buffer = shown;
                self.state = BufferState::Result;
            }
            Err(ref e) => {
                info!("'{}' failed: {}", self.buffer, e);
                self.buffer = ERROR_MARKER.to_string();
                self.state = BufferState::Error;
            }
        }
        Some(res)
    }

    pub fn view_history(&self) -> HistoryView<'_> {
        if self.history.is_empty() {
            HistoryView::Empty
        } else {
            HistoryView::Entries(&self.history)
        }
    }
}
