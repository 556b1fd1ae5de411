//! Numeric braille indication
//!
//! [`Indicator`] is a simple state machine to keep track of the numeric mode of a translation.
//!
//! When writing braille the state changes to [`State::Numeric`] as soon as a digit is encountered
//! and back to [`State::Default`] on any other character. Only the start of a number is indicated,
//! the end of a number is implied by the first cell that is not a digit.
//!
//! When reading braille the numeric indicator cell switches the state to `State::Numeric` and the
//! caller ends it explicitly, see [`Indicator::start`] and [`Indicator::end`].

use crate::translator::indication::Indication;

use log::trace;

/// Possible states for the [`Indicator`] state machine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum State {
    #[default]
    Default,
    Numeric,
}

#[derive(Debug, Clone, Default)]
pub struct Indicator {
    state: State,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_numeric(&self) -> bool {
        self.state == State::Numeric
    }

    /// Enter numeric mode. Returns [`Indication::NumericStart`] if the state changed.
    pub fn start(&mut self) -> Option<Indication> {
        match self.state {
            State::Default => {
                trace!("numeric mode on");
                self.state = State::Numeric;
                Some(Indication::NumericStart)
            }
            State::Numeric => None,
        }
    }

    /// Leave numeric mode. Returns [`Indication::NumericEnd`] if the state changed.
    pub fn end(&mut self) -> Option<Indication> {
        match self.state {
            State::Numeric => {
                trace!("numeric mode off");
                self.state = State::Default;
                Some(Indication::NumericEnd)
            }
            State::Default => None,
        }
    }

    /// The transition method for writing braille.
    ///
    /// Returns an [`Indication`] when transitioning between numeric and non-numeric states or
    /// `None` when no state change occurs.
    pub fn next(&mut self, c: char) -> Option<Indication> {
        if c.is_ascii_digit() {
            self.start()
        } else {
            self.end()
        }
    }
}
