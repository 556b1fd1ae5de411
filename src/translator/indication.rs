//! Braille indication
//!
//! Braille indicators are cells which are inserted into the braille text to indicate such things
//! as capitalization or numbers. They have no counterpart in the text.
//!
//! Indication is handled with the help of small state machines that keep track in which state a
//! translation currently is. When given the next character to translate, they keep track of state
//! changes and notify the caller whether an indication is required by optionally returning an
//! [`Indication`].
//!
//! * [`numeric::Indicator`]: knows whether the translation is in numeric mode
//! * [`uppercase::Indicator`]: knows whether a letter needs the capital indicator

pub mod numeric;
pub mod uppercase;

/// Possible indication events that the indicator state machines support
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Indication {
    NumericStart,
    NumericEnd,
    Capital,
}
