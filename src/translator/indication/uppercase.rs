//! Uppercase braille indication
//!
//! Grade 1 only knows the capital letter indicator which applies to exactly one letter. There are
//! no capitalized words or passages, so [`Indicator`] has no state to carry from one character to
//! the next: every uppercase letter gets its own indication.

use crate::{table, translator::indication::Indication};

#[derive(Debug, Clone, Default)]
pub struct Indicator;

impl Indicator {
    pub fn new() -> Self {
        Self
    }

    /// The transition method for writing braille. Returns [`Indication::Capital`] for every
    /// uppercase letter A-Z.
    pub fn next(&self, c: char) -> Option<Indication> {
        if c.is_ascii_uppercase() {
            Some(Indication::Capital)
        } else {
            None
        }
    }

    /// Resolve the capital indicator when reading braille.
    ///
    /// Returns the uppercase letter if the `next` cell is a letter. Otherwise the indicator has no
    /// effect and `None` is returned.
    pub fn apply(&self, next: Option<char>) -> Option<char> {
        next.and_then(table::symbol)
            .filter(|c| c.is_ascii_lowercase())
            .map(|c| c.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_test() {
        let indicator = Indicator::new();
        assert_eq!(indicator.next('A'), Some(Indication::Capital));
        assert_eq!(indicator.next('Z'), Some(Indication::Capital));
        assert_eq!(indicator.next('a'), None);
        assert_eq!(indicator.next('1'), None);
        assert_eq!(indicator.next('É'), None);
    }

    #[test]
    fn apply_test() {
        let indicator = Indicator::new();
        assert_eq!(indicator.apply(Some('⠓')), Some('H'));
        assert_eq!(indicator.apply(Some('⠲')), None);
        assert_eq!(indicator.apply(Some('⠼')), None);
        assert_eq!(indicator.apply(None), None);
    }
}
