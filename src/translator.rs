//! Translation between text and UEB Grade 1 braille
//!
//! There are two independent scanners, one per [`Direction`]: the [`Encoder`] writes braille from
//! text and the [`Decoder`] reads braille back to text. Both implement [`Translator`]. They share
//! the symbol table in [`crate::table`] but keep their scanning state (cursor and numeric mode)
//! local to a single call.
//!
//! Symbols without a mapping are silently skipped. [`Translator::translate_strict`] reports them
//! instead.

use enumset::EnumSetType;

mod decoder;
mod encoder;
pub mod indication;
mod translation;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use translation::{ResolvedTranslation, TranslationKind};

#[derive(EnumSetType, Debug)]
pub enum Direction {
    /// Text to braille
    Forward,
    /// Braille to text
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// A symbol in the input that has no translation
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnmappedSymbol {
    pub symbol: char,
    /// Offset in chars from the start of the input
    pub position: usize,
}

impl std::fmt::Display for UnmappedSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} at {}", self.symbol, self.position)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TranslationError {
    #[error("Unmapped symbols {}", list(.0))]
    Unmapped(Vec<UnmappedSymbol>),
}

fn list(symbols: &[UnmappedSymbol]) -> String {
    symbols
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub trait Translator {
    /// Translate `input` and return every translation step that was applied
    fn trace(&self, input: &str) -> Vec<ResolvedTranslation>;

    /// Post-process the concatenated output of all translation steps
    fn finish(&self, output: String) -> String {
        output
    }

    fn translate(&self, input: &str) -> String {
        let output = self.trace(input).iter().map(|t| t.output()).collect();
        self.finish(output)
    }

    /// Translate `input` but fail if any symbol had to be skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::Unmapped`] listing all symbols without a mapping.
    ///
    /// Backward translation is not the inverse of forward translation here: the encoder writes
    /// parentheses as ⠐⠣ and ⠐⠜ but the decoder has no mapping for ⠐, so strict decoding of
    /// encoded text with parentheses fails with one unmapped ⠐ per parenthesis.
    fn translate_strict(&self, input: &str) -> Result<String, TranslationError> {
        let translations = self.trace(input);
        let unmapped: Vec<UnmappedSymbol> = translations
            .iter()
            .filter(|t| t.is_unmapped())
            .filter_map(|t| {
                t.input().chars().next().map(|symbol| UnmappedSymbol {
                    symbol,
                    position: t.position(),
                })
            })
            .collect();
        if !unmapped.is_empty() {
            return Err(TranslationError::Unmapped(unmapped));
        }
        let output = translations.iter().map(|t| t.output()).collect();
        Ok(self.finish(output))
    }
}

pub fn translate(input: &str, direction: Direction) -> String {
    match direction {
        Direction::Forward => Encoder.translate(input),
        Direction::Backward => Decoder.translate(input),
    }
}

pub fn translate_strict(input: &str, direction: Direction) -> Result<String, TranslationError> {
    match direction {
        Direction::Forward => Encoder.translate_strict(input),
        Direction::Backward => Decoder.translate_strict(input),
    }
}

pub fn trace(input: &str, direction: Direction) -> Vec<ResolvedTranslation> {
    match direction {
        Direction::Forward => Encoder.trace(input),
        Direction::Backward => Decoder.trace(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_test() {
        assert_eq!(translate("Hi 5", Direction::Forward), "⠠⠓⠊⠀⠼⠑");
        assert_eq!(translate("⠠⠓⠊⠀⠼⠑", Direction::Backward), "Hi 5");
    }

    #[test]
    fn strict_forward() {
        assert_eq!(translate_strict("ab", Direction::Forward), Ok("⠁⠃".to_string()));
        assert_eq!(
            translate_strict("a&b#", Direction::Forward),
            Err(TranslationError::Unmapped(vec![
                UnmappedSymbol {
                    symbol: '&',
                    position: 1
                },
                UnmappedSymbol {
                    symbol: '#',
                    position: 3
                },
            ]))
        );
    }

    #[test]
    fn strict_backward() {
        assert_eq!(translate_strict(" ⠁ ", Direction::Backward), Ok("a".to_string()));
        assert_eq!(
            translate_strict("⠐⠣⠁⠜", Direction::Backward),
            Err(TranslationError::Unmapped(vec![UnmappedSymbol {
                symbol: '⠐',
                position: 0
            }]))
        );
    }

    #[test]
    fn strict_backward_rejects_encoded_parentheses() {
        let braille = crate::encode("(a)");
        assert_eq!(braille, "⠐⠣⠁⠐⠜");
        assert_eq!(translate(&braille, Direction::Backward), "(a)");
        assert_eq!(
            translate_strict(&braille, Direction::Backward),
            Err(TranslationError::Unmapped(vec![
                UnmappedSymbol {
                    symbol: '⠐',
                    position: 0
                },
                UnmappedSymbol {
                    symbol: '⠐',
                    position: 3
                },
            ]))
        );
    }

    #[test]
    fn error_message() {
        let error = translate_strict("a%", Direction::Forward).unwrap_err();
        assert_eq!(error.to_string(), "Unmapped symbols '%' at 1");
    }

    #[test]
    fn trace_test() {
        let translations = trace("A1", Direction::Forward);
        let kinds: Vec<_> = translations.iter().map(|t| t.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                TranslationKind::Capital,
                TranslationKind::Letter,
                TranslationKind::Numeric,
                TranslationKind::Digit
            ]
        );
    }
}
