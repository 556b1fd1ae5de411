//! Translate between English text and Unified English Braille, Grade 1 (uncontracted).
//!
//! ```
//! assert_eq!(ueb::encode("Hi 5"), "⠠⠓⠊⠀⠼⠑");
//! assert_eq!(ueb::decode("⠠⠓⠊⠀⠼⠑"), "Hi 5");
//! ```

use translator::{Decoder, Encoder, Translator};

pub mod braille;
pub mod check;
pub mod table;
pub mod translator;
pub mod yaml;

pub use translator::{Direction, TranslationError};

/// Translate text to braille
pub fn encode(text: &str) -> String {
    Encoder.translate(text)
}

/// Translate braille to text. Leading and trailing whitespace is removed.
pub fn decode(braille: &str) -> String {
    Decoder.translate(braille)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let input = "Hello World! I have 10 apples.";
        let braille = "⠠⠓⠑⠇⠇⠕⠀⠠⠺⠕⠗⠇⠙⠖⠀⠠⠊⠀⠓⠁⠧⠑⠀⠼⠁⠚⠀⠁⠏⠏⠇⠑⠎⠲";
        assert_eq!(encode(input), braille);
        assert_eq!(decode(braille), input);
    }
}
