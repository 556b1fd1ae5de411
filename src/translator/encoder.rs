use log::debug;

use crate::{
    table::{self, CAPITAL_SIGN, NUMERIC_SIGN},
    translator::{
        ResolvedTranslation, TranslationKind, Translator,
        indication::{Indication, numeric, uppercase},
    },
};

/// Writes UEB Grade 1 braille from text.
///
/// A numeric indicator is inserted once ahead of every run of digits and a capital indicator ahead
/// of every uppercase letter. Numeric mode is never explicitly terminated, the first character that
/// is not a digit ends it implicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct Encoder;

/// Directional double quotes are written as the generic double quote
fn normalize(c: char) -> char {
    match c {
        '“' | '”' => '"',
        c => c,
    }
}

impl Translator for Encoder {
    fn trace(&self, input: &str) -> Vec<ResolvedTranslation> {
        let mut numeric = numeric::Indicator::new();
        let uppercase = uppercase::Indicator::new();
        let mut translations = Vec::new();

        for (position, c) in input.chars().map(normalize).enumerate() {
            let text = c.to_string();
            if numeric.next(c) == Some(Indication::NumericStart) {
                translations.push(ResolvedTranslation::new(
                    "",
                    &NUMERIC_SIGN.to_string(),
                    position,
                    TranslationKind::Numeric,
                ));
            }
            if let Some(cell) = table::digit(c) {
                translations.push(ResolvedTranslation::new(
                    &text,
                    &cell.to_string(),
                    position,
                    TranslationKind::Digit,
                ));
            } else if let Some(cells) = table::punctuation(c) {
                translations.push(ResolvedTranslation::new(
                    &text,
                    cells,
                    position,
                    TranslationKind::Punctuation,
                ));
            } else if let (Some(Indication::Capital), Some(cell)) =
                (uppercase.next(c), table::letter(c.to_ascii_lowercase()))
            {
                translations.push(ResolvedTranslation::new(
                    "",
                    &CAPITAL_SIGN.to_string(),
                    position,
                    TranslationKind::Capital,
                ));
                translations.push(ResolvedTranslation::new(
                    &text,
                    &cell.to_string(),
                    position,
                    TranslationKind::Letter,
                ));
            } else if let Some(cell) = table::letter(c) {
                translations.push(ResolvedTranslation::new(
                    &text,
                    &cell.to_string(),
                    position,
                    TranslationKind::Letter,
                ));
            } else {
                debug!("skipping unmapped character {c:?} at {position}");
                translations.push(ResolvedTranslation::new(
                    &text,
                    "",
                    position,
                    TranslationKind::Unmapped,
                ));
            }
        }
        translations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(Encoder.translate("abc"), "⠁⠃⠉");
        assert_eq!(Encoder.translate("Abc"), "⠠⠁⠃⠉");
        assert_eq!(Encoder.translate("ABC"), "⠠⠁⠠⠃⠠⠉");
    }

    #[test]
    fn numbers() {
        assert_eq!(Encoder.translate("123"), "⠼⠁⠃⠉");
        assert_eq!(Encoder.translate("1 2"), "⠼⠁⠀⠼⠃");
        assert_eq!(Encoder.translate("3rd"), "⠼⠉⠗⠙");
        assert_eq!(Encoder.translate("1.5"), "⠼⠁⠲⠼⠑");
        assert_eq!(Encoder.translate("1-2"), "⠼⠁⠤⠼⠃");
        assert_eq!(Encoder.translate("1234567890"), "⠼⠁⠃⠉⠙⠑⠋⠛⠓⠊⠚");
    }

    #[test]
    fn punctuation() {
        assert_eq!(Encoder.translate("(a)"), "⠐⠣⠁⠐⠜");
        assert_eq!(Encoder.translate("don't"), "⠙⠕⠝⠄⠞");
        assert_eq!(Encoder.translate("a, b; c: d? e!"), "⠁⠂⠀⠃⠆⠀⠉⠒⠀⠙⠦⠀⠑⠖");
    }

    #[test]
    fn quotes() {
        assert_eq!(Encoder.translate("\"a\""), "⠶⠁⠶");
        assert_eq!(Encoder.translate("“a”"), "⠶⠁⠶");
    }

    #[test]
    fn unmapped() {
        assert_eq!(Encoder.translate("a&b"), "⠁⠃");
        assert_eq!(Encoder.translate("é"), "");
        assert_eq!(Encoder.translate(""), "");
        // a skipped character still ends numeric mode
        assert_eq!(Encoder.translate("1%2"), "⠼⠁⠼⠃");
    }

    #[test]
    fn no_trimming() {
        assert_eq!(Encoder.translate(" a "), "⠀⠁⠀");
    }

    #[test]
    fn hello_world() {
        assert_eq!(
            Encoder.translate("Hello World! This is a test with 123."),
            "⠠⠓⠑⠇⠇⠕⠀⠠⠺⠕⠗⠇⠙⠖⠀⠠⠞⠓⠊⠎⠀⠊⠎⠀⠁⠀⠞⠑⠎⠞⠀⠺⠊⠞⠓⠀⠼⠁⠃⠉⠲"
        );
    }

    #[test]
    fn trace_indicators_have_no_input() {
        let translations = Encoder.trace("B2");
        assert_eq!(
            translations,
            vec![
                ResolvedTranslation::new("", "⠠", 0, TranslationKind::Capital),
                ResolvedTranslation::new("B", "⠃", 0, TranslationKind::Letter),
                ResolvedTranslation::new("", "⠼", 1, TranslationKind::Numeric),
                ResolvedTranslation::new("2", "⠃", 1, TranslationKind::Digit),
            ]
        );
    }
}
