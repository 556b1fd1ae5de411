use log::{debug, trace};

use crate::{
    table::{self, CAPITAL_SIGN, DECIMAL_POINT, HYPHEN, NUMERIC_SIGN},
    translator::{
        ResolvedTranslation, TranslationKind, Translator,
        indication::{numeric, uppercase},
    },
};

/// Reads UEB Grade 1 braille back to text.
///
/// Cells are read one at a time from left to right. The only look-ahead is for the capital
/// indicator which needs to know whether the following cell is a letter. Indicator cells produce
/// no output of their own.
///
/// In numeric mode the cells of a to j read as digits. Numeric mode ends with the decimal point or
/// with any mapped cell that is neither a digit nor a hyphen, spaces included.
#[derive(Debug, Default, Clone, Copy)]
pub struct Decoder;

fn kind_of(symbol: char) -> TranslationKind {
    if symbol.is_ascii_lowercase() {
        TranslationKind::Letter
    } else {
        TranslationKind::Punctuation
    }
}

impl Translator for Decoder {
    fn trace(&self, input: &str) -> Vec<ResolvedTranslation> {
        let cells: Vec<char> = input.chars().collect();
        let mut numeric = numeric::Indicator::new();
        let uppercase = uppercase::Indicator::new();
        let mut translations = Vec::new();

        let mut position = 0;
        while position < cells.len() {
            let cell = cells[position];
            let braille = cell.to_string();
            match cell {
                CAPITAL_SIGN => {
                    if let Some(letter) = uppercase.apply(cells.get(position + 1).copied()) {
                        let braille: String = cells[position..position + 2].iter().collect();
                        translations.push(ResolvedTranslation::new(
                            &braille,
                            &letter.to_string(),
                            position,
                            TranslationKind::Capital,
                        ));
                        position += 2;
                        continue;
                    }
                    trace!("capital indicator without a letter at {position}");
                    translations.push(ResolvedTranslation::new(
                        &braille,
                        "",
                        position,
                        TranslationKind::Capital,
                    ));
                }
                NUMERIC_SIGN => {
                    numeric.start();
                    translations.push(ResolvedTranslation::new(
                        &braille,
                        "",
                        position,
                        TranslationKind::Numeric,
                    ));
                }
                DECIMAL_POINT => {
                    numeric.end();
                    translations.push(ResolvedTranslation::new(
                        &braille,
                        ".",
                        position,
                        TranslationKind::Decimal,
                    ));
                }
                _ => match table::symbol(cell) {
                    Some(symbol) if numeric.is_numeric() => {
                        if let Some(digit) = table::digit_of(cell) {
                            translations.push(ResolvedTranslation::new(
                                &braille,
                                &digit.to_string(),
                                position,
                                TranslationKind::Digit,
                            ));
                        } else if cell == HYPHEN {
                            // number ranges such as 1-10 stay in numeric mode
                            translations.push(ResolvedTranslation::new(
                                &braille,
                                "-",
                                position,
                                TranslationKind::Punctuation,
                            ));
                        } else {
                            numeric.end();
                            translations.push(ResolvedTranslation::new(
                                &braille,
                                &symbol.to_string(),
                                position,
                                kind_of(symbol),
                            ));
                        }
                    }
                    Some(symbol) => {
                        translations.push(ResolvedTranslation::new(
                            &braille,
                            &symbol.to_string(),
                            position,
                            kind_of(symbol),
                        ));
                    }
                    None => {
                        debug!("skipping unmapped cell {cell:?} at {position}");
                        translations.push(ResolvedTranslation::new(
                            &braille,
                            "",
                            position,
                            TranslationKind::Unmapped,
                        ));
                    }
                },
            }
            position += 1;
        }
        translations
    }

    fn finish(&self, output: String) -> String {
        output.trim().to_string()
    }
}
