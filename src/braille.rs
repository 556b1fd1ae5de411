//! Braille cells and their dot notation
//!
//! A cell is a set of raised dots. Cells are stored as an [`EnumSet`] of [`BrailleDot`] and can be
//! converted to and from the Unicode braille patterns block (U+2800) or written in dot notation,
//! i.e. the numbers of the raised dots such as `145` for ⠙. Multiple cells are separated by `-`
//! and the blank cell is written as `0`.

use enumset::{EnumSet, EnumSetType};

/// Start of the Unicode braille patterns block
const BRAILLE_PATTERNS: u32 = 0x2800;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Invalid braille {character:?}")]
    InvalidBraille { character: Option<char> },
}

#[derive(EnumSetType, Debug)]
pub enum BrailleDot {
    Dot1,
    Dot2,
    Dot3,
    Dot4,
    Dot5,
    Dot6,
    Dot7,
    Dot8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrailleChar(EnumSet<BrailleDot>);

impl From<EnumSet<BrailleDot>> for BrailleChar {
    fn from(value: EnumSet<BrailleDot>) -> Self {
        BrailleChar(value)
    }
}

impl BrailleChar {
    /// Map a Unicode braille pattern to the cell it represents.
    ///
    /// Returns `None` if `c` is not in the braille patterns block.
    pub fn from_unicode(c: char) -> Option<Self> {
        let offset = (c as u32).checked_sub(BRAILLE_PATTERNS)?;
        if offset > 0xFF {
            return None;
        }
        Some(
            EnumSet::<BrailleDot>::all()
                .iter()
                .filter(|dot| offset & dot_to_hex(dot) != 0)
                .collect(),
        )
    }

    pub fn to_unicode(&self) -> char {
        let unicode = self
            .0
            .iter()
            .map(|dot| dot_to_hex(&dot))
            .fold(BRAILLE_PATTERNS, |acc, x| acc | x);
        // every combination of the eight dots lies within the braille patterns block
        char::from_u32(unicode).unwrap_or('\u{2800}')
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// The dot notation of this cell, e.g. `145`. The blank cell is `0`.
    pub fn dots(&self) -> String {
        if self.is_blank() {
            "0".to_string()
        } else {
            self.0.iter().map(dot_to_char).collect()
        }
    }
}

impl std::fmt::Display for BrailleChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_unicode())
    }
}

impl FromIterator<BrailleDot> for BrailleChar {
    fn from_iter<T: IntoIterator<Item = BrailleDot>>(iter: T) -> Self {
        BrailleChar(EnumSet::from_iter(iter))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrailleChars(Vec<BrailleChar>);

impl std::ops::Deref for BrailleChars {
    type Target = Vec<BrailleChar>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<BrailleChar>> for BrailleChars {
    fn from(value: Vec<BrailleChar>) -> Self {
        BrailleChars(value)
    }
}

impl BrailleChars {
    /// Read a string of Unicode braille patterns.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for the first character that is not a braille pattern.
    pub fn from_unicode(s: &str) -> Result<Self, ParseError> {
        s.chars()
            .map(|c| {
                BrailleChar::from_unicode(c)
                    .ok_or(ParseError::InvalidBraille { character: Some(c) })
            })
            .collect()
    }

    /// The dot notation of all cells, separated by `-`
    pub fn dots(&self) -> String {
        self.0
            .iter()
            .map(|c| c.dots())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl std::fmt::Display for BrailleChars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0.iter().map(|b| b.to_unicode()).collect::<String>()
        )
    }
}

impl FromIterator<BrailleChar> for BrailleChars {
    fn from_iter<T: IntoIterator<Item = BrailleChar>>(iter: T) -> Self {
        BrailleChars(iter.into_iter().collect())
    }
}

fn char_to_dots(char: char) -> Result<EnumSet<BrailleDot>, ParseError> {
    match char {
        '0' => Ok(EnumSet::empty()),
        '1' => Ok(EnumSet::only(BrailleDot::Dot1)),
        '2' => Ok(EnumSet::only(BrailleDot::Dot2)),
        '3' => Ok(EnumSet::only(BrailleDot::Dot3)),
        '4' => Ok(EnumSet::only(BrailleDot::Dot4)),
        '5' => Ok(EnumSet::only(BrailleDot::Dot5)),
        '6' => Ok(EnumSet::only(BrailleDot::Dot6)),
        '7' => Ok(EnumSet::only(BrailleDot::Dot7)),
        '8' => Ok(EnumSet::only(BrailleDot::Dot8)),
        invalid => Err(ParseError::InvalidBraille {
            character: Some(invalid),
        }),
    }
}

/// Parse a single cell in dot notation, e.g. `145`
pub fn chars_to_dots(chars: &str) -> Result<BrailleChar, ParseError> {
    if chars.is_empty() {
        Err(ParseError::InvalidBraille { character: None })
    } else {
        let mut dots = EnumSet::empty();
        for c in chars.chars() {
            dots |= char_to_dots(c)?;
        }
        Ok(BrailleChar(dots))
    }
}

/// Parse a sequence of cells in dot notation, e.g. `6-125-15`
pub fn braille_chars(chars: &str) -> Result<BrailleChars, ParseError> {
    chars.split('-').map(chars_to_dots).collect()
}

fn dot_to_hex(dot: &BrailleDot) -> u32 {
    match dot {
        BrailleDot::Dot1 => 0x0001,
        BrailleDot::Dot2 => 0x0002,
        BrailleDot::Dot3 => 0x0004,
        BrailleDot::Dot4 => 0x0008,
        BrailleDot::Dot5 => 0x0010,
        BrailleDot::Dot6 => 0x0020,
        BrailleDot::Dot7 => 0x0040,
        BrailleDot::Dot8 => 0x0080,
    }
}

fn dot_to_char(dot: BrailleDot) -> char {
    match dot {
        BrailleDot::Dot1 => '1',
        BrailleDot::Dot2 => '2',
        BrailleDot::Dot3 => '3',
        BrailleDot::Dot4 => '4',
        BrailleDot::Dot5 => '5',
        BrailleDot::Dot6 => '6',
        BrailleDot::Dot7 => '7',
        BrailleDot::Dot8 => '8',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumset::enum_set;

    #[test]
    fn test_chars_to_dots() {
        assert_eq!(
            chars_to_dots("123"),
            Ok(BrailleChar(enum_set!(
                BrailleDot::Dot1 | BrailleDot::Dot2 | BrailleDot::Dot3
            )))
        );
        assert_eq!(chars_to_dots("0"), Ok(BrailleChar(EnumSet::empty())));
        assert_eq!(
            chars_to_dots("19"),
            Err(ParseError::InvalidBraille {
                character: Some('9')
            })
        );
        assert_eq!(
            chars_to_dots(""),
            Err(ParseError::InvalidBraille { character: None })
        );
    }

    #[test]
    fn test_braille_chars() {
        assert_eq!(braille_chars("6-125").unwrap().to_string(), "⠠⠓");
        assert_eq!(braille_chars("1-0-1").unwrap().to_string(), "⠁⠀⠁");
        assert_eq!(
            braille_chars("1-"),
            Err(ParseError::InvalidBraille { character: None })
        );
        assert_eq!(
            braille_chars("-1"),
            Err(ParseError::InvalidBraille { character: None })
        );
        assert_eq!(
            braille_chars(""),
            Err(ParseError::InvalidBraille { character: None })
        );
    }

    #[test]
    fn test_from_unicode() {
        assert_eq!(
            BrailleChar::from_unicode('⠼'),
            Some(BrailleChar(enum_set!(
                BrailleDot::Dot3 | BrailleDot::Dot4 | BrailleDot::Dot5 | BrailleDot::Dot6
            )))
        );
        assert_eq!(BrailleChar::from_unicode('⠀').map(|c| c.is_blank()), Some(true));
        assert_eq!(BrailleChar::from_unicode('a'), None);
        assert_eq!(BrailleChar::from_unicode('\u{2900}'), None);
        assert_eq!(
            BrailleChars::from_unicode("⠁ ⠁"),
            Err(ParseError::InvalidBraille {
                character: Some(' ')
            })
        );
    }

    #[test]
    fn test_dots() {
        assert_eq!(BrailleChars::from_unicode("⠠⠓⠀⠼").unwrap().dots(), "6-125-0-3456");
        assert_eq!(
            BrailleChar(enum_set!(BrailleDot::Dot1 | BrailleDot::Dot8)).to_string(),
            "⢁"
        );
    }

    #[test]
    fn to_unicode_stays_in_braille_block() {
        for code in 0x2800..=0x28FF {
            let c = char::from_u32(code).unwrap();
            assert_eq!(BrailleChar::from_unicode(c).map(|b| b.to_unicode()), Some(c));
        }
        assert_eq!(BrailleChar(EnumSet::empty()).to_unicode(), '⠀');
        assert_eq!(BrailleChar(EnumSet::all()).to_unicode(), '⣿');
    }
}
