//! The UEB Grade 1 symbol table
//!
//! The table is fixed and split by direction. The forward tables map text to braille, the backward
//! tables map braille to text. The punctuation tables are deliberately not inverses of each other:
//! parentheses are written with a dot 5 prefix (⠐⠣, ⠐⠜) but read from the bare cell.
//!
//! Digits reuse the cells of the letters a to j. Which meaning applies is decided by the numeric
//! indicator, see [`crate::translator::indication::numeric`].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Capital letter indicator, dot 6. Applies to the next letter only.
pub const CAPITAL_SIGN: char = '⠠';
/// Numeric indicator, dots 3456
pub const NUMERIC_SIGN: char = '⠼';
/// Decimal point, dots 46. Only meaningful when reading braille.
pub const DECIMAL_POINT: char = '⠨';
/// Hyphen, dots 36. Does not terminate numeric mode when reading braille.
pub const HYPHEN: char = '⠤';
/// The blank cell
pub const BLANK: char = '⠀';

const LETTERS: [(char, char); 26] = [
    ('a', '⠁'),
    ('b', '⠃'),
    ('c', '⠉'),
    ('d', '⠙'),
    ('e', '⠑'),
    ('f', '⠋'),
    ('g', '⠛'),
    ('h', '⠓'),
    ('i', '⠊'),
    ('j', '⠚'),
    ('k', '⠅'),
    ('l', '⠇'),
    ('m', '⠍'),
    ('n', '⠝'),
    ('o', '⠕'),
    ('p', '⠏'),
    ('q', '⠟'),
    ('r', '⠗'),
    ('s', '⠎'),
    ('t', '⠞'),
    ('u', '⠥'),
    ('v', '⠧'),
    ('w', '⠺'),
    ('x', '⠭'),
    ('y', '⠽'),
    ('z', '⠵'),
];

// 1 to 9 and then 0, mapped onto the cells of a to j
const DIGITS: [(char, char); 10] = [
    ('1', '⠁'),
    ('2', '⠃'),
    ('3', '⠉'),
    ('4', '⠙'),
    ('5', '⠑'),
    ('6', '⠋'),
    ('7', '⠛'),
    ('8', '⠓'),
    ('9', '⠊'),
    ('0', '⠚'),
];

const FORWARD_PUNCTUATION: [(char, &str); 12] = [
    (' ', "⠀"),
    ('.', "⠲"),
    (',', "⠂"),
    ('!', "⠖"),
    ('?', "⠦"),
    (':', "⠒"),
    (';', "⠆"),
    ('-', "⠤"),
    ('\'', "⠄"),
    ('"', "⠶"),
    ('(', "⠐⠣"),
    (')', "⠐⠜"),
];

const BACKWARD_PUNCTUATION: [(char, char); 13] = [
    (' ', ' '),
    ('⠀', ' '),
    ('⠲', '.'),
    ('⠂', ','),
    ('⠖', '!'),
    ('⠦', '?'),
    ('⠒', ':'),
    ('⠆', ';'),
    ('⠤', '-'),
    ('⠄', '\''),
    ('⠶', '"'),
    ('⠣', '('),
    ('⠜', ')'),
];

static FORWARD_LETTERS: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| HashMap::from(LETTERS));

static FORWARD_DIGITS: LazyLock<HashMap<char, char>> = LazyLock::new(|| HashMap::from(DIGITS));

static FORWARD_SIGNS: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| HashMap::from(FORWARD_PUNCTUATION));

/// Letters and punctuation. Digits are not in here, they only apply in numeric mode.
static BACKWARD_SYMBOLS: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    LETTERS
        .iter()
        .map(|(letter, cell)| (*cell, *letter))
        .chain(BACKWARD_PUNCTUATION)
        .collect()
});

static BACKWARD_DIGITS: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    DIGITS
        .iter()
        .map(|(digit, cell)| (*cell, *digit))
        .collect()
});

/// The cell of a lowercase letter a-z
pub fn letter(c: char) -> Option<char> {
    FORWARD_LETTERS.get(&c).copied()
}

/// The cell of a digit 0-9, without the numeric indicator
pub fn digit(c: char) -> Option<char> {
    FORWARD_DIGITS.get(&c).copied()
}

/// The cell(s) of a punctuation mark or a space
pub fn punctuation(c: char) -> Option<&'static str> {
    FORWARD_SIGNS.get(&c).copied()
}

/// The letter or punctuation mark a cell stands for outside of numeric mode
pub fn symbol(cell: char) -> Option<char> {
    BACKWARD_SYMBOLS.get(&cell).copied()
}

/// The digit a cell stands for in numeric mode
pub fn digit_of(cell: char) -> Option<char> {
    BACKWARD_DIGITS.get(&cell).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braille::BrailleChar;

    #[test]
    fn letter_dots() {
        let dots = [
            "1", "12", "14", "145", "15", "124", "1245", "125", "24", "245", "13", "123", "134",
            "1345", "135", "1234", "12345", "1235", "234", "2345", "136", "1236", "2456", "1346",
            "13456", "1356",
        ];
        for ((letter, cell), dots) in LETTERS.iter().zip(dots) {
            assert_eq!(
                BrailleChar::from_unicode(*cell).map(|c| c.dots()),
                Some(dots.to_string()),
                "letter {letter}"
            );
        }
    }

    #[test]
    fn letters_are_a_bijection() {
        for c in 'a'..='z' {
            let cell = letter(c).unwrap();
            assert_eq!(symbol(cell), Some(c));
        }
        assert_eq!(BACKWARD_SYMBOLS.values().filter(|c| c.is_ascii_lowercase()).count(), 26);
    }

    #[test]
    fn digits_reuse_first_ten_letters() {
        for (d, l) in "1234567890".chars().zip('a'..='j') {
            assert_eq!(digit(d), letter(l));
            assert_eq!(digit_of(letter(l).unwrap()), Some(d));
        }
        assert_eq!(digit_of('⠅'), None);
    }

    #[test]
    fn parentheses_are_asymmetric() {
        assert_eq!(punctuation('('), Some("⠐⠣"));
        assert_eq!(punctuation(')'), Some("⠐⠜"));
        assert_eq!(symbol('⠣'), Some('('));
        assert_eq!(symbol('⠜'), Some(')'));
        assert_eq!(symbol('⠐'), None);
    }

    #[test]
    fn indicators_are_not_symbols() {
        assert_eq!(symbol(CAPITAL_SIGN), None);
        assert_eq!(symbol(NUMERIC_SIGN), None);
        assert_eq!(symbol(DECIMAL_POINT), None);
        assert_eq!(symbol(HYPHEN), Some('-'));
        assert_eq!(symbol(BLANK), Some(' '));
        assert_eq!(punctuation(' '), Some("⠀"));
    }
}
