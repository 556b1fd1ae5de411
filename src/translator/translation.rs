/// What a single step of a translation did.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TranslationKind {
    /// A lowercase letter
    Letter,
    /// An uppercase letter, or the capital indicator inserted ahead of one
    Capital,
    /// A digit in numeric mode
    Digit,
    /// The numeric indicator
    Numeric,
    /// The decimal point, which also ends numeric mode
    Decimal,
    /// A punctuation mark or a space
    Punctuation,
    /// A symbol that has no mapping and was skipped
    Unmapped,
}

impl std::fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationKind::Letter => write!(f, "letter"),
            TranslationKind::Capital => write!(f, "capital"),
            TranslationKind::Digit => write!(f, "digit"),
            TranslationKind::Numeric => write!(f, "numeric"),
            TranslationKind::Decimal => write!(f, "decimal"),
            TranslationKind::Punctuation => write!(f, "punctuation"),
            TranslationKind::Unmapped => write!(f, "unmapped"),
        }
    }
}

/// A translation step as it was applied to the input.
///
/// `input` is empty for indicators that are inserted into the braille without a counterpart in
/// the text. `output` is empty for indicators that are consumed when reading braille and for
/// skipped symbols.
#[derive(Debug, PartialEq, Clone)]
pub struct ResolvedTranslation {
    input: String,
    output: String,
    /// Offset in chars of `input` from the start of the translated string
    position: usize,
    kind: TranslationKind,
}

impl ResolvedTranslation {
    pub fn new(input: &str, output: &str, position: usize, kind: TranslationKind) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            position,
            kind,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn kind(&self) -> TranslationKind {
        self.kind
    }

    pub fn is_unmapped(&self) -> bool {
        self.kind == TranslationKind::Unmapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped() {
        let t = ResolvedTranslation::new("⠐", "", 3, TranslationKind::Unmapped);
        assert!(t.is_unmapped());
        assert_eq!(t.position(), 3);
        assert_eq!(t.output(), "");
    }

    #[test]
    fn kind_display() {
        assert_eq!(TranslationKind::Numeric.to_string(), "numeric");
        assert_eq!(TranslationKind::Punctuation.to_string(), "punctuation");
    }
}
