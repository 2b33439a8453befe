//! Character classification for text recovery
//!
//! HWP body text is stored as UTF-16LE inside a binary container. When the
//! container is scanned blindly, every byte pair decodes to *some* character,
//! so the extractor needs a narrow alphabet of characters that plausibly
//! belong to Korean document text. Anything outside that alphabet is treated
//! as structural noise.
//!
//! The ranges below are deliberately ad hoc. They are not derived from the
//! container format and must stay exactly as listed.

/// Classification of a decoded code unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Precomposed Hangul syllable (U+AC00..=U+D7A3)
    HangulSyllable,
    /// Hangul compatibility jamo (U+3131..=U+318E)
    HangulJamo,
    /// Parenthesized/circled Hangul (U+3200..=U+321E, U+3260..=U+327F)
    HangulSymbol,
    /// ASCII letter
    AsciiLetter,
    /// ASCII digit
    AsciiDigit,
    /// ASCII punctuation, symbols and the space character
    AsciiPunctuation,
    /// CJK brackets, ideographic comma/full stop and middle dot
    CjkPunctuation,
    /// Fullwidth ASCII variants (U+FF01..=U+FF5E)
    Fullwidth,
    /// Line feed or carriage return
    LineBreak,
    /// Anything else; never part of extracted text
    Other,
}

impl CharClass {
    /// Whether characters of this class may appear in extracted text
    pub fn is_acceptable(self) -> bool {
        !matches!(self, CharClass::Other)
    }
}

/// Inclusive code point ranges and the class each maps to.
///
/// Order matters only for readability; the ranges do not overlap.
const RANGES: &[(u32, u32, CharClass)] = &[
    (0xAC00, 0xD7A3, CharClass::HangulSyllable),
    (0x3131, 0x318E, CharClass::HangulJamo),
    (0x3200, 0x321E, CharClass::HangulSymbol),
    (0x3260, 0x327F, CharClass::HangulSymbol),
    (0x0041, 0x005A, CharClass::AsciiLetter),
    (0x0061, 0x007A, CharClass::AsciiLetter),
    (0x0030, 0x0039, CharClass::AsciiDigit),
    (0x0020, 0x002F, CharClass::AsciiPunctuation),
    (0x003A, 0x0040, CharClass::AsciiPunctuation),
    (0x005B, 0x0060, CharClass::AsciiPunctuation),
    (0x007B, 0x007E, CharClass::AsciiPunctuation),
    (0x3001, 0x3002, CharClass::CjkPunctuation),
    (0x3008, 0x3011, CharClass::CjkPunctuation),
    (0x00B7, 0x00B7, CharClass::CjkPunctuation),
    (0xFF01, 0xFF5E, CharClass::Fullwidth),
];

/// Pure character classification logic
pub trait CharClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharClass;

    /// Check if the character may be part of an extracted run
    fn is_acceptable(&self, ch: char) -> bool {
        self.classify(ch).is_acceptable()
    }

    /// Check if the character is a Hangul letter of any kind
    fn is_hangul(&self, ch: char) -> bool {
        matches!(
            self.classify(ch),
            CharClass::HangulSyllable | CharClass::HangulJamo | CharClass::HangulSymbol
        )
    }
}

/// Classifier for the printable alphabet of Korean word-processor text
#[derive(Debug, Clone, Copy, Default)]
pub struct HangulTextClassifier;

impl HangulTextClassifier {
    /// Creates a new classifier
    pub fn new() -> Self {
        Self
    }
}

impl CharClassifier for HangulTextClassifier {
    fn classify(&self, ch: char) -> CharClass {
        if ch == '\n' || ch == '\r' {
            return CharClass::LineBreak;
        }

        let code = ch as u32;
        RANGES
            .iter()
            .find(|(start, end, _)| (*start..=*end).contains(&code))
            .map_or(CharClass::Other, |&(_, _, class)| class)
    }
}
