//! Canonicalization of extracted text
//!
//! Raw extraction output keeps whatever line endings and control characters
//! the container happened to store. Normalization unifies line endings,
//! strips control characters, squeezes blank lines and horizontal
//! whitespace, then trims the result. The function is total and idempotent.

use regex::Regex;
use std::sync::OnceLock;

static BLANK_LINES: OnceLock<Regex> = OnceLock::new();
static HORIZONTAL_SPACE: OnceLock<Regex> = OnceLock::new();

fn blank_lines() -> &'static Regex {
    BLANK_LINES.get_or_init(|| Regex::new(r"\n{3,}").expect("valid blank line pattern"))
}

fn horizontal_space() -> &'static Regex {
    HORIZONTAL_SPACE.get_or_init(|| Regex::new(r"[ \t]+").expect("valid whitespace pattern"))
}

/// Control characters removed after line endings are unified.
///
/// Covers 0x01..=0x1F except the line feed.
fn is_stripped_control(ch: char) -> bool {
    matches!(ch, '\u{01}'..='\u{1F}') && ch != '\n'
}

/// Normalizes extracted text.
///
/// Passes, in order:
/// 1. `\r\n` and lone `\r` become `\n`
/// 2. control characters 0x01..=0x1F other than `\n` are removed (tabs included)
/// 3. NUL characters are removed
/// 4. three or more consecutive newlines collapse to two
/// 5. runs of spaces/tabs collapse to one space
/// 6. leading and trailing whitespace is trimmed
///
/// Blank lines are squeezed before spaces are, so lines holding only spaces
/// do not count as blank: `"a\n \n \nb"` keeps both of them. The pass order
/// takes precedence over a stricter "one blank line at most" reading.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let stripped: String = unified
        .chars()
        .filter(|&ch| !is_stripped_control(ch))
        .filter(|&ch| ch != '\0')
        .collect();

    let squeezed = blank_lines().replace_all(&stripped, "\n\n");
    let spaced = horizontal_space().replace_all(&squeezed, " ");

    spaced.trim().to_string()
}
