//! Line-level structure inference
//!
//! The real paragraph and heading metadata of the container is never parsed,
//! so structure is guessed per line: short lines that do not read like the
//! end of a sentence become headings, everything else is body text.

/// Heading text used when nothing could be extracted
pub const FALLBACK_HEADING: &str = "변환 오류";

/// Explanation shown below the fallback heading
pub const FALLBACK_MESSAGE: &str = "텍스트를 추출할 수 없습니다.";

/// One line of structured output
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MarkupLine {
    /// Empty line in the source text
    Blank,
    /// Heading with its Markdown level (1..=6)
    Heading {
        /// Number of `#` markers
        level: u8,
        /// Heading text without markers
        text: String,
    },
    /// Regular paragraph line
    Body {
        /// Line text
        text: String,
    },
}

impl MarkupLine {
    /// Creates a heading line
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        MarkupLine::Heading {
            level,
            text: text.into(),
        }
    }

    /// Creates a body line
    pub fn body(text: impl Into<String>) -> Self {
        MarkupLine::Body { text: text.into() }
    }

    /// Returns true for heading lines
    pub fn is_heading(&self) -> bool {
        matches!(self, MarkupLine::Heading { .. })
    }

    /// Returns true for body lines
    pub fn is_body(&self) -> bool {
        matches!(self, MarkupLine::Body { .. })
    }

    /// Returns the line text, empty for blank lines
    pub fn text(&self) -> &str {
        match self {
            MarkupLine::Blank => "",
            MarkupLine::Heading { text, .. } | MarkupLine::Body { text } => text,
        }
    }
}

/// Thresholds for the heading heuristic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRule {
    /// A heading has strictly fewer characters than this
    pub max_chars: usize,
    /// A heading has at most this many whitespace-separated tokens
    pub max_tokens: usize,
    /// A heading never ends with one of these characters
    pub terminators: Vec<char>,
    /// Markdown level assigned to detected headings
    pub level: u8,
}

impl Default for HeadingRule {
    fn default() -> Self {
        Self {
            max_chars: 50,
            max_tokens: 10,
            terminators: vec!['.', ',', '다'],
            level: 2,
        }
    }
}

impl HeadingRule {
    /// Decides whether an already trimmed, non-empty line is a heading
    ///
    /// Length is counted in `char`s. Extracted text never leaves the Basic
    /// Multilingual Plane, so this equals the UTF-16 length.
    pub fn is_heading(&self, line: &str) -> bool {
        if line.chars().count() >= self.max_chars {
            return false;
        }

        if line
            .chars()
            .next_back()
            .is_some_and(|last| self.terminators.contains(&last))
        {
            return false;
        }

        line.split_whitespace().count() <= self.max_tokens
    }
}

/// Classifies normalized text into markup lines
#[derive(Debug, Clone, Default)]
pub struct Structurer {
    rule: HeadingRule,
}

impl Structurer {
    /// Creates a structurer with the default heading rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a structurer with a custom heading rule
    pub fn with_rule(rule: HeadingRule) -> Self {
        Self { rule }
    }

    /// Returns the heading rule in use
    pub fn rule(&self) -> &HeadingRule {
        &self.rule
    }

    /// Splits text into lines and classifies each one.
    ///
    /// Empty text yields the fallback placeholder instead of an empty list.
    pub fn structure(&self, text: &str) -> Vec<MarkupLine> {
        if text.is_empty() {
            return fallback_lines();
        }

        text.split('\n')
            .map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    MarkupLine::Blank
                } else if self.rule.is_heading(trimmed) {
                    MarkupLine::heading(self.rule.level, trimmed)
                } else {
                    MarkupLine::body(trimmed)
                }
            })
            .collect()
    }
}

/// Lines emitted when extraction produced no text
pub fn fallback_lines() -> Vec<MarkupLine> {
    vec![
        MarkupLine::heading(1, FALLBACK_HEADING),
        MarkupLine::body(FALLBACK_MESSAGE),
    ]
}

/// Returns true if `lines` is exactly the fallback placeholder
pub fn is_fallback(lines: &[MarkupLine]) -> bool {
    lines == fallback_lines().as_slice()
}

/// Renders markup lines as Markdown.
///
/// Headings get `#` markers and are followed by an empty line.
pub fn render(lines: &[MarkupLine]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(lines.len() * 2);

    for line in lines {
        match line {
            MarkupLine::Blank => out.push(String::new()),
            MarkupLine::Heading { level, text } => {
                out.push(format!("{} {}", "#".repeat(usize::from(*level)), text));
                out.push(String::new());
            }
            MarkupLine::Body { text } => out.push(text.clone()),
        }
    }

    out.join("\n")
}

/// Classifies `text` with the default heading rule
pub fn structure(text: &str) -> Vec<MarkupLine> {
    Structurer::new().structure(text)
}
