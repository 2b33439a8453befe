//! Run extraction over raw container bytes
//!
//! The buffer is read as a stream of little-endian 16-bit code units. Each
//! unit stands alone (surrogate pairs are never combined). Consecutive
//! acceptable characters form a run; a run is only emitted once it reaches
//! the minimum length, which filters out byte coincidences in structural
//! records.

use super::charset::{CharClassifier, HangulTextClassifier};

/// Default minimum number of consecutive acceptable characters in a run
pub const DEFAULT_MIN_RUN_LENGTH: usize = 3;

/// Counters collected during a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Number of bytes in the scanned buffer
    pub bytes_scanned: usize,
    /// Number of complete code units read
    pub code_units: usize,
    /// Code units that could not be decoded to a character
    pub undecodable_units: usize,
    /// Characters written to the output
    pub chars_extracted: usize,
    /// Runs that reached the minimum length
    pub runs_emitted: usize,
    /// Streaks dropped as noise
    pub runs_discarded: usize,
}

/// Result of scanning one buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Accepted characters in byte order, before normalization
    pub text: String,
    /// Scan statistics
    pub stats: ExtractionStats,
}

/// Scanner that recovers wide-character text runs from a byte buffer
#[derive(Debug, Clone)]
pub struct RunExtractor<C: CharClassifier = HangulTextClassifier> {
    classifier: C,
    min_run_length: usize,
}

impl RunExtractor<HangulTextClassifier> {
    /// Creates an extractor with the default alphabet and run threshold
    pub fn new() -> Self {
        Self::with_classifier(HangulTextClassifier::new())
    }
}

impl Default for RunExtractor<HangulTextClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharClassifier> RunExtractor<C> {
    /// Creates an extractor using a custom classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            min_run_length: DEFAULT_MIN_RUN_LENGTH,
        }
    }

    /// Sets the minimum run length (values below 1 are raised to 1)
    pub fn min_run_length(mut self, length: usize) -> Self {
        self.min_run_length = length.max(1);
        self
    }

    /// Returns the configured minimum run length
    pub fn run_threshold(&self) -> usize {
        self.min_run_length
    }

    /// Scans `bytes` and returns the extracted text with statistics
    pub fn scan(&self, bytes: &[u8]) -> Extraction {
        let mut state = RunState::new(self.min_run_length, bytes.len());

        for pair in bytes.chunks_exact(2) {
            let unit = u16::from_le_bytes([pair[0], pair[1]]);
            state.stats.code_units += 1;

            match char::from_u32(u32::from(unit)) {
                Some(ch) if self.classifier.is_acceptable(ch) => state.accept(ch),
                Some(_) => state.reject(),
                None => {
                    state.stats.undecodable_units += 1;
                    state.reject();
                }
            }
        }

        let extraction = state.finish();
        log::trace!(
            "scanned {} code units: {} runs emitted, {} discarded",
            extraction.stats.code_units,
            extraction.stats.runs_emitted,
            extraction.stats.runs_discarded
        );
        extraction
    }

    /// Scans `bytes` and returns only the extracted text
    pub fn extract(&self, bytes: &[u8]) -> String {
        self.scan(bytes).text
    }
}

/// Mutable run bookkeeping for a single scan
struct RunState {
    threshold: usize,
    streak: usize,
    /// Pending characters of a streak that has not reached the threshold yet.
    /// Its length always equals `streak` while `streak < threshold`.
    pending: Vec<char>,
    output: String,
    stats: ExtractionStats,
}

impl RunState {
    fn new(threshold: usize, bytes_scanned: usize) -> Self {
        Self {
            threshold,
            streak: 0,
            pending: Vec::with_capacity(threshold),
            output: String::with_capacity(bytes_scanned / 2),
            stats: ExtractionStats {
                bytes_scanned,
                ..Default::default()
            },
        }
    }

    fn accept(&mut self, ch: char) {
        self.streak += 1;

        if self.streak < self.threshold {
            self.pending.push(ch);
            return;
        }

        if self.streak == self.threshold {
            self.pending.push(ch);
            self.flush();
            self.stats.runs_emitted += 1;
            return;
        }

        self.output.push(ch);
        self.stats.chars_extracted += 1;
    }

    fn reject(&mut self) {
        if self.streak > 0 && self.streak < self.threshold {
            self.stats.runs_discarded += 1;
        }
        self.pending.clear();
        self.streak = 0;
    }

    fn flush(&mut self) {
        self.stats.chars_extracted += self.pending.len();
        self.output.extend(self.pending.drain(..));
    }

    fn finish(mut self) -> Extraction {
        if self.streak >= self.threshold {
            self.flush();
        } else if self.streak > 0 {
            self.stats.runs_discarded += 1;
        }

        Extraction {
            text: self.output,
            stats: self.stats,
        }
    }
}

/// Extracts text from `bytes` with the default alphabet and run threshold
pub fn extract(bytes: &[u8]) -> String {
    RunExtractor::new().extract(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    #[test]
    fn test_empty_buffer() {
        let extraction = RunExtractor::new().scan(&[]);
        assert_eq!(extraction.text, "");
        assert_eq!(extraction.stats.code_units, 0);
    }

    #[test]
    fn test_all_zero_buffer() {
        for len in [1, 2, 7, 64, 1023] {
            assert_eq!(extract(&vec![0u8; len]), "", "length {len}");
        }
    }

    #[test]
    fn test_run_below_threshold_is_dropped() {
        let extraction = RunExtractor::new().scan(&utf16le("AB"));
        assert_eq!(extraction.text, "");
        assert_eq!(extraction.stats.runs_discarded, 1);
    }

    #[test]
    fn test_run_at_threshold_is_kept() {
        let extraction = RunExtractor::new().scan(&utf16le("ABC"));
        assert_eq!(extraction.text, "ABC");
        assert_eq!(extraction.stats.runs_emitted, 1);
        assert_eq!(extraction.stats.chars_extracted, 3);
    }

    #[test]
    fn test_hangul_run() {
        assert_eq!(extract(&utf16le("한글 문서")), "한글 문서");
    }

    #[test]
    fn test_noise_between_runs() {
        let mut bytes = utf16le("AB");
        bytes.extend_from_slice(&[0x00, 0x00]);
        bytes.extend(utf16le("제목입니다"));
        bytes.extend_from_slice(&[0x01, 0x00]);
        bytes.extend(utf16le("x"));

        let extraction = RunExtractor::new().scan(&bytes);
        assert_eq!(extraction.text, "제목입니다");
        assert_eq!(extraction.stats.runs_emitted, 1);
        assert_eq!(extraction.stats.runs_discarded, 2);
    }

    #[test]
    fn test_long_runs_are_concatenated_without_separator() {
        let mut bytes = utf16le("abc");
        bytes.extend_from_slice(&[0xFF, 0xFF]);
        bytes.extend(utf16le("def"));
        assert_eq!(extract(&bytes), "abcdef");
    }

    #[test]
    fn test_trailing_odd_byte_ignored() {
        let mut bytes = utf16le("ABC");
        bytes.push(b'D');
        let extraction = RunExtractor::new().scan(&bytes);
        assert_eq!(extraction.text, "ABC");
        assert_eq!(extraction.stats.bytes_scanned, 7);
        assert_eq!(extraction.stats.code_units, 3);
    }

    #[test]
    fn test_line_breaks_are_acceptable() {
        assert_eq!(extract(&utf16le("A\r\nB")), "A\r\nB");
    }

    #[test]
    fn test_surrogates_reset_the_run() {
        // U+1F600 encodes as a surrogate pair; each half is undecodable on its own
        let mut bytes = utf16le("AB");
        bytes.extend(utf16le("😀"));
        bytes.extend(utf16le("C"));

        let extraction = RunExtractor::new().scan(&bytes);
        assert_eq!(extraction.text, "");
        assert_eq!(extraction.stats.undecodable_units, 2);
    }

    #[test]
    fn test_custom_threshold() {
        let extractor = RunExtractor::new().min_run_length(1);
        let mut bytes = utf16le("A");
        bytes.extend_from_slice(&[0x00, 0x00]);
        bytes.extend(utf16le("B"));
        assert_eq!(extractor.extract(&bytes), "AB");

        let strict = RunExtractor::new().min_run_length(5);
        assert_eq!(strict.extract(&utf16le("ABCD")), "");
        assert_eq!(strict.extract(&utf16le("ABCDE")), "ABCDE");
    }

    #[test]
    fn test_zero_threshold_is_clamped() {
        assert_eq!(RunExtractor::new().min_run_length(0).run_threshold(), 1);
    }

    #[test]
    fn test_big_endian_text_is_not_recovered() {
        let bytes: Vec<u8> = "ABC".encode_utf16().flat_map(u16::to_be_bytes).collect();
        assert_eq!(extract(&bytes), "");
    }
}
