//! Line assembly for the wireless serial stream
//!
//! The Bluetooth module delivers an unframed byte stream. Bytes are collected
//! until a `\n` or `\r` terminator, then handed out as one trimmed line.

use heapless::{String, Vec};

/// Longest accepted line, excluding the terminator
pub const MAX_LINE_LEN: usize = 32;

/// One received line, terminator and surrounding whitespace removed
pub type Line = String<MAX_LINE_LEN>;

/// Errors that can occur while assembling lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// Line exceeded [`MAX_LINE_LEN`]; its bytes were discarded
    Overflow,
    /// Line was not valid UTF-8
    InvalidUtf8,
}

/// Byte-at-a-time line assembler
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    buffer: Vec<u8, MAX_LINE_LEN>,
    /// Set when the current line overflowed; cleared at the next terminator
    overflowed: bool,
}

impl LineParser {
    /// Create a new line parser
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.overflowed = false;
    }

    /// Number of bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(line))` when a terminator completes a non-blank line,
    /// `Ok(None)` when more bytes are needed (or the line was blank), or
    /// `Err` once per malformed line.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Line>, LineError> {
        if byte == b'\n' || byte == b'\r' {
            return self.finish();
        }

        if self.overflowed {
            return Ok(None);
        }

        if self.buffer.push(byte).is_err() {
            self.buffer.clear();
            self.overflowed = true;
        }
        Ok(None)
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete line found, if any.
    /// Remaining bytes after a complete line are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Line>, LineError> {
        for &byte in bytes {
            if let Some(line) = self.feed(byte)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// End the current line without a terminator
    ///
    /// Used when the sender goes quiet mid-line; behaves exactly as if a
    /// terminator had arrived.
    pub fn finish(&mut self) -> Result<Option<Line>, LineError> {
        if self.overflowed {
            self.reset();
            return Err(LineError::Overflow);
        }
        self.take_line()
    }

    fn take_line(&mut self) -> Result<Option<Line>, LineError> {
        let result = match core::str::from_utf8(&self.buffer) {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Ok(None)
                } else {
                    let mut line = Line::new();
                    // Fits: the trimmed text is no longer than the buffer
                    let _ = line.push_str(text);
                    Ok(Some(line))
                }
            }
            Err(_) => Err(LineError::InvalidUtf8),
        };
        self.buffer.clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_newline_terminates_line() {
        let mut parser = LineParser::new();
        let line = parser.feed_bytes(b"P1+\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "P1+");
        assert_eq!(parser.pending(), 0);
    }

    #[test]
    fn test_finish_flushes_unterminated_line() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed_bytes(b" P2+").unwrap(), None);
        assert_eq!(parser.pending(), 4);

        let line = parser.finish().unwrap().unwrap();
        assert_eq!(line.as_str(), "P2+");
        assert_eq!(parser.finish().unwrap(), None);
    }

    #[test]
    fn test_crlf_yields_single_line() {
        let mut parser = LineParser::new();
        let data = b"RESET\r\nP2-\r\n";

        let mut lines: Vec<Line, 4> = Vec::new();
        for &byte in data.iter() {
            if let Some(line) = parser.feed(byte).unwrap() {
                lines.push(line).unwrap();
            }
        }

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].as_str(), "RESET");
        assert_eq!(lines[1].as_str(), "P2-");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut parser = LineParser::new();
        let line = parser.feed_bytes(b"   P2+  \t\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "P2+");
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed_bytes(b"\n\r   \n"), Ok(None));
    }

    #[test]
    fn test_partial_line_waits_for_terminator() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed_bytes(b"RES"), Ok(None));
        assert_eq!(parser.pending(), 3);

        let line = parser.feed_bytes(b"ET\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "RESET");
    }

    #[test]
    fn test_overflow_discards_line_and_recovers() {
        let mut parser = LineParser::new();
        let long = [b'X'; MAX_LINE_LEN + 5];

        assert_eq!(parser.feed_bytes(&long), Ok(None));
        assert_eq!(parser.feed(b'\n'), Err(LineError::Overflow));

        // Next line parses normally
        let line = parser.feed_bytes(b"P1-\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "P1-");
    }

    #[test]
    fn test_exactly_max_length_fits() {
        let mut parser = LineParser::new();
        let full = [b'A'; MAX_LINE_LEN];

        assert_eq!(parser.feed_bytes(&full), Ok(None));
        let line = parser.feed(b'\n').unwrap().unwrap();
        assert_eq!(line.len(), MAX_LINE_LEN);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut parser = LineParser::new();
        assert_eq!(parser.feed_bytes(&[0xFF, 0xFE, b'\n']), Err(LineError::InvalidUtf8));

        let line = parser.feed_bytes(b"P1+\n").unwrap().unwrap();
        assert_eq!(line.as_str(), "P1+");
    }

    proptest! {
        #[test]
        fn prop_printable_lines_survive(text in "[!-~]{1,32}") {
            let mut parser = LineParser::new();
            let mut result = None;
            for &byte in text.as_bytes() {
                prop_assert_eq!(parser.feed(byte), Ok(None));
            }
            if let Ok(line) = parser.feed(b'\n') {
                result = line;
            }
            let line = result.expect("line completed");
            prop_assert_eq!(line.as_str(), text.as_str());
        }
    }
}
