// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Decoding of the single-character JSON escapes.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Maps the byte after a backslash to the byte it stands for.
    /// Only the eight single-character escapes are known; `\u` is not.
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'\\' => Ok(b'\\'),
            b'"' => Ok(b'"'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            _ => Err(ParseError::InvalidStringEscape),
        }
    }
}
