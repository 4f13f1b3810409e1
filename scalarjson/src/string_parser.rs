// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::config::ScratchConfig;
use crate::escape_processor::EscapeProcessor;
use crate::parse_error::ParseError;
use crate::scratch_buffer::{ScratchBuffer, ScratchFrame};
use crate::slice_input_buffer::SliceInputBuffer;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Normal,
    /// A backslash was seen; the next byte selects the escape.
    Escaped,
}

/// Decodes the string literal under the cursor, which must be at the opening quote.
///
/// Runs of unescaped bytes are copied into the scratch buffer as whole spans,
/// each escape is written as its single decoded byte. On success the decoded
/// bytes are returned and the cursor moves past the closing quote. On error the
/// scratch buffer is back at the size it had on entry and the cursor is unmoved.
pub fn parse_string<C: ScratchConfig>(
    input: &mut SliceInputBuffer<'_>,
    scratch: &mut ScratchBuffer<C>,
) -> Result<Vec<u8>, ParseError> {
    debug_assert_eq!(input.peek(), Some(b'"'));
    let bytes = input.remaining();
    let mut frame = scratch.frame();
    let mut state = State::Normal;
    // Skip the opening quote
    let mut pos = 1;
    let mut span_start = pos;

    loop {
        let Some(&ch) = bytes.get(pos) else {
            return Err(match state {
                State::Normal => ParseError::MissingQuotationMark,
                State::Escaped => ParseError::InvalidStringEscape,
            });
        };
        pos += 1;

        match state {
            State::Normal => match ch {
                b'"' => {
                    copy_span(&mut frame, bytes, span_start, pos - 1);
                    input.advance(pos);
                    return Ok(frame.finish());
                }
                b'\\' => {
                    copy_span(&mut frame, bytes, span_start, pos - 1);
                    state = State::Escaped;
                }
                0x00..=0x1F => return Err(ParseError::InvalidStringChar),
                _ => {}
            },
            State::Escaped => {
                frame.push(EscapeProcessor::process_simple_escape(ch)?);
                span_start = pos;
                state = State::Normal;
            }
        }
    }
}

fn copy_span<C: ScratchConfig>(
    frame: &mut ScratchFrame<'_, C>,
    bytes: &[u8],
    start: usize,
    end: usize,
) {
    if let Some(span) = bytes.get(start..end) {
        frame.extend(span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultConfig;

    fn decode(s: &[u8]) -> (Result<Vec<u8>, ParseError>, usize) {
        let mut input = SliceInputBuffer::new(s);
        let mut scratch: ScratchBuffer<DefaultConfig> = ScratchBuffer::new();
        let result = parse_string(&mut input, &mut scratch);
        assert!(scratch.is_empty(), "scratch must be drained");
        (result, input.current_pos())
    }

    #[test]
    fn test_plain_string() {
        let (result, pos) = decode(br#""hello" tail"#);
        assert_eq!(result.unwrap(), b"hello");
        assert_eq!(pos, 7);
    }

    #[test]
    fn test_empty_string() {
        let (result, pos) = decode(br#""""#);
        assert_eq!(result.unwrap(), b"");
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_all_escapes() {
        let (result, _) = decode(br#""\"\\\/\b\f\n\r\t""#);
        assert_eq!(result.unwrap(), b"\"\\/\x08\x0c\n\r\t");
    }

    #[test]
    fn test_escapes_between_spans() {
        let (result, _) = decode(br#""ab\ncd\tef""#);
        assert_eq!(result.unwrap(), b"ab\ncd\tef");
    }

    #[test]
    fn test_non_ascii_bytes_pass_through() {
        let (result, _) = decode("\"h\u{e9}llo \u{1F600}\"".as_bytes());
        assert_eq!(result.unwrap(), "h\u{e9}llo \u{1F600}".as_bytes());
    }

    #[test]
    fn test_missing_quotation_mark() {
        assert_eq!(decode(b"\"").0, Err(ParseError::MissingQuotationMark));
        assert_eq!(decode(b"\"abc").0, Err(ParseError::MissingQuotationMark));
    }

    #[test]
    fn test_trailing_backslash_is_bad_escape() {
        assert_eq!(decode(b"\"abc\\").0, Err(ParseError::InvalidStringEscape));
    }

    #[test]
    fn test_invalid_escape() {
        let (result, pos) = decode(br#""a\qb""#);
        assert_eq!(result, Err(ParseError::InvalidStringEscape));
        assert_eq!(pos, 0);
        assert_eq!(decode(br#""\A""#).0, Err(ParseError::InvalidStringEscape));
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(decode(b"\"\x01\"").0, Err(ParseError::InvalidStringChar));
        assert_eq!(decode(b"\"a\nb\"").0, Err(ParseError::InvalidStringChar));
        assert_eq!(decode(b"\"\x1f\"").0, Err(ParseError::InvalidStringChar));
        assert_eq!(decode(b"\"\x00\"").0, Err(ParseError::InvalidStringChar));
        // 0x7F is not a JSON control character
        assert_eq!(decode(b"\"\x7f\"").0.unwrap(), b"\x7f");
    }

    #[test]
    fn test_failure_after_growth_drains_scratch() {
        let mut scratch: ScratchBuffer<DefaultConfig> = ScratchBuffer::new();
        let mut literal = alloc::vec![b'"'];
        literal.extend(core::iter::repeat(b'x').take(1000));
        literal.extend_from_slice(br#"\n\x""#);

        let mut input = SliceInputBuffer::new(&literal);
        assert_eq!(
            parse_string(&mut input, &mut scratch),
            Err(ParseError::InvalidStringEscape)
        );
        assert!(scratch.is_empty());
        assert!(scratch.capacity() > 1000);
    }

    /// Escapes every byte that needs it, the inverse of the decoder.
    fn encode(raw: &[u8]) -> Vec<u8> {
        let mut out = alloc::vec![b'"'];
        for &b in raw {
            match b {
                b'"' => out.extend_from_slice(b"\\\""),
                b'\\' => out.extend_from_slice(b"\\\\"),
                0x08 => out.extend_from_slice(b"\\b"),
                0x0C => out.extend_from_slice(b"\\f"),
                b'\n' => out.extend_from_slice(b"\\n"),
                b'\r' => out.extend_from_slice(b"\\r"),
                b'\t' => out.extend_from_slice(b"\\t"),
                _ => out.push(b),
            }
        }
        out.push(b'"');
        out
    }

    #[test]
    fn test_decode_inverts_escaping() {
        let samples: [&[u8]; 5] = [
            b"",
            b"plain text",
            b"quote \" and backslash \\ and slash /",
            b"\x08\x0c\n\r\t mixed \t\t",
            b"\\\\\"\"",
        ];
        for raw in samples {
            let encoded = encode(raw);
            let (result, pos) = decode(&encoded);
            assert_eq!(result.unwrap(), raw);
            assert_eq!(pos, encoded.len());
        }
    }
}
