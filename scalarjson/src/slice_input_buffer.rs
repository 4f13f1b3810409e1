// SPDX-License-Identifier: Apache-2.0

/// A read-only cursor over the input being parsed.
///
/// The data is never modified; scanning only moves `pos`. End of input is the
/// end of the slice.
#[derive(Debug, Clone)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// The byte under the cursor, or `None` at end of input.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Moves the cursor forward by `count` bytes, clamped to end of input.
    pub fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// Everything from the cursor to end of input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Skips spaces, tabs, carriage returns and line feeds.
    pub fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            if !is_whitespace(byte) {
                break;
            }
            self.pos += 1;
        }
    }
}

/// JSON insignificant whitespace.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_boundary_behavior() {
        let data = b"abc";
        let mut buffer = SliceInputBuffer::new(data);

        assert_eq!(buffer.current_pos(), 0);
        assert_eq!(buffer.peek(), Some(b'a'));
        buffer.advance(1);
        assert_eq!(buffer.peek(), Some(b'b'));
        assert_eq!(buffer.remaining(), b"bc");
        buffer.advance(2);

        assert_eq!(buffer.current_pos(), 3);
        assert!(buffer.is_at_end());
        assert_eq!(buffer.peek(), None);
        assert_eq!(buffer.remaining(), b"");

        buffer.advance(10);
        assert_eq!(buffer.current_pos(), 3);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut buffer = SliceInputBuffer::new(b" \t\r\n x ");
        buffer.skip_whitespace();
        assert_eq!(buffer.current_pos(), 5);
        assert_eq!(buffer.peek(), Some(b'x'));

        // Idempotent
        buffer.skip_whitespace();
        assert_eq!(buffer.current_pos(), 5);
    }

    #[test]
    fn test_skip_whitespace_stops_at_other_bytes() {
        // Form feed and vertical tab are not JSON whitespace
        let mut buffer = SliceInputBuffer::new(b"\x0c\x0b ");
        buffer.skip_whitespace();
        assert_eq!(buffer.current_pos(), 0);
    }

    #[test]
    fn test_skip_whitespace_to_end() {
        let mut buffer = SliceInputBuffer::new(b"   ");
        buffer.skip_whitespace();
        assert!(buffer.is_at_end());
    }
}
