// SPDX-License-Identifier: Apache-2.0

use crate::config::{DefaultConfig, ScratchConfig};
use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::string_parser::parse_string;
use crate::value::Value;

/// A reusable parser for scalar JSON documents held in a slice.
///
/// The parser owns the scratch buffer that strings are decoded into. Between
/// calls the buffer is always empty, but its allocation is kept, so parsing
/// many documents with one `SliceParser` allocates scratch space only once.
/// Use [`release_scratch`](Self::release_scratch) to give it back.
///
/// Generic over [`ScratchConfig`] for the initial scratch capacity.
pub struct SliceParser<C: ScratchConfig = DefaultConfig> {
    scratch: ScratchBuffer<C>,
}

impl SliceParser<DefaultConfig> {
    /// Creates a new parser with the default configuration.
    ///
    /// # Example
    /// ```
    /// use scalarjson::{SliceParser, Value};
    /// let mut parser = SliceParser::new();
    /// assert_eq!(parser.parse(" true "), Ok(Value::True));
    /// ```
    pub fn new() -> Self {
        Self::with_config()
    }
}

impl Default for SliceParser<DefaultConfig> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ScratchConfig> SliceParser<C> {
    /// Creates a new parser with a custom [`ScratchConfig`].
    pub fn with_config() -> Self {
        Self {
            scratch: ScratchBuffer::new(),
        }
    }

    /// Parses a complete document and returns its value.
    pub fn parse(&mut self, input: &str) -> Result<Value, ParseError> {
        self.parse_slice(input.as_bytes())
    }

    /// Parses a complete document from raw bytes and returns its value.
    pub fn parse_slice(&mut self, input: &[u8]) -> Result<Value, ParseError> {
        let mut value = Value::Null;
        self.parse_slice_into(&mut value, input)?;
        Ok(value)
    }

    /// Parses a complete document into `value`.
    ///
    /// `value` is reset to `Null` before parsing starts and stays `Null` if
    /// parsing fails; any payload it held is dropped either way.
    ///
    /// # Example
    /// ```
    /// use scalarjson::{ParseError, SliceParser, Value, ValueType};
    /// let mut parser = SliceParser::new();
    /// let mut value = Value::from("old");
    ///
    /// assert_eq!(parser.parse_into(&mut value, r#""a\tb""#), Ok(()));
    /// assert_eq!(value.get_string(), b"a\tb");
    ///
    /// assert_eq!(
    ///     parser.parse_into(&mut value, "nul"),
    ///     Err(ParseError::InvalidValue)
    /// );
    /// assert_eq!(value.get_type(), ValueType::Null);
    /// ```
    pub fn parse_into(&mut self, value: &mut Value, input: &str) -> Result<(), ParseError> {
        self.parse_slice_into(value, input.as_bytes())
    }

    /// Parses a complete document from raw bytes into `value`.
    ///
    /// Bytes at or above 0x80 inside strings are copied as they are, so the
    /// result may not be UTF-8 if the input was not.
    pub fn parse_slice_into(&mut self, value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
        value.release();
        let mut input = SliceInputBuffer::new(input);
        let result = self.parse_document(&mut input);
        debug_assert!(self.scratch.is_empty(), "scratch buffer leaked bytes");
        match result {
            Ok(parsed) => {
                *value = parsed;
                Ok(())
            }
            Err(e) => {
                log::debug!("rejected input at byte {}: {}", input.current_pos(), e);
                Err(e)
            }
        }
    }

    /// Bytes currently held in the scratch buffer. Always zero between calls.
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    /// Capacity the scratch buffer has grown to so far.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }

    /// Frees the scratch allocation. The next string decoded allocates it again.
    pub fn release_scratch(&mut self) {
        self.scratch.release();
    }

    fn parse_document(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        input.skip_whitespace();
        let value = self.parse_value(input)?;
        input.skip_whitespace();
        if !input.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    /// Dispatches on the first byte of the token without consuming it.
    /// Anything that does not start another kind of value is handed to the
    /// number parser, which rejects it.
    fn parse_value(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        match input.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b't') => parse_literal(input, b"true", Value::True),
            Some(b'f') => parse_literal(input, b"false", Value::False),
            Some(b'n') => parse_literal(input, b"null", Value::Null),
            Some(b'"') => parse_string(input, &mut self.scratch).map(Value::String),
            Some(_) => parse_number(input).map(Value::Number),
        }
    }
}

fn parse_literal(
    input: &mut SliceInputBuffer<'_>,
    literal: &[u8],
    value: Value,
) -> Result<Value, ParseError> {
    if !input.remaining().starts_with(literal) {
        return Err(ParseError::InvalidValue);
    }
    input.advance(literal.len());
    Ok(value)
}
