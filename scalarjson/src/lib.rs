// SPDX-License-Identifier: Apache-2.0

//! A small parser for scalar JSON documents: `null`, `true`, `false`,
//! numbers and strings.
//!
//! ```
//! use scalarjson::{parse, ParseError, Value};
//!
//! assert_eq!(parse(" -1.5e3 "), Ok(Value::Number(-1500.0)));
//! assert_eq!(parse(r#""tab\there""#).unwrap().get_string(), b"tab\there");
//! assert_eq!(parse("1e400"), Err(ParseError::NumberTooBig));
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{DefaultConfig, ScratchConfig, MIN_SCRATCH_CAPACITY};

mod parse_error;
pub use parse_error::ParseError;

mod value;
pub use value::{Value, ValueType};

mod scratch_buffer;

mod slice_input_buffer;

mod number_parser;

mod escape_processor;

mod string_parser;

mod slice_parser;
pub use slice_parser::SliceParser;

/// Parses a complete document.
///
/// Uses a scratch buffer private to this call, which is freed before returning.
/// To reuse scratch space across documents, keep a [`SliceParser`] instead.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    SliceParser::new().parse(input)
}

/// Parses a complete document from raw bytes.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    SliceParser::new().parse_slice(input)
}

/// Parses a complete document into `value`, which is `Null` on failure.
pub fn parse_into(value: &mut Value, input: &str) -> Result<(), ParseError> {
    SliceParser::new().parse_into(value, input)
}
