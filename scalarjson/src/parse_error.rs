// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// Scanners report the most specific kind they can; the parser never
/// re-classifies an error on its way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// A token was present but did not match its grammar
    /// (misspelled literal, malformed number).
    InvalidValue,
    /// A complete value was followed by more non-whitespace input.
    RootNotSingular,
    /// A well-formed number whose magnitude does not fit in an `f64`.
    NumberTooBig,
    /// A string was opened but the input ended before the closing quote.
    MissingQuotationMark,
    /// A backslash was followed by a character that is not a known escape.
    InvalidStringEscape,
    /// A raw control character (below 0x20) appeared inside a string.
    InvalidStringChar,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number too big",
            ParseError::MissingQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}
