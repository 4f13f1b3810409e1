// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

/// Parses the number under the cursor and moves past it.
///
/// The token is matched against the JSON number grammar first; only the
/// matched bytes are handed to the float conversion, which on its own would
/// accept things like `+1`, `01`, `inf` or `1.`.
///
/// Bytes after the token are left for the caller. On error the cursor is
/// left where it was.
pub fn parse_number(input: &mut SliceInputBuffer<'_>) -> Result<f64, ParseError> {
    let bytes = input.remaining();
    let len = scan_number(bytes)?;
    let token = bytes.get(..len).ok_or(ParseError::InvalidValue)?;
    let value = parse_float(token)?;
    input.advance(len);
    Ok(value)
}

/// Walks the number grammar and returns the length of the token. A `0`
/// integer part followed by another digit is a leading zero and is rejected.
///
/// ```text
/// number = [ "-" ] int [ frac ] [ exp ]
/// int    = "0" / digit1-9 *digit
/// frac   = "." 1*digit
/// exp    = ("e" / "E") [ "+" / "-" ] 1*digit
/// ```
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let at = |i: usize| bytes.get(i).copied();
    let mut p = 0;

    if at(p) == Some(b'-') {
        p += 1;
    }

    match at(p) {
        Some(b'0') => {
            p += 1;
            if matches!(at(p), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => p = skip_digits(bytes, p + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if at(p) == Some(b'.') {
        p += 1;
        if !matches!(at(p), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        p = skip_digits(bytes, p);
    }

    if matches!(at(p), Some(b'e' | b'E')) {
        p += 1;
        if matches!(at(p), Some(b'+' | b'-')) {
            p += 1;
        }
        if !matches!(at(p), Some(b'0'..=b'9')) {
            return Err(ParseError::InvalidValue);
        }
        p = skip_digits(bytes, p);
    }

    Ok(p)
}

fn skip_digits(bytes: &[u8], mut p: usize) -> usize {
    while matches!(bytes.get(p), Some(b'0'..=b'9')) {
        p += 1;
    }
    p
}

/// Converts a grammar-checked number token to `f64`.
/// JSON numbers are pure ASCII, so the UTF-8 check cannot fail on a valid token.
///
/// An infinite result means the magnitude overflowed; values that underflow
/// to zero are returned as is.
pub fn parse_float(bytes: &[u8]) -> Result<f64, ParseError> {
    let s = core::str::from_utf8(bytes).map_err(|_| ParseError::InvalidValue)?;
    match f64::from_str(s) {
        Ok(val) if val.is_infinite() => Err(ParseError::NumberTooBig),
        Ok(val) => Ok(val),
        Err(_) => Err(ParseError::InvalidValue),
    }
}
