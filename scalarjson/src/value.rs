// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
    String,
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueType::Null => "null",
            ValueType::False => "false",
            ValueType::True => "true",
            ValueType::Number => "number",
            ValueType::String => "string",
        };
        f.write_str(name)
    }
}

/// A parsed scalar JSON value.
///
/// A `String` owns its decoded bytes exclusively. The bytes are whatever the
/// input contained after escape decoding; input parsed from `&str` always
/// yields valid UTF-8, see [`Value::as_str`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    True,
    False,
    Number(f64),
    String(Vec<u8>),
}

impl Value {
    /// Returns the kind of the active variant.
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::True => ValueType::True,
            Value::False => ValueType::False,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
        }
    }

    /// Drops any owned payload and resets to `Null`. No-op on `Null`.
    pub fn release(&mut self) {
        *self = Value::Null;
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn set_null(&mut self) {
        self.release();
    }

    /// # Panics
    /// If the value is neither `True` nor `False`.
    #[track_caller]
    pub fn get_boolean(&self) -> bool {
        match self.as_bool() {
            Some(b) => b,
            None => panic!("get_boolean called on a {} value", self.get_type()),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::from(b);
    }

    /// # Panics
    /// If the value is not a `Number`.
    #[track_caller]
    pub fn get_number(&self) -> f64 {
        match self.as_f64() {
            Some(n) => n,
            None => panic!("get_number called on a {} value", self.get_type()),
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Returns the decoded string bytes.
    ///
    /// # Panics
    /// If the value is not a `String`.
    #[track_caller]
    pub fn get_string(&self) -> &[u8] {
        match self.as_bytes() {
            Some(bytes) => bytes,
            None => panic!("get_string called on a {} value", self.get_type()),
        }
    }

    /// # Panics
    /// If the value is not a `String`.
    #[track_caller]
    pub fn get_string_length(&self) -> usize {
        self.get_string().len()
    }

    /// Replaces the value with a copy of `bytes`. Valid on any prior variant.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Value::String(bytes.to_vec());
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// The string payload as `&str`, if this is a `String` holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        self.as_bytes()
            .and_then(|bytes| core::str::from_utf8(bytes).ok())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::String(bytes.to_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from(s.as_bytes())
    }
}
