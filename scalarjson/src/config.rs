// SPDX-License-Identifier: Apache-2.0

//! Compile-time parser configuration.

/// Smallest capacity the scratch buffer will start from, regardless of configuration.
///
/// Growth is `size += size >> 1`, which would never make progress below 2.
pub const MIN_SCRATCH_CAPACITY: usize = 8;

/// Configuration for the scratch buffer used while decoding strings.
///
/// Implement this on a marker type and pass it as the type parameter of
/// [`SliceParser`](crate::SliceParser) to tune the first allocation.
///
/// ```rust
/// use scalarjson::{ScratchConfig, SliceParser};
///
/// struct Tiny;
/// impl ScratchConfig for Tiny {
///     const INITIAL_CAPACITY: usize = 16;
/// }
///
/// let mut parser = SliceParser::<Tiny>::with_config();
/// let value = parser.parse(r#""hello""#).unwrap();
/// assert_eq!(value.get_string(), b"hello");
/// ```
pub trait ScratchConfig {
    /// Capacity allocated on the first write into the scratch buffer.
    /// Values below [`MIN_SCRATCH_CAPACITY`] are raised to it.
    const INITIAL_CAPACITY: usize;

    /// The capacity actually used for the first allocation.
    fn initial_capacity() -> usize {
        if Self::INITIAL_CAPACITY < MIN_SCRATCH_CAPACITY {
            MIN_SCRATCH_CAPACITY
        } else {
            Self::INITIAL_CAPACITY
        }
    }
}

/// Default configuration: 256 bytes of scratch on first use.
pub struct DefaultConfig;

impl ScratchConfig for DefaultConfig {
    const INITIAL_CAPACITY: usize = 256;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Zero;
    impl ScratchConfig for Zero {
        const INITIAL_CAPACITY: usize = 0;
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(DefaultConfig::initial_capacity(), 256);
    }

    #[test]
    fn test_capacity_is_clamped() {
        assert_eq!(Zero::initial_capacity(), MIN_SCRATCH_CAPACITY);
    }
}
