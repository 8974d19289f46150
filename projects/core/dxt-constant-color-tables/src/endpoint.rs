//! # Endpoint Precision
//!
//! BC1 stores its two colour endpoints as [`RGB565`](https://en.wikipedia.org/wiki/High_color),
//! so red and blue are quantized to 5 bits and green to 6 bits. On decode each quantized code is
//! expanded back to 8 bits by replicating its top bits into the newly opened low bits:
//!
//! - 5-bit: `(code << 3) | (code >> 2)`
//! - 6-bit: `(code << 2) | (code >> 4)`
//!
//! This maps code `0` to `0` and the largest code to `255`, and spreads the rest evenly in between.

use derive_enum_all_values::AllValues;

/// Bit depth at which an endpoint channel is quantized.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues, Hash)]
pub enum EndpointPrecision {
    /// 5-bit channel (red and blue in RGB565).
    Bits5 = 5,
    /// 6-bit channel (green in RGB565).
    Bits6 = 6,
}

impl EndpointPrecision {
    /// Number of bits in a code of this precision.
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Number of distinct codes, i.e. `2^bits`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_constant_color_tables::EndpointPrecision;
    ///
    /// assert_eq!(EndpointPrecision::Bits5.code_count(), 32);
    /// assert_eq!(EndpointPrecision::Bits6.code_count(), 64);
    /// ```
    #[inline]
    pub const fn code_count(self) -> usize {
        1 << self.bits()
    }

    /// Largest valid code for this precision.
    #[inline]
    pub const fn max_code(self) -> u8 {
        (self.code_count() - 1) as u8
    }

    /// Expands a quantized `code` to its 8-bit approximation.
    ///
    /// `code` must be below [`Self::code_count`]; higher bits are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_constant_color_tables::EndpointPrecision;
    ///
    /// assert_eq!(EndpointPrecision::Bits5.expand(31), 255);
    /// assert_eq!(EndpointPrecision::Bits6.expand(32), 130);
    /// ```
    #[inline]
    pub const fn expand(self, code: u8) -> u8 {
        match self {
            EndpointPrecision::Bits5 => expand_5bit(code),
            EndpointPrecision::Bits6 => expand_6bit(code),
        }
    }
}

/// Expands a 5-bit code to 8 bits by bit replication.
#[inline]
pub const fn expand_5bit(code: u8) -> u8 {
    let code = code & 0x1F;
    (code << 3) | (code >> 2)
}

/// Expands a 6-bit code to 8 bits by bit replication.
#[inline]
pub const fn expand_6bit(code: u8) -> u8 {
    let code = code & 0x3F;
    (code << 2) | (code >> 4)
}
