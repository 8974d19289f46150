//! Constant colour lookup tables, one per endpoint precision pairing.

use crate::endpoint::EndpointPrecision;
use crate::search::{generate_table_with, BestPair, INTENSITY_COUNT};
use core::ops::Index;
use derive_enum_all_values::AllValues;

/// Which endpoint precisions a table was generated for.
///
/// The name lists the precision of the `max` endpoint first and the `min` endpoint second.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues, Hash)]
pub enum TableVariant {
    /// 5-bit `max`, 5-bit `min`; red and blue channels.
    Colors55 = 0,
    /// 5-bit `max`, 6-bit `min`.
    Colors56 = 1,
    /// 6-bit `max`, 6-bit `min`; green channel.
    Colors66 = 2,
}

impl TableVariant {
    /// Precision of the `max` endpoint.
    #[inline]
    pub const fn max_precision(self) -> EndpointPrecision {
        match self {
            TableVariant::Colors55 | TableVariant::Colors56 => EndpointPrecision::Bits5,
            TableVariant::Colors66 => EndpointPrecision::Bits6,
        }
    }

    /// Precision of the `min` endpoint.
    #[inline]
    pub const fn min_precision(self) -> EndpointPrecision {
        match self {
            TableVariant::Colors55 => EndpointPrecision::Bits5,
            TableVariant::Colors56 | TableVariant::Colors66 => EndpointPrecision::Bits6,
        }
    }

    /// Two digit suffix used when naming this table in generated source, e.g. `"56"`.
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            TableVariant::Colors55 => "55",
            TableVariant::Colors56 => "56",
            TableVariant::Colors66 => "66",
        }
    }
}

/// The best endpoint pair for every 8-bit intensity, for a single [`TableVariant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantColorTable {
    variant: TableVariant,
    entries: [BestPair; INTENSITY_COUNT],
}

impl ConstantColorTable {
    /// Runs the exhaustive search for `variant`.
    pub fn generate(variant: TableVariant) -> Self {
        Self {
            variant,
            entries: generate_table_with(variant.max_precision(), variant.min_precision()),
        }
    }

    /// Variant this table was generated for.
    #[inline]
    pub fn variant(&self) -> TableVariant {
        self.variant
    }

    /// Best pair for `intensity`.
    #[inline]
    pub fn lookup(&self, intensity: u8) -> BestPair {
        self.entries[intensity as usize]
    }

    /// All entries, indexed by intensity.
    #[inline]
    pub fn entries(&self) -> &[BestPair; INTENSITY_COUNT] {
        &self.entries
    }
}

impl Index<u8> for ConstantColorTable {
    type Output = BestPair;

    #[inline]
    fn index(&self, intensity: u8) -> &Self::Output {
        &self.entries[intensity as usize]
    }
}
