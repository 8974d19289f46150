//! # Exhaustive Endpoint Search
//!
//! For every target intensity, every combination of `max` and `min` endpoint code is tried and the
//! one with the lowest [`candidate_error`] is kept. There are at most `64 * 64` combinations per
//! intensity, so a full table is about a million evaluations; this runs once when generating
//! source, never while encoding.
//!
//! ## Scan Order
//!
//! The outer loop walks `min` codes and the inner loop walks `max` codes, both ascending. A
//! candidate only replaces the current best when its error is strictly lower, so among equally
//! good pairs the first one in that order wins. Changing the nesting changes which of the tied
//! pairs is emitted.

use crate::endpoint::EndpointPrecision;
use crate::error_metric::candidate_error;

/// Number of 8-bit intensities, and therefore entries per table.
pub const INTENSITY_COUNT: usize = 256;

/// Larger than any error [`candidate_error`] can return.
const ERROR_SENTINEL: u32 = 256;

/// A pair of quantized endpoint codes.
///
/// Interpolating at the 1/3 point between the expanded `max_code` and `min_code` yields the
/// closest achievable value to the intensity this pair was chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BestPair {
    /// Code of the endpoint weighted 2/3.
    pub max_code: u8,
    /// Code of the endpoint weighted 1/3.
    pub min_code: u8,
}

impl BestPair {
    /// Creates a new pair.
    #[inline]
    pub const fn new(max_code: u8, min_code: u8) -> Self {
        Self { max_code, min_code }
    }
}

/// Finds the best endpoint pair for a single `intensity`.
///
/// `max` and `min` select the precision, and thereby the code range and expansion, of the
/// respective endpoint.
pub fn find_best_pair(intensity: u8, max: EndpointPrecision, min: EndpointPrecision) -> BestPair {
    let mut best = BestPair::default();
    let mut best_error = ERROR_SENTINEL;

    for min_code in 0..=min.max_code() {
        let min_expanded = min.expand(min_code);
        for max_code in 0..=max.max_code() {
            let max_expanded = max.expand(max_code);
            let error = candidate_error(intensity, max_expanded, min_expanded);
            if error < best_error {
                best = BestPair::new(max_code, min_code);
                best_error = error;
            }
        }
    }

    best
}

/// Computes the best endpoint pair for each of the 256 intensities.
///
/// # Examples
///
/// ```
/// use dxt_constant_color_tables::{generate_table_with, BestPair, EndpointPrecision};
///
/// let table = generate_table_with(EndpointPrecision::Bits5, EndpointPrecision::Bits6);
/// assert_eq!(table[0], BestPair::new(0, 0));
/// assert_eq!(table[255], BestPair::new(31, 63));
/// ```
pub fn generate_table_with(
    max: EndpointPrecision,
    min: EndpointPrecision,
) -> [BestPair; INTENSITY_COUNT] {
    let mut table = [BestPair::default(); INTENSITY_COUNT];
    for (intensity, entry) in table.iter_mut().enumerate() {
        *entry = find_best_pair(intensity as u8, max, min);
    }
    table
}
