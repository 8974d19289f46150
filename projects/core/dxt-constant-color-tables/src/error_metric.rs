//! # Interpolation Error Metric
//!
//! A BC1 decoder in 4-colour mode derives its third palette entry as `(2 * c0 + c1) / 3`.
//! Hardware does this with integer arithmetic, so the search does too: [`lerp13`] computes the
//! division by 3 as a multiply by `0xAAAB` followed by a 17 bit shift, which is exact for every
//! input in range. A floating point version would round differently and change the tables.
//!
//! [`candidate_error`] combines the distance from the target intensity with a penalty of 3% of the
//! spread between both endpoints. DX10 allows interpolation results within 3% of the exact value
//! and does not require that error to be unbiased, so pairs with a wide spread are treated as
//! potentially that far off.

/// Linear interpolation at the 1/3 point between `a` and `b`, i.e. `(2 * a + b) / 3`.
///
/// # Examples
///
/// ```
/// use dxt_constant_color_tables::lerp13;
///
/// assert_eq!(lerp13(255, 255), 255);
/// assert_eq!(lerp13(255, 0), 170);
/// assert_eq!(lerp13(0, 255), 85);
/// ```
#[inline]
pub const fn lerp13(a: u8, b: u8) -> u8 {
    (((2 * a as u32 + b as u32) * 0xAAAB) >> 17) as u8
}

/// Error of approximating `intensity` with the endpoints `max` and `min`, both already expanded
/// to 8 bits.
///
/// The penalty term uses integer division, so spreads below 34 add nothing.
#[inline]
pub const fn candidate_error(intensity: u8, max: u8, min: u8) -> u32 {
    let interpolated = lerp13(max, min);
    let distance = interpolated.abs_diff(intensity) as u32;
    let spread = max.abs_diff(min) as u32;
    distance + spread * 3 / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// The fixed point division must agree with exact integer division for the whole input domain.
    #[test]
    fn lerp13_matches_integer_division() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                let expected = (2 * a as u32 + b as u32) / 3;
                assert_eq!(lerp13(a, b) as u32, expected, "a = {a}, b = {b}");
            }
        }
    }

    #[rstest]
    #[case(0, 0, 0, 0)]
    #[case(255, 255, 255, 0)]
    #[case(10, 0, 0, 10)]
    // lerp13(255, 0) == 170, spread 255 -> penalty 7
    #[case(170, 255, 0, 7)]
    // spread of 33 is still below the 3% threshold
    #[case(22, 33, 0, 0)]
    // spread of 34 adds a penalty of 1
    #[case(22, 34, 0, 1)]
    fn computes_candidate_error(
        #[case] intensity: u8,
        #[case] max: u8,
        #[case] min: u8,
        #[case] expected: u32,
    ) {
        assert_eq!(candidate_error(intensity, max, min), expected);
    }

    #[test]
    fn error_never_reaches_sentinel() {
        for intensity in 0..=255u8 {
            for max in 0..=255u8 {
                for min in [0u8, 127, 255] {
                    assert!(candidate_error(intensity, max, min) < 256);
                }
            }
        }
    }
}
