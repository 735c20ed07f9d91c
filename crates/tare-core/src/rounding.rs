//! # Rounding Module
//!
//! Provides `floor_round`, the single rounding policy for every displayed
//! figure in the pipeline.
//!
//! ## Why Floor, Not Half-Rounding?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE HALF-ROUNDING PROBLEM                                              │
//! │                                                                         │
//! │  Round-half-up (or half-to-even) can raise a displayed figure above    │
//! │  the value it was computed from:                                       │
//! │    2.999 → "3.00"   ❌ label shows more than the computed price        │
//! │                                                                         │
//! │  OUR SOLUTION: truncate toward negative infinity at the requested      │
//! │  precision                                                             │
//! │    floor_round(2.999, 2)  = 2.99                                       │
//! │    floor_round(-0.001, 2) = -0.01                                      │
//! │                                                                         │
//! │  A displayed unit price, total, or weight never exceeds the value it   │
//! │  was derived from, so the printed receipt can always be re-verified    │
//! │  from its own displayed parts without coming up short.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tare_core::rounding::floor_round;
//! use tare_core::{CURRENCY_DECIMALS, WEIGHT_DECIMALS};
//!
//! // Currency: 2 decimals
//! assert_eq!(floor_round(2.999, CURRENCY_DECIMALS), 2.99);
//!
//! // Weight: 3 decimals (gram precision)
//! assert_eq!(floor_round(1.23456, WEIGHT_DECIMALS), 1.234);
//! ```

// =============================================================================
// Floor Rounding
// =============================================================================

/// Floor-rounds `value` to `decimals` decimal places.
///
/// For `decimals <= 0` this is the plain mathematical floor. For positive
/// `decimals` it truncates toward negative infinity at that precision:
/// `floor(value * 10^decimals) / 10^decimals`.
///
/// This is **not** half-rounding. `2.999` at 2 decimals yields `2.99`, never
/// `3.00`, and negative values keep flooring downward: `-0.001` at 2 decimals
/// yields `-0.01`.
///
/// ## Arguments
/// * `value` - The raw computed figure
/// * `decimals` - Decimal places to keep (`CURRENCY_DECIMALS` or
///   `WEIGHT_DECIMALS` everywhere in this workspace)
///
/// ## Example
/// ```rust
/// use tare_core::rounding::floor_round;
///
/// assert_eq!(floor_round(2.999, 2), 2.99);
/// assert_eq!(floor_round(-0.001, 2), -0.01);
/// assert_eq!(floor_round(5.0, 0), 5.0);
/// assert_eq!(floor_round(3.7, 0), 3.0);
/// ```
#[inline]
pub fn floor_round(value: f64, decimals: i32) -> f64 {
    if decimals <= 0 {
        return value.floor();
    }
    let factor = 10f64.powi(decimals);
    (value * factor).floor() / factor
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_instead_of_rounding_up() {
        assert_eq!(floor_round(2.999, 2), 2.99);
        assert_eq!(floor_round(1.999, 2), 1.99);
        assert_eq!(floor_round(3.7, 0), 3.0);
    }

    #[test]
    fn test_negative_values_floor_toward_negative_infinity() {
        assert_eq!(floor_round(-0.001, 2), -0.01);
        assert_eq!(floor_round(-3.7, 0), -4.0);
        assert_eq!(floor_round(-1.2345, 3), -1.235);
    }

    #[test]
    fn test_exact_values_pass_through() {
        assert_eq!(floor_round(5.0, 0), 5.0);
        assert_eq!(floor_round(80.0, 2), 80.0);
        assert_eq!(floor_round(1.25, 2), 1.25);
        assert_eq!(floor_round(0.0, 2), 0.0);
    }

    #[test]
    fn test_zero_and_negative_decimals_mean_whole_floor() {
        assert_eq!(floor_round(12.34, 0), 12.0);
        assert_eq!(floor_round(12.34, -1), 12.0);
        assert_eq!(floor_round(12.34, -100), 12.0);
    }

    #[test]
    fn test_weight_precision() {
        assert_eq!(floor_round(1.23456, 3), 1.234);
        assert_eq!(floor_round(4.9999, 3), 4.999);
        assert_eq!(floor_round(0.0005, 3), 0.0);
    }

    /// A figure that binary floating point stores *below* its decimal literal
    /// must still truncate downward, not drift up to the literal.
    #[test]
    fn test_binary_representation_stays_floored() {
        // 1.005 is stored as 1.00499999999..., so 2-decimal floor is 1.00
        assert_eq!(floor_round(1.005, 2), 1.00);
    }

    #[test]
    fn test_idempotent_at_same_precision() {
        let once = floor_round(2.999, 2);
        assert_eq!(floor_round(once, 2), once);

        let weight = floor_round(3.14159, 3);
        assert_eq!(floor_round(weight, 3), weight);
    }

    #[test]
    fn test_never_exceeds_input() {
        for &value in &[0.0, 0.009, 1.005, 2.999, 7.77, 123.456] {
            assert!(floor_round(value, 2) <= value);
            assert!(floor_round(value, 3) <= value);
            assert!(floor_round(value, 0) <= value);
        }
    }
}
