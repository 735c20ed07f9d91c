//! # Pricing Module
//!
//! Turns a resolved record plus a weight reading into receipt figures.
//!
//! ## Receipt Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      How a Line is Priced                               │
//! │                                                                         │
//! │  ProductRecord { price: 100.00, discount: 0.20 }     weight: 2.5 kg     │
//! │        │                                                │               │
//! │        ▼                                                │               │
//! │  discounted_unit_price = floor_round((1 - 0.20) × 100.00, 2) = 80.00   │
//! │        │                                                │               │
//! │        └────────────────────┬───────────────────────────┘               │
//! │                             ▼                                           │
//! │  total = floor_round(80.00 × 2.5, 2) = 200.00                          │
//! │                                                                         │
//! │  Every figure is floored at display precision BEFORE the next step,    │
//! │  so the printed line re-verifies from its own displayed parts.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tare_core::pricing::price_line;
//! use tare_core::types::ProductRecord;
//!
//! let record = ProductRecord::new("Tomato", Vec::new(), 100.0, 0.2);
//! let line = price_line(&record, 2.5).unwrap();
//!
//! assert_eq!(line.unit_price, 80.00);
//! assert_eq!(line.total, 200.00);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationResult;
use crate::rounding::floor_round;
use crate::types::ProductRecord;
use crate::validation::{validate_price, validate_weight_kg};
use crate::{CURRENCY_DECIMALS, WEIGHT_DECIMALS};

// =============================================================================
// Receipt Line
// =============================================================================

/// One priced receipt line, ready for display.
///
/// Derived and never persisted: the session recomputes a line on every
/// receipt request from the selected record and the assigned weight. All
/// figures are already floor-rounded (2-decimal currency, 3-decimal weight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Name of the priced product.
    pub product_name: String,
    /// Discounted unit price per kg, floored to currency precision.
    pub unit_price: f64,
    /// Weight in kg, floored to gram precision.
    pub weight_kg: f64,
    /// `unit_price × weight_kg`, floored to currency precision.
    pub total: f64,
}

/// Display implementation shows the line in a human-readable format.
///
/// ## Note
/// This is for logs and the console; a real UI formats from the fields.
impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ${:.2}/kg x {:.3} kg = ${:.2}",
            self.product_name, self.unit_price, self.weight_kg, self.total
        )
    }
}

// =============================================================================
// Pricing Functions
// =============================================================================

/// The record's unit price with its discount applied, floored to currency
/// precision.
///
/// Pure helper; performs no validation. The display list and the receipt
/// both derive the shown per-kg price through this one function so the two
/// can never disagree.
///
/// ## Example
/// ```rust
/// use tare_core::pricing::discounted_unit_price;
/// use tare_core::types::ProductRecord;
///
/// let record = ProductRecord::new("Banana", Vec::new(), 2.0, 0.1);
/// assert_eq!(discounted_unit_price(&record), 1.80);
/// ```
#[inline]
pub fn discounted_unit_price(record: &ProductRecord) -> f64 {
    floor_round((1.0 - record.discount) * record.price, CURRENCY_DECIMALS)
}

/// Prices one receipt line for `record` at `weight_kg`.
///
/// `discounted_unit_price = floor_round((1 - discount) × price, 2)`;
/// `total = floor_round(discounted_unit_price × weight, 2)`. The weight is
/// floored to gram precision first and the total is computed from that
/// displayed weight, not the raw reading.
///
/// ## Arguments
/// * `record` - The operator-selected catalog record
/// * `weight_kg` - The weight reading assigned to the current display batch
///
/// ## Returns
/// A [`ReceiptLine`], or a validation error when `weight_kg` or
/// `record.price` is negative. No I/O, no other failure modes.
pub fn price_line(record: &ProductRecord, weight_kg: f64) -> ValidationResult<ReceiptLine> {
    validate_price(record.price)?;
    validate_weight_kg(weight_kg)?;

    let unit_price = discounted_unit_price(record);
    let weight_kg = floor_round(weight_kg, WEIGHT_DECIMALS);
    let total = floor_round(unit_price * weight_kg, CURRENCY_DECIMALS);

    Ok(ReceiptLine {
        product_name: record.name.clone(),
        unit_price,
        weight_kg,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn record(price: f64, discount: f64) -> ProductRecord {
        ProductRecord::new("Tomato", Vec::new(), price, discount)
    }

    #[test]
    fn test_discount_applied_before_weight() {
        let line = price_line(&record(100.0, 0.2), 2.5).unwrap();
        assert_eq!(line.unit_price, 80.00);
        assert_eq!(line.weight_kg, 2.5);
        assert_eq!(line.total, 200.00);
    }

    #[test]
    fn test_no_discount_passes_price_through() {
        let line = price_line(&record(3.50, 0.0), 2.0).unwrap();
        assert_eq!(line.unit_price, 3.50);
        assert_eq!(line.total, 7.00);
    }

    #[test]
    fn test_unit_price_truncates_downward() {
        // 0.85 × 1.99 = 1.6915, which must floor to 1.69, never 1.70
        let line = price_line(&record(1.99, 0.15), 1.0).unwrap();
        assert_eq!(line.unit_price, 1.69);
        assert_eq!(line.total, 1.69);
    }

    #[test]
    fn test_total_computed_from_displayed_weight() {
        // Raw reading 1.23456 kg is displayed as 1.234, and the total prices
        // the displayed figure
        let line = price_line(&record(1.0, 0.0), 1.23456).unwrap();
        assert_eq!(line.weight_kg, 1.234);
        assert_eq!(line.total, 1.23);
    }

    #[test]
    fn test_zero_weight_prices_to_zero() {
        let line = price_line(&record(9.99, 0.25), 0.0).unwrap();
        assert_eq!(line.weight_kg, 0.0);
        assert_eq!(line.total, 0.0);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = price_line(&record(100.0, 0.2), -1.0).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { ref field, .. } if field == "weight_kg"));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = price_line(&record(-0.01, 0.0), 1.0).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { ref field, .. } if field == "price"));
    }

    #[test]
    fn test_display_format() {
        let record = ProductRecord::new("Banana", Vec::new(), 2.0, 0.1);
        let line = price_line(&record, 1.234).unwrap();
        assert_eq!(line.to_string(), "Banana: $1.80/kg x 1.234 kg = $2.22");
    }
}
