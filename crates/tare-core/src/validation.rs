//! # Validation Module
//!
//! Range rules for the figures flowing through the pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Kiosk configuration load                                      │
//! │  ├── THIS MODULE: threshold range                                       │
//! │  └── Rejects bad env values before anything starts                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog boundary (tare-catalog)                               │
//! │  ├── THIS MODULE: name, price, discount rules per row                   │
//! │  └── A malformed stored row never reaches the session                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine (tare-core)                                    │
//! │  ├── THIS MODULE: weight and price signs                                │
//! │  └── Receipt math never runs on nonsense inputs                        │
//! │                                                                         │
//! │  Defense in depth: the database also carries CHECK constraints         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tare_core::validation::{validate_discount, validate_weight_kg};
//!
//! assert!(validate_discount(0.25).is_ok());
//! assert!(validate_discount(1.0).is_err());
//! assert!(validate_weight_kg(-0.5).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
///
/// The name is the catalog's unique key, so a blank one would make a row
/// unreachable from any detector label.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (giveaway items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
            value: price,
        });
    }

    Ok(())
}

/// Validates a discount fraction.
///
/// ## Rules
/// - Must be in the half-open range [0, 1)
/// - A discount of exactly 1 (or more) is rejected: rows are priced per kg
///   and a free-or-better item is a data entry mistake
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    if discount < 0.0 {
        return Err(ValidationError::Negative {
            field: "discount".to_string(),
            value: discount,
        });
    }

    if discount >= 1.0 {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            value: discount,
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

/// Validates a weight reading in kilograms.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (nothing on the scale)
pub fn validate_weight_kg(weight_kg: f64) -> ValidationResult<()> {
    if weight_kg < 0.0 {
        return Err(ValidationError::Negative {
            field: "weight_kg".to_string(),
            value: weight_kg,
        });
    }

    Ok(())
}

/// Validates a confidence threshold.
///
/// ## Rules
/// - Must be in the closed range [0, 1]
/// - 0 admits every detection, 1 admits only perfect-confidence ones
pub fn validate_confidence_threshold(threshold: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ValidationError::OutOfRange {
            field: "confidence_threshold".to_string(),
            value: threshold,
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Banana").is_ok());
        assert!(validate_product_name("Granny Smith").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(2.35).is_ok());
        assert!(validate_price(-0.01).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(0.0).is_ok());
        assert!(validate_discount(0.5).is_ok());
        assert!(validate_discount(0.999).is_ok());

        assert!(validate_discount(1.0).is_err());
        assert!(validate_discount(1.5).is_err());
        assert!(validate_discount(-0.1).is_err());
    }

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(0.0).is_ok());
        assert!(validate_weight_kg(4.999).is_ok());
        assert!(validate_weight_kg(-1.0).is_err());
    }

    #[test]
    fn test_validate_confidence_threshold() {
        assert!(validate_confidence_threshold(0.0).is_ok());
        assert!(validate_confidence_threshold(0.5).is_ok());
        assert!(validate_confidence_threshold(1.0).is_ok());

        assert!(validate_confidence_threshold(-0.1).is_err());
        assert!(validate_confidence_threshold(1.1).is_err());
    }
}
