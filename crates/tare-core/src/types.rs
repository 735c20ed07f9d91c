//! # Domain Types
//!
//! The catalog record as it exists inside the pipeline.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductRecord                                                          │
//! │                                                                         │
//! │  name      TEXT    unique key ("Banana")                                │
//! │  image     BLOB    opaque display bytes (PNG/JPEG, never decoded here)  │
//! │  price     REAL    unit currency per kg, >= 0                           │
//! │  discount  REAL    fraction in [0, 1)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store owns these rows; the pipeline only ever holds read-only copies
//! for the duration of one session. Range rules (price, discount) are
//! enforced where rows cross the catalog boundary, so everything downstream
//! can trust the four fields without re-checking.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product Record
// =============================================================================

/// One resolved catalog entity.
///
/// `name` doubles as the unique key: the detector vocabulary maps class
/// labels to product names, and the displayed list is keyed by name when the
/// operator selects an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductRecord {
    /// Unique product name shown to the operator.
    pub name: String,
    /// Opaque image bytes for the display list. Never decoded in this crate.
    pub image: Vec<u8>,
    /// Unit price per kg in display currency. Non-negative.
    pub price: f64,
    /// Discount fraction in [0, 1). `0.1` means 10% off.
    pub discount: f64,
}

impl ProductRecord {
    /// Creates a record from its four fields.
    pub fn new(name: impl Into<String>, image: Vec<u8>, price: f64, discount: f64) -> Self {
        ProductRecord {
            name: name.into(),
            image,
            price,
            discount,
        }
    }

    /// Whether any discount applies to this record.
    pub fn has_discount(&self) -> bool {
        self.discount > 0.0
    }

    /// The discount as a whole-number-friendly percentage (0.1 → 10.0).
    pub fn discount_percent(&self) -> f64 {
        self.discount * 100.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let record = ProductRecord::new("Banana", vec![1, 2, 3], 2.0, 0.1);
        assert_eq!(record.name, "Banana");
        assert_eq!(record.image, vec![1, 2, 3]);
        assert_eq!(record.price, 2.0);
        assert_eq!(record.discount, 0.1);
    }

    #[test]
    fn test_discount_helpers() {
        let discounted = ProductRecord::new("Banana", Vec::new(), 2.0, 0.25);
        assert!(discounted.has_discount());
        assert_eq!(discounted.discount_percent(), 25.0);

        let plain = ProductRecord::new("Apple", Vec::new(), 3.0, 0.0);
        assert!(!plain.has_discount());
    }

    #[test]
    fn test_serde_round_trip() {
        let record = ProductRecord::new("Orange", vec![0xFF], 1.75, 0.05);
        let json = serde_json::to_string(&record).unwrap();
        let back: ProductRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
