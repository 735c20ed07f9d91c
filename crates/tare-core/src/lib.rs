//! # tare-core: Pure Pipeline Logic for Tare
//!
//! This crate is the **heart** of the smart-scale pipeline. It contains the
//! detection aggregation and receipt math as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tare Pipeline                                  │
//! │                                                                         │
//! │   camera frames                                                         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                ★ tare-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ detection │  │  pricing  │  │ rounding  │  │ validation│  │   │
//! │  │   │ aggregate │  │ ReceiptLn │  │floor_round│  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO HARDWARE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  tare-catalog (SQLite lookup) ──► tare-session (orchestration)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`detection`] - Per-frame detections and burst aggregation
//! - [`pricing`] - Discounted unit price and receipt totals
//! - [`rounding`] - The floor-rounding display policy
//! - [`types`] - Domain types (ProductRecord)
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, camera, network access is FORBIDDEN here
//! 3. **One Rounding Policy**: Every displayed figure goes through `floor_round`
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use tare_core::detection::{aggregate, Detection, DetectionFrame};
//! use tare_core::pricing::price_line;
//! use tare_core::types::ProductRecord;
//!
//! // Two frames out of a burst, one confident banana each
//! let frames = vec![
//!     DetectionFrame::new(vec![Detection::new("banana", 0.91)]),
//!     DetectionFrame::new(vec![Detection::new("banana", 0.88)]),
//! ];
//! let labels = aggregate(&frames, 0.5);
//! assert!(labels.contains("banana"));
//!
//! // Price 1.5 kg of a discounted record
//! let record = ProductRecord::new("Banana", Vec::new(), 2.0, 0.1);
//! let line = price_line(&record, 1.5).unwrap();
//! assert_eq!(line.total, 2.70);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod detection;
pub mod error;
pub mod pricing;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tare_core::ProductRecord` instead of
// `use tare_core::types::ProductRecord`

pub use detection::{aggregate, Detection, DetectionFrame, LabelSet};
pub use error::{ValidationError, ValidationResult};
pub use pricing::{discounted_unit_price, price_line, ReceiptLine};
pub use rounding::floor_round;
pub use types::ProductRecord;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal places for every displayed currency figure.
///
/// ## Why a constant?
/// Unit prices and totals must floor-round at the same precision everywhere
/// (pricing engine, catalog seed output, kiosk rendering). Centralizing the
/// precision keeps a receipt reproducible from its displayed parts.
pub const CURRENCY_DECIMALS: i32 = 2;

/// Decimal places for every displayed weight figure (gram precision).
pub const WEIGHT_DECIMALS: i32 = 3;

/// Default confidence threshold for detection filtering.
///
/// ## Why 0.5?
/// The burst already smooths single-frame noise by unioning labels across
/// frames, so the per-detection bar can sit at the model's break-even point.
/// Deployments tune this through the kiosk configuration surface.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;
