//! # Error Types
//!
//! Domain error types for tare-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tare-core errors (this file)                                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tare-catalog errors (separate crate)                                  │
//! │  └── CatalogError     - Store unreachable, query failure, timeout      │
//! │                                                                         │
//! │  tare-session errors (separate crate)                                  │
//! │  └── SessionError     - Missing selection, busy session                │
//! │                                                                         │
//! │  Flow: ValidationError → SessionError → operator notice                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a figure fed to the pricing engine or a record
/// crossing the catalog boundary doesn't meet requirements. Used for early
/// validation before any math runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    ///
    /// ## When This Occurs
    /// - A weight reading below zero reaches the pricing engine
    /// - A catalog row carries a negative unit price
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// Value is outside its allowed range.
    ///
    /// ## When This Occurs
    /// - A catalog row carries a discount of 1.0 or more (a free-or-better
    ///   item is a data entry mistake, not a promotion)
    /// - A configured confidence threshold falls outside [0, 1]
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
