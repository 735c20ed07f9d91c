//! Session error types.

use tare_core::ValidationError;
use thiserror::Error;

/// Convenient alias used throughout the session layer.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors produced while driving a weighing session.
///
/// Catalog failures are deliberately absent: the controller handles them
/// by returning the session to idle and reporting a
/// [`BurstOutcome`](crate::BurstOutcome), so they never propagate as errors.
#[derive(Error, Debug, PartialEq)]
pub enum SessionError {
    /// A receipt was requested before any product was selected.
    #[error("No product selected")]
    NoSelection,

    /// A selection index pointed outside the displayed list.
    ///
    /// ## When This Occurs
    /// - The shopper keys a stale index after the display was replaced
    /// - The display is empty (nothing resolved) and any index is given
    #[error("No displayed product at index {index} ({available} available)")]
    UnknownProduct { index: usize, available: usize },

    /// A detection burst is already running.
    ///
    /// The kiosk surfaces this as "busy"; the running burst is not
    /// disturbed and no session state changes.
    #[error("A detection burst is already in progress")]
    BurstInProgress,

    /// Pricing input failed range checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Tests
// =============================================================================
