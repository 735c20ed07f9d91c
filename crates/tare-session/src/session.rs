//! Session display state.
//!
//! [`Session`] is the single source of truth for what the kiosk screen
//! shows: the resolved products, the assigned weight, and the shopper's
//! selection. It moves through three observable phases:
//!
//! ```text
//!            burst succeeds              select
//!   Idle ──────────────────> Displaying ────────> Selected
//!    ▲                            │                   │
//!    │   clear / failed burst     │                   │
//!    └────────────────────────────┴───────────────────┘
//! ```
//!
//! Capture, aggregation, and resolution happen between phases inside
//! [`SessionController`](crate::SessionController); while they run, the
//! session is locked and concurrent bursts are refused.

use tare_core::ProductRecord;

use crate::error::{SessionError, SessionResult};

/// Observable phase of a weighing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing displayed; waiting for a burst.
    Idle,
    /// A resolution result (possibly zero products) and a weight are shown.
    Displaying,
    /// One displayed product is chosen for the receipt.
    Selected,
}

/// What the kiosk currently shows.
///
/// Invariants:
/// - `selection` always indexes into `displayed`
/// - a weight is present exactly when a resolution result is displayed
#[derive(Debug, Default)]
pub struct Session {
    displayed: Vec<ProductRecord>,
    weight_kg: Option<f64>,
    selection: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the phase from the held state, so it can never go stale.
    pub fn phase(&self) -> SessionPhase {
        if self.weight_kg.is_none() {
            SessionPhase::Idle
        } else if self.selection.is_some() {
            SessionPhase::Selected
        } else {
            SessionPhase::Displaying
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == SessionPhase::Idle
    }

    /// Replaces the entire display with a fresh resolution result.
    ///
    /// Everything from the previous burst is discarded, including any
    /// selection. An empty product list is a valid display: the weight
    /// is still assigned and shown.
    pub fn display(&mut self, products: Vec<ProductRecord>, weight_kg: f64) {
        self.displayed = products;
        self.weight_kg = Some(weight_kg);
        self.selection = None;
    }

    /// Returns the session to pristine idle.
    pub fn clear(&mut self) {
        self.displayed.clear();
        self.weight_kg = None;
        self.selection = None;
    }

    /// Products currently on screen, in display order.
    pub fn displayed(&self) -> &[ProductRecord] {
        &self.displayed
    }

    /// Weight assigned by the last successful resolution.
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    /// Marks the displayed product at `index` as the shopper's choice.
    ///
    /// Selecting again moves the choice; it never stacks.
    pub fn select(&mut self, index: usize) -> SessionResult<&ProductRecord> {
        if index >= self.displayed.len() {
            return Err(SessionError::UnknownProduct {
                index,
                available: self.displayed.len(),
            });
        }
        self.selection = Some(index);
        Ok(&self.displayed[index])
    }

    /// The chosen product, if any.
    pub fn selection(&self) -> Option<&ProductRecord> {
        self.selection.and_then(|index| self.displayed.get(index))
    }

    /// Index of the chosen product, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str) -> ProductRecord {
        ProductRecord::new(name, vec![0x00], 2.0, 0.0)
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.displayed().is_empty());
        assert!(session.weight_kg().is_none());
        assert!(session.selection().is_none());
    }

    #[test]
    fn test_display_moves_to_displaying_and_select_to_selected() {
        let mut session = Session::new();

        session.display(vec![product("Apple")], 1.5);
        assert_eq!(session.phase(), SessionPhase::Displaying);
        assert_eq!(session.weight_kg(), Some(1.5));

        session.select(0).unwrap();
        assert_eq!(session.phase(), SessionPhase::Selected);
        assert_eq!(session.selection().unwrap().name, "Apple");
    }

    #[test]
    fn test_empty_display_still_carries_a_weight() {
        let mut session = Session::new();
        session.display(Vec::new(), 2.345);

        assert_eq!(session.phase(), SessionPhase::Displaying);
        assert_eq!(session.weight_kg(), Some(2.345));
        assert!(session.displayed().is_empty());
    }

    #[test]
    fn test_display_replaces_previous_contents_and_selection() {
        let mut session = Session::new();
        session.display(vec![product("Apple"), product("Banana")], 1.0);
        session.select(1).unwrap();

        session.display(vec![product("Carrot")], 2.0);

        assert_eq!(session.displayed().len(), 1);
        assert_eq!(session.displayed()[0].name, "Carrot");
        assert_eq!(session.weight_kg(), Some(2.0));
        assert!(session.selection().is_none());
        assert_eq!(session.phase(), SessionPhase::Displaying);
    }

    #[test]
    fn test_select_out_of_bounds_reports_both_sides() {
        let mut session = Session::new();
        session.display(vec![product("Apple")], 1.0);

        let err = session.select(3).unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownProduct {
                index: 3,
                available: 1
            }
        );
        // Failed select does not disturb the phase
        assert_eq!(session.phase(), SessionPhase::Displaying);
    }

    #[test]
    fn test_select_on_idle_session_is_unknown_product() {
        let mut session = Session::new();
        let err = session.select(0).unwrap_err();
        assert_eq!(
            err,
            SessionError::UnknownProduct {
                index: 0,
                available: 0
            }
        );
    }

    #[test]
    fn test_reselect_moves_the_choice() {
        let mut session = Session::new();
        session.display(vec![product("Apple"), product("Banana")], 1.0);

        session.select(0).unwrap();
        session.select(1).unwrap();

        assert_eq!(session.selection().unwrap().name, "Banana");
        assert_eq!(session.selected_index(), Some(1));
    }

    #[test]
    fn test_clear_returns_to_pristine_idle() {
        let mut session = Session::new();
        session.display(vec![product("Apple")], 1.0);
        session.select(0).unwrap();

        session.clear();

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.displayed().is_empty());
        assert!(session.weight_kg().is_none());
        assert!(session.selection().is_none());
    }
}
