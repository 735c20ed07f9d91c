//! Shared session handle.
//!
//! [`SessionState`] wraps the controller for use from concurrent tasks
//! (console loop, signal handler, future network surface). One burst
//! runs at a time: a trigger that arrives while another burst holds the
//! lock is refused immediately with
//! [`SessionError::BurstInProgress`], leaving the running burst alone.

use std::sync::Arc;

use tokio::sync::Mutex;

use tare_core::{ProductRecord, ReceiptLine};

use crate::controller::{BurstOutcome, SessionController};
use crate::error::{SessionError, SessionResult};
use crate::session::SessionPhase;

/// Point-in-time copy of what the session shows.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub products: Vec<ProductRecord>,
    pub weight_kg: Option<f64>,
    pub selected: Option<usize>,
}

/// Cloneable handle over one [`SessionController`].
#[derive(Clone)]
pub struct SessionState {
    controller: Arc<Mutex<SessionController>>,
}

impl SessionState {
    pub fn new(controller: SessionController) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }

    /// Runs a burst unless one is already in progress.
    ///
    /// Never waits: a second trigger during a burst fails fast so the
    /// caller can tell the shopper the scale is busy.
    pub async fn trigger_burst(&self) -> SessionResult<BurstOutcome> {
        let mut controller = self
            .controller
            .try_lock()
            .map_err(|_| SessionError::BurstInProgress)?;
        Ok(controller.run_burst().await)
    }

    /// Selects a displayed product. Waits for any running burst first.
    pub async fn select(&self, index: usize) -> SessionResult<ProductRecord> {
        let mut controller = self.controller.lock().await;
        let record = controller.select(index)?.clone();
        Ok(record)
    }

    /// Prices the current selection at the displayed weight.
    pub async fn receipt(&self) -> SessionResult<ReceiptLine> {
        let controller = self.controller.lock().await;
        controller.receipt()
    }

    /// Copies out the current display for rendering.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let controller = self.controller.lock().await;
        let session = controller.session();
        SessionSnapshot {
            phase: session.phase(),
            products: session.displayed().to_vec(),
            weight_kg: session.weight_kg(),
            selected: session.selected_index(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::SimulatedCamera;
    use crate::controller::SessionConfig;
    use crate::detector::{Detector, ScriptedDetector};
    use crate::weight::WeightSource;
    use image::DynamicImage;
    use tare_catalog::{CatalogConfig, CatalogResolver, CatalogStore};
    use tare_core::{Detection, ProductRecord};

    struct FixedScale(f64);

    impl WeightSource for FixedScale {
        fn next_weight(&mut self) -> f64 {
            self.0
        }
    }

    /// Detector that signals when the burst enters it, then blocks until
    /// the test releases each frame. Lets a test hold a burst open.
    struct GatedDetector {
        entered: Option<tokio::sync::oneshot::Sender<()>>,
        release: std::sync::mpsc::Receiver<()>,
    }

    impl Detector for GatedDetector {
        fn detect(&mut self, _frame: &DynamicImage, _confidence_threshold: f64) -> Vec<Detection> {
            if let Some(entered) = self.entered.take() {
                let _ = entered.send(());
            }
            let _ = self.release.recv();
            vec![Detection::new("apple", 0.9)]
        }
    }

    async fn seeded_resolver() -> (CatalogStore, CatalogResolver) {
        let store = CatalogStore::new(CatalogConfig::in_memory())
            .await
            .unwrap();
        let resolver = store.resolver();
        resolver
            .insert_product(&ProductRecord::new("Apple", vec![0xAA], 3.20, 0.0))
            .await
            .unwrap();
        resolver.link_class("apple", "Apple").await.unwrap();
        (store, resolver)
    }

    fn state_with(detector: Box<dyn Detector>, resolver: CatalogResolver) -> SessionState {
        SessionState::new(SessionController::new(
            Box::new(SimulatedCamera::new()),
            detector,
            Box::new(FixedScale(1.5)),
            resolver,
            SessionConfig::default(),
        ))
    }

    #[tokio::test]
    async fn test_trigger_select_receipt_through_the_shared_handle() {
        let (_store, resolver) = seeded_resolver().await;
        let detector = ScriptedDetector::new(vec![vec![Detection::new("apple", 0.9)]]);
        let state = state_with(Box::new(detector), resolver);

        let outcome = state.trigger_burst().await.unwrap();
        assert!(matches!(outcome, BurstOutcome::Displayed { .. }));

        let selected = state.select(0).await.unwrap();
        assert_eq!(selected.name, "Apple");

        let line = state.receipt().await.unwrap();
        assert_eq!(line.total, 4.80);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.phase, SessionPhase::Selected);
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.weight_kg, Some(1.5));
        assert_eq!(snapshot.selected, Some(0));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_second_trigger_is_refused_while_burst_runs() {
        let (_store, resolver) = seeded_resolver().await;

        let (entered_tx, entered_rx) = tokio::sync::oneshot::channel();
        let (release_tx, release_rx) = std::sync::mpsc::channel();
        let detector = GatedDetector {
            entered: Some(entered_tx),
            release: release_rx,
        };
        let state = state_with(Box::new(detector), resolver);

        let first = {
            let state = state.clone();
            tokio::spawn(async move { state.trigger_burst().await })
        };

        // Wait until the first burst is provably inside its detector.
        entered_rx.await.unwrap();

        let err = state.trigger_burst().await.unwrap_err();
        assert_eq!(err, SessionError::BurstInProgress);

        // Release all five frames; the held burst finishes undisturbed.
        for _ in 0..5 {
            release_tx.send(()).unwrap();
        }
        let outcome = first.await.unwrap().unwrap();
        assert!(matches!(outcome, BurstOutcome::Displayed { .. }));

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.phase, SessionPhase::Displaying);
    }
}
