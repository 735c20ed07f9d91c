//! Burst orchestration.
//!
//! [`SessionController`] owns the hardware seams and drives one burst at
//! a time: read frames, detect, aggregate labels, resolve products,
//! assign a weight, update the session. Catalog failures are handled
//! here, not propagated; the session always lands in a well-defined
//! phase.

use tracing::{debug, info, warn};

use tare_catalog::CatalogResolver;
use tare_core::{
    aggregate, floor_round, price_line, DetectionFrame, ProductRecord, ReceiptLine,
    DEFAULT_CONFIDENCE_THRESHOLD, WEIGHT_DECIMALS,
};

use crate::capture::CaptureSource;
use crate::detector::Detector;
use crate::error::{SessionError, SessionResult};
use crate::session::Session;
use crate::weight::WeightSource;

/// Tunables for a burst.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Detections below this confidence are ignored during aggregation.
    pub confidence_threshold: f64,

    /// Frames captured per burst.
    pub burst_frames: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            burst_frames: 5,
        }
    }
}

/// How a burst ended.
///
/// All three are normal endings; none of them is an error to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum BurstOutcome {
    /// No label cleared the confidence threshold across the whole burst.
    /// The session is idle.
    NoDetections,

    /// The catalog could not answer. The session is back to pristine
    /// idle; nothing from before the burst survives.
    CatalogUnavailable { reason: String },

    /// Resolution succeeded and the display was replaced. `products` may
    /// be empty when no detected label has a catalog entry; a fresh
    /// weight is assigned either way.
    Displayed {
        products: Vec<ProductRecord>,
        weight_kg: f64,
    },
}

/// Drives weighing sessions over pluggable hardware.
pub struct SessionController {
    camera: Box<dyn CaptureSource>,
    detector: Box<dyn Detector>,
    scale: Box<dyn WeightSource>,
    resolver: CatalogResolver,
    config: SessionConfig,
    session: Session,
}

impl SessionController {
    pub fn new(
        camera: Box<dyn CaptureSource>,
        detector: Box<dyn Detector>,
        scale: Box<dyn WeightSource>,
        resolver: CatalogResolver,
        config: SessionConfig,
    ) -> Self {
        Self {
            camera,
            detector,
            scale,
            resolver,
            config,
            session: Session::new(),
        }
    }

    /// Runs one detection burst to completion.
    ///
    /// Any previous display is discarded up front, so a re-trigger never
    /// shows leftovers even if the new burst finds nothing.
    ///
    /// ## Returns
    /// The [`BurstOutcome`] describing how the burst ended. Capture
    /// misses are skipped silently; a burst where every capture misses
    /// ends in [`BurstOutcome::NoDetections`].
    pub async fn run_burst(&mut self) -> BurstOutcome {
        self.session.clear();
        info!(frames = self.config.burst_frames, "Starting detection burst");

        let mut frames = Vec::with_capacity(self.config.burst_frames);
        for attempt in 0..self.config.burst_frames {
            match self.camera.try_read_frame() {
                Some(image) => {
                    let detections = self
                        .detector
                        .detect(&image, self.config.confidence_threshold);
                    debug!(
                        frame = attempt,
                        detections = detections.len(),
                        "Frame processed"
                    );
                    frames.push(DetectionFrame::new(detections));
                }
                None => {
                    debug!(frame = attempt, "Capture miss, skipping frame");
                }
            }
        }

        let labels = aggregate(&frames, self.config.confidence_threshold);
        if labels.is_empty() {
            info!("No detections above threshold, session stays idle");
            return BurstOutcome::NoDetections;
        }
        debug!(labels = labels.len(), "Aggregated detection labels");

        match self.resolver.resolve(&labels).await {
            Ok(products) => {
                let weight_kg = floor_round(self.scale.next_weight(), WEIGHT_DECIMALS);
                self.session.display(products.clone(), weight_kg);
                info!(
                    products = products.len(),
                    weight_kg, "Burst complete, display updated"
                );
                BurstOutcome::Displayed {
                    products,
                    weight_kg,
                }
            }
            Err(source) => {
                // No stale state: the shopper sees an empty idle screen,
                // not last burst's products with this burst's labels.
                self.session.clear();
                warn!(error = %source, "Catalog unavailable, session reset to idle");
                BurstOutcome::CatalogUnavailable {
                    reason: source.to_string(),
                }
            }
        }
    }

    /// Read-only view of the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Selects the displayed product at `index` for the receipt.
    pub fn select(&mut self, index: usize) -> SessionResult<&ProductRecord> {
        let record = self.session.select(index)?;
        info!(index, product = %record.name, "Product selected");
        Ok(record)
    }

    /// Prices the selected product at the displayed weight.
    ///
    /// ## Errors
    /// * [`SessionError::NoSelection`] before any product is chosen
    /// * [`SessionError::Validation`] if stored values fail range checks
    pub fn receipt(&self) -> SessionResult<ReceiptLine> {
        let record = self.session.selection().ok_or(SessionError::NoSelection)?;
        let weight_kg = self.session.weight_kg().ok_or(SessionError::NoSelection)?;
        Ok(price_line(record, weight_kg)?)
    }
}

// =============================================================================
// Tests
// =============================================================================
