//! Detection seam.
//!
//! A [`Detector`] turns one frame into raw detections, confidence and
//! all. The configured threshold travels along as a pruning hint, but
//! the authoritative filter runs later, during aggregation.

use std::fmt;

use image::DynamicImage;
use tare_core::Detection;

/// One-frame object detector.
pub trait Detector: Send {
    /// Runs detection on a single frame.
    ///
    /// `confidence_threshold` is a pruning hint for backends that filter
    /// inside the model, the way YOLO-family runtimes take `conf`.
    /// Implementations may still return detections below the threshold;
    /// the aggregator applies the authoritative filter either way. An
    /// empty vector means nothing was seen.
    fn detect(&mut self, frame: &DynamicImage, confidence_threshold: f64) -> Vec<Detection>;
}

/// Which weight variant a hardware detector backend loads.
///
/// The simulated detector ignores this; kiosk configuration still
/// records it so deployment configs read the same on dev benches and
/// real scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorModel {
    /// Full-size weights, the production default.
    Small,
    /// Reduced weights for low-power hardware.
    Nano,
}

impl DetectorModel {
    /// Parses a configuration value, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "small" => Some(DetectorModel::Small),
            "nano" => Some(DetectorModel::Nano),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorModel::Small => "small",
            DetectorModel::Nano => "nano",
        }
    }
}

impl fmt::Display for DetectorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detector double that replays a programmed script.
///
/// Each call to [`detect`](Detector::detect) returns the next entry in
/// the script, cycling when it runs out. Tests and demo kiosks use this
/// to stage exact per-frame detections.
#[derive(Debug, Clone)]
pub struct ScriptedDetector {
    script: Vec<Vec<Detection>>,
    cursor: usize,
}

impl ScriptedDetector {
    /// Replays `script` frame by frame, cycling at the end.
    pub fn new(script: Vec<Vec<Detection>>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A detector that never sees anything.
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }
}

impl Detector for ScriptedDetector {
    // Replays the script verbatim, below-threshold entries included, so
    // tests exercise the aggregator's own filtering.
    fn detect(&mut self, _frame: &DynamicImage, _confidence_threshold: f64) -> Vec<Detection> {
        if self.script.is_empty() {
            return Vec::new();
        }
        let detections = self.script[self.cursor % self.script.len()].clone();
        self.cursor += 1;
        detections
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_frame() -> DynamicImage {
        DynamicImage::new_rgb8(4, 4)
    }

    #[test]
    fn test_scripted_detector_replays_in_order_and_cycles() {
        let mut detector = ScriptedDetector::new(vec![
            vec![Detection::new("apple", 0.9)],
            vec![Detection::new("banana", 0.8)],
        ]);
        let frame = blank_frame();

        assert_eq!(detector.detect(&frame, 0.5)[0].label, "apple");
        assert_eq!(detector.detect(&frame, 0.5)[0].label, "banana");
        assert_eq!(detector.detect(&frame, 0.5)[0].label, "apple");
    }

    #[test]
    fn test_scripted_detector_does_not_prune_by_threshold() {
        let mut detector = ScriptedDetector::new(vec![vec![Detection::new("apple", 0.1)]]);
        let detections = detector.detect(&blank_frame(), 0.9);
        assert_eq!(detections.len(), 1);
    }

    #[test]
    fn test_silent_detector_sees_nothing() {
        let mut detector = ScriptedDetector::silent();
        assert!(detector.detect(&blank_frame(), 0.5).is_empty());
    }

    #[test]
    fn test_model_parses_case_insensitively() {
        assert_eq!(DetectorModel::parse("small"), Some(DetectorModel::Small));
        assert_eq!(DetectorModel::parse("SMALL"), Some(DetectorModel::Small));
        assert_eq!(DetectorModel::parse("Nano"), Some(DetectorModel::Nano));
        assert_eq!(DetectorModel::parse("large"), None);
    }

    #[test]
    fn test_model_round_trips_through_as_str() {
        for model in [DetectorModel::Small, DetectorModel::Nano] {
            assert_eq!(DetectorModel::parse(model.as_str()), Some(model));
        }
    }
}
