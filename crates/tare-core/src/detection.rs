//! # Detection Module
//!
//! Per-frame detection results and the burst aggregation policy.
//!
//! ## How a Burst Becomes a Label Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Burst Aggregation                                   │
//! │                                                                         │
//! │  frame 1: [banana 0.91, apple 0.32]                                     │
//! │  frame 2: (capture miss - never reaches the aggregator)                 │
//! │  frame 3: [banana 0.88]                                                 │
//! │  frame 4: []                                                            │
//! │  frame 5: [orange 0.50]                                                 │
//! │       │                                                                 │
//! │       ▼  threshold 0.5, union across frames                             │
//! │  { "banana", "orange" }                                                 │
//! │                                                                         │
//! │  • apple dropped: 0.32 < threshold                                      │
//! │  • orange kept: confidence equal to threshold counts                    │
//! │  • banana listed once: the result is a set                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Union, Not Majority Vote?
//! A single frame voting for a label above threshold qualifies it. Motion
//! blur and occlusion make individual frames miss items, so the burst trades
//! false positives for recall; the operator visually confirms the right item
//! from the displayed list afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Detection Types
// =============================================================================

/// One scored class prediction from the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label from the detector's vocabulary (e.g. "banana").
    pub label: String,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}

impl Detection {
    /// Creates a detection from a label and confidence score.
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Detection {
            label: label.into(),
            confidence,
        }
    }
}

/// One camera sample's inference result.
///
/// Produced per frame during a capture burst and consumed immediately by
/// [`aggregate`]; never stored. A frame the camera failed to deliver never
/// becomes a `DetectionFrame` at all - the burst just sees fewer frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionFrame {
    /// Scored predictions in the order the detector emitted them.
    pub detections: Vec<Detection>,
}

impl DetectionFrame {
    /// Creates a frame from detector output.
    pub fn new(detections: Vec<Detection>) -> Self {
        DetectionFrame { detections }
    }

    /// A frame the detector scored but found nothing in.
    pub fn empty() -> Self {
        DetectionFrame::default()
    }

    /// Whether the detector found anything in this frame.
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

/// Distinct class labels surviving the burst's confidence filter.
///
/// A `BTreeSet` keeps iteration lexicographic, so catalog lookups and log
/// lines derived from one burst are stable run to run.
pub type LabelSet = BTreeSet<String>;

// =============================================================================
// Aggregation
// =============================================================================

/// Unions the labels seen across a burst of frames, keeping a (label,
/// confidence) pair iff `confidence >= confidence_threshold`.
///
/// The boundary is inclusive: a detection scored exactly at the threshold
/// qualifies. The result is independent of frame order and of how detections
/// are ordered within a frame. An empty result is the "no detections"
/// outcome the session surfaces to the operator; it is not an error.
///
/// ## Arguments
/// * `frames` - The burst's per-frame results (capture misses already
///   excluded by the caller)
/// * `confidence_threshold` - Minimum confidence in [0, 1]
///
/// ## Example
/// ```rust
/// use tare_core::detection::{aggregate, Detection, DetectionFrame};
///
/// let frames = vec![
///     DetectionFrame::new(vec![
///         Detection::new("banana", 0.91),
///         Detection::new("apple", 0.32),
///     ]),
///     DetectionFrame::new(vec![Detection::new("banana", 0.88)]),
/// ];
///
/// let labels = aggregate(&frames, 0.5);
/// assert_eq!(labels.len(), 1);
/// assert!(labels.contains("banana"));
/// ```
pub fn aggregate(frames: &[DetectionFrame], confidence_threshold: f64) -> LabelSet {
    let mut labels = LabelSet::new();
    for frame in frames {
        for detection in &frame.detections {
            if detection.confidence >= confidence_threshold {
                labels.insert(detection.label.clone());
            }
        }
    }
    labels
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(detections: &[(&str, f64)]) -> DetectionFrame {
        DetectionFrame::new(
            detections
                .iter()
                .map(|(label, confidence)| Detection::new(*label, *confidence))
                .collect(),
        )
    }

    #[test]
    fn test_unions_labels_across_frames() {
        let frames = vec![
            frame(&[("banana", 0.91), ("apple", 0.87)]),
            frame(&[("banana", 0.88)]),
            frame(&[("orange", 0.75)]),
        ];

        let labels = aggregate(&frames, 0.5);
        assert_eq!(labels.len(), 3);
        assert!(labels.contains("banana"));
        assert!(labels.contains("apple"));
        assert!(labels.contains("orange"));
    }

    #[test]
    fn test_deduplicates_repeated_labels() {
        let frames = vec![
            frame(&[("banana", 0.91), ("banana", 0.93)]),
            frame(&[("banana", 0.88)]),
        ];

        let labels = aggregate(&frames, 0.5);
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn test_frame_order_is_irrelevant() {
        let a = frame(&[("banana", 0.91), ("apple", 0.61)]);
        let b = frame(&[("orange", 0.75)]);
        let c = frame(&[("banana", 0.52)]);

        let forward = aggregate(&[a.clone(), b.clone(), c.clone()], 0.5);
        let backward = aggregate(&[c, b, a], 0.5);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_drops_below_threshold_keeps_boundary() {
        let frames = vec![frame(&[
            ("below", 0.4999),
            ("exactly", 0.5),
            ("above", 0.5001),
        ])];

        let labels = aggregate(&frames, 0.5);
        assert!(!labels.contains("below"));
        assert!(labels.contains("exactly"));
        assert!(labels.contains("above"));
    }

    #[test]
    fn test_threshold_extremes() {
        let frames = vec![frame(&[("sure", 1.0), ("noise", 0.0)])];

        // Threshold 0.0 admits everything
        let all = aggregate(&frames, 0.0);
        assert_eq!(all.len(), 2);

        // Threshold 1.0 admits only perfect confidence
        let only_sure = aggregate(&frames, 1.0);
        assert_eq!(only_sure.len(), 1);
        assert!(only_sure.contains("sure"));
    }

    #[test]
    fn test_empty_burst_yields_empty_set() {
        // Every frame failed to capture: the aggregator sees no frames at all
        let labels = aggregate(&[], 0.5);
        assert!(labels.is_empty());
    }

    #[test]
    fn test_scored_but_empty_frames_yield_empty_set() {
        let frames = vec![DetectionFrame::empty(), DetectionFrame::empty()];
        let labels = aggregate(&frames, 0.5);
        assert!(labels.is_empty());
    }
}
