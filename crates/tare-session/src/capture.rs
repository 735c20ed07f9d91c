//! Frame capture seam.
//!
//! The controller reads frames through [`CaptureSource`] so hardware
//! cameras and test doubles are interchangeable. A miss (`None`) is a
//! normal occurrence on real capture devices; bursts simply continue
//! with the frames they get.

use image::{DynamicImage, Rgb, RgbImage};

/// Default capture resolution, matching the detector's input size.
pub const FRAME_WIDTH: u32 = 640;
pub const FRAME_HEIGHT: u32 = 640;

/// One frame provider.
pub trait CaptureSource: Send {
    /// Attempts to read a single frame.
    ///
    /// Returns `None` when the device has no frame ready. Callers skip
    /// the miss and move on; missing frames never abort a burst.
    fn try_read_frame(&mut self) -> Option<DynamicImage>;
}

/// Deterministic stand-in for a kiosk camera.
///
/// Produces solid frames whose shade advances with every read, so
/// consecutive frames differ, and can be configured to miss every Nth
/// read to exercise capture-gap handling.
#[derive(Debug)]
pub struct SimulatedCamera {
    width: u32,
    height: u32,
    frame_counter: u64,
    miss_every: Option<u64>,
}

impl SimulatedCamera {
    /// A camera that always delivers a frame.
    pub fn new() -> Self {
        Self {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            frame_counter: 0,
            miss_every: None,
        }
    }

    /// Makes every `n`th read return `None`.
    ///
    /// `n = 1` misses every read, which models an unplugged camera.
    pub fn with_miss_every(mut self, n: u64) -> Self {
        self.miss_every = Some(n.max(1));
        self
    }
}

impl Default for SimulatedCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptureSource for SimulatedCamera {
    fn try_read_frame(&mut self) -> Option<DynamicImage> {
        self.frame_counter += 1;

        if let Some(n) = self.miss_every {
            if self.frame_counter % n == 0 {
                return None;
            }
        }

        let shade = (self.frame_counter % 256) as u8;
        let pixels = RgbImage::from_pixel(self.width, self.height, Rgb([shade, shade, shade]));
        Some(DynamicImage::ImageRgb8(pixels))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_camera_delivers_frames_of_detector_size() {
        let mut camera = SimulatedCamera::new();
        let frame = camera.try_read_frame().unwrap();
        assert_eq!(frame.width(), FRAME_WIDTH);
        assert_eq!(frame.height(), FRAME_HEIGHT);
    }

    #[test]
    fn test_consecutive_frames_differ() {
        let mut camera = SimulatedCamera::new();
        let first = camera.try_read_frame().unwrap();
        let second = camera.try_read_frame().unwrap();
        assert_ne!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_miss_every_second_read() {
        let mut camera = SimulatedCamera::new().with_miss_every(2);
        assert!(camera.try_read_frame().is_some());
        assert!(camera.try_read_frame().is_none());
        assert!(camera.try_read_frame().is_some());
        assert!(camera.try_read_frame().is_none());
    }

    #[test]
    fn test_miss_every_read_models_unplugged_camera() {
        let mut camera = SimulatedCamera::new().with_miss_every(1);
        for _ in 0..5 {
            assert!(camera.try_read_frame().is_none());
        }
    }
}
