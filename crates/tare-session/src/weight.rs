//! Weight reading seam.
//!
//! Real deployments read a load cell; development kiosks simulate one.
//! Either way the controller just asks for the next reading.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One weight reading provider.
pub trait WeightSource: Send {
    /// Produces the next gross weight reading in kilograms.
    ///
    /// Raw precision; the controller rounds for display.
    fn next_weight(&mut self) -> f64;
}

/// Simulated load cell producing uniform readings in `[min_kg, max_kg)`.
///
/// Seeded from entropy once at construction, so a kiosk process gets one
/// random sequence for its lifetime. Callers validate `min_kg < max_kg`
/// before construction.
pub struct SimulatedScale {
    rng: StdRng,
    min_kg: f64,
    max_kg: f64,
}

impl SimulatedScale {
    pub fn new(min_kg: f64, max_kg: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            min_kg,
            max_kg,
        }
    }
}

impl WeightSource for SimulatedScale {
    fn next_weight(&mut self) -> f64 {
        self.rng.gen_range(self.min_kg..self.max_kg)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_stay_inside_the_configured_range() {
        let mut scale = SimulatedScale::new(0.0, 5.0);
        for _ in 0..1000 {
            let reading = scale.next_weight();
            assert!((0.0..5.0).contains(&reading), "out of range: {reading}");
        }
    }

    #[test]
    fn test_narrow_range_is_respected() {
        let mut scale = SimulatedScale::new(2.0, 2.5);
        for _ in 0..100 {
            let reading = scale.next_weight();
            assert!((2.0..2.5).contains(&reading));
        }
    }

    #[test]
    fn test_readings_vary() {
        let mut scale = SimulatedScale::new(0.0, 5.0);
        let first = scale.next_weight();
        let varied = (0..10).any(|_| scale.next_weight() != first);
        assert!(varied);
    }
}
