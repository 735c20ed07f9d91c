//! Kiosk configuration module.
//!
//! Configuration is loaded from `TARE_*` environment variables with
//! fallback to development defaults, then validated as a whole before
//! anything connects or captures.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tare_catalog::CatalogConfig;
use tare_core::validation::validate_confidence_threshold;
use tare_session::{DetectorModel, SessionConfig};

/// Kiosk configuration.
#[derive(Debug, Clone)]
pub struct KioskConfig {
    /// Catalog database file path
    pub db_path: PathBuf,

    /// Minimum confidence for a detection to count
    pub confidence_threshold: f64,

    /// Frames captured per detection burst
    pub burst_frames: usize,

    /// Lower bound of simulated weight readings (kg, inclusive)
    pub weight_min_kg: f64,

    /// Upper bound of simulated weight readings (kg, exclusive)
    pub weight_max_kg: f64,

    /// Detector weight variant a hardware build would load
    pub detector_model: DetectorModel,

    /// Budget for one catalog query, in seconds
    pub query_timeout_secs: u64,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("tare_dev.db"),
            confidence_threshold: 0.5,
            burst_frames: 5,
            weight_min_kg: 0.0,
            weight_max_kg: 5.0,
            detector_model: DetectorModel::Small,
            query_timeout_secs: 5,
        }
    }
}

impl KioskConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Variables
    /// - `TARE_DB_PATH` (default `tare_dev.db`)
    /// - `TARE_CONFIDENCE_THRESHOLD` (default `0.5`, range `[0, 1]`)
    /// - `TARE_BURST_FRAMES` (default `5`, at least 1)
    /// - `TARE_WEIGHT_MIN_KG` / `TARE_WEIGHT_MAX_KG` (default `0.0` / `5.0`)
    /// - `TARE_DETECTOR_MODEL` (`small` or `nano`, default `small`)
    /// - `TARE_QUERY_TIMEOUT_SECS` (default `5`, at least 1)
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = KioskConfig::default();

        let config = KioskConfig {
            db_path: env::var("TARE_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),

            confidence_threshold: env::var("TARE_CONFIDENCE_THRESHOLD")
                .unwrap_or_else(|_| defaults.confidence_threshold.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TARE_CONFIDENCE_THRESHOLD".to_string()))?,

            burst_frames: env::var("TARE_BURST_FRAMES")
                .unwrap_or_else(|_| defaults.burst_frames.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TARE_BURST_FRAMES".to_string()))?,

            weight_min_kg: env::var("TARE_WEIGHT_MIN_KG")
                .unwrap_or_else(|_| defaults.weight_min_kg.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TARE_WEIGHT_MIN_KG".to_string()))?,

            weight_max_kg: env::var("TARE_WEIGHT_MAX_KG")
                .unwrap_or_else(|_| defaults.weight_max_kg.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TARE_WEIGHT_MAX_KG".to_string()))?,

            detector_model: {
                let raw = env::var("TARE_DETECTOR_MODEL")
                    .unwrap_or_else(|_| defaults.detector_model.to_string());
                DetectorModel::parse(&raw)
                    .ok_or_else(|| ConfigError::InvalidValue("TARE_DETECTOR_MODEL".to_string()))?
            },

            query_timeout_secs: env::var("TARE_QUERY_TIMEOUT_SECS")
                .unwrap_or_else(|_| defaults.query_timeout_secs.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TARE_QUERY_TIMEOUT_SECS".to_string()))?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Cross-field checks, applied to defaults and overrides alike.
    fn validate(&self) -> Result<(), ConfigError> {
        if validate_confidence_threshold(self.confidence_threshold).is_err() {
            return Err(ConfigError::InvalidValue(
                "TARE_CONFIDENCE_THRESHOLD".to_string(),
            ));
        }
        if self.burst_frames < 1 {
            return Err(ConfigError::InvalidValue("TARE_BURST_FRAMES".to_string()));
        }
        if self.weight_min_kg < 0.0 || self.weight_min_kg >= self.weight_max_kg {
            return Err(ConfigError::InvalidWeightRange);
        }
        if self.query_timeout_secs < 1 {
            return Err(ConfigError::InvalidValue(
                "TARE_QUERY_TIMEOUT_SECS".to_string(),
            ));
        }
        Ok(())
    }

    /// Session tunables derived from this configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            confidence_threshold: self.confidence_threshold,
            burst_frames: self.burst_frames,
        }
    }

    /// Catalog connection settings derived from this configuration.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(&self.db_path)
            .query_timeout(Duration::from_secs(self.query_timeout_secs))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("TARE_WEIGHT_MIN_KG must be non-negative and less than TARE_WEIGHT_MAX_KG")]
    InvalidWeightRange,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = KioskConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.burst_frames, 5);
        assert_eq!(config.confidence_threshold, 0.5);
        assert_eq!(config.detector_model, DetectorModel::Small);
    }

    #[test]
    fn test_threshold_outside_unit_interval_is_rejected() {
        let config = KioskConfig {
            confidence_threshold: 1.5,
            ..KioskConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(ref name)) if name == "TARE_CONFIDENCE_THRESHOLD"
        ));
    }

    #[test]
    fn test_zero_frame_burst_is_rejected() {
        let config = KioskConfig {
            burst_frames: 0,
            ..KioskConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_weight_range_is_rejected() {
        let config = KioskConfig {
            weight_min_kg: 5.0,
            weight_max_kg: 5.0,
            ..KioskConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeightRange)
        ));
    }

    #[test]
    fn test_negative_weight_floor_is_rejected() {
        let config = KioskConfig {
            weight_min_kg: -1.0,
            ..KioskConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeightRange)
        ));
    }

    #[test]
    fn test_derived_configs_carry_the_tunables() {
        let config = KioskConfig {
            confidence_threshold: 0.7,
            burst_frames: 3,
            query_timeout_secs: 2,
            ..KioskConfig::default()
        };

        let session = config.session_config();
        assert_eq!(session.confidence_threshold, 0.7);
        assert_eq!(session.burst_frames, 3);

        let catalog = config.catalog_config();
        assert_eq!(catalog.query_timeout, Duration::from_secs(2));
    }
}
