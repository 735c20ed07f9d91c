//! # Tare Session
//!
//! Burst orchestration and session state for the Tare smart scale.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      tare-session                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  state       Shared handle, one burst at a time          │
//! │  controller  Capture -> detect -> aggregate -> resolve   │
//! │  session     Display state and phase machine             │
//! │  capture     CaptureSource trait + SimulatedCamera       │
//! │  detector    Detector trait + ScriptedDetector           │
//! │  weight      WeightSource trait + SimulatedScale         │
//! └──────────────────────────────────────────────────────────┘
//!        │                             │
//!        ▼                             ▼
//!    tare-core                    tare-catalog
//! ```
//!
//! Hardware enters through three single-method traits, so development
//! kiosks run entirely on simulated devices and a hardware build swaps
//! implementations without touching the controller.

pub mod capture;
pub mod controller;
pub mod detector;
pub mod error;
pub mod session;
pub mod state;
pub mod weight;

pub use capture::{CaptureSource, SimulatedCamera};
pub use controller::{BurstOutcome, SessionConfig, SessionController};
pub use detector::{Detector, DetectorModel, ScriptedDetector};
pub use error::{SessionError, SessionResult};
pub use session::{Session, SessionPhase};
pub use state::{SessionSnapshot, SessionState};
pub use weight::{SimulatedScale, WeightSource};
