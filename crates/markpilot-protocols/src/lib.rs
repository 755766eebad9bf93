//! # Markpilot Protocols
//!
//! Contract definitions for the Markpilot screen automation framework.
//! Contains value types and collaborator traits - no engine implementations.
//!
//! ## Core Types
//!
//! - [`Rect`] / [`Point`] / [`CropRate`] - screen geometry
//! - [`Timeout`] - wall-clock deadline tracker for polling loops
//! - [`DetectionResult`] - what the detection engine found, with confidence
//! - [`DetectionCore`] - the detection/input collaborator trait
//! - [`Ctx`] - typed context threaded through executor hooks
//! - [`AutomationError`] - fatal collaborator failures

pub mod ctx;
pub mod detection;
pub mod error;
pub mod geometry;
pub mod timeout;
pub mod traits;

pub use ctx::Ctx;
pub use detection::{DetectConfig, DetectionResult, MarkerId, MarkerMatch};
pub use error::AutomationError;
pub use geometry::{CropRate, Point, Rect};
pub use timeout::Timeout;
pub use traits::DetectionCore;
