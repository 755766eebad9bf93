//! Detection/input collaborator trait.

use std::time::Duration;

use crate::detection::{DetectConfig, DetectionResult, MarkerId};
use crate::error::AutomationError;
use crate::geometry::{Point, Rect};

/// The detection engine and input injector the executor core drives.
///
/// Every method blocks the calling thread: detection calls poll captured
/// frames until found/confirmed-absent or `timeout` lapses, input calls
/// return once the event has been issued (plus any requested pauses).
pub trait DetectionCore: Send + Sync {
    /// Polls for the given markers until found or `timeout` lapses.
    ///
    /// A lapsed timeout is not an error; it yields a result whose
    /// `any_detected()` is false.
    fn loop_find_markers(
        &self,
        markers: &[MarkerId],
        timeout: Duration,
        config: &DetectConfig,
    ) -> Result<DetectionResult, AutomationError>;

    /// Polls until the markers are confirmed absent or `timeout` lapses.
    ///
    /// The result's `any_detected()` is true while the markers are still
    /// on screen, and the matches carry their current geometry so callers
    /// can act on the lingering marker (e.g. click it again).
    fn loop_find_markers_absent(
        &self,
        markers: &[MarkerId],
        timeout: Duration,
    ) -> Result<DetectionResult, AutomationError>;

    /// Issues a primary click at a randomized point within `rect`,
    /// sleeping `before`/`after` around the click when given.
    fn click_in_rect(
        &self,
        rect: Rect,
        before: Option<Duration>,
        after: Option<Duration>,
    ) -> Result<(), AutomationError>;

    /// Issues a scroll wheel movement at a screen point.
    fn wheel_move(&self, down: bool, distance: u32, at: Point) -> Result<(), AutomationError>;
}
