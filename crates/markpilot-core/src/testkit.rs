//! Shared test doubles: a scripted detection/input core and a pacer that
//! records pauses instead of sleeping.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use markpilot_protocols::{
    AutomationError, DetectConfig, DetectionCore, DetectionResult, MarkerId, MarkerMatch, Point,
    Rect,
};

use crate::pacing::Pacer;

pub(crate) fn found(marker: &str, region: Rect, confidence: f64) -> DetectionResult {
    DetectionResult::new(
        vec![marker.to_string()],
        vec![MarkerMatch::new(marker, region, confidence)],
    )
}

pub(crate) fn missing(marker: &str) -> DetectionResult {
    DetectionResult::not_found(vec![marker.to_string()])
}

/// Scripted [`DetectionCore`]: detection calls pop pre-loaded results and
/// input calls are recorded. An empty find queue reports "not found"; an
/// empty absent queue reports "confirmed absent" unless a sticky result
/// was installed.
#[derive(Default)]
pub(crate) struct FakeCore {
    find_queue: Mutex<VecDeque<DetectionResult>>,
    absent_queue: Mutex<VecDeque<DetectionResult>>,
    absent_sticky: Option<DetectionResult>,
    absent_delay: Duration,
    find_calls: Mutex<Vec<Vec<MarkerId>>>,
    absent_calls: Mutex<u32>,
    clicks: Mutex<Vec<Rect>>,
    wheels: Mutex<Vec<(bool, u32, Point)>>,
}

impl FakeCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_find(self, result: DetectionResult) -> Self {
        self.find_queue.lock().unwrap().push_back(result);
        self
    }

    pub fn on_absent(self, result: DetectionResult) -> Self {
        self.absent_queue.lock().unwrap().push_back(result);
        self
    }

    /// Every absent poll past the queued ones keeps reporting `result`.
    pub fn absent_stuck(mut self, result: DetectionResult) -> Self {
        self.absent_sticky = Some(result);
        self
    }

    /// Simulates the blocking poll interval of a real absent check.
    pub fn with_absent_delay(mut self, delay: Duration) -> Self {
        self.absent_delay = delay;
        self
    }

    pub fn clicks(&self) -> Vec<Rect> {
        self.clicks.lock().unwrap().clone()
    }

    pub fn wheels(&self) -> Vec<(bool, u32, Point)> {
        self.wheels.lock().unwrap().clone()
    }

    pub fn find_count(&self) -> usize {
        self.find_calls.lock().unwrap().len()
    }

    pub fn absent_count(&self) -> u32 {
        *self.absent_calls.lock().unwrap()
    }
}

impl DetectionCore for FakeCore {
    fn loop_find_markers(
        &self,
        markers: &[MarkerId],
        _timeout: Duration,
        _config: &DetectConfig,
    ) -> Result<DetectionResult, AutomationError> {
        self.find_calls.lock().unwrap().push(markers.to_vec());
        Ok(self
            .find_queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| DetectionResult::not_found(markers.to_vec())))
    }

    fn loop_find_markers_absent(
        &self,
        markers: &[MarkerId],
        _timeout: Duration,
    ) -> Result<DetectionResult, AutomationError> {
        *self.absent_calls.lock().unwrap() += 1;
        if !self.absent_delay.is_zero() {
            std::thread::sleep(self.absent_delay);
        }
        let queued = self.absent_queue.lock().unwrap().pop_front();
        Ok(queued
            .or_else(|| self.absent_sticky.clone())
            .unwrap_or_else(|| DetectionResult::not_found(markers.to_vec())))
    }

    fn click_in_rect(
        &self,
        rect: Rect,
        _before: Option<Duration>,
        _after: Option<Duration>,
    ) -> Result<(), AutomationError> {
        self.clicks.lock().unwrap().push(rect);
        Ok(())
    }

    fn wheel_move(&self, down: bool, distance: u32, at: Point) -> Result<(), AutomationError> {
        self.wheels.lock().unwrap().push((down, distance, at));
        Ok(())
    }
}

/// Deterministic pacer: jitter factor 1.0, `between` picks the lower
/// bound, points land on the rect center, sleeps are recorded instead of
/// performed.
#[derive(Default)]
pub(crate) struct RecordingPacer {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slept_handle(&self) -> Arc<Mutex<Vec<Duration>>> {
        Arc::clone(&self.slept)
    }
}

impl Pacer for RecordingPacer {
    fn sleep(&mut self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }

    fn jitter(&mut self, base: Duration) -> Duration {
        base
    }

    fn between(&mut self, lo: Duration, _hi: Duration) -> Duration {
        lo
    }

    fn point_in(&mut self, rect: &Rect) -> Point {
        rect.center()
    }
}
