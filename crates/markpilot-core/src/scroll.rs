//! Detect-and-scroll.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use markpilot_protocols::{Ctx, DetectConfig, DetectionCore, MarkerId};

use crate::executor::{ExecResult, Executor, ExecutorBase};
use crate::pacing::{Pacer, RandomPacer};

/// Finds a marker and issues a wheel movement at a random point inside
/// its detected box. Scrolls down unless configured otherwise.
pub struct ScrollExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    marker: MarkerId,
    down: bool,
    distance: u32,
    detect_timeout: Duration,
    after_sleep: Duration,
}

impl ScrollExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>, distance: u32) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("scroll({marker})")),
            core,
            pacer: Box::new(RandomPacer::new()),
            marker,
            down: true,
            distance,
            detect_timeout: Duration::from_secs(2),
            after_sleep: Duration::ZERO,
        }
    }

    pub fn scrolling_up(mut self) -> Self {
        self.down = false;
        self
    }

    pub fn with_detect_timeout(mut self, timeout: Duration) -> Self {
        self.detect_timeout = timeout;
        self
    }

    pub fn with_after_sleep(mut self, sleep: Duration) -> Self {
        self.after_sleep = sleep;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }
}

impl Executor for ScrollExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn check(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let detection = self.core.loop_find_markers(
            std::slice::from_ref(&self.marker),
            self.detect_timeout,
            &DetectConfig::default(),
        )?;
        Ok(detection.any_detected())
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let detection = self.core.loop_find_markers(
            std::slice::from_ref(&self.marker),
            self.detect_timeout,
            &DetectConfig::default(),
        )?;
        let Some(region) = detection.region() else {
            return Ok(false);
        };

        let at = self.pacer.point_in(&region);
        debug!(marker = %self.marker, down = self.down, distance = self.distance, at = ?at, "scrolling at marker");
        self.core.wheel_move(self.down, self.distance, at)?;

        if !self.after_sleep.is_zero() {
            self.pacer.sleep(self.after_sleep);
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "scroll_tests.rs"]
mod tests;
