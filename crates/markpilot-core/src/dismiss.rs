//! Click-until-the-marker-disappears strategies.
//!
//! Both variants compensate for clicks that are visually acknowledged but
//! do not immediately dismiss their target, e.g. a dialog with a closing
//! animation: after the first click they alternate short absence polls
//! with re-clicks until the marker is gone or the overall budget lapses.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use markpilot_protocols::{
    AutomationError, Ctx, DetectConfig, DetectionCore, DetectionResult, MarkerId, Timeout,
};

use crate::executor::{ExecResult, Executor, ExecutorBase};
use crate::pacing::{Pacer, RandomPacer};

/// Clicks a marker, then re-clicks on a fixed interval until it is gone.
///
/// The precondition requires the marker to be present; the action fails
/// if the marker outlives the overall timeout.
pub struct ClickUntilGoneExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    marker: MarkerId,
    detect_timeout: Duration,
    overall_timeout: Duration,
    check_interval: Duration,
    before_sleep: Duration,
    after_sleep: Duration,
}

impl ClickUntilGoneExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("click-until-gone({marker})")),
            core,
            pacer: Box::new(RandomPacer::new()),
            marker,
            detect_timeout: Duration::from_secs(2),
            overall_timeout: Duration::from_secs(5),
            check_interval: Duration::from_millis(500),
            before_sleep: Duration::ZERO,
            after_sleep: Duration::from_millis(100),
        }
    }

    pub fn with_detect_timeout(mut self, timeout: Duration) -> Self {
        self.detect_timeout = timeout;
        self
    }

    /// Budget for the whole dismiss loop.
    pub fn with_overall_timeout(mut self, timeout: Duration) -> Self {
        self.overall_timeout = timeout;
        self
    }

    /// Per-iteration absence poll budget.
    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    pub fn with_sleeps(mut self, before: Duration, after: Duration) -> Self {
        self.before_sleep = before;
        self.after_sleep = after;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    fn detect(&self) -> Result<DetectionResult, AutomationError> {
        self.core.loop_find_markers(
            std::slice::from_ref(&self.marker),
            self.detect_timeout,
            &DetectConfig::default(),
        )
    }
}

impl Executor for ClickUntilGoneExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn check(&mut self, _ctx: &mut Ctx) -> ExecResult {
        Ok(self.detect()?.any_detected())
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        if !self.before_sleep.is_zero() {
            self.pacer.sleep(self.before_sleep);
        }

        let detection = self.detect()?;
        let Some(region) = detection.region() else {
            return Ok(false);
        };
        debug!(marker = %self.marker, region = ?region, "clicking marker");
        self.core
            .click_in_rect(region, None, Some(Duration::from_secs(1)))?;

        let mut timeout = Timeout::new(self.overall_timeout);
        while timeout.not_expired() {
            let lingering = self
                .core
                .loop_find_markers_absent(std::slice::from_ref(&self.marker), self.check_interval)?;
            if !lingering.any_detected() {
                break;
            }

            debug!(
                marker = %self.marker,
                checks = timeout.checks(),
                "marker still visible, clicking again"
            );
            if let Some(region) = lingering.region() {
                self.core
                    .click_in_rect(region, None, Some(Duration::from_secs(1)))?;
            }
        }

        if timeout.is_expired() {
            debug!(marker = %self.marker, "marker still visible after overall timeout");
            return Ok(false);
        }

        if !self.after_sleep.is_zero() {
            self.pacer.sleep(self.after_sleep);
        }
        Ok(true)
    }
}

/// Best-effort dismiss: succeeds immediately when the marker is absent at
/// a short first probe, otherwise runs the re-click loop with the
/// per-iteration poll set to a fifth of the overall budget.
pub struct TryClickUntilGoneExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    marker: MarkerId,
    probe_timeout: Duration,
    overall_timeout: Duration,
}

impl TryClickUntilGoneExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("try-click-until-gone({marker})")),
            core,
            marker,
            probe_timeout: Duration::from_millis(500),
            overall_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_overall_timeout(mut self, timeout: Duration) -> Self {
        self.overall_timeout = timeout;
        self
    }
}

impl Executor for TryClickUntilGoneExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let probe = self.core.loop_find_markers(
            std::slice::from_ref(&self.marker),
            self.probe_timeout,
            &DetectConfig::default(),
        )?;
        if !probe.any_detected() {
            return Ok(true);
        }

        let interval = self.overall_timeout / 5;
        let mut timeout = Timeout::new(self.overall_timeout);
        while timeout.not_expired() {
            let lingering = self
                .core
                .loop_find_markers_absent(std::slice::from_ref(&self.marker), interval)?;
            if !lingering.any_detected() {
                return Ok(true);
            }

            debug!(
                marker = %self.marker,
                checks = timeout.checks(),
                "marker still visible, clicking again"
            );
            if let Some(region) = lingering.region() {
                self.core.click_in_rect(region, None, None)?;
            }
        }

        debug!(marker = %self.marker, "marker still visible after overall timeout");
        Ok(false)
    }
}

#[cfg(test)]
#[path = "dismiss_tests.rs"]
mod tests;
