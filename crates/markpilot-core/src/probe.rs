//! Pure detection assertions: no clicks, only presence/absence gates.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use markpilot_protocols::{Ctx, DetectConfig, DetectionCore, MarkerId};

use crate::executor::{ExecResult, Executor, ExecutorBase};
use crate::pacing::{Pacer, RandomPacer};

/// Asserts a marker appears within the detect timeout.
pub struct PresenceExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    marker: MarkerId,
    detect_timeout: Duration,
    after_pause: Duration,
}

impl PresenceExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("presence({marker})")),
            core,
            pacer: Box::new(RandomPacer::new()),
            marker,
            detect_timeout: Duration::from_secs(2),
            after_pause: Duration::ZERO,
        }
    }

    pub fn with_detect_timeout(mut self, timeout: Duration) -> Self {
        self.detect_timeout = timeout;
        self
    }

    pub fn with_after_pause(mut self, pause: Duration) -> Self {
        self.after_pause = pause;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }
}

impl Executor for PresenceExecutor {
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
        self.pacer.pause(self.after_pause);
        Ok(true)
    }
}

/// Asserts a marker is NOT found within the detect timeout.
pub struct AbsenceExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    marker: MarkerId,
    detect_timeout: Duration,
    after_pause: Duration,
}

impl AbsenceExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("absence({marker})")),
            core,
            pacer: Box::new(RandomPacer::new()),
            marker,
            detect_timeout: Duration::from_secs(2),
            after_pause: Duration::ZERO,
        }
    }

    pub fn with_detect_timeout(mut self, timeout: Duration) -> Self {
        self.detect_timeout = timeout;
        self
    }

    pub fn with_after_pause(mut self, pause: Duration) -> Self {
        self.after_pause = pause;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }
}

impl Executor for AbsenceExecutor {
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
        if detection.any_detected() {
            debug!(marker = %self.marker, "marker unexpectedly present");
            return Ok(false);
        }
        Ok(true)
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        self.pacer.pause(self.after_pause);
        Ok(true)
    }
}

/// No precondition; the action itself polls until the marker is
/// confirmed absent, failing if it is still present at the deadline.
pub struct AwaitAbsenceExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    marker: MarkerId,
    wait_timeout: Duration,
}

impl AwaitAbsenceExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("await-absence({marker})")),
            core,
            marker,
            wait_timeout: Duration::from_secs(3),
        }
    }

    pub fn with_wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }
}

impl Executor for AwaitAbsenceExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let lingering = self
            .core
            .loop_find_markers_absent(std::slice::from_ref(&self.marker), self.wait_timeout)?;
        Ok(!lingering.any_detected())
    }
}

/// Detect-then-wait-for-natural-disappearance, without any click:
/// the precondition probes for presence, the action waits for absence.
pub struct VanishExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    marker: MarkerId,
    probe_timeout: Duration,
    vanish_timeout: Duration,
}

impl VanishExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("vanish({marker})")),
            core,
            marker,
            probe_timeout: Duration::ZERO,
            vanish_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_vanish_timeout(mut self, timeout: Duration) -> Self {
        self.vanish_timeout = timeout;
        self
    }
}

impl Executor for VanishExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn check(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let detection = self.core.loop_find_markers(
            std::slice::from_ref(&self.marker),
            self.probe_timeout,
            &DetectConfig::default(),
        )?;
        Ok(detection.any_detected())
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let lingering = self
            .core
            .loop_find_markers_absent(std::slice::from_ref(&self.marker), self.vanish_timeout)?;
        if lingering.any_detected() {
            debug!(marker = %self.marker, "marker did not vanish in time");
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "probe_tests.rs"]
mod tests;
