//! Best-effort clicks: the marker may legitimately be absent.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use markpilot_protocols::{Ctx, DetectConfig, DetectionCore, MarkerId};

use crate::executor::{ExecResult, Executor, ExecutorBase};
use crate::pacing::{Pacer, RandomPacer};

/// Clicks a marker if a short probe finds it; absence is success.
pub struct TryClickExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    marker: MarkerId,
    probe_timeout: Duration,
    before_pause: Duration,
    after_pause: Duration,
}

impl TryClickExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("try-click({marker})")),
            core,
            pacer: Box::new(RandomPacer::new()),
            marker,
            probe_timeout: Duration::from_millis(500),
            before_pause: Duration::from_millis(200),
            after_pause: Duration::from_millis(300),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_pauses(mut self, before: Duration, after: Duration) -> Self {
        self.before_pause = before;
        self.after_pause = after;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }
}

impl Executor for TryClickExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let detection = self.core.loop_find_markers(
            std::slice::from_ref(&self.marker),
            self.probe_timeout,
            &DetectConfig::default(),
        )?;
        let Some(region) = detection.region() else {
            return Ok(true);
        };

        info!(marker = %self.marker, region = ?region, "clicking marker");
        let before = self.pacer.jitter(self.before_pause);
        let after = self.pacer.jitter(self.after_pause);
        self.core.click_in_rect(region, Some(before), Some(after))?;
        Ok(true)
    }
}

/// Multi-match flavor: clicks every box the probe returns, each with its
/// own randomized pause. Zero boxes is success.
pub struct TryMultiClickExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    marker: MarkerId,
    probe_timeout: Duration,
    click_pause: Duration,
}

impl TryMultiClickExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("try-multi-click({marker})")),
            core,
            pacer: Box::new(RandomPacer::new()),
            marker,
            probe_timeout: Duration::from_millis(500),
            click_pause: Duration::from_millis(500),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_click_pause(mut self, pause: Duration) -> Self {
        self.click_pause = pause;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }
}

impl Executor for TryMultiClickExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let detection = self.core.loop_find_markers(
            std::slice::from_ref(&self.marker),
            self.probe_timeout,
            &DetectConfig::multi(),
        )?;
        if !detection.any_detected() {
            return Ok(true);
        }

        for region in detection.regions() {
            info!(marker = %self.marker, region = ?region, "clicking marker");
            let after = self.pacer.jitter(self.click_pause);
            self.core.click_in_rect(region, None, Some(after))?;
        }
        Ok(true)
    }
}

#[cfg(test)]
#[path = "try_click_tests.rs"]
mod tests;
