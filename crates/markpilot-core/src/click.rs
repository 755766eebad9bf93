//! Detect-and-click.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};

use markpilot_protocols::{
    AutomationError, Ctx, CropRate, DetectConfig, DetectionCore, DetectionResult, MarkerId,
};

use crate::executor::{ExecResult, Executor, ExecutorBase};
use crate::pacing::{Pacer, RandomPacer};

/// Finds a marker and clicks inside a configurable sub-region of it.
///
/// The precondition fails when the marker is not found within the detect
/// timeout. The action re-detects by default so the click lands on fresh
/// geometry; [`ClickExecutor::reusing_hit_detection`] skips that second
/// detection pass and clicks where the precondition saw the marker.
pub struct ClickExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    marker: MarkerId,
    detect_timeout: Duration,
    before_pause: Duration,
    after_pause: Duration,
    offset: (i32, i32),
    click_area: CropRate,
    clicks: u32,
    reuse_hit_detection: bool,
    last_detection: Option<DetectionResult>,
}

impl ClickExecutor {
    pub fn new(core: Arc<dyn DetectionCore>, marker: impl Into<MarkerId>) -> Self {
        let marker = marker.into();
        Self {
            base: ExecutorBase::new(format!("click({marker})")),
            core,
            pacer: Box::new(RandomPacer::new()),
            marker,
            detect_timeout: Duration::from_secs(2),
            before_pause: Duration::from_millis(200),
            after_pause: Duration::from_millis(200),
            offset: (0, 0),
            click_area: CropRate::default(),
            clicks: 1,
            reuse_hit_detection: false,
            last_detection: None,
        }
    }

    pub fn with_detect_timeout(mut self, timeout: Duration) -> Self {
        self.detect_timeout = timeout;
        self
    }

    pub fn with_pauses(mut self, before: Duration, after: Duration) -> Self {
        self.before_pause = before;
        self.after_pause = after;
        self
    }

    /// Pixel offset applied to the click region after cropping.
    pub fn with_offset(mut self, dx: i32, dy: i32) -> Self {
        self.offset = (dx, dy);
        self
    }

    /// Fractional sub-region of the detected box to click in.
    pub fn with_click_area(mut self, rate: CropRate) -> Self {
        self.click_area = rate;
        self
    }

    pub fn with_clicks(mut self, count: u32) -> Self {
        self.clicks = count;
        self
    }

    /// Click on the precondition's detection result instead of
    /// re-detecting in the action phase.
    pub fn reusing_hit_detection(mut self) -> Self {
        self.reuse_hit_detection = true;
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

impl Executor for ClickExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn check(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let detection = self.detect()?;
        if !detection.all_detected() {
            return Ok(false);
        }
        self.last_detection = Some(detection);
        Ok(true)
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let detection = match (self.reuse_hit_detection, self.last_detection.take()) {
            (true, Some(detection)) => detection,
            _ => {
                let detection = self.detect()?;
                if !detection.all_detected() {
                    error!(marker = %self.marker, "marker vanished before click");
                    return Ok(false);
                }
                detection
            }
        };

        let Some(region) = detection.region() else {
            return Ok(false);
        };
        let target = region
            .crop(self.click_area)
            .translate(self.offset.0, self.offset.1);
        debug!(marker = %self.marker, region = ?region, target = ?target, "clicking marker");

        self.pacer.pause(self.before_pause);
        for _ in 0..self.clicks {
            let after = self
                .pacer
                .between(Duration::from_millis(200), Duration::from_millis(500));
            self.core.click_in_rect(target, None, Some(after))?;
        }
        self.pacer.pause(self.after_pause);
        Ok(true)
    }
}

#[cfg(test)]
#[path = "click_tests.rs"]
mod tests;
