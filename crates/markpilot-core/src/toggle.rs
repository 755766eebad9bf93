//! Two-state toggle driven by a pair of mutually exclusive markers.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use markpilot_protocols::{Ctx, CropRate, DetectConfig, DetectionCore, MarkerId};

use crate::executor::{ExecResult, Executor, ExecutorBase};
use crate::pacing::{Pacer, RandomPacer};

/// Brings a toggle control to the desired state.
///
/// The control shows either a "true" glyph or a "false" glyph. Visual
/// noise can make both cross the confidence threshold in one frame, so
/// the action collapses the detection to the single highest-confidence
/// match before deciding: if the surviving glyph contradicts the desired
/// state it gets clicked, otherwise nothing happens.
///
/// With `use_max_score` disabled the precondition instead rejects any
/// frame where both glyphs are reported, even though the top-1 filter in
/// the action would resolve it. Kept as-is: callers rely on the stricter
/// gate to flag ambiguous screens early.
pub struct ToggleExecutor {
    base: ExecutorBase,
    core: Arc<dyn DetectionCore>,
    pacer: Box<dyn Pacer>,
    true_marker: MarkerId,
    false_marker: MarkerId,
    want_true: bool,
    detect_timeout: Duration,
    use_max_score: bool,
    after_pause: Duration,
    click_area: CropRate,
}

impl ToggleExecutor {
    pub fn new(
        core: Arc<dyn DetectionCore>,
        true_marker: impl Into<MarkerId>,
        false_marker: impl Into<MarkerId>,
        want_true: bool,
    ) -> Self {
        let true_marker = true_marker.into();
        let false_marker = false_marker.into();
        Self {
            base: ExecutorBase::new(format!(
                "toggle({true_marker}-{false_marker})[{want_true}]"
            )),
            core,
            pacer: Box::new(RandomPacer::new()),
            true_marker,
            false_marker,
            want_true,
            detect_timeout: Duration::from_secs(2),
            use_max_score: true,
            after_pause: Duration::from_millis(500),
            click_area: CropRate::default(),
        }
    }

    pub fn with_detect_timeout(mut self, timeout: Duration) -> Self {
        self.detect_timeout = timeout;
        self
    }

    /// Disabling this makes the precondition reject frames where both
    /// glyphs are reported instead of trusting the top-1 filter.
    pub fn use_max_score(mut self, enabled: bool) -> Self {
        self.use_max_score = enabled;
        self
    }

    pub fn with_after_pause(mut self, pause: Duration) -> Self {
        self.after_pause = pause;
        self
    }

    pub fn with_click_area(mut self, rate: CropRate) -> Self {
        self.click_area = rate;
        self
    }

    pub fn with_pacer(mut self, pacer: Box<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    fn markers(&self) -> [MarkerId; 2] {
        [self.true_marker.clone(), self.false_marker.clone()]
    }
}

impl Executor for ToggleExecutor {
    fn base(&self) -> &ExecutorBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ExecutorBase {
        &mut self.base
    }

    fn check(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let markers = self.markers();
        let detection =
            self.core
                .loop_find_markers(&markers, self.detect_timeout, &DetectConfig::at_least(1))?;
        debug!(detection = ?detection, "toggle glyph detection");
        if !detection.any_detected() {
            debug!(
                true_marker = %self.true_marker,
                false_marker = %self.false_marker,
                "neither toggle glyph found"
            );
            return Ok(false);
        }
        if !self.use_max_score && detection.contains_all(&markers) {
            debug!(
                true_marker = %self.true_marker,
                false_marker = %self.false_marker,
                "both toggle glyphs reported, rejecting ambiguous frame"
            );
            return Ok(false);
        }
        Ok(true)
    }

    fn act(&mut self, _ctx: &mut Ctx) -> ExecResult {
        let markers = self.markers();
        let mut detection =
            self.core
                .loop_find_markers(&markers, self.detect_timeout, &DetectConfig::at_least(1))?;
        // Only the highest-confidence glyph decides the current state.
        detection.keep_top_match();

        let to_click = if self.want_true && detection.get(&self.false_marker).is_some() {
            Some(self.false_marker.clone())
        } else if !self.want_true && detection.get(&self.true_marker).is_some() {
            Some(self.true_marker.clone())
        } else {
            None
        };

        let Some(marker) = to_click else {
            // Already in the desired state.
            return Ok(true);
        };
        let Some(found) = detection.get(&marker) else {
            return Ok(true);
        };

        let target = found.region.crop(self.click_area);
        debug!(
            want_true = self.want_true,
            marker = %marker,
            target = ?target,
            "clicking toggle glyph"
        );
        let after = self.pacer.jitter(self.after_pause);
        self.core.click_in_rect(target, None, Some(after))?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "toggle_tests.rs"]
mod tests;
