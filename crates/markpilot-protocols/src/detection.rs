//! Detection value types.
//!
//! The detection engine produces these; the executor core only consumes
//! them. A [`DetectionResult`] covers one query for one or more markers
//! and keeps the per-marker matches ordered as the engine ranked them.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Name of a reference image/template the detection engine searches for.
pub type MarkerId = String;

/// Per-query knobs for the detection engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectConfig {
    /// Report every match of each marker instead of only the best one.
    pub multi_match: bool,

    /// Minimum number of distinct markers that must be found for the
    /// query to count as detected. `None` means all queried markers.
    pub min_matches: Option<usize>,
}

impl DetectConfig {
    /// Multi-match mode: all boxes, not just the best.
    pub fn multi() -> Self {
        Self {
            multi_match: true,
            ..Self::default()
        }
    }

    /// Requires at least `n` distinct markers to be found.
    pub fn at_least(n: usize) -> Self {
        Self {
            min_matches: Some(n),
            ..Self::default()
        }
    }
}

/// One located marker: where it was found and how confident the engine is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerMatch {
    pub marker: MarkerId,
    pub region: Rect,
    pub confidence: f64,
}

impl MarkerMatch {
    pub fn new(marker: impl Into<MarkerId>, region: Rect, confidence: f64) -> Self {
        Self {
            marker: marker.into(),
            region,
            confidence,
        }
    }
}

/// Outcome of one detection query for one or more markers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    queried: Vec<MarkerId>,
    matches: Vec<MarkerMatch>,
}

impl DetectionResult {
    pub fn new(queried: Vec<MarkerId>, matches: Vec<MarkerMatch>) -> Self {
        Self { queried, matches }
    }

    /// A query that found nothing.
    pub fn not_found(queried: Vec<MarkerId>) -> Self {
        Self {
            queried,
            matches: Vec::new(),
        }
    }

    pub fn queried(&self) -> &[MarkerId] {
        &self.queried
    }

    pub fn matches(&self) -> &[MarkerMatch] {
        &self.matches
    }

    /// At least one queried marker was found.
    pub fn any_detected(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Every queried marker was found.
    pub fn all_detected(&self) -> bool {
        !self.queried.is_empty()
            && self
                .queried
                .iter()
                .all(|id| self.matches.iter().any(|m| &m.marker == id))
    }

    /// The highest-confidence match, if any.
    pub fn best(&self) -> Option<&MarkerMatch> {
        self.matches
            .iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }

    /// The highest-confidence match's region.
    pub fn region(&self) -> Option<Rect> {
        self.best().map(|m| m.region)
    }

    /// Regions of all matches, in engine ranking order.
    pub fn regions(&self) -> Vec<Rect> {
        self.matches.iter().map(|m| m.region).collect()
    }

    /// First match for the given marker id.
    pub fn get(&self, marker: &str) -> Option<&MarkerMatch> {
        self.matches.iter().find(|m| m.marker == marker)
    }

    /// True when every listed marker has a match.
    pub fn contains_all(&self, markers: &[MarkerId]) -> bool {
        markers.iter().all(|id| self.get(id).is_some())
    }

    /// Discards every match except the single highest-confidence one.
    ///
    /// Resolves mutually exclusive markers (e.g. both glyphs of a toggle)
    /// that spuriously matched in the same frame.
    pub fn keep_top_match(&mut self) {
        if let Some(best) = self.best().cloned() {
            self.matches = vec![best];
        }
    }
}

#[cfg(test)]
#[path = "detection_tests.rs"]
mod tests;
