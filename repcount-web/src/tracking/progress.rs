//! Progress bar mapping
//!
//! Turns the tracked joint angle into a 0-1 fill level plus a coarse
//! colour band for the progress bar.

use serde::{Deserialize, Serialize};

/// Band boundaries
pub const LOW_BAND_LIMIT: f32 = 0.3;
pub const MID_BAND_LIMIT: f32 = 0.7;

/// How an angle maps onto progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMapping {
    /// Progress grows as the joint flexes (curls, bridges, leg raises)
    Inverted,
    /// Progress grows as the joint extends (squats, push-ups)
    Direct,
    /// Progress peaks at a straight 180° line (plank)
    DeviationFromStraight,
}

impl ProgressMapping {
    /// Map a joint angle (degrees) to progress in [0, 1]
    pub fn progress(&self, angle: f32) -> f32 {
        let raw = match self {
            ProgressMapping::Inverted => 1.0 - angle / 180.0,
            ProgressMapping::Direct => angle / 180.0,
            ProgressMapping::DeviationFromStraight => 1.0 - (angle - 180.0).abs() / 180.0,
        };
        raw.clamp(0.0, 1.0)
    }
}

/// Qualitative feedback for a progress value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackBand {
    Low,
    Mid,
    High,
}

impl FeedbackBand {
    pub fn from_progress(progress: f32) -> Self {
        if progress < LOW_BAND_LIMIT {
            FeedbackBand::Low
        } else if progress < MID_BAND_LIMIT {
            FeedbackBand::Mid
        } else {
            FeedbackBand::High
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeedbackBand::Low => "LOW",
            FeedbackBand::Mid => "MID",
            FeedbackBand::High => "HIGH",
        }
    }

    /// Progress bar fill colour
    pub fn color(&self) -> &'static str {
        match self {
            FeedbackBand::Low => "#ff3b30",  // red
            FeedbackBand::Mid => "#ff9500",  // orange
            FeedbackBand::High => "#34c759", // green
        }
    }

    /// Numeric code for the JS snapshot
    pub fn code(&self) -> u8 {
        match self {
            FeedbackBand::Low => 0,
            FeedbackBand::Mid => 1,
            FeedbackBand::High => 2,
        }
    }
}
