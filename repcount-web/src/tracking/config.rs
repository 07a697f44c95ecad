//! Session tuning knobs
//!
//! Defaults match the mobile app. JS may override any subset as JSON.

use serde::{Deserialize, Serialize};

use super::readiness::COUNTDOWN_SECONDS;
use super::throttle::MIN_FRAME_INTERVAL;
use crate::error::Result;

/// Reps used when no target is supplied
pub const DEFAULT_TARGET_REPS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frames closer together than this are dropped (seconds)
    pub min_frame_interval: f64,
    /// Countdown before tracking starts
    pub countdown_seconds: u32,
    /// Treat landmarks below this visibility as missing. `None` disables.
    pub min_visibility: Option<f32>,
    /// Used when a session is started with a target of 0
    pub default_target_reps: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_frame_interval: MIN_FRAME_INTERVAL,
            countdown_seconds: COUNTDOWN_SECONDS,
            min_visibility: None,
            default_target_reps: DEFAULT_TARGET_REPS,
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve a caller-supplied target
    pub fn target_or_default(&self, target_reps: u32) -> u32 {
        if target_reps == 0 {
            self.default_target_reps
        } else {
            target_reps
        }
    }
}
