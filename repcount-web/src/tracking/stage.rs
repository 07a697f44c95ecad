//! Rep counting with hysteresis
//!
//! Two thresholds split the joint angle into three zones:
//!
//! ```text
//!   0°  ── UP ──  up_angle  ── (no change) ──  down_angle  ── DOWN ──  180°
//! ```
//!
//! A rep is counted on the DOWN→UP edge only. Jitter inside the middle zone
//! cannot toggle the stage, so one dip never counts twice.

/// Coarse phase of a repetition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    /// Joint extended (angle above `down_angle`). Starting stage.
    #[default]
    Down,
    /// Joint flexed (angle below `up_angle`)
    Up,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Down => "DOWN",
            Stage::Up => "UP",
        }
    }

    /// Numeric code for the JS snapshot
    pub fn code(&self) -> u8 {
        match self {
            Stage::Down => 0,
            Stage::Up => 1,
        }
    }
}

/// Per-session rep counter state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepState {
    pub stage: Stage,
    pub rep_count: u32,
}

impl RepState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one joint angle (degrees) through the state machine
    ///
    /// Returns true if this angle completed a rep.
    pub fn update(&mut self, angle: f32, down_angle: f32, up_angle: f32) -> bool {
        match self.stage {
            Stage::Down if angle < up_angle => {
                self.stage = Stage::Up;
                self.rep_count += 1;
                true
            }
            Stage::Up if angle > down_angle => {
                self.stage = Stage::Down;
                false
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
