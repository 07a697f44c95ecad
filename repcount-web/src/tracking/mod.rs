//! Tracking module - throttle, countdown, joint angles and rep counting
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod config;
mod frame;
mod progress;
mod readiness;
mod session;
mod stage;
mod target;
mod throttle;

pub use angles::{joint_angle, MIN_SEGMENT_LENGTH};
pub use config::{SessionConfig, DEFAULT_TARGET_REPS};
pub use frame::{Landmark, PoseFrame};
pub use progress::{FeedbackBand, ProgressMapping, LOW_BAND_LIMIT, MID_BAND_LIMIT};
pub use readiness::{Readiness, ReadinessGate, COUNTDOWN_SECONDS};
pub use session::{FrameReport, SessionSnapshot, TrackingSession};
pub use stage::{RepState, Stage};
pub use target::TargetMonitor;
pub use throttle::{FrameThrottler, MIN_FRAME_INTERVAL};
