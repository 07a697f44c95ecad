//! Error types
//!
//! `TrackingError` covers configuration problems reported back to JS.
//! `FrameSkip` is the reason a single frame produced no update; it never
//! outlives that frame.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Configuration and session errors
#[derive(Debug, Error)]
pub enum TrackingError {
    /// Thresholds must satisfy down > up
    #[error("invalid thresholds for {name}: down {down}° must exceed up {up}°")]
    InvalidThresholds { name: String, down: f32, up: f32 },

    /// Joint index outside the pose model's landmark set
    #[error("invalid joint index {index} for {name} (pose has {max} landmarks)")]
    InvalidJoint { name: String, index: usize, max: usize },

    /// Malformed JSON config
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No profile under that name
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),

    /// Workout plan cannot be run
    #[error("invalid workout: {0}")]
    InvalidWorkout(String),

    /// Call needs a running session
    #[error("no active session")]
    NoActiveSession,
}

impl TrackingError {
    pub fn invalid_workout(reason: impl Into<String>) -> Self {
        Self::InvalidWorkout(reason.into())
    }
}

impl From<TrackingError> for JsValue {
    fn from(err: TrackingError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Why a frame produced no update
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FrameSkip {
    #[error("frame arrived inside the throttle interval")]
    Throttled,

    #[error("countdown still running")]
    NotReady,

    #[error("no person detected")]
    NoPerson,

    #[error("missing landmarks: need {required}, got {found}")]
    MissingLandmarks { required: usize, found: usize },

    #[error("landmark {index} below visibility threshold")]
    LowVisibility { index: usize },

    #[error("degenerate joint geometry")]
    DegenerateGeometry,

    #[error("unknown exercise: {0}")]
    UnknownExercise(String),
}

impl FrameSkip {
    /// Expected steady-state skips that are not worth logging
    pub fn is_routine(&self) -> bool {
        matches!(self, FrameSkip::Throttled | FrameSkip::NotReady | FrameSkip::NoPerson)
    }
}

pub type Result<T> = std::result::Result<T, TrackingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_thresholds_message() {
        let err = TrackingError::InvalidThresholds {
            name: "Squat".into(),
            down: 90.0,
            up: 160.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Squat"));
        assert!(msg.contains("160"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: TrackingError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().contains("config parse error"));
    }

    #[test]
    fn test_missing_landmarks_message() {
        let skip = FrameSkip::MissingLandmarks { required: 28, found: 16 };
        assert!(skip.to_string().contains("need 28, got 16"));
        assert!(!skip.is_routine());
        assert!(FrameSkip::Throttled.is_routine());
    }
}
