//! RepCount Web - exercise repetition counter for the browser
//!
//! MediaPipe Pose runs in JavaScript and pushes landmarks in through the
//! bridge. Rust throttles frames, waits out the countdown, measures the
//! exercise's joint angle and counts reps with a hysteresis state machine.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations and re-exports
//! - The wasm_bindgen start hook

mod bridge;
pub mod error;
pub mod profiles;
pub mod tracking;
pub mod workout;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{push_pose_frame, start_session, tick_countdown, end_session};

pub use error::{FrameSkip, TrackingError};
pub use profiles::{ExerciseProfile, ProfileTable};
pub use tracking::{
    FeedbackBand, FrameReport, Landmark, PoseFrame, ProgressMapping, RepState, SessionConfig,
    SessionSnapshot, Stage, TrackingSession,
};
pub use workout::{PlannedExercise, WorkoutPlan, WorkoutProgress};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!(
        "✅ RepCount loaded with {} exercise profiles",
        ProfileTable::builtin().len()
    );
}
