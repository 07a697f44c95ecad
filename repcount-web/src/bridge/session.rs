//! Session entry points - JS drives one tracking session at a time
//!
//! JS calls `start_session`, ticks the countdown once a second, pushes every
//! MediaPipe result through `push_pose_frame`, and reads counters back with
//! `get_session_snapshot` / `get_status_text`.

use wasm_bindgen::prelude::*;

use super::landmarks::{decode_frame, LANDMARK_STRIDE};
use super::state::with_state;
use crate::error::TrackingError;
use crate::profiles::ProfileTable;
use crate::tracking::SessionConfig;

/// Start tracking `exercise`, replacing any running session
///
/// `target_reps` of 0 uses the configured default. Unknown exercises still
/// start a session (it just never counts) and log a warning.
#[wasm_bindgen]
pub fn start_session(exercise: &str, target_reps: u32) -> Result<(), JsValue> {
    let known = with_state(|state| state.start_session(exercise, target_reps));
    if !known {
        web_sys::console::warn_1(
            &format!("⚠️ No profile for exercise '{}', reps will not be counted", exercise)
                .into(),
        );
    }

    let (target, countdown) = with_state(|state| {
        let snap = state.session.as_ref().map(|s| s.snapshot());
        snap.map_or((0, 0), |s| (s.target_reps, s.seconds_remaining))
    });
    web_sys::console::log_1(
        &format!(
            "🏋️ Session started: {} (target {}, countdown {}s)",
            exercise, target, countdown
        )
        .into(),
    );
    Ok(())
}

/// One-second countdown tick. Returns seconds remaining.
#[wasm_bindgen]
pub fn tick_countdown() -> u32 {
    let (finished, remaining) = with_state(|state| match state.session.as_mut() {
        Some(session) => (session.tick(), session.snapshot().seconds_remaining),
        None => (false, 0),
    });
    if finished {
        web_sys::console::log_1(&"✅ Countdown finished, tracking".into());
    }
    remaining
}

/// Called from JavaScript with each MediaPipe result
///
/// `data` is a flat Float32Array of x, y, z, visibility per landmark
/// (132 values for a full pose, empty when nobody is in frame).
///
/// Returns true only on the frame that reached the target rep count.
#[wasm_bindgen]
pub fn push_pose_frame(timestamp: f64, data: &[f32]) -> bool {
    let Some(frame) = decode_frame(timestamp, data) else {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected multiple of {})",
                data.len(),
                LANDMARK_STRIDE
            )
            .into(),
        );
        return false;
    };

    let (outcome, warning) =
        with_state(|state| (state.process_frame(&frame), state.stats.take_warning()));
    if let Some(skip) = warning {
        web_sys::console::warn_1(&format!("⚠️ Frame skipped: {}", skip).into());
    }
    match outcome {
        Ok(Ok(report)) => {
            if report.target_reached {
                web_sys::console::log_1(
                    &format!("🎯 Target reached: {} reps", report.rep_count).into(),
                );
            }
            report.target_reached
        }
        // Counted in FrameStats; the overlay shows the latest one
        Ok(Err(_)) => false,
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            false
        }
    }
}

/// Stop tracking and drop the session state
#[wasm_bindgen]
pub fn end_session() {
    with_state(|state| state.end_session());
}

/// Current session counters, `None` when no session is running
///
/// Layout: [rep_count, stage (0 down / 1 up), progress, band
/// (0 low / 1 mid / 2 high), seconds_remaining, ready, target_reached,
/// target_reps]
#[wasm_bindgen]
pub fn get_session_snapshot() -> Option<Vec<f32>> {
    with_state(|state| state.session.as_ref().map(|s| s.snapshot().as_flat()))
}

/// Add or override exercise profiles from a JSON array
#[wasm_bindgen]
pub fn load_profiles(json: &str) -> Result<(), JsValue> {
    let table = ProfileTable::from_json(json)?;
    let count = table.len();
    with_state(|state| state.profiles.merge(table))?;
    web_sys::console::log_1(&format!("📋 Loaded {} exercise profiles", count).into());
    Ok(())
}

/// Override session tuning; applies to sessions started afterwards
#[wasm_bindgen]
pub fn set_session_config(json: &str) -> Result<(), JsValue> {
    let config = SessionConfig::from_json(json)?;
    with_state(|state| state.config = config);
    Ok(())
}

/// Names of all known exercises
#[wasm_bindgen]
pub fn list_exercises() -> Vec<String> {
    with_state(|state| state.profiles.names())
}

/// Camera placement hint for the countdown screen
#[wasm_bindgen]
pub fn get_setup_hint(exercise: &str) -> Result<String, JsValue> {
    with_state(|state| {
        state
            .profiles
            .get(exercise)
            .map(|p| p.setup_hint().to_string())
            .ok_or_else(|| TrackingError::UnknownExercise(exercise.to_string()).into())
    })
}
