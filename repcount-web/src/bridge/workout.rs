//! Workout entry points - run a plan set by set

use wasm_bindgen::prelude::*;

use super::state::with_state;
use crate::workout::{WorkoutPlan, WorkoutProgress};

/// Load a workout plan (JSON) and rewind to its first set
#[wasm_bindgen]
pub fn load_workout(json: &str) -> Result<(), JsValue> {
    let plan = WorkoutPlan::from_json(json)?;
    let name = plan.name.clone();
    let progress = WorkoutProgress::new(plan)?;
    with_state(|state| state.workout = Some(progress));
    web_sys::console::log_1(&format!("📋 Workout loaded: {}", name).into());
    Ok(())
}

/// Start tracking the current set with its planned reps as target
#[wasm_bindgen]
pub fn start_current_set() -> Result<(), JsValue> {
    let known = with_state(|state| state.start_workout_set())?;
    let text = get_workout_text();
    if !known {
        web_sys::console::warn_1(
            &format!("⚠️ No profile for {}, reps will not be counted", text).into(),
        );
    }
    web_sys::console::log_1(&format!("🏋️ {}", text).into());
    Ok(())
}

/// Finish the current set, end its session and advance the plan
///
/// Returns true while the workout has sets left.
#[wasm_bindgen]
pub fn complete_current_set() -> bool {
    with_state(|state| {
        state.end_session();
        match state.workout.as_mut() {
            Some(progress) => progress.complete_set().is_some(),
            None => false,
        }
    })
}

/// "Squat - set 2/3 - 12 reps" (empty when no workout is loaded)
#[wasm_bindgen]
pub fn get_workout_text() -> String {
    with_state(|state| {
        state
            .workout
            .as_ref()
            .map(|w| w.describe())
            .unwrap_or_default()
    })
}
