//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod overlay;
mod session;
mod state;
mod workout;

pub use landmarks::{decode_frame, LANDMARK_STRIDE};

pub use session::{
    start_session,
    tick_countdown,
    push_pose_frame,
    end_session,
    get_session_snapshot,
    load_profiles,
    set_session_config,
    list_exercises,
    get_setup_hint,
};

pub use overlay::{
    get_status_text,
    get_countdown_text,
    get_progress_color,
    get_debug_overlay_text,
};

pub use workout::{
    load_workout,
    start_current_set,
    complete_current_set,
    get_workout_text,
};
