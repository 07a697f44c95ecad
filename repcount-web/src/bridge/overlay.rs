//! Overlay text for the exercise screen
//!
//! Formats the current session state into strings JS drops straight into
//! HTML: rep counter, stage, progress bar label, countdown and frame stats.

use wasm_bindgen::prelude::*;

use super::state::{with_state, FrameStats};
use crate::tracking::SessionSnapshot;

/// "REPS: 3/10 | STAGE: UP\nPROGRESS: 72% (HIGH)"
pub fn format_status(snap: &SessionSnapshot) -> String {
    format!(
        "REPS: {}/{} | STAGE: {}\nPROGRESS: {:.0}% ({}){}",
        snap.rep_count,
        snap.target_reps,
        snap.stage.name(),
        snap.progress * 100.0,
        snap.band.name(),
        if snap.target_reached { "\nTARGET REACHED" } else { "" },
    )
}

pub fn format_countdown(snap: &SessionSnapshot) -> String {
    if snap.ready {
        String::new()
    } else {
        snap.seconds_remaining.to_string()
    }
}

pub fn format_stats(stats: &FrameStats) -> String {
    let last = stats
        .last_skip
        .as_ref()
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    format!(
        "Analysed: {} | Throttled: {} | Skipped: {}\nLast skip: {}",
        stats.analysed, stats.throttled, stats.skipped, last,
    )
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Rep counter and progress label (empty when no session)
#[wasm_bindgen]
pub fn get_status_text() -> String {
    with_state(|state| {
        state
            .session
            .as_ref()
            .map(|s| format_status(&s.snapshot()))
            .unwrap_or_default()
    })
}

/// Countdown digit while not ready, empty string once tracking
#[wasm_bindgen]
pub fn get_countdown_text() -> String {
    with_state(|state| {
        state
            .session
            .as_ref()
            .map(|s| format_countdown(&s.snapshot()))
            .unwrap_or_default()
    })
}

/// Progress bar colour for the current band
#[wasm_bindgen]
pub fn get_progress_color() -> String {
    with_state(|state| {
        state
            .session
            .as_ref()
            .map(|s| s.snapshot().band.color().to_string())
            .unwrap_or_default()
    })
}

/// Frame pipeline counters for the debug panel
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    with_state(|state| format_stats(&state.stats))
}
