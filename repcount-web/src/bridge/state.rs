//! Bridge state - everything JS talks to between calls
//!
//! WASM is single-threaded, so one thread-local holds the profile table,
//! session config, the active session and the loaded workout.

use std::cell::RefCell;

use crate::error::{FrameSkip, Result, TrackingError};
use crate::profiles::ProfileTable;
use crate::tracking::{FrameReport, PoseFrame, SessionConfig, TrackingSession};
use crate::workout::WorkoutProgress;

/// Frame counters for the debug overlay
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    pub analysed: u32,
    pub throttled: u32,
    pub skipped: u32,
    pub last_skip: Option<FrameSkip>,
    /// Last skip handed out for a console warning, cleared by an analysed frame
    warned: Option<FrameSkip>,
    pending_warning: Option<FrameSkip>,
}

impl FrameStats {
    fn record(&mut self, result: &std::result::Result<FrameReport, FrameSkip>) {
        match result {
            Ok(_) => {
                self.analysed += 1;
                self.warned = None;
            }
            Err(FrameSkip::Throttled) => self.throttled += 1,
            Err(skip) => {
                self.skipped += 1;
                self.last_skip = Some(skip.clone());
                if !skip.is_routine() && self.warned.as_ref() != Some(skip) {
                    self.warned = Some(skip.clone());
                    self.pending_warning = Some(skip.clone());
                }
            }
        }
    }

    /// Non-routine skip that has not been warned about yet. A repeat of the
    /// same skip on later frames is not reported again.
    pub fn take_warning(&mut self) -> Option<FrameSkip> {
        self.pending_warning.take()
    }
}

pub struct BridgeState {
    pub profiles: ProfileTable,
    pub config: SessionConfig,
    pub session: Option<TrackingSession>,
    pub workout: Option<WorkoutProgress>,
    pub stats: FrameStats,
}

impl Default for BridgeState {
    fn default() -> Self {
        Self {
            profiles: ProfileTable::builtin(),
            config: SessionConfig::default(),
            session: None,
            workout: None,
            stats: FrameStats::default(),
        }
    }
}

impl BridgeState {
    /// Replace any running session. Returns false if the exercise is unknown.
    pub fn start_session(&mut self, exercise: &str, target_reps: u32) -> bool {
        let session =
            TrackingSession::new(exercise, target_reps, &self.profiles, self.config.clone());
        let known = session.profile().is_some();
        self.session = Some(session);
        self.stats = FrameStats::default();
        known
    }

    pub fn end_session(&mut self) {
        self.session = None;
    }

    pub fn process_frame(
        &mut self,
        frame: &PoseFrame,
    ) -> Result<std::result::Result<FrameReport, FrameSkip>> {
        let session = self.session.as_mut().ok_or(TrackingError::NoActiveSession)?;
        let result = session.process_frame(frame);
        self.stats.record(&result);
        Ok(result)
    }

    /// Start a session for the workout's current exercise and set
    pub fn start_workout_set(&mut self) -> Result<bool> {
        let (exercise, reps) = self
            .workout
            .as_ref()
            .and_then(|w| w.current())
            .map(|item| (item.exercise.clone(), item.reps))
            .ok_or_else(|| TrackingError::invalid_workout("no set left to start"))?;
        Ok(self.start_session(&exercise, reps))
    }
}

thread_local! {
    static BRIDGE_STATE: RefCell<BridgeState> = RefCell::new(BridgeState::default());
}

/// Run `f` with the bridge state borrowed mutably
pub fn with_state<R>(f: impl FnOnce(&mut BridgeState) -> R) -> R {
    BRIDGE_STATE.with(|state_cell| f(&mut state_cell.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::WorkoutPlan;

    #[test]
    fn test_start_session_reports_unknown() {
        let mut state = BridgeState::default();
        assert!(state.start_session("Squat", 10));
        assert!(!state.start_session("Deadlift", 10));
        assert!(state.session.is_some());
    }

    #[test]
    fn test_process_without_session() {
        let mut state = BridgeState::default();
        let result = state.process_frame(&PoseFrame::empty(0.0));
        assert!(matches!(result, Err(TrackingError::NoActiveSession)));
    }

    #[test]
    fn test_stats_count_skips() {
        let mut state = BridgeState::default();
        state.start_session("Squat", 10);
        state.process_frame(&PoseFrame::empty(0.0)).unwrap().unwrap_err();
        state.process_frame(&PoseFrame::empty(0.01)).unwrap().unwrap_err();

        assert_eq!(state.stats.throttled, 1);
        assert_eq!(state.stats.skipped, 1);
        assert_eq!(state.stats.last_skip, Some(FrameSkip::NotReady));
        assert_eq!(state.stats.take_warning(), None);
    }

    #[test]
    fn test_non_routine_skip_warned_once() {
        let mut state = BridgeState::default();
        state.config.countdown_seconds = 0;
        state.start_session("Deadlift", 10);

        state.process_frame(&PoseFrame::empty(0.0)).unwrap().unwrap_err();
        assert_eq!(
            state.stats.take_warning(),
            Some(FrameSkip::UnknownExercise("Deadlift".into()))
        );

        // Same skip again: counted, not re-reported
        state.process_frame(&PoseFrame::empty(0.1)).unwrap().unwrap_err();
        assert_eq!(state.stats.skipped, 2);
        assert_eq!(state.stats.take_warning(), None);
    }

    #[test]
    fn test_missing_landmarks_warned_after_change() {
        let mut state = BridgeState::default();
        state.config.countdown_seconds = 0;
        state.start_session("Squat", 10);

        let mut frame = PoseFrame::empty(0.0);
        frame.person_detected = true;
        state.process_frame(&frame).unwrap().unwrap_err();
        assert!(matches!(
            state.stats.take_warning(),
            Some(FrameSkip::MissingLandmarks { found: 0, .. })
        ));

        // Routine skips never produce a warning
        state.process_frame(&PoseFrame::empty(0.1)).unwrap().unwrap_err();
        assert_eq!(state.stats.last_skip, Some(FrameSkip::NoPerson));
        assert_eq!(state.stats.take_warning(), None);
    }

    #[test]
    fn test_workout_set_uses_planned_reps() {
        let mut state = BridgeState::default();
        assert!(state.start_workout_set().is_err());

        let plan = WorkoutPlan::from_json(
            r#"{"name": "Arms",
                "exercises": [{"exercise": "Biceps Curl", "sets": 3, "reps": 15}]}"#,
        )
        .unwrap();
        state.workout = Some(WorkoutProgress::new(plan).unwrap());

        assert!(state.start_workout_set().unwrap());
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.exercise(), "Biceps Curl");
        assert_eq!(session.snapshot().target_reps, 15);
    }
}
