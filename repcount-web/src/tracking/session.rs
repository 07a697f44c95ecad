//! Tracking session - runs the per-frame pipeline
//!
//! throttle → countdown → joint angle → {rep counter, progress} → target
//!
//! A session owns all of its state. Frames are borrowed for one call and
//! never kept. A frame that yields no angle leaves the counters untouched.

use super::angles::joint_angle;
use super::config::SessionConfig;
use super::frame::PoseFrame;
use super::progress::FeedbackBand;
use super::readiness::ReadinessGate;
use super::stage::{RepState, Stage};
use super::target::TargetMonitor;
use super::throttle::FrameThrottler;
use crate::error::FrameSkip;
use crate::profiles::{required_landmarks, ExerciseProfile, ProfileTable};

/// Result of one analysed frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    /// Joint angle in degrees
    pub angle: f32,
    pub rep_count: u32,
    pub stage: Stage,
    /// 0-1 progress bar fill
    pub progress: f32,
    pub band: FeedbackBand,
    /// This frame completed a rep
    pub rep_completed: bool,
    /// This frame hit the target (fires once per session)
    pub target_reached: bool,
}

/// Latest session state for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSnapshot {
    pub rep_count: u32,
    pub stage: Stage,
    pub progress: f32,
    pub band: FeedbackBand,
    pub seconds_remaining: u32,
    pub ready: bool,
    pub target_reached: bool,
    pub target_reps: u32,
}

impl SessionSnapshot {
    /// Number of floats in `as_flat`
    pub const FLAT_LEN: usize = 8;

    /// Flat layout for JS:
    /// [rep_count, stage, progress, band, seconds_remaining, ready,
    ///  target_reached, target_reps]
    pub fn as_flat(&self) -> Vec<f32> {
        vec![
            self.rep_count as f32,
            self.stage.code() as f32,
            self.progress,
            self.band.code() as f32,
            self.seconds_remaining as f32,
            if self.ready { 1.0 } else { 0.0 },
            if self.target_reached { 1.0 } else { 0.0 },
            self.target_reps as f32,
        ]
    }
}

/// One exercise-tracking session (one set)
pub struct TrackingSession {
    exercise: String,
    /// `None` for unknown exercises; the session then never counts
    profile: Option<ExerciseProfile>,
    config: SessionConfig,
    throttle: FrameThrottler,
    gate: ReadinessGate,
    reps: RepState,
    target: TargetMonitor,
    /// Progress from the last analysed frame
    last_progress: f32,
}

impl TrackingSession {
    pub fn new(
        exercise: &str,
        target_reps: u32,
        profiles: &ProfileTable,
        config: SessionConfig,
    ) -> Self {
        let profile = profiles.get(exercise).cloned();
        Self::with_profile(exercise, profile, target_reps, config)
    }

    pub fn with_profile(
        exercise: &str,
        profile: Option<ExerciseProfile>,
        target_reps: u32,
        config: SessionConfig,
    ) -> Self {
        let target = TargetMonitor::new(config.target_or_default(target_reps));
        Self {
            exercise: exercise.to_string(),
            profile,
            throttle: FrameThrottler::with_interval(config.min_frame_interval),
            gate: ReadinessGate::with_seconds(config.countdown_seconds),
            reps: RepState::new(),
            target,
            last_progress: 0.0,
            config,
        }
    }

    /// Run one frame through the pipeline
    pub fn process_frame(&mut self, frame: &PoseFrame) -> Result<FrameReport, FrameSkip> {
        if !self.throttle.accept(frame.timestamp) {
            return Err(FrameSkip::Throttled);
        }
        if !self.gate.is_ready() {
            return Err(FrameSkip::NotReady);
        }

        let profile = self
            .profile
            .as_ref()
            .ok_or_else(|| FrameSkip::UnknownExercise(self.exercise.clone()))?;

        if !frame.person_detected {
            return Err(FrameSkip::NoPerson);
        }

        let required = required_landmarks(profile.joints);
        if frame.landmarks.len() < required {
            return Err(FrameSkip::MissingLandmarks {
                required,
                found: frame.landmarks.len(),
            });
        }

        let (ia, ib, ic) = profile.joints;
        let (a, b, c) = (&frame.landmarks[ia], &frame.landmarks[ib], &frame.landmarks[ic]);

        if let Some(min) = self.config.min_visibility {
            for (index, landmark) in [(ia, a), (ib, b), (ic, c)] {
                if landmark.visibility.is_some_and(|v| v < min) {
                    return Err(FrameSkip::LowVisibility { index });
                }
            }
        }

        let angle = joint_angle(a, b, c).ok_or(FrameSkip::DegenerateGeometry)?;

        let rep_completed = self.reps.update(angle, profile.down_angle, profile.up_angle);
        let target_reached = rep_completed && self.target.on_rep(self.reps.rep_count);

        let progress = profile.mapping.progress(angle);
        self.last_progress = progress;

        Ok(FrameReport {
            angle,
            rep_count: self.reps.rep_count,
            stage: self.reps.stage,
            progress,
            band: FeedbackBand::from_progress(progress),
            rep_completed,
            target_reached,
        })
    }

    /// One-second countdown tick. True on the tick that finished it.
    pub fn tick(&mut self) -> bool {
        self.gate.tick()
    }

    /// Start the same exercise over: fresh countdown, counters cleared
    pub fn restart(&mut self) {
        self.throttle.reset();
        self.gate.restart(self.config.countdown_seconds);
        self.reps.reset();
        self.target = TargetMonitor::new(self.target.target_reps());
        self.last_progress = 0.0;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rep_count: self.reps.rep_count,
            stage: self.reps.stage,
            progress: self.last_progress,
            band: FeedbackBand::from_progress(self.last_progress),
            seconds_remaining: self.gate.seconds_remaining(),
            ready: self.gate.is_ready(),
            target_reached: self.target.is_reached(),
            target_reps: self.target.target_reps(),
        }
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    pub fn profile(&self) -> Option<&ExerciseProfile> {
        self.profile.as_ref()
    }

    pub fn rep_state(&self) -> RepState {
        self.reps
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }
}
