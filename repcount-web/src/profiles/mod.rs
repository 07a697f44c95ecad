//! Profiles module - per-exercise tracking parameters
//!
//! Re-exports only. All logic in submodules.

pub mod joints;
mod table;

pub use joints::{required_landmarks, JointTriple, POSE_LANDMARK_COUNT};
pub use table::{ExerciseProfile, ProfileTable, DEFAULT_SETUP_HINT};
