//! Workout module - plans and set progression
//!
//! Re-exports only. All logic in submodules.

mod plan;

pub use plan::{PlannedExercise, WorkoutPlan, WorkoutProgress};
