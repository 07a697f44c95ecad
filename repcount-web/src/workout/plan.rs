//! Workout plan and set-by-set progression
//!
//! A plan lists exercises with sets and reps. `WorkoutProgress` walks it:
//! every completed set moves to the next set, and after the last set to
//! the next exercise. Storage of plans is up to the caller.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackingError};
use crate::tracking::DEFAULT_TARGET_REPS;

/// One exercise entry in a plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name: String,
    pub exercises: Vec<PlannedExercise>,
}

impl WorkoutPlan {
    pub fn from_json(json: &str) -> Result<Self> {
        let plan: WorkoutPlan = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn validate(&self) -> Result<()> {
        if self.exercises.is_empty() {
            return Err(TrackingError::invalid_workout(format!("{} has no exercises", self.name)));
        }
        if let Some(bad) = self.exercises.iter().find(|e| e.sets == 0 || e.reps == 0) {
            return Err(TrackingError::invalid_workout(format!(
                "{} needs at least one set and one rep",
                bad.exercise
            )));
        }
        Ok(())
    }

    /// Reps planned for `exercise`, or the default when it isn't listed
    pub fn target_for(&self, exercise: &str) -> u32 {
        self.exercises
            .iter()
            .find(|e| e.exercise == exercise)
            .map_or(DEFAULT_TARGET_REPS, |e| e.reps)
    }
}

/// Cursor over a plan
pub struct WorkoutProgress {
    plan: WorkoutPlan,
    exercise_index: usize,
    /// 1-based
    current_set: u32,
}

impl WorkoutProgress {
    pub fn new(plan: WorkoutPlan) -> Result<Self> {
        plan.validate()?;
        Ok(Self {
            plan,
            exercise_index: 0,
            current_set: 1,
        })
    }

    /// Exercise being worked on, `None` once the plan is done
    pub fn current(&self) -> Option<&PlannedExercise> {
        self.plan.exercises.get(self.exercise_index)
    }

    pub fn current_set(&self) -> u32 {
        self.current_set
    }

    pub fn is_finished(&self) -> bool {
        self.current().is_none()
    }

    /// Mark the current set done and advance
    ///
    /// Returns the next exercise, `None` when the workout is finished.
    pub fn complete_set(&mut self) -> Option<&PlannedExercise> {
        let sets = self.current()?.sets;
        if self.current_set < sets {
            self.current_set += 1;
        } else {
            self.exercise_index += 1;
            self.current_set = 1;
        }
        self.current()
    }

    pub fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    /// "Squat - set 2/3 - 12 reps", or a finished message
    pub fn describe(&self) -> String {
        match self.current() {
            Some(item) => format!(
                "{} - set {}/{} - {} reps",
                item.exercise, self.current_set, item.sets, item.reps
            ),
            None => format!("{} complete", self.plan.name),
        }
    }
}
