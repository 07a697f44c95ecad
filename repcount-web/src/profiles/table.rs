//! Exercise profile table
//!
//! Each exercise is one data row: which joint to watch, the two hysteresis
//! thresholds and how the angle maps onto the progress bar. Adding an
//! exercise is a new row, no new code path.

use serde::{Deserialize, Serialize};

use super::joints::{JointTriple, LEFT_ARM, LEFT_LEG, LEFT_TRUNK, POSE_LANDMARK_COUNT};
use crate::error::{Result, TrackingError};
use crate::tracking::ProgressMapping;

/// Camera placement hint used when a row does not provide one
pub const DEFAULT_SETUP_HINT: &str =
    "Place your phone somewhere stable where your whole body is visible.";

/// Static tracking parameters for one exercise
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    pub name: String,
    /// (first, vertex, last) landmark indices
    pub joints: JointTriple,
    /// Angle above which the joint counts as extended (degrees)
    pub down_angle: f32,
    /// Angle below which the joint counts as flexed (degrees)
    pub up_angle: f32,
    pub mapping: ProgressMapping,
    #[serde(default)]
    pub setup_hint: String,
}

impl ExerciseProfile {
    /// Build a validated profile
    pub fn new(
        name: impl Into<String>,
        joints: JointTriple,
        down_angle: f32,
        up_angle: f32,
        mapping: ProgressMapping,
    ) -> Result<Self> {
        let profile = Self {
            name: name.into(),
            joints,
            down_angle,
            up_angle,
            mapping,
            setup_hint: String::new(),
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_setup_hint(mut self, hint: impl Into<String>) -> Self {
        self.setup_hint = hint.into();
        self
    }

    /// Thresholds ordered and finite, joints inside the pose model
    pub fn validate(&self) -> Result<()> {
        let ordered = self.down_angle.is_finite()
            && self.up_angle.is_finite()
            && self.down_angle > self.up_angle;
        if !ordered {
            return Err(TrackingError::InvalidThresholds {
                name: self.name.clone(),
                down: self.down_angle,
                up: self.up_angle,
            });
        }

        let (a, b, c) = self.joints;
        for index in [a, b, c] {
            if index >= POSE_LANDMARK_COUNT {
                return Err(TrackingError::InvalidJoint {
                    name: self.name.clone(),
                    index,
                    max: POSE_LANDMARK_COUNT,
                });
            }
        }
        Ok(())
    }

    pub fn setup_hint(&self) -> &str {
        if self.setup_hint.is_empty() {
            DEFAULT_SETUP_HINT
        } else {
            &self.setup_hint
        }
    }
}

/// Lookup from exercise name to profile
#[derive(Clone, Debug, Default)]
pub struct ProfileTable {
    profiles: Vec<ExerciseProfile>,
}

impl ProfileTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in exercises
    pub fn builtin() -> Self {
        use ProgressMapping::{DeviationFromStraight, Direct, Inverted};

        // (name, joints, down, up, mapping, hint)
        let rows: [(&str, JointTriple, f32, f32, ProgressMapping, &str); 9] = [
            (
                "Biceps Curl",
                LEFT_ARM,
                160.0,
                30.0,
                Inverted,
                "Place the phone beside you so your upper body and working arm are in frame.",
            ),
            (
                "Push-up",
                LEFT_ARM,
                160.0,
                90.0,
                Direct,
                "Put the phone on the floor beside you or diagonally in front. Keep your whole body in frame.",
            ),
            (
                "Squat",
                LEFT_LEG,
                160.0,
                90.0,
                Direct,
                "Face the phone so your head, torso and legs are all visible.",
            ),
            (
                "Lunge",
                LEFT_LEG,
                160.0,
                90.0,
                Direct,
                "Place the phone to the side or at an angle so both steps are visible.",
            ),
            (
                "Plank",
                LEFT_TRUNK,
                160.0,
                90.0,
                DeviationFromStraight,
                "Place the phone to your side so it can see whether your body is a straight line.",
            ),
            (
                "Burpee",
                LEFT_TRUNK,
                160.0,
                90.0,
                Direct,
                "Face the phone so your whole body movement is visible.",
            ),
            (
                "Mountain Climber",
                LEFT_LEG,
                160.0,
                90.0,
                Direct,
                "Place the phone to the side so your leg movement is clearly visible.",
            ),
            (
                "Glute Bridge",
                LEFT_LEG,
                160.0,
                90.0,
                Inverted,
                "Place the phone to the side so your hips and legs are visible.",
            ),
            (
                "Leg Raises",
                LEFT_LEG,
                160.0,
                90.0,
                Inverted,
                "Place the phone to the side so it sees your legs move up and down.",
            ),
        ];

        let profiles = rows
            .into_iter()
            .map(|(name, joints, down_angle, up_angle, mapping, hint)| ExerciseProfile {
                name: name.to_string(),
                joints,
                down_angle,
                up_angle,
                mapping,
                setup_hint: hint.to_string(),
            })
            .collect();

        Self { profiles }
    }

    /// Parse a JSON array of profile rows, validating each one
    pub fn from_json(json: &str) -> Result<Self> {
        let profiles: Vec<ExerciseProfile> = serde_json::from_str(json)?;
        for profile in &profiles {
            profile.validate()?;
        }
        Ok(Self { profiles })
    }

    /// Exact name match first, then ASCII case-insensitive
    pub fn get(&self, name: &str) -> Option<&ExerciseProfile> {
        self.profiles
            .iter()
            .find(|p| p.name == name)
            .or_else(|| self.profiles.iter().find(|p| p.name.eq_ignore_ascii_case(name)))
    }

    /// Insert or replace by exact name
    pub fn insert(&mut self, profile: ExerciseProfile) -> Result<()> {
        profile.validate()?;
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        Ok(())
    }

    /// Overlay every row of `other` onto this table
    pub fn merge(&mut self, other: ProfileTable) -> Result<()> {
        for profile in other.profiles {
            self.insert(profile)?;
        }
        Ok(())
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::joints::{LEFT_ELBOW, LEFT_HIP};

    #[test]
    fn test_builtin_rows_valid() {
        let table = ProfileTable::builtin();
        assert_eq!(table.len(), 9);
        for name in table.names() {
            let profile = table.get(&name).unwrap();
            assert!(profile.validate().is_ok(), "{name} failed validation");
            assert!(profile.down_angle > profile.up_angle);
        }
    }

    #[test]
    fn test_curl_thresholds_differ() {
        let table = ProfileTable::builtin();
        let curl = table.get("Biceps Curl").unwrap();
        assert_eq!((curl.down_angle, curl.up_angle), (160.0, 30.0));
        assert_eq!(curl.joints.1, LEFT_ELBOW);
        assert_eq!(curl.mapping, ProgressMapping::Inverted);

        let squat = table.get("Squat").unwrap();
        assert_eq!((squat.down_angle, squat.up_angle), (160.0, 90.0));
    }

    #[test]
    fn test_plank_watches_hip() {
        let table = ProfileTable::builtin();
        let plank = table.get("Plank").unwrap();
        assert_eq!(plank.joints.1, LEFT_HIP);
        assert_eq!(plank.mapping, ProgressMapping::DeviationFromStraight);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let table = ProfileTable::builtin();
        assert_eq!(table.get("squat").map(|p| p.name.as_str()), Some("Squat"));
        assert_eq!(table.get("LEG RAISES").map(|p| p.name.as_str()), Some("Leg Raises"));
        assert!(table.get("Deadlift").is_none());
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let err = ExerciseProfile::new("Bad", LEFT_ARM, 30.0, 160.0, ProgressMapping::Direct);
        assert!(matches!(err, Err(TrackingError::InvalidThresholds { .. })));

        let err = ExerciseProfile::new("Flat", LEFT_ARM, 90.0, 90.0, ProgressMapping::Direct);
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_out_of_range_joint() {
        let err = ExerciseProfile::new("Bad", (11, 13, 40), 160.0, 30.0, ProgressMapping::Direct);
        assert!(matches!(err, Err(TrackingError::InvalidJoint { index: 40, .. })));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "Hammer Curl", "joints": [12, 14, 16], "down_angle": 150, "up_angle": 40,
             "mapping": "inverted", "setup_hint": "Stand side-on."},
            {"name": "Wall Sit", "joints": [23, 25, 27], "down_angle": 170, "up_angle": 100,
             "mapping": "direct"}
        ]"#;
        let table = ProfileTable::from_json(json).unwrap();
        assert_eq!(table.len(), 2);

        let hammer = table.get("Hammer Curl").unwrap();
        assert_eq!(hammer.joints, (12, 14, 16));
        assert_eq!(hammer.setup_hint(), "Stand side-on.");
        assert_eq!(table.get("Wall Sit").unwrap().setup_hint(), DEFAULT_SETUP_HINT);
    }

    #[test]
    fn test_from_json_validates_rows() {
        let json = r#"[{"name": "Bad", "joints": [11, 13, 15], "down_angle": 10,
                        "up_angle": 90, "mapping": "direct"}]"#;
        assert!(matches!(
            ProfileTable::from_json(json),
            Err(TrackingError::InvalidThresholds { .. })
        ));
        assert!(matches!(ProfileTable::from_json("{"), Err(TrackingError::Parse(_))));
    }

    #[test]
    fn test_merge_overrides_by_name() {
        let mut table = ProfileTable::builtin();
        let custom = ProfileTable::from_json(
            r#"[{"name": "Squat", "joints": [24, 26, 28], "down_angle": 165,
                 "up_angle": 100, "mapping": "direct"},
                {"name": "Step-up", "joints": [23, 25, 27], "down_angle": 170,
                 "up_angle": 120, "mapping": "direct"}]"#,
        )
        .unwrap();
        table.merge(custom).unwrap();

        assert_eq!(table.len(), 10);
        let squat = table.get("Squat").unwrap();
        assert_eq!(squat.joints, (24, 26, 28));
        assert_eq!(squat.up_angle, 100.0);
    }
}
