//! Pose frame data handed over by the pose source
//!
//! One `PoseFrame` per camera frame. The pipeline only borrows it.

/// A single landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth
    /// Detector confidence, if the pose source reports one
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

/// Landmarks for one captured frame
#[derive(Clone, Debug, Default)]
pub struct PoseFrame {
    /// Monotonic capture time in seconds
    pub timestamp: f64,
    pub landmarks: Vec<Landmark>,
    pub person_detected: bool,
}

impl PoseFrame {
    pub fn new(timestamp: f64, landmarks: Vec<Landmark>) -> Self {
        let person_detected = !landmarks.is_empty();
        Self {
            timestamp,
            landmarks,
            person_detected,
        }
    }

    /// Frame where the pose source found nobody
    pub fn empty(timestamp: f64) -> Self {
        Self {
            timestamp,
            landmarks: Vec::new(),
            person_detected: false,
        }
    }

    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_detected_follows_landmarks() {
        assert!(PoseFrame::new(0.0, vec![Landmark::new(0.5, 0.5)]).person_detected);
        assert!(!PoseFrame::new(0.0, Vec::new()).person_detected);
        assert!(!PoseFrame::empty(1.0).person_detected);
    }

    #[test]
    fn test_landmark_lookup_out_of_range() {
        let frame = PoseFrame::new(0.0, vec![Landmark::new(0.1, 0.2)]);
        assert_eq!(frame.landmark(0).map(|l| l.x), Some(0.1));
        assert!(frame.landmark(11).is_none());
    }
}
