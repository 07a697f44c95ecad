//! Landmark indices (MediaPipe Pose - 33 total)

pub const POSE_LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Three landmarks bounding a joint: (first, vertex, last)
pub type JointTriple = (usize, usize, usize);

/// Arm flexion at the elbow
pub const LEFT_ARM: JointTriple = (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST);
/// Knee flexion
pub const LEFT_LEG: JointTriple = (LEFT_HIP, LEFT_KNEE, LEFT_ANKLE);
/// Trunk alignment at the hip
pub const LEFT_TRUNK: JointTriple = (LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE);

/// Landmarks a frame must contain to cover every index in `joints`
pub fn required_landmarks(joints: JointTriple) -> usize {
    joints.0.max(joints.1).max(joints.2) + 1
}
