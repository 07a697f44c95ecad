//! Landmark decoding for the JS bridge
//!
//! MediaPipe runs in JavaScript and hands each result over as a flat
//! Float32Array. This turns it into a `PoseFrame` for the tracker.

use crate::tracking::{Landmark, PoseFrame};

/// Floats per landmark: x, y, z, visibility
pub const LANDMARK_STRIDE: usize = 4;

/// Decode `data` (N landmarks × x, y, z, visibility) into a frame
///
/// An empty array means MediaPipe found no person. Visibility that is NaN
/// or negative is treated as "not reported".
///
/// Returns `None` if the length is not a multiple of the stride.
pub fn decode_frame(timestamp: f64, data: &[f32]) -> Option<PoseFrame> {
    if data.len() % LANDMARK_STRIDE != 0 {
        return None;
    }
    if data.is_empty() {
        return Some(PoseFrame::empty(timestamp));
    }

    let landmarks = data
        .chunks_exact(LANDMARK_STRIDE)
        .map(|chunk| Landmark {
            x: chunk[0],
            y: chunk[1],
            z: chunk[2],
            visibility: (chunk[3] >= 0.0).then_some(chunk[3]),
        })
        .collect();

    Some(PoseFrame::new(timestamp, landmarks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::POSE_LANDMARK_COUNT;

    #[test]
    fn test_decode_full_pose() {
        let mut data = vec![0.0_f32; POSE_LANDMARK_COUNT * LANDMARK_STRIDE];
        data[11 * LANDMARK_STRIDE] = 0.25;
        data[11 * LANDMARK_STRIDE + 1] = 0.75;
        data[11 * LANDMARK_STRIDE + 3] = 0.9;

        let frame = decode_frame(1.5, &data).unwrap();
        assert!(frame.person_detected);
        assert_eq!(frame.timestamp, 1.5);
        assert_eq!(frame.landmarks.len(), POSE_LANDMARK_COUNT);

        let shoulder = frame.landmark(11).unwrap();
        assert_eq!((shoulder.x, shoulder.y), (0.25, 0.75));
        assert_eq!(shoulder.visibility, Some(0.9));
    }

    #[test]
    fn test_decode_empty_is_no_person() {
        let frame = decode_frame(0.0, &[]).unwrap();
        assert!(!frame.person_detected);
    }

    #[test]
    fn test_decode_rejects_ragged_buffer() {
        assert!(decode_frame(0.0, &[0.1, 0.2, 0.3]).is_none());
    }

    #[test]
    fn test_missing_visibility() {
        let frame = decode_frame(0.0, &[0.1, 0.2, 0.0, f32::NAN, 0.3, 0.4, 0.0, -1.0]).unwrap();
        assert!(frame.landmarks.iter().all(|l| l.visibility.is_none()));
    }
}
