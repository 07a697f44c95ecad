//! Frame throttle - caps analysis at ~30Hz
//!
//! Camera frames arrive faster than pose analysis is worth running.
//! Frames that come too soon after the last accepted one are dropped.

/// Default minimum gap between analysed frames (seconds)
pub const MIN_FRAME_INTERVAL: f64 = 0.03;

/// Drops frames closer than `min_interval` to the last accepted frame
pub struct FrameThrottler {
    /// Timestamp of the last accepted frame
    last_accepted: Option<f64>,
    /// Gap that must be exceeded before the next frame is accepted
    min_interval: f64,
}

impl FrameThrottler {
    pub fn new() -> Self {
        Self::with_interval(MIN_FRAME_INTERVAL)
    }

    pub fn with_interval(min_interval: f64) -> Self {
        Self {
            last_accepted: None,
            min_interval,
        }
    }

    /// Returns true if the frame at `timestamp` should be analysed
    ///
    /// The first frame is always accepted.
    pub fn accept(&mut self, timestamp: f64) -> bool {
        let accepted = match self.last_accepted {
            Some(last) => timestamp - last > self.min_interval,
            None => true,
        };

        if accepted {
            self.last_accepted = Some(timestamp);
        }
        accepted
    }

    pub fn last_accepted(&self) -> Option<f64> {
        self.last_accepted
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for FrameThrottler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_frames_inside_interval() {
        let mut throttle = FrameThrottler::new();
        let accepted: Vec<f64> = [0.00, 0.01, 0.02, 0.04]
            .into_iter()
            .filter(|&t| throttle.accept(t))
            .collect();
        assert_eq!(accepted, vec![0.00, 0.04]);
    }

    #[test]
    fn test_gap_must_exceed_interval() {
        let mut throttle = FrameThrottler::with_interval(0.5);
        assert!(throttle.accept(1.0));
        assert!(!throttle.accept(1.5));
        assert!(throttle.accept(1.6));
        assert_eq!(throttle.last_accepted(), Some(1.6));
    }

    #[test]
    fn test_dropped_frames_do_not_move_reference() {
        let mut throttle = FrameThrottler::new();
        assert!(throttle.accept(0.0));
        for t in [0.01, 0.02, 0.025, 0.03] {
            assert!(!throttle.accept(t));
        }
        assert_eq!(throttle.last_accepted(), Some(0.0));
        assert!(throttle.accept(0.031));
    }

    #[test]
    fn test_reset_accepts_next_frame() {
        let mut throttle = FrameThrottler::new();
        assert!(throttle.accept(5.0));
        throttle.reset();
        assert!(throttle.accept(5.001));
    }
}
